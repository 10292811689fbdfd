//! Rule file discovery and persistence
//!
//! Rules come from an explicit `--rules` path, then the per-user config
//! file, then the built-in defaults.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use pinguard_core::RuleConfiguration;

/// Rule file name
const RULES_FILE_NAME: &str = "rules.toml";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "pinguard";

/// Where the effective rule set came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesSource {
    File(PathBuf),
    BuiltIn,
}

impl fmt::Display for RulesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesSource::File(path) => write!(f, "{}", path.display()),
            RulesSource::BuiltIn => f.write_str("built-in defaults"),
        }
    }
}

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    // Try XDG_CONFIG_HOME first, then fall back to the platform config dir
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config.is_empty() {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }
    }

    dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
}

/// Get the per-user rule file path
pub fn default_rules_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(RULES_FILE_NAME))
}

/// Resolve the effective rules using the per-user config location
pub fn resolve_rules(explicit: Option<&Path>) -> Result<(RuleConfiguration, RulesSource), ConfigError> {
    resolve_rules_from(explicit, default_rules_path().as_deref())
}

/// Resolve the effective rules
///
/// An explicit path must exist. The per-user file is only used when present.
/// Whatever is loaded is sanity-checked before it is handed to the engine.
pub fn resolve_rules_from(
    explicit: Option<&Path>,
    user_file: Option<&Path>,
) -> Result<(RuleConfiguration, RulesSource), ConfigError> {
    let (rules, source) = match (explicit, user_file) {
        (Some(path), _) => (RuleConfiguration::load(path)?, RulesSource::File(path.to_path_buf())),
        (None, Some(path)) if path.exists() => {
            (RuleConfiguration::load(path)?, RulesSource::File(path.to_path_buf()))
        }
        _ => (RuleConfiguration::default(), RulesSource::BuiltIn),
    };

    rules.check()?;
    tracing::debug!("Using PIN rules from {}", source);

    Ok((rules, source))
}

/// Write the default rule set to `path`
pub fn write_default_rules(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    // Ensure config directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io(e.to_string()))?;
        }
    }

    let contents = RuleConfiguration::default().to_toml_string()?;
    fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

    tracing::debug!("Saved default PIN rules to {:?}", path);
    Ok(())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Rule file {0:?} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(String),

    #[error(transparent)]
    Rules(#[from] pinguard_core::Error),
}
