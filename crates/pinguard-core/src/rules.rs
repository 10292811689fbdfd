//! Rule configuration
//!
//! Rule sets are usually shipped by the host application as a JSON object
//! (or a TOML file) using snake_case keys. Repetition rules accept
//! `false`, `true` or a run length, mirroring how host rule sets are written.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, DEFAULT_RUN_THRESHOLD, MAX_PIN_LENGTH, MIN_PIN_LENGTH};

/// Enablement of a repetition rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ThresholdRepr", into = "ThresholdRepr")]
pub enum Threshold {
    #[default]
    Disabled,
    /// Enabled with [`DEFAULT_RUN_THRESHOLD`]
    Enabled,
    /// Enabled with an explicit run length
    EnabledWithThreshold(u32),
}

impl Threshold {
    /// Run length that triggers the rule, `None` when disabled
    pub fn run_length(&self) -> Option<u32> {
        match self {
            Threshold::Disabled => None,
            Threshold::Enabled => Some(DEFAULT_RUN_THRESHOLD),
            Threshold::EnabledWithThreshold(n) => Some(*n),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.run_length().is_some()
    }
}

/// Wire form of a [`Threshold`]: `false | true | integer`
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum ThresholdRepr {
    Flag(bool),
    Count(u32),
}

impl From<ThresholdRepr> for Threshold {
    fn from(repr: ThresholdRepr) -> Self {
        match repr {
            // Zero is falsy in host rule sets
            ThresholdRepr::Flag(false) | ThresholdRepr::Count(0) => Threshold::Disabled,
            ThresholdRepr::Flag(true) => Threshold::Enabled,
            ThresholdRepr::Count(n) => Threshold::EnabledWithThreshold(n),
        }
    }
}

impl From<Threshold> for ThresholdRepr {
    fn from(threshold: Threshold) -> Self {
        match threshold {
            Threshold::Disabled => ThresholdRepr::Flag(false),
            Threshold::Enabled => ThresholdRepr::Flag(true),
            Threshold::EnabledWithThreshold(n) => ThresholdRepr::Count(n),
        }
    }
}

/// Which checks apply to a candidate PIN, and their parameters
///
/// Rules missing from a rule file are disabled; the length bounds are
/// mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfiguration {
    /// Reject the keypad cross sweeps
    #[serde(default)]
    pub no_cross_pattern: bool,

    /// Reject PINs containing `13579` or `02468`
    #[serde(default)]
    pub no_even_or_odd_series_of_numbers: bool,

    /// Reject runs of the same digit
    #[serde(default)]
    pub no_repeated_numbers: Threshold,

    /// Reject a digit pair repeated back to back
    #[serde(default, alias = "no_repetition_of_the_two_same_numbers")]
    pub no_repetition_of_two_same_numbers: Threshold,

    /// Reject three consecutive ascending or descending digits
    #[serde(default)]
    pub no_series_of_numbers: bool,

    /// Reject anything but decimal digits
    #[serde(default)]
    pub only_numbers: bool,

    pub min_length: usize,
    pub max_length: usize,
}

impl Default for RuleConfiguration {
    fn default() -> Self {
        Self {
            no_cross_pattern: true,
            no_even_or_odd_series_of_numbers: true,
            no_repeated_numbers: Threshold::Enabled,
            no_repetition_of_two_same_numbers: Threshold::Enabled,
            no_series_of_numbers: true,
            only_numbers: true,
            min_length: MIN_PIN_LENGTH,
            max_length: MAX_PIN_LENGTH,
        }
    }
}

impl RuleConfiguration {
    /// Every optional rule disabled; only the length bounds apply
    pub fn length_only(min_length: usize, max_length: usize) -> Self {
        Self {
            no_cross_pattern: false,
            no_even_or_odd_series_of_numbers: false,
            no_repeated_numbers: Threshold::Disabled,
            no_repetition_of_two_same_numbers: Threshold::Disabled,
            no_series_of_numbers: false,
            only_numbers: false,
            min_length,
            max_length,
        }
    }

    /// Number of outcomes a validation run produces (length bounds included)
    pub fn enabled_rule_count(&self) -> usize {
        [
            self.no_cross_pattern,
            self.no_even_or_odd_series_of_numbers,
            self.no_repeated_numbers.is_enabled(),
            self.no_repetition_of_two_same_numbers.is_enabled(),
            self.no_series_of_numbers,
            self.only_numbers,
        ]
        .into_iter()
        .filter(|enabled| *enabled)
        .count()
            + 1
    }

    /// Sanity-check the configuration
    ///
    /// The engine does not call this: a malformed configuration is the
    /// caller's problem. Collaborators loading rule sets from disk should.
    pub fn check(&self) -> Result<()> {
        if self.min_length > self.max_length {
            return Err(Error::InvalidLengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }

        if self.no_repeated_numbers == Threshold::EnabledWithThreshold(0) {
            return Err(Error::InvalidThreshold {
                rule: "no_repeated_numbers",
            });
        }

        if self.no_repetition_of_two_same_numbers == Threshold::EnabledWithThreshold(0) {
            return Err(Error::InvalidThreshold {
                rule: "no_repetition_of_two_same_numbers",
            });
        }

        Ok(())
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a rule file; `.json` files are read as JSON, anything else as TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let rules = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };

        tracing::debug!("Loaded PIN rules from {:?}", path);
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::tempdir;

    #[test]
    fn test_threshold_run_length() {
        assert_eq!(Threshold::Disabled.run_length(), None);
        assert_eq!(Threshold::Enabled.run_length(), Some(DEFAULT_RUN_THRESHOLD));
        assert_eq!(Threshold::EnabledWithThreshold(4).run_length(), Some(4));
        assert!(!Threshold::Disabled.is_enabled());
        assert!(Threshold::EnabledWithThreshold(1).is_enabled());
    }

    #[rstest]
    #[case("false", Threshold::Disabled)]
    #[case("true", Threshold::Enabled)]
    #[case("0", Threshold::Disabled)]
    #[case("3", Threshold::EnabledWithThreshold(3))]
    fn test_threshold_from_json(#[case] json: &str, #[case] expected: Threshold) {
        let threshold: Threshold = serde_json::from_str(json).unwrap();
        assert_eq!(threshold, expected);
    }

    #[test]
    fn test_threshold_rejects_other_values() {
        assert!(serde_json::from_str::<Threshold>("-1").is_err());
        assert!(serde_json::from_str::<Threshold>(r#""yes""#).is_err());
    }

    #[test]
    fn test_host_rule_set_json() {
        let json = r#"{
            "no_cross_pattern": true,
            "no_even_or_odd_series_of_numbers": false,
            "no_repeated_numbers": 3,
            "no_repetition_of_the_two_same_numbers": true,
            "no_series_of_numbers": true,
            "only_numbers": true,
            "min_length": 4,
            "max_length": 6
        }"#;

        let rules = RuleConfiguration::from_json_str(json).unwrap();
        assert!(rules.no_cross_pattern);
        assert!(!rules.no_even_or_odd_series_of_numbers);
        assert_eq!(rules.no_repeated_numbers, Threshold::EnabledWithThreshold(3));
        assert_eq!(rules.no_repetition_of_two_same_numbers, Threshold::Enabled);
        assert_eq!(rules.min_length, 4);
        assert_eq!(rules.max_length, 6);
    }

    #[test]
    fn test_missing_rules_are_disabled() {
        let rules = RuleConfiguration::from_toml_str("min_length = 4\nmax_length = 8\n").unwrap();
        assert_eq!(rules, RuleConfiguration::length_only(4, 8));
        assert_eq!(rules.enabled_rule_count(), 1);
    }

    #[test]
    fn test_length_bounds_required() {
        assert!(matches!(
            RuleConfiguration::from_toml_str("only_numbers = true\n"),
            Err(Error::Toml(_))
        ));
    }

    #[test]
    fn test_toml_roundtrip_keeps_thresholds() {
        let rules = RuleConfiguration {
            no_repeated_numbers: Threshold::EnabledWithThreshold(3),
            ..RuleConfiguration::default()
        };

        let toml = rules.to_toml_string().unwrap();
        assert!(toml.contains("no_repeated_numbers = 3"));
        assert!(toml.contains("no_repetition_of_two_same_numbers = true"));

        let parsed = RuleConfiguration::from_toml_str(&toml).unwrap();
        assert_eq!(parsed, rules);
    }

    #[test]
    fn test_enabled_rule_count() {
        assert_eq!(RuleConfiguration::default().enabled_rule_count(), 7);
        assert_eq!(RuleConfiguration::length_only(0, 0).enabled_rule_count(), 1);
    }

    #[test]
    fn test_check() {
        assert!(RuleConfiguration::default().check().is_ok());
        assert!(RuleConfiguration::length_only(4, 4).check().is_ok());

        assert!(matches!(
            RuleConfiguration::length_only(8, 4).check(),
            Err(Error::InvalidLengthBounds { min: 8, max: 4 })
        ));

        let rules = RuleConfiguration {
            no_repetition_of_two_same_numbers: Threshold::EnabledWithThreshold(0),
            ..RuleConfiguration::default()
        };
        assert!(matches!(
            rules.check(),
            Err(Error::InvalidThreshold {
                rule: "no_repetition_of_two_same_numbers"
            })
        ));
    }

    #[test]
    fn test_load_by_extension() {
        let temp_dir = tempdir().unwrap();

        let toml_path = temp_dir.path().join("rules.toml");
        fs::write(&toml_path, "no_series_of_numbers = true\nmin_length = 4\nmax_length = 6\n")
            .unwrap();
        let rules = RuleConfiguration::load(&toml_path).unwrap();
        assert!(rules.no_series_of_numbers);

        let json_path = temp_dir.path().join("rules.JSON");
        fs::write(&json_path, r#"{"only_numbers": true, "min_length": 4, "max_length": 6}"#)
            .unwrap();
        let rules = RuleConfiguration::load(&json_path).unwrap();
        assert!(rules.only_numbers);
        assert!(!rules.no_series_of_numbers);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = RuleConfiguration::load(temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
