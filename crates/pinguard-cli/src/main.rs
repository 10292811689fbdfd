//! pinguard - screen candidate unlock PINs against weak-pattern rules
//!
//! Exit status: 0 when the PIN is acceptable, 1 when any rule is violated,
//! 2 when the rules or the PIN could not be read.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use zeroize::Zeroizing;

use pinguard_core::{is_acceptable, validate};

mod config;
mod output;

use config::ConfigError;
use output::{ReportFormat, RulesFormat};

/// Screen candidate unlock PINs against weak-pattern rules
#[derive(Parser)]
#[command(name = "pinguard")]
#[command(about = "Screen candidate unlock PINs against weak-pattern rules", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Rule file (TOML, or JSON when the extension is .json)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a PIN against the effective rules
    Check {
        /// PIN to check; read from the first line of stdin when omitted.
        /// Prefer stdin: an argument is visible in the process list and
        /// shell history.
        pin: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Print the effective rule set
    Rules {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = RulesFormat::Toml)]
        format: RulesFormat,
    },

    /// Write the default rule set to the config directory
    Init {
        /// Write to this path instead of the config directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing rule file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so reports on stdout stay machine-readable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "pinguard=warn".into()))
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Check { pin, format } => {
            let (rules, source) = config::resolve_rules(cli.rules.as_deref())?;
            info!("Checking PIN against rules from {}", source);

            let pin = read_pin(pin, io::stdin().lock())?;
            let outcomes = validate(&pin, &rules);

            match format {
                ReportFormat::Text => print!("{}", output::render_text(&outcomes, &rules)),
                ReportFormat::Json => println!("{}", output::render_json(&outcomes)?),
            }

            Ok(if is_acceptable(&outcomes) {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }

        Commands::Rules { format } => {
            let (rules, source) = config::resolve_rules(cli.rules.as_deref())?;
            info!("Effective rules from {}", source);

            print!("{}", output::render_rules(&rules, format)?);
            if format == RulesFormat::Json {
                println!();
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Init { output, force } => {
            let path = match output {
                Some(path) => path,
                None => config::default_rules_path().ok_or(ConfigError::NoConfigDir)?,
            };

            config::write_default_rules(&path, force)
                .with_context(|| format!("Failed to write rules to {}", path.display()))?;
            println!("Wrote default PIN rules to {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Take the PIN from the argument, or from the first line of `reader`
///
/// Only the line terminator is stripped; surrounding spaces are part of the
/// candidate and get reported by the digits-only rule.
fn read_pin(arg: Option<String>, mut reader: impl BufRead) -> Result<Zeroizing<String>> {
    if let Some(pin) = arg {
        return Ok(Zeroizing::new(pin));
    }

    let mut line = Zeroizing::new(String::new());
    reader
        .read_line(&mut line)
        .context("Failed to read PIN from stdin")?;

    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);

    Ok(line)
}
