//! Rendering of validation results and rule sets

use clap::ValueEnum;
use pinguard_core::{is_acceptable, RuleConfiguration, ValidationOutcome, ViolationKind};
use serde::Serialize;

/// Output format for `check`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Output format for `rules`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RulesFormat {
    Toml,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    acceptable: bool,
    outcomes: &'a [ValidationOutcome],
}

/// English description of a rule, with its configured parameters
pub fn describe(kind: ViolationKind, rules: &RuleConfiguration) -> String {
    match kind {
        ViolationKind::CrossPattern => "Must not trace a cross on the keypad".to_string(),
        ViolationKind::OddEvenSequence => "Must not contain 13579 or 02468".to_string(),
        ViolationKind::SameDigitRepetition => format!(
            "Must not repeat a digit {} or more times in a row",
            rules.no_repeated_numbers.run_length().unwrap_or_default()
        ),
        ViolationKind::DigitPairRepetition => format!(
            "Must not repeat a pair of digits {} or more times in a row",
            rules
                .no_repetition_of_two_same_numbers
                .run_length()
                .unwrap_or_default()
        ),
        ViolationKind::ConsecutiveSeries => {
            "Must not contain three ascending or descending digits".to_string()
        }
        ViolationKind::NonDigitCharacters => "Must contain only digits".to_string(),
        ViolationKind::TooShort | ViolationKind::TooLong => format!(
            "Must be {} to {} characters long",
            rules.min_length, rules.max_length
        ),
    }
}

/// Human-readable report, one line per evaluated rule
pub fn render_text(outcomes: &[ValidationOutcome], rules: &RuleConfiguration) -> String {
    let mut out = String::new();

    for outcome in outcomes {
        let mark = if outcome.is_violated { "✗" } else { "✓" };
        out.push_str(&format!("{} {}\n", mark, describe(outcome.kind, rules)));
    }

    if is_acceptable(outcomes) {
        out.push_str("\nPIN accepted\n");
    } else {
        out.push_str("\nPIN rejected\n");
    }

    out
}

/// Machine-readable report
pub fn render_json(outcomes: &[ValidationOutcome]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report {
        acceptable: is_acceptable(outcomes),
        outcomes,
    })
}

/// Serialize a rule set
pub fn render_rules(rules: &RuleConfiguration, format: RulesFormat) -> anyhow::Result<String> {
    Ok(match format {
        RulesFormat::Toml => rules.to_toml_string()?,
        RulesFormat::Json => serde_json::to_string_pretty(rules)?,
    })
}
