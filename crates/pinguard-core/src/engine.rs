//! PIN validation engine
//!
//! Runs every enabled rule against a candidate PIN, in a fixed order, and
//! reports each one as data. Nothing short-circuits and nothing fails.
//!
//! Evaluation order:
//! 1. cross pattern
//! 2. odd/even series
//! 3. same-digit repetition
//! 4. digit-pair repetition
//! 5. consecutive series of three
//! 6. digits only
//! 7. length bounds (always evaluated)

use tracing::debug;

use crate::outcome::{ValidationOutcome, ViolationKind};
use crate::patterns;
use crate::rules::RuleConfiguration;

/// Evaluate `pin` against `rules`
///
/// Returns one outcome per enabled rule, the length-bounds outcome last.
/// The configuration is not checked here; see [`RuleConfiguration::check`].
pub fn validate(pin: &str, rules: &RuleConfiguration) -> Vec<ValidationOutcome> {
    let mut outcomes = Vec::with_capacity(rules.enabled_rule_count());

    if rules.no_cross_pattern {
        outcomes.push(ValidationOutcome::new(
            ViolationKind::CrossPattern,
            patterns::is_cross_pattern(pin),
        ));
    }

    if rules.no_even_or_odd_series_of_numbers {
        outcomes.push(ValidationOutcome::new(
            ViolationKind::OddEvenSequence,
            patterns::has_odd_or_even_series(pin),
        ));
    }

    if let Some(min_run) = rules.no_repeated_numbers.run_length() {
        outcomes.push(ValidationOutcome::new(
            ViolationKind::SameDigitRepetition,
            patterns::has_repeated_digits(pin, min_run),
        ));
    }

    if let Some(min_repeats) = rules.no_repetition_of_two_same_numbers.run_length() {
        outcomes.push(ValidationOutcome::new(
            ViolationKind::DigitPairRepetition,
            patterns::has_repeated_digit_pairs(pin, min_repeats),
        ));
    }

    if rules.no_series_of_numbers {
        outcomes.push(ValidationOutcome::new(
            ViolationKind::ConsecutiveSeries,
            patterns::has_consecutive_series(pin),
        ));
    }

    if rules.only_numbers {
        outcomes.push(ValidationOutcome::new(
            ViolationKind::NonDigitCharacters,
            !patterns::is_digits_only(pin),
        ));
    }

    // Length in UTF-16 code units, as host applications measure it
    let pin_length = pin.encode_utf16().count();
    outcomes.push(length_outcome(pin_length, rules.min_length, rules.max_length));

    for outcome in &outcomes {
        debug!(rule = %outcome.kind, violated = outcome.is_violated, "Evaluated PIN rule");
    }
    debug!(
        pin_length,
        rules = outcomes.len(),
        violations = outcomes.iter().filter(|o| o.is_violated).count(),
        "PIN validation complete"
    );

    outcomes
}

/// Length-bounds rule
///
/// The kind is picked by comparing against `max_length` only, so a PIN
/// that is too short for `min_length` always reports `TooShort`, and a PIN
/// of exactly `max_length` reports `TooLong` when it is flagged at all
/// (only possible if `min_length > max_length`).
// TODO: confirm with product owners whether the kind should follow the
// bound actually violated; callers currently rely on this mapping.
fn length_outcome(length: usize, min_length: usize, max_length: usize) -> ValidationOutcome {
    let is_violated = length < min_length || length > max_length;
    let kind = if length < max_length {
        ViolationKind::TooShort
    } else {
        ViolationKind::TooLong
    };

    ValidationOutcome::new(kind, is_violated)
}
