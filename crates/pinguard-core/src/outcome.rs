//! Validation results

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// The rule a [`ValidationOutcome`] reports on
///
/// Serialized as the stable code host applications key their message
/// tables on (see [`ViolationKind::code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationKind {
    /// PIN is one of the keypad cross sweeps
    #[serde(rename = "CrossPatternValidation")]
    CrossPattern,
    /// PIN contains `13579` or `02468`
    #[serde(rename = "OddOrEvenSequenceValidation")]
    OddEvenSequence,
    /// Same digit repeated in succession
    #[serde(rename = "NoRepetitionOfTheSameNumbersValidation")]
    SameDigitRepetition,
    /// Same two-digit unit repeated back to back
    #[serde(rename = "NoRepetitionOfTheTwoSameNumbersValidation")]
    DigitPairRepetition,
    /// Three consecutive ascending or descending digits
    #[serde(rename = "NoSeriesOfNumbersValidation")]
    ConsecutiveSeries,
    /// Something other than a decimal digit (or nothing at all)
    #[serde(rename = "PinOnlyContainDigitsValidation")]
    NonDigitCharacters,
    #[serde(rename = "PinTooShortValidation")]
    TooShort,
    #[serde(rename = "PinTooLongValidation")]
    TooLong,
}

impl ViolationKind {
    /// Every kind, in evaluation order
    pub const ALL: [ViolationKind; 8] = [
        ViolationKind::CrossPattern,
        ViolationKind::OddEvenSequence,
        ViolationKind::SameDigitRepetition,
        ViolationKind::DigitPairRepetition,
        ViolationKind::ConsecutiveSeries,
        ViolationKind::NonDigitCharacters,
        ViolationKind::TooShort,
        ViolationKind::TooLong,
    ];

    /// Stable identifier for message lookup
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::CrossPattern => "CrossPatternValidation",
            ViolationKind::OddEvenSequence => "OddOrEvenSequenceValidation",
            ViolationKind::SameDigitRepetition => "NoRepetitionOfTheSameNumbersValidation",
            ViolationKind::DigitPairRepetition => "NoRepetitionOfTheTwoSameNumbersValidation",
            ViolationKind::ConsecutiveSeries => "NoSeriesOfNumbersValidation",
            ViolationKind::NonDigitCharacters => "PinOnlyContainDigitsValidation",
            ViolationKind::TooShort => "PinTooShortValidation",
            ViolationKind::TooLong => "PinTooLongValidation",
        }
    }

    /// Whether this kind comes from the length-bounds rule
    pub fn is_length_bound(&self) -> bool {
        matches!(self, ViolationKind::TooShort | ViolationKind::TooLong)
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ViolationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViolationKind::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| Error::UnknownViolationCode(s.to_string()))
    }
}

/// One evaluated rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub is_violated: bool,
    pub kind: ViolationKind,
}

impl ValidationOutcome {
    pub fn new(kind: ViolationKind, is_violated: bool) -> Self {
        Self { is_violated, kind }
    }
}

/// True iff no outcome is violated
pub fn is_acceptable(outcomes: &[ValidationOutcome]) -> bool {
    outcomes.iter().all(|outcome| !outcome.is_violated)
}

/// Violated outcomes, in evaluation order
pub fn violations(outcomes: &[ValidationOutcome]) -> impl Iterator<Item = &ValidationOutcome> {
    outcomes.iter().filter(|outcome| outcome.is_violated)
}
