//! pinguard core - screening of candidate unlock PINs
//!
//! A candidate PIN is run through an ordered set of independent rules
//! (keypad cross sweeps, odd/even series, digit repetition, consecutive
//! series, character class and length bounds). Every enabled rule yields
//! exactly one [`ValidationOutcome`], so callers always receive the full
//! diagnostic list in one pass.
//!
//! ```
//! use pinguard_core::{is_acceptable, validate, RuleConfiguration};
//!
//! let rules = RuleConfiguration::default();
//! assert!(!is_acceptable(&validate("123456", &rules)));
//! assert!(is_acceptable(&validate("739164", &rules)));
//! ```

pub mod engine;
pub mod error;
pub mod outcome;
pub mod patterns;
pub mod rules;

pub use engine::validate;
pub use error::{Error, Result};
pub use outcome::{is_acceptable, violations, ValidationOutcome, ViolationKind};
pub use rules::{RuleConfiguration, Threshold};

/// Run length used when a repetition rule is enabled without an explicit count
pub const DEFAULT_RUN_THRESHOLD: u32 = 2;

/// Default minimum PIN length
pub const MIN_PIN_LENGTH: usize = 6;

/// Default maximum PIN length
pub const MAX_PIN_LENGTH: usize = 12;
