//! Error types for rule loading and checking
//!
//! PIN validation itself never fails; these errors only come from reading,
//! parsing or sanity-checking a rule configuration.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid length bounds: min_length {min} is greater than max_length {max}")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error("Invalid threshold for {rule}: run length must be at least 1")]
    InvalidThreshold { rule: &'static str },

    #[error("Unknown violation code: {0}")]
    UnknownViolationCode(String),
}
