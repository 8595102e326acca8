//! Configuration error types

use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric limit outside its accepted bounds
    #[error("{field} = {value} is outside {min}..={max}: {reason}")]
    OutOfBounds {
        field: &'static str,
        value: usize,
        min: usize,
        max: usize,
        reason: &'static str,
    },

    /// YAML document without a `version` key
    #[error("solver config has no `version` key; start the file with `version: 1`")]
    MissingVersion,

    #[error("solver config version {found} is not supported (this build reads version {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("unknown preset `{0}` (expected `default` or `debug`)")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Field value rejected by `Validatable::validate`
    #[error("invalid solver config: {0}")]
    Validation(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    pub fn out_of_bounds(
        field: &'static str,
        value: usize,
        bounds: RangeInclusive<usize>,
        reason: &'static str,
    ) -> Self {
        Self::OutOfBounds {
            field,
            value,
            min: *bounds.start(),
            max: *bounds.end(),
            reason,
        }
    }
}
