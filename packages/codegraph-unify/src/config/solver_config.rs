//! Solver configuration

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::Validatable;
use crate::shared::constants::{limits, naming};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Marker inserted in synthetic variable names (non-empty)
    pub synthetic_marker: String,

    /// Also freshen function types nested directly in parameter/return slots
    pub freshen_nested_functions: bool,

    /// Record a per-constraint trace
    pub record_trace: bool,

    /// Maximum constraints accepted in one batch (1..=100_000_000)
    pub max_constraints: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Default)
    }
}

impl SolverConfig {
    pub fn from_preset(preset: Preset) -> Self {
        let base = Self {
            synthetic_marker: naming::DEFAULT_SYNTHETIC_MARKER.to_string(),
            freshen_nested_functions: false,
            record_trace: false,
            max_constraints: limits::DEFAULT_MAX_CONSTRAINTS,
        };
        match preset {
            Preset::Default => base,
            Preset::Debug => base.record_trace(true),
        }
    }

    /// Builder: Set synthetic_marker
    pub fn synthetic_marker(mut self, v: impl Into<String>) -> Self {
        self.synthetic_marker = v.into();
        self
    }

    /// Builder: Set freshen_nested_functions
    pub fn freshen_nested_functions(mut self, v: bool) -> Self {
        self.freshen_nested_functions = v;
        self
    }

    /// Builder: Set record_trace
    pub fn record_trace(mut self, v: bool) -> Self {
        self.record_trace = v;
        self
    }

    /// Builder: Set max_constraints
    pub fn max_constraints(mut self, v: usize) -> Self {
        self.max_constraints = v;
        self
    }

    /// Apply a patch on top of this config
    pub fn apply_patch(mut self, patch: SolverConfigPatch) -> Self {
        if let Some(v) = patch.synthetic_marker {
            self.synthetic_marker = v;
        }
        if let Some(v) = patch.freshen_nested_functions {
            self.freshen_nested_functions = v;
        }
        if let Some(v) = patch.record_trace {
            self.record_trace = v;
        }
        if let Some(v) = patch.max_constraints {
            self.max_constraints = v;
        }
        self
    }
}

impl Validatable for SolverConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.synthetic_marker.is_empty() {
            return Err(ConfigError::Validation(
                "synthetic_marker must not be empty".to_string(),
            ));
        }

        if self.synthetic_marker.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "synthetic_marker must not contain whitespace, got {:?}",
                self.synthetic_marker
            )));
        }

        if self.max_constraints == 0 || self.max_constraints > limits::MAX_CONSTRAINTS_CEILING {
            return Err(ConfigError::out_of_bounds(
                "max_constraints",
                self.max_constraints,
                1..=limits::MAX_CONSTRAINTS_CEILING,
                "an empty batch limit rejects every input",
            ));
        }

        Ok(())
    }
}

/// Patch type for SolverConfig (all fields optional)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synthetic_marker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freshen_nested_functions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_trace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_constraints: Option<usize>,
}

impl From<&SolverConfig> for SolverConfigPatch {
    fn from(config: &SolverConfig) -> Self {
        Self {
            synthetic_marker: Some(config.synthetic_marker.clone()),
            freshen_nested_functions: Some(config.freshen_nested_functions),
            record_trace: Some(config.record_trace),
            max_constraints: Some(config.max_constraints),
        }
    }
}
