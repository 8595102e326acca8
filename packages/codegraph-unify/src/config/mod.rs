//! Solver configuration
//!
//! Two levels:
//! - Preset: `default` or `debug` (trace recording on)
//! - YAML: versioned file with per-field overrides
//!
//! # Examples
//!
//! ```rust,ignore
//! use codegraph_unify::config::{Preset, SolverConfig};
//!
//! let config = SolverConfig::from_preset(Preset::Debug).freshen_nested_functions(true);
//! let config = SolverConfig::from_yaml("unify.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod preset;
pub mod solver_config;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
pub use preset::Preset;
pub use solver_config::{SolverConfig, SolverConfigPatch};
pub use validation::Validatable;
