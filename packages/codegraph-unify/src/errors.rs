//! Error types for codegraph-unify
//!
//! `UnifyError` is the only failure the solver itself produces; this wrapper
//! adds the configuration and input errors of the application layer.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::type_unification::UnifyError;

/// Main error type for codegraph-unify operations
#[derive(Debug, Error)]
pub enum CodegraphUnifyError {
    /// Structural conflict between two constraints
    #[error("Unification error: {0}")]
    Unify(#[from] UnifyError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Batch exceeds `max_constraints`
    #[error("Constraint batch too large: {count} constraints exceeds limit of {limit}")]
    BatchTooLarge { count: usize, limit: usize },
}

/// Result type alias for codegraph-unify operations
pub type Result<T> = std::result::Result<T, CodegraphUnifyError>;
