/*
 * Codegraph Unify - constraint-based type unification
 *
 * Feature-First Hexagonal Architecture:
 * - shared/   : constants, fresh-name generation
 * - features/ : type_unification (domain → infrastructure → application)
 * - config/   : solver configuration (presets, YAML)
 *
 * Consumes an ordered list of typing constraints produced by a front end and
 * folds it into a substitution from type-variable names to types.
 */

#![allow(clippy::module_inception)]

/// Shared constants and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{Preset, SolverConfig};
pub use errors::{CodegraphUnifyError, Result};
pub use features::type_unification::{
    solve, unify, Constraint, ConstraintSolver, SolveOutcome, SolveTrace, Substitution, Type,
    TypeKind, UnifyError,
};
