//! Type unification infrastructure
//!
//! Unifier, substitution composition, call-site instantiation and the
//! constraint solver, plus the `ConstraintSource` implementations.

pub mod composition;
pub mod constraint_solver;
pub mod constraint_sources;
pub mod instantiator;
pub mod unifier;

pub use composition::{compose, extend};
pub use constraint_solver::{solve, ConstraintSolver};
pub use constraint_sources::{JsonConstraintSource, VecConstraintSource};
pub use instantiator::{Instantiation, Instantiator};
pub use unifier::{unify, UnifyError, UnifyResult};
