//! Type unification feature
//!
//! - domain/         - Type, Constraint, Substitution, SolveTrace
//! - ports/          - ConstraintSource trait
//! - application/    - SolveConstraintsUseCase
//! - infrastructure/ - unifier, composition, instantiator, solver

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{SolveConstraintsUseCase, SolveOutcome};
pub use domain::{
    Constraint, ConstraintKind, SkipReason, SolveStep, SolveTrace, StepOutcome, Substitution,
    Type, TypeKind,
};
pub use infrastructure::{
    compose, extend, solve, unify, ConstraintSolver, Instantiation, Instantiator,
    JsonConstraintSource, UnifyError, UnifyResult, VecConstraintSource,
};
pub use ports::ConstraintSource;
