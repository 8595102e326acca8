pub mod constraint;
pub mod substitution;
pub mod trace;
pub mod types;

pub use constraint::{Constraint, ConstraintKind};
pub use substitution::Substitution;
pub use trace::{SkipReason, SolveStep, SolveTrace, StepOutcome};
pub use types::{Type, TypeKind};
