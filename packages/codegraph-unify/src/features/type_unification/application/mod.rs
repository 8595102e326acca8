pub mod solve_constraints;

pub use solve_constraints::{SolveConstraintsUseCase, SolveOutcome};
