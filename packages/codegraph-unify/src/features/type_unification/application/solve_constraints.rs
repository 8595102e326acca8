use serde::Serialize;
use tracing::{debug, info};

use crate::config::SolverConfig;
use crate::errors::{CodegraphUnifyError, Result};
use crate::features::type_unification::domain::{SolveTrace, Substitution};
use crate::features::type_unification::infrastructure::ConstraintSolver;
use crate::features::type_unification::ports::ConstraintSource;

/// Result of one solve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveOutcome {
    pub substitution: Substitution,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<SolveTrace>,
}

pub struct SolveConstraintsUseCase<S: ConstraintSource> {
    source: S,
    solver: ConstraintSolver,
}

impl<S: ConstraintSource> SolveConstraintsUseCase<S> {
    pub fn new(source: S, config: SolverConfig) -> Result<Self> {
        let solver = ConstraintSolver::with_config(config)?;
        Ok(Self { source, solver })
    }

    pub fn execute(&self) -> Result<SolveOutcome> {
        let constraints = self.source.constraints()?;
        let limit = self.solver.config().max_constraints;
        if constraints.len() > limit {
            return Err(CodegraphUnifyError::BatchTooLarge {
                count: constraints.len(),
                limit,
            });
        }

        debug!(
            source = %self.source.describe(),
            constraints = constraints.len(),
            "solving constraint batch"
        );

        let outcome = if self.solver.config().record_trace {
            let (substitution, trace) = self.solver.solve_with_trace(&constraints)?;
            SolveOutcome {
                substitution,
                trace: Some(trace),
            }
        } else {
            SolveOutcome {
                substitution: self.solver.solve(&constraints)?,
                trace: None,
            }
        };

        info!(
            source = %self.source.describe(),
            bindings = outcome.substitution.len(),
            "constraint batch solved"
        );
        Ok(outcome)
    }
}
