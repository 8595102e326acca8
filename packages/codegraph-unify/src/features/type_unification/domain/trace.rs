//! Solve trace
//!
//! Records what each constraint contributed during a solve. Opt-in via
//! `SolverConfig::record_trace`, nothing is recorded otherwise.

use super::constraint::ConstraintKind;
use serde::{Deserialize, Serialize};

/// Why a constraint contributed nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// An operand was not a literal at the time the constraint was folded
    UnresolvedOperand,
    /// Index target was not an object type
    NotAnObject,
    /// Index field does not exist on the object
    MissingField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    Unified,
    Skipped { reason: SkipReason },
}

/// A single folded constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStep {
    pub index: usize,
    pub kind: ConstraintKind,
    #[serde(flatten)]
    pub outcome: StepOutcome,
    /// Variables bound by this constraint's unification, synthetic names excluded
    pub bound: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveTrace {
    pub steps: Vec<SolveStep>,
}

impl SolveTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: SolveStep) {
        self.steps.push(step);
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SolveStep> {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, StepOutcome::Skipped { .. }))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
