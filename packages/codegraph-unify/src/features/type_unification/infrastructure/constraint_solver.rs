//! Constraint solver
//!
//! A single left-to-right fold over the constraint list. The accumulator is
//! the substitution, starting empty:
//! - Equals: compose(subst, unify(left, right))
//! - Apply: unify the instantiated callee against `(args) => ret`, drop
//!   synthetic bindings, compose the rest
//! - Concat: once both operands resolve to string literals, bind `ret` to
//!   their concatenation
//! - Index: once `obj` resolves to an object and `field` to a string literal
//!   naming one of its fields, bind `ret` to that field's type
//!
//! Concat/Index constraints whose operands are not resolved when folded
//! contribute nothing and are never revisited. A mismatch aborts the whole
//! batch.

use tracing::{debug, trace};

use super::composition::compose;
use super::instantiator::Instantiator;
use super::unifier::{unify, UnifyResult};
use crate::config::{ConfigResult, SolverConfig, Validatable};
use crate::features::type_unification::domain::{
    Constraint, SkipReason, SolveStep, SolveTrace, StepOutcome, Substitution, Type,
};
use crate::shared::FreshNameGenerator;

/// What a single constraint contributes to the running substitution
enum Contribution {
    Bind(Substitution),
    Skip(SkipReason),
}

#[derive(Debug, Clone, Default)]
pub struct ConstraintSolver {
    config: SolverConfig,
}

impl ConstraintSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver from a validated config
    pub fn with_config(config: SolverConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve constraints in order, returning the final substitution
    pub fn solve(&self, constraints: &[Constraint]) -> UnifyResult<Substitution> {
        self.fold(constraints, None)
    }

    /// Solve and record what each constraint contributed
    pub fn solve_with_trace(
        &self,
        constraints: &[Constraint],
    ) -> UnifyResult<(Substitution, SolveTrace)> {
        let mut trace = SolveTrace::new();
        let subst = self.fold(constraints, Some(&mut trace))?;
        Ok((subst, trace))
    }

    fn fold(
        &self,
        constraints: &[Constraint],
        mut trace: Option<&mut SolveTrace>,
    ) -> UnifyResult<Substitution> {
        debug!(constraints = constraints.len(), "solve started");

        let mut instantiator =
            Instantiator::new(FreshNameGenerator::new(self.config.synthetic_marker.clone()))
                .with_nested_functions(self.config.freshen_nested_functions);
        let mut subst = Substitution::new();

        for (index, constraint) in constraints.iter().enumerate() {
            let (outcome, bound) =
                match Self::contribution(&mut instantiator, &subst, constraint)? {
                    Contribution::Bind(delta) => {
                        let bound: Vec<String> = delta.names().map(str::to_string).collect();
                        trace!(index, constraint = %constraint, delta = %delta, "folding constraint");
                        subst = compose(subst, delta)?;
                        (StepOutcome::Unified, bound)
                    }
                    Contribution::Skip(reason) => {
                        debug!(index, constraint = %constraint, ?reason, "constraint contributed nothing");
                        (StepOutcome::Skipped { reason }, Vec::new())
                    }
                };

            if let Some(trace) = trace.as_deref_mut() {
                trace.push(SolveStep {
                    index,
                    kind: constraint.kind(),
                    outcome,
                    bound,
                });
            }
        }

        debug!(bindings = subst.len(), "solve finished");
        Ok(subst)
    }

    fn contribution(
        instantiator: &mut Instantiator,
        subst: &Substitution,
        constraint: &Constraint,
    ) -> UnifyResult<Contribution> {
        match constraint {
            Constraint::Equals { left, right } => Ok(Contribution::Bind(unify(left, right)?)),

            Constraint::Apply { func, args, ret } => {
                let callee = instantiator.initialise(&subst.apply(func));
                let call_site = Type::function(args.clone(), ret.clone());
                let application = unify(callee.ty(), &call_site)?;
                Ok(Contribution::Bind(callee.strip(application)))
            }

            Constraint::Concat { first, second, ret } => {
                let first = subst.apply(first);
                let second = subst.apply(second);
                match (first.as_string_literal(), second.as_string_literal()) {
                    (Some(a), Some(b)) => {
                        let joined = Type::string_literal(format!("{}{}", a, b));
                        Ok(Contribution::Bind(unify(ret, &joined)?))
                    }
                    _ => Ok(Contribution::Skip(SkipReason::UnresolvedOperand)),
                }
            }

            Constraint::Index { obj, field, ret } => {
                let obj = subst.apply(obj);
                let field = subst.apply(field);
                match (&obj, field.as_string_literal()) {
                    (Type::Object { fields }, Some(name)) => match fields.get(name) {
                        Some(field_ty) => Ok(Contribution::Bind(unify(ret, field_ty)?)),
                        None => Ok(Contribution::Skip(SkipReason::MissingField)),
                    },
                    (Type::Object { .. }, None) => {
                        Ok(Contribution::Skip(SkipReason::UnresolvedOperand))
                    }
                    _ => Ok(Contribution::Skip(SkipReason::NotAnObject)),
                }
            }
        }
    }
}

/// Solve with the default configuration
pub fn solve(constraints: &[Constraint]) -> UnifyResult<Substitution> {
    ConstraintSolver::new().solve(constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::type_unification::domain::ConstraintKind;
    use crate::features::type_unification::infrastructure::unifier::UnifyError;
    use pretty_assertions::assert_eq;

    fn var(name: &str) -> Type {
        Type::variable(name)
    }

    fn lit(value: &str) -> Type {
        Type::string_literal(value)
    }

    #[test]
    fn test_empty_constraints() {
        assert!(solve(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_var_eq_var_chain() {
        let subst = solve(&[
            Constraint::equals(var("x"), var("y")),
            Constraint::equals(var("y"), lit("hello")),
        ])
        .unwrap();

        let expected: Substitution = [("x", lit("hello")), ("y", lit("hello"))]
            .into_iter()
            .collect();
        assert_eq!(subst, expected);
    }

    #[test]
    fn test_concat_after_equals() {
        let subst = solve(&[
            Constraint::equals(var("x"), lit("world")),
            Constraint::concat(lit("hello "), var("x"), var("y")),
        ])
        .unwrap();

        assert_eq!(subst.get("y"), Some(&lit("hello world")));
    }

    #[test]
    fn test_concat_out_of_order_is_dropped() {
        // The concat is folded before x is known and never reconsidered
        let subst = solve(&[
            Constraint::concat(lit("hello "), var("x"), var("y")),
            Constraint::equals(var("x"), lit("world")),
        ])
        .unwrap();

        assert_eq!(subst, Substitution::singleton("x", lit("world")));
    }

    #[test]
    fn test_apply_unknown_callee_infers_function() {
        let subst = solve(&[Constraint::apply(var("id"), vec![lit("hello")], var("y"))]).unwrap();

        assert_eq!(
            subst,
            Substitution::singleton("id", Type::function(vec![lit("hello")], var("y")))
        );
    }

    #[test]
    fn test_apply_arity_mismatch_fails() {
        let result = solve(&[
            Constraint::equals(var("f"), Type::function(vec![var("a")], var("a"))),
            Constraint::apply(var("f"), vec![lit("x"), lit("y")], var("r")),
        ]);

        assert!(matches!(result, Err(UnifyError::TypeMismatch { .. })));
    }

    #[test]
    fn test_synthetic_names_never_leak() {
        let subst = solve(&[
            Constraint::equals(var("id"), Type::function(vec![var("x")], var("x"))),
            Constraint::apply(var("id"), vec![Type::number_literal(1.0)], var("a")),
        ])
        .unwrap();

        assert!(subst.names().all(|name| !name.contains('\'')));
    }

    #[test]
    fn test_custom_marker() {
        let solver =
            ConstraintSolver::with_config(SolverConfig::default().synthetic_marker("$")).unwrap();
        let subst = solver
            .solve(&[
                Constraint::equals(var("id"), Type::function(vec![var("x")], var("x"))),
                Constraint::apply(var("id"), vec![lit("a")], var("r")),
            ])
            .unwrap();

        assert_eq!(subst.get("r"), Some(&lit("a")));
        assert!(subst.names().all(|name| !name.contains('$')));
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        assert!(ConstraintSolver::with_config(SolverConfig::default().synthetic_marker("")).is_err());
    }

    #[test]
    fn test_trace_records_skips() {
        let solver = ConstraintSolver::new();
        let (subst, trace) = solver
            .solve_with_trace(&[
                Constraint::index(
                    Type::object([("firstName", lit("pete"))]),
                    lit("lastName"),
                    var("x"),
                ),
                Constraint::index(var("unknown"), lit("firstName"), var("y")),
                Constraint::concat(lit("a"), var("z"), var("w")),
                Constraint::index(
                    Type::object([("firstName", lit("pete"))]),
                    var("key"),
                    var("v"),
                ),
                Constraint::equals(var("x"), lit("pete")),
            ])
            .unwrap();

        assert_eq!(subst, Substitution::singleton("x", lit("pete")));
        assert_eq!(trace.len(), 5);
        assert_eq!(
            trace.steps[0].outcome,
            StepOutcome::Skipped {
                reason: SkipReason::MissingField
            }
        );
        assert_eq!(
            trace.steps[1].outcome,
            StepOutcome::Skipped {
                reason: SkipReason::NotAnObject
            }
        );
        assert_eq!(
            trace.steps[2].outcome,
            StepOutcome::Skipped {
                reason: SkipReason::UnresolvedOperand
            }
        );
        assert_eq!(trace.steps[3].kind, ConstraintKind::Index);
        assert_eq!(
            trace.steps[3].outcome,
            StepOutcome::Skipped {
                reason: SkipReason::UnresolvedOperand
            }
        );
        assert_eq!(trace.steps[4].kind, ConstraintKind::Equals);
        assert_eq!(trace.steps[4].bound, vec!["x".to_string()]);
        assert_eq!(trace.skipped().count(), 4);
    }
}
