//! Structural unification
//!
//! Rules, checked in order:
//! 1. `a` is a variable → `{a := b}` (also when `b` is a variable)
//! 2. `b` is a variable → unify(b, a)
//! 3. equal literals of the same kind, or identical base types → `{}`
//! 4. functions of equal arity → return types first, then each parameter
//!    pair composed in order
//! 5. anything else is a type mismatch, including two object types
//!
//! No occurs check: the type algebra cannot build cyclic types.

use thiserror::Error;
use tracing::trace;

use super::composition::compose;
use crate::features::type_unification::domain::{Substitution, Type, TypeKind};

/// Unification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnifyError {
    /// Two non-variable types cannot be reconciled
    #[error("Types do not unify: {left_kind} and {right_kind}")]
    TypeMismatch {
        left_kind: TypeKind,
        right_kind: TypeKind,
    },
}

impl UnifyError {
    pub fn mismatch(left: &Type, right: &Type) -> Self {
        UnifyError::TypeMismatch {
            left_kind: left.kind(),
            right_kind: right.kind(),
        }
    }
}

pub type UnifyResult<T> = Result<T, UnifyError>;

/// Compute the substitution that makes `a` and `b` structurally equal
pub fn unify(a: &Type, b: &Type) -> UnifyResult<Substitution> {
    match (a, b) {
        (Type::Variable { name }, _) => Ok(Substitution::singleton(name.clone(), b.clone())),
        (_, Type::Variable { .. }) => unify(b, a),

        (Type::NumberLiteral { value: l }, Type::NumberLiteral { value: r }) if l == r => {
            Ok(Substitution::new())
        }
        (Type::StringLiteral { value: l }, Type::StringLiteral { value: r }) if l == r => {
            Ok(Substitution::new())
        }
        (Type::BooleanLiteral { value: l }, Type::BooleanLiteral { value: r }) if l == r => {
            Ok(Substitution::new())
        }
        (Type::Number, Type::Number)
        | (Type::String, Type::String)
        | (Type::Boolean, Type::Boolean) => Ok(Substitution::new()),

        (
            Type::Function {
                params: params1,
                returns: ret1,
            },
            Type::Function {
                params: params2,
                returns: ret2,
            },
        ) if params1.len() == params2.len() => {
            let mut combined = unify(ret1, ret2)?;
            for (p1, p2) in params1.iter().zip(params2) {
                combined = compose(combined, unify(p1, p2)?)?;
            }
            Ok(combined)
        }

        _ => {
            trace!(left = %a, right = %b, "unify mismatch");
            Err(UnifyError::mismatch(a, b))
        }
    }
}
