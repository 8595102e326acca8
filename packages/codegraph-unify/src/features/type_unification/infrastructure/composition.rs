//! Extend & compose: keeps a substitution self-consistent
//!
//! Installing `name := ty` rewrites `name` inside every existing binding, so a
//! lookup never yields a type that still mentions an already resolved
//! variable. This only holds when constraints arrive in dependency order.
//!
//! Each call consumes its input and returns the next map: O(k) per extend
//! against a map of size k, O(n²) over a full solve.

use super::unifier::{unify, UnifyResult};
use crate::features::type_unification::domain::{Substitution, Type};

/// Add `name := ty` to `subst`
///
/// If `name` is already bound, the new type is unified against the existing
/// one and the result merged in. Otherwise `ty` is resolved against `subst`,
/// back-substituted into every existing binding, then inserted. A name bound
/// only to itself is treated as unbound.
pub fn extend(mut subst: Substitution, name: &str, ty: Type) -> UnifyResult<Substitution> {
    if let Some(existing) = subst.get(name) {
        if *existing == ty {
            return Ok(subst);
        }
        // A self-binding `x := x` constrains nothing; overwrite it below
        if existing.as_variable() != Some(name) {
            let reconciled = unify(&ty, existing)?;
            return compose(subst, reconciled);
        }
    }

    let resolved = subst.apply(&ty);
    subst.back_substitute(name, &resolved);
    subst.insert(name.to_string(), resolved);
    Ok(subst)
}

/// Fold every binding of `b`, in order, into `a`
pub fn compose(a: Substitution, b: Substitution) -> UnifyResult<Substitution> {
    b.into_iter()
        .try_fold(a, |acc, (name, ty)| extend(acc, &name, ty))
}
