//! Substitution map: type variable name → Type
//!
//! Entries keep insertion order so composition folds deterministically.
//! Equality ignores order. Extension and composition live in
//! `infrastructure::composition` because they need the unifier.

use super::types::Type;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Substitution {
    bindings: IndexMap<String, Type>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Substitution with a single binding
    pub fn singleton(name: impl Into<String>, ty: Type) -> Self {
        let mut bindings = IndexMap::with_capacity(1);
        bindings.insert(name.into(), ty);
        Self { bindings }
    }

    pub fn get(&self, name: &str) -> Option<&Type> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Type)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Apply this substitution to a type
    ///
    /// Variables are replaced by their binding (one lookup, no chain following);
    /// functions and objects are rewritten structurally.
    pub fn apply(&self, ty: &Type) -> Type {
        match ty {
            Type::Variable { name } => self.get(name).cloned().unwrap_or_else(|| ty.clone()),
            Type::Function { params, returns } => Type::Function {
                params: params.iter().map(|p| self.apply(p)).collect(),
                returns: Box::new(self.apply(returns)),
            },
            Type::Object { fields } => Type::Object {
                fields: fields
                    .iter()
                    .map(|(k, t)| (k.clone(), self.apply(t)))
                    .collect(),
            },
            Type::Number
            | Type::NumberLiteral { .. }
            | Type::String
            | Type::StringLiteral { .. }
            | Type::Boolean
            | Type::BooleanLiteral { .. } => ty.clone(),
        }
    }

    /// Drop every binding whose name matches `predicate`
    pub fn without(mut self, predicate: impl Fn(&str) -> bool) -> Self {
        self.bindings.retain(|name, _| !predicate(name));
        self
    }

    /// Rewrite `name` to `ty` inside every bound type
    pub(crate) fn back_substitute(&mut self, name: &str, ty: &Type) {
        for bound in self.bindings.values_mut() {
            if bound.mentions(name) {
                *bound = bound.substitute(name, ty);
            }
        }
    }

    /// Install a binding without reconciliation; callers go through `extend`
    pub(crate) fn insert(&mut self, name: String, ty: Type) {
        self.bindings.insert(name, ty);
    }
}

impl IntoIterator for Substitution {
    type Item = (String, Type);
    type IntoIter = indexmap::map::IntoIter<String, Type>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Type)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (K, Type)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().map(|(k, t)| (k.into(), t)).collect(),
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, ty)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, " {} := {}", name, ty)?;
        }
        if !self.bindings.is_empty() {
            write!(f, " ")?;
        }
        write!(f, "}}")
    }
}
