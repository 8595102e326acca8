//! Typing constraints consumed by the solver
//!
//! Constraints are produced by a front end that walks a syntax tree and
//! assigns each node a type variable. They hold only types and are processed
//! exactly once, in the order supplied.

use super::types::Type;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type constraint kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Constraint {
    /// left = right
    #[serde(rename = "eq")]
    Equals { left: Type, right: Type },

    /// func(args...) = ret
    #[serde(rename = "apply")]
    Apply {
        func: Type,
        args: Vec<Type>,
        ret: Type,
    },

    /// first + second = ret, once both operands are string literals
    #[serde(rename = "concat")]
    Concat { first: Type, second: Type, ret: Type },

    /// obj[field] = ret, when `field` is a string literal naming an existing field
    #[serde(rename = "index")]
    Index { obj: Type, field: Type, ret: Type },
}

/// Discriminant of a [`Constraint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    Equals,
    Apply,
    Concat,
    Index,
}

impl ConstraintKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintKind::Equals => "equals",
            ConstraintKind::Apply => "apply",
            ConstraintKind::Concat => "concat",
            ConstraintKind::Index => "index",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Constraint {
    pub fn equals(left: Type, right: Type) -> Self {
        Constraint::Equals { left, right }
    }

    pub fn apply(func: Type, args: Vec<Type>, ret: Type) -> Self {
        Constraint::Apply { func, args, ret }
    }

    pub fn concat(first: Type, second: Type, ret: Type) -> Self {
        Constraint::Concat { first, second, ret }
    }

    pub fn index(obj: Type, field: Type, ret: Type) -> Self {
        Constraint::Index { obj, field, ret }
    }

    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Equals { .. } => ConstraintKind::Equals,
            Constraint::Apply { .. } => ConstraintKind::Apply,
            Constraint::Concat { .. } => ConstraintKind::Concat,
            Constraint::Index { .. } => ConstraintKind::Index,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Equals { left, right } => write!(f, "{} = {}", left, right),
            Constraint::Apply { func, args, ret } => {
                write!(f, "{}(", func)?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", a)?;
                }
                write!(f, ") = {}", ret)
            }
            Constraint::Concat { first, second, ret } => {
                write!(f, "{} + {} = {}", first, second, ret)
            }
            Constraint::Index { obj, field, ret } => write!(f, "{}[{}] = {}", obj, field, ret),
        }
    }
}
