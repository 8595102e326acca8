//! Test data builders

#![allow(dead_code)]

use codegraph_unify::{Constraint, Substitution, Type};

pub fn var(name: &str) -> Type {
    Type::variable(name)
}

pub fn str_lit(value: &str) -> Type {
    Type::string_literal(value)
}

pub fn num_lit(value: f64) -> Type {
    Type::number_literal(value)
}

pub fn bool_lit(value: bool) -> Type {
    Type::boolean_literal(value)
}

pub fn func(params: Vec<Type>, returns: Type) -> Type {
    Type::function(params, returns)
}

/// Build a substitution from `(name, type)` pairs
pub fn subst<const N: usize>(bindings: [(&str, Type); N]) -> Substitution {
    bindings.into_iter().collect()
}

/// Builder for an ordered constraint list
#[derive(Debug, Default)]
pub struct ConstraintListBuilder {
    constraints: Vec<Constraint>,
}

impl ConstraintListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn equals(mut self, left: Type, right: Type) -> Self {
        self.constraints.push(Constraint::equals(left, right));
        self
    }

    pub fn apply(mut self, func: Type, args: Vec<Type>, ret: Type) -> Self {
        self.constraints.push(Constraint::apply(func, args, ret));
        self
    }

    pub fn concat(mut self, first: Type, second: Type, ret: Type) -> Self {
        self.constraints.push(Constraint::concat(first, second, ret));
        self
    }

    pub fn index(mut self, obj: Type, field: Type, ret: Type) -> Self {
        self.constraints.push(Constraint::index(obj, field, ret));
        self
    }

    pub fn build(self) -> Vec<Constraint> {
        self.constraints
    }
}
