//! Per-call-site instantiation of function types
//!
//! Renames every parameter or return slot that is directly a bare variable to
//! a fresh synthetic name, so one polymorphic function can be applied at
//! several unrelated types. The same variable gets the same fresh name within
//! one instantiation, which keeps `(x) => x` linked.
//!
//! Only the immediate slots are renamed unless nested freshening is enabled,
//! in which case function types sitting directly in a slot are freshened too.
//! Object types are never entered.

use std::collections::{HashMap, HashSet};

use crate::features::type_unification::domain::{Substitution, Type};
use crate::shared::FreshNameGenerator;

/// A freshened type together with the synthetic names it introduced
#[derive(Debug, Clone, PartialEq)]
pub struct Instantiation {
    ty: Type,
    synthetic: HashSet<String>,
}

impl Instantiation {
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn into_type(self) -> Type {
        self.ty
    }

    pub fn is_synthetic(&self, name: &str) -> bool {
        self.synthetic.contains(name)
    }

    /// Drop bindings keyed by names this instantiation introduced
    pub fn strip(&self, subst: Substitution) -> Substitution {
        if self.synthetic.is_empty() {
            return subst;
        }
        subst.without(|name| self.synthetic.contains(name))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Instantiator {
    names: FreshNameGenerator,
    freshen_nested: bool,
}

impl Instantiator {
    pub fn new(names: FreshNameGenerator) -> Self {
        Self {
            names,
            freshen_nested: false,
        }
    }

    /// Also freshen function types nested directly in parameter/return slots
    pub fn with_nested_functions(mut self, enabled: bool) -> Self {
        self.freshen_nested = enabled;
        self
    }

    /// Freshen `ty` for one call site; non-function types pass through unchanged
    pub fn initialise(&mut self, ty: &Type) -> Instantiation {
        let Type::Function { params, returns } = ty else {
            return Instantiation {
                ty: ty.clone(),
                synthetic: HashSet::new(),
            };
        };

        let generation = self.names.next_generation();
        let mut renames = HashMap::new();
        let ty = self.freshen_function(params, returns, generation, &mut renames);

        Instantiation {
            ty,
            synthetic: renames.into_values().collect(),
        }
    }

    fn freshen_function(
        &self,
        params: &[Type],
        returns: &Type,
        generation: u64,
        renames: &mut HashMap<String, String>,
    ) -> Type {
        let params = params
            .iter()
            .map(|p| self.freshen_slot(p, generation, renames))
            .collect();
        let returns = self.freshen_slot(returns, generation, renames);
        Type::function(params, returns)
    }

    fn freshen_slot(
        &self,
        slot: &Type,
        generation: u64,
        renames: &mut HashMap<String, String>,
    ) -> Type {
        match slot {
            Type::Variable { name } => {
                let fresh = renames
                    .entry(name.clone())
                    .or_insert_with(|| self.names.name_for(name, generation));
                Type::variable(fresh.clone())
            }
            Type::Function { params, returns } if self.freshen_nested => {
                self.freshen_function(params, returns, generation, renames)
            }
            other => other.clone(),
        }
    }
}
