use crate::errors::Result;
use crate::features::type_unification::domain::Constraint;

/// Supplies an ordered constraint list, typically from a front end that
/// walked a syntax tree. Implementations must emit constraints in dependency
/// order: a node's own constraints after those of the nodes it refers to.
pub trait ConstraintSource: Send + Sync {
    fn constraints(&self) -> Result<Vec<Constraint>>;

    /// Short label for logs
    fn describe(&self) -> String {
        "constraints".to_string()
    }
}
