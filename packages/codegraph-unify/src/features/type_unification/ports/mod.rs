pub mod constraint_source;

pub use constraint_source::ConstraintSource;
