//! Common test utilities for codegraph-unify
//!
//! Short type constructors and a builder for ordered constraint lists.

mod builders;

pub use builders::*;
