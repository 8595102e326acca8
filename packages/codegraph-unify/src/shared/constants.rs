//! Centralized defaults
//!
//! Tunable parameters referenced by the configuration layer and the solver.

/// Synthetic variable naming
pub mod naming {
    /// Marker inserted between a variable's name and its instantiation number
    pub const DEFAULT_SYNTHETIC_MARKER: &str = "'";
}

/// Solver limits
pub mod limits {
    /// Default upper bound on constraints accepted in one batch
    pub const DEFAULT_MAX_CONSTRAINTS: usize = 1_000_000;

    /// Hard ceiling for `max_constraints`
    pub const MAX_CONSTRAINTS_CEILING: usize = 100_000_000;
}

/// Configuration file schema
pub mod schema {
    /// Current YAML schema version
    pub const CONFIG_VERSION: u32 = 1;
}
