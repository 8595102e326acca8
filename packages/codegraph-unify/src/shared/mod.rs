//! Shared module - constants and small utilities used across features

pub mod constants;
pub mod fresh_name;

pub use fresh_name::FreshNameGenerator;
