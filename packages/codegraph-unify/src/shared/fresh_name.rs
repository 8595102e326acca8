//! Fresh type-variable name generation
//!
//! Names have the form `<base><marker><generation>`. Generations are
//! monotonic per generator, so two instantiations in one solve never share a
//! synthetic name.

use super::constants::naming::DEFAULT_SYNTHETIC_MARKER;

#[derive(Debug, Clone)]
pub struct FreshNameGenerator {
    marker: String,
    next_generation: u64,
}

impl FreshNameGenerator {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            next_generation: 0,
        }
    }

    /// Reserve the next generation number
    pub fn next_generation(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        generation
    }

    /// Build the synthetic name for `base` in `generation`
    pub fn name_for(&self, base: &str, generation: u64) -> String {
        format!("{}{}{}", base, self.marker, generation)
    }
}

impl Default for FreshNameGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SYNTHETIC_MARKER)
    }
}
