//! Configuration for a drill session.

/// Configuration shared by all drill sessions.
#[derive(Debug, Clone)]
pub struct DrillConfig {
    /// RNG seed for reproducible item selection and choice shuffling.
    pub seed: u64,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl DrillConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed() {
        assert_eq!(DrillConfig::default().seed, 42);
    }

    #[test]
    fn with_seed() {
        assert_eq!(DrillConfig::default().with_seed(7).seed, 7);
    }
}
