//! Turn-search configuration.

use serde::{Deserialize, Serialize};

/// Turn-search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Seed for tie-break selection among candidates of one level.
    /// Same seed and same inputs produce the same play.
    pub seed: u64,

    /// Whether the equivalence-rearrangement search runs when no simple
    /// play exists. Disabled, the engine only ever plays levels 1 to 4
    /// against the table as it is.
    pub rearrangement: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rearrangement: true,
        }
    }
}

impl AiConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the rearrangement search.
    #[must_use]
    pub fn with_rearrangement(mut self, enabled: bool) -> Self {
        self.rearrangement = enabled;
        self
    }
}
