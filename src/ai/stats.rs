//! Turn-search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters accumulated across turn searches until [`SearchStats::reset`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Calls to the top-level turn search.
    pub searches: u32,

    /// Candidate states produced by the level generators.
    pub candidates_generated: u32,

    /// Rearranged table layouts the simple search was retried against.
    pub rearrangements_tried: u32,

    /// Searches that found a play on the table as given.
    pub plays_found: u32,

    /// Searches that found a play only after a rearrangement.
    pub rearranged_plays: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Searches that ended with "no play".
    #[must_use]
    pub fn no_plays(&self) -> u32 {
        self.searches - self.plays_found - self.rearranged_plays
    }

    /// Fraction of searches that found any play.
    #[must_use]
    pub fn play_rate(&self) -> f64 {
        if self.searches == 0 {
            0.0
        } else {
            (self.plays_found + self.rearranged_plays) as f64 / self.searches as f64
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} searches, {} direct plays, {} after rearranging, {} candidates, {} layouts tried, {}us",
            self.searches,
            self.plays_found,
            self.rearranged_plays,
            self.candidates_generated,
            self.rearrangements_tried,
            self.time_us
        )
    }
}
