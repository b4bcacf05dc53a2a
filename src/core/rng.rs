//! Deterministic random number generation for dealing and AI tie-breaks.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals and identical AI
//!   choices
//! - **Forkable**: The AI gets its own stream, so adding a search never
//!   perturbs the deal sequence
//! - **Checkpointable**: O(1) state capture and restore for turn restarts
//!
//! ```
//! use rust_baize::core::GameRng;
//!
//! let mut deal_rng = GameRng::new(7);
//! let mut ai_rng = deal_rng.fork();
//!
//! let mut replay = GameRng::new(7);
//! let mut replay_ai = replay.fork();
//!
//! assert_eq!(ai_rng.gen_index(52), replay_ai.gen_index(52));
//! assert_eq!(deal_rng.gen_index(52), replay.gen_index(52));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded ChaCha8 generator shared by the deck and the AI.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Split off an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Uniform index in `0..len`.
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "Cannot pick an index from an empty range");
        self.inner.gen_range(0..len)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Take a random element out of a vector, consuming it.
    pub fn take_one<T>(&mut self, mut items: Vec<T>) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let index = self.gen_index(items.len());
        Some(items.swap_remove(index))
    }

    /// Get the current state for a checkpoint.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a checkpointed state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Forks taken so far
    pub fork_counter: u64,
}
