//! Deal configuration.
//!
//! A `DealConfig` fixes the shape of a deal: how many seats, how many cards
//! each hand starts with, how many lone cards are laid on the baize before
//! the first turn, and which seats the AI plays.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};

/// Shape of a deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealConfig {
    /// Number of seats.
    pub player_count: usize,

    /// Cards dealt to each hand.
    pub initial_hand_size: usize,

    /// Lone cards dealt face up onto the baize. Each becomes an initial
    /// free-card group until it is claimed into a meld.
    pub initial_free_cards: usize,

    /// Which seats are computer-controlled.
    pub ai_players: PlayerMap<bool>,
}

impl Default for DealConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            initial_hand_size: 13,
            initial_free_cards: 4,
            ai_players: PlayerMap::new(2, |p| p.index() == 1),
        }
    }
}

impl DealConfig {
    /// Two players, seat 1 played by the AI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of seats. Resets AI seats to none.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        assert!((1..=4).contains(&count), "Player count must be 1-4");
        self.player_count = count;
        self.ai_players = PlayerMap::with_default(count);
        self
    }

    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_initial_free_cards(mut self, count: usize) -> Self {
        self.initial_free_cards = count;
        self
    }

    /// Mark a seat as computer-controlled.
    #[must_use]
    pub fn with_ai_player(mut self, player: PlayerId) -> Self {
        self.ai_players[player] = true;
        self
    }

    /// Let the AI play every seat (continuous play).
    #[must_use]
    pub fn all_ai(mut self) -> Self {
        self.ai_players = PlayerMap::new(self.player_count, |_| true);
        self
    }

    #[must_use]
    pub fn is_ai_player(&self, player: PlayerId) -> bool {
        player.index() < self.player_count && self.ai_players[player]
    }

    /// Cards needed from the deck to start a deal.
    #[must_use]
    pub fn cards_dealt(&self) -> usize {
        self.player_count * self.initial_hand_size + self.initial_free_cards
    }
}
