//! The turn search.
//!
//! [`AiModel::find_one_turn_play`] snapshots the hand and table, runs the
//! simple search, and falls back to the rearrangement search. Both searches
//! work only on value copies; the live game is never touched here.

use std::time::Instant;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::config::AiConfig;
use super::generators::{
    add_to_sets_from_one_card_in_hand, complete_sets_from_two_cards_in_hand,
    complete_sets_in_hand, make_new_sets_from_one_card_in_hand,
};
use super::rearrange::Rearrangement;
use super::state::AiModelState;
use super::stats::SearchStats;
use crate::cards::CardHand;
use crate::core::GameRng;
use crate::groups::{CardGroups, InitialCardGroups};

/// Play levels, highest priority first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayLevel {
    /// A complete set made only of hand cards.
    CompleteSetInHand = 1,
    /// Two hand cards plus one free table card.
    CompleteSetFromTwoCards = 2,
    /// One hand card added to a table set.
    AddToSet = 3,
    /// One hand card plus two free table cards.
    NewSetFromOneCard = 4,
}

impl PlayLevel {
    pub const ALL: [PlayLevel; 4] = [
        PlayLevel::CompleteSetInHand,
        PlayLevel::CompleteSetFromTwoCards,
        PlayLevel::AddToSet,
        PlayLevel::NewSetFromOneCard,
    ];

    /// Every candidate at this level.
    #[must_use]
    pub fn generate(self, state: &AiModelState, table: &dyn InitialCardGroups) -> Vec<AiModelState> {
        match self {
            PlayLevel::CompleteSetInHand => complete_sets_in_hand(state),
            PlayLevel::CompleteSetFromTwoCards => complete_sets_from_two_cards_in_hand(state, table),
            PlayLevel::AddToSet => add_to_sets_from_one_card_in_hand(state),
            PlayLevel::NewSetFromOneCard => make_new_sets_from_one_card_in_hand(state, table),
        }
    }
}

/// A chosen play: the target hand and table, and how it was found.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPlay {
    pub state: AiModelState,
    pub level: PlayLevel,
    /// Set if the table had to be rearranged before the play existed.
    pub rearrangement: Option<Rearrangement>,
}

/// The AI turn-search engine.
///
/// Owns its RNG, so tie-breaks are reproducible from [`AiConfig::seed`].
pub struct AiModel {
    config: AiConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl AiModel {
    #[must_use]
    pub fn new(config: AiConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Use `rng` for tie-breaks instead of one seeded from the config.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Find one play for the player holding `hand`, or `None` if they
    /// should draw.
    ///
    /// `table` tells which single-card groups are initial free cards.
    pub fn find_one_turn_play(
        &mut self,
        hand: &CardHand,
        groups: &CardGroups,
        table: &dyn InitialCardGroups,
    ) -> Option<TurnPlay> {
        let start = Instant::now();
        self.stats.searches += 1;

        let state = AiModelState::new(hand.clone(), groups.clone());
        let play = match self.find_one_simple_turn_play(&state, table, 0) {
            Some((level, found)) => {
                self.stats.plays_found += 1;
                Some(TurnPlay {
                    state: found,
                    level,
                    rearrangement: None,
                })
            }
            None if self.config.rearrangement => {
                let play = self.search_equivalent_states(&state, table);
                if play.is_some() {
                    self.stats.rearranged_plays += 1;
                }
                play
            }
            None => None,
        };

        self.stats.time_us += start.elapsed().as_micros() as u64;
        match &play {
            Some(play) => debug!(
                "{} plays level {:?} after {:?}: {}",
                hand, play.level, play.rearrangement, play.state.groups
            ),
            None => debug!("{} has no play on {}", hand, groups),
        }
        play
    }

    /// Try each level in priority order and pick uniformly among the
    /// candidates of the first level that has any.
    ///
    /// Level 1 only runs at depth 0: rearranging the table cannot create a
    /// set made purely of hand cards.
    pub fn find_one_simple_turn_play(
        &mut self,
        state: &AiModelState,
        table: &dyn InitialCardGroups,
        depth: u32,
    ) -> Option<(PlayLevel, AiModelState)> {
        for level in PlayLevel::ALL {
            if level == PlayLevel::CompleteSetInHand && depth > 0 {
                continue;
            }
            let candidates = level.generate(state, table);
            trace!("depth {} level {:?}: {} candidates", depth, level, candidates.len());
            self.stats.candidates_generated += candidates.len() as u32;
            if let Some(chosen) = self.rng.take_one(candidates) {
                return Some((level, chosen));
            }
        }
        None
    }

    /// Retry the simple search on each rearranged table, one rearrangement
    /// deep. The first success wins.
    fn search_equivalent_states(
        &mut self,
        state: &AiModelState,
        table: &dyn InitialCardGroups,
    ) -> Option<TurnPlay> {
        for kind in Rearrangement::ALL {
            for rearranged in kind.generate(state, table) {
                self.stats.rearrangements_tried += 1;
                if let Some((level, found)) = self.find_one_simple_turn_play(&rearranged, table, 1) {
                    return Some(TurnPlay {
                        state: found,
                        level,
                        rearrangement: Some(kind),
                    });
                }
            }
        }
        None
    }
}

impl Default for AiModel {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}
