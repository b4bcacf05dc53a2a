//! Applying a target snapshot to the live game.
//!
//! The target is matched to the live table group by group, by id:
//!
//! - id not on the live table: add a new group
//! - id present with different cards: modify the live group
//! - id present but emptied: delete the live group
//! - id absent from the target: unchanged
//!
//! Adds and modifies run first, pulling each missing card from the hand or
//! from whichever live group holds it. Deletes run second, once every card
//! has left the groups being deleted.

use log::debug;
use serde::{Deserialize, Serialize};

use super::game::BaizeGame;
use crate::ai::AiModelState;
use crate::cards::Card;
use crate::groups::{CardGroup, GroupId};

/// What one applied play changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnChanges {
    pub added: Vec<GroupId>,
    pub modified: Vec<GroupId>,
    pub deleted: Vec<GroupId>,
    /// Cards that left the active player's hand.
    pub cards_played: Vec<Card>,
}

impl TurnChanges {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }
}

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut cards = cards.to_vec();
    cards.sort_unstable();
    cards
}

impl BaizeGame {
    /// Make the live hand and table match `target` for the active player.
    ///
    /// Panics if `target` is not reachable from the live state: a card it
    /// places that is neither in the hand nor on the table, a group it keeps
    /// that is not a good set, or a group it deletes that still holds cards.
    pub fn apply_turn_play(&mut self, target: &AiModelState) -> TurnChanges {
        let player = self.active_player;
        let mut changes = TurnChanges::default();

        for wanted in target.groups.iter().filter(|g| !g.is_empty()) {
            let id = wanted.id();
            let is_new = match self.groups.get(id) {
                None => true,
                Some(live) if live == wanted => continue,
                Some(_) => false,
            };
            assert!(wanted.is_good_set(), "{} is not a good set", wanted);

            if is_new {
                self.groups.push(CardGroup::new(id, []));
            }
            for &card in wanted.cards() {
                if self.groups.get(id).map_or(false, |g| g.contains(card)) {
                    continue;
                }
                if self.hands[player].remove_card(card) {
                    changes.cards_played.push(card);
                } else {
                    self.groups
                        .remove_card_from_groups(card)
                        .unwrap_or_else(|| panic!("{} is neither in hand nor on the baize", card));
                }
                if let Some(live) = self.groups.get_mut(id) {
                    live.push(card);
                }
            }

            if is_new {
                debug!("Added {} {}", id, wanted);
                changes.added.push(id);
            } else {
                debug!("Modified {} to {}", id, wanted);
                changes.modified.push(id);
            }
        }

        for wanted in target.groups.iter() {
            let Some(live) = self.groups.get_mut(wanted.id()) else { continue };
            if wanted.is_empty() {
                assert!(live.is_empty(), "{} deleted while holding {}", wanted.id(), live);
                debug!("Deleted {}", wanted.id());
                changes.deleted.push(wanted.id());
            } else {
                assert_eq!(
                    sorted(live.cards()),
                    sorted(wanted.cards()),
                    "{} kept cards it should have given up",
                    wanted.id()
                );
                live.set_cards(wanted.cards().iter().copied());
            }
        }

        assert_eq!(
            sorted(self.hands[player].cards()),
            sorted(target.hand.cards()),
            "Hand of {} does not match the play",
            player
        );

        self.update_initial_free_cards();
        self.tidy_groups();
        changes
    }
}
