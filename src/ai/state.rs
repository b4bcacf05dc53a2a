//! Speculative search snapshots.
//!
//! An [`AiModelState`] pairs the acting player's hand with the whole table
//! grouping. The search never mutates a snapshot it was given: every
//! candidate is built with [`AiModelState::derive`], which clones, applies a
//! short edit made of the primitives below, and then checks that the result
//! is a rearrangement of exactly the same cards.
//!
//! ## Primitives
//!
//! - `add_new_set`: a brand-new group with a fresh id
//! - `modify_set`: replace a group, matched by id
//! - `clear_set`: empty a group; an emptied group means "delete"
//! - `remove_cards_from_hand`: cards that must be held
//! - `remove_cards_from_groups`: cards located by identity anywhere on the table
//!
//! Every primitive panics if its precondition does not hold; a failing
//! precondition is a generator bug, never a normal search outcome.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardHand};
use crate::groups::{CardGroup, CardGroups, GroupId};

/// A hand plus the table grouping, searched as one value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiModelState {
    pub hand: CardHand,
    pub groups: CardGroups,
}

impl AiModelState {
    #[must_use]
    pub fn new(hand: CardHand, groups: CardGroups) -> Self {
        Self { hand, groups }
    }

    /// Clone, apply `edit`, and verify card conservation against `self`.
    #[must_use]
    pub fn derive(&self, edit: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        edit(&mut next);
        next.verify_changed_from(self);
        next
    }

    /// Panics unless `self` holds exactly the cards of `initial`, each card
    /// once, group ids are unique, and no group of `initial` has disappeared.
    pub fn verify_changed_from(&self, initial: &AiModelState) {
        let cards = self.sorted_cards();
        if let Some(pair) = cards.windows(2).find(|pair| pair[0] == pair[1]) {
            panic!("{} held twice: {} {}", pair[0], self.hand, self.groups);
        }
        assert_eq!(
            cards,
            initial.sorted_cards(),
            "Card multiset changed: {} {} became {} {}",
            initial.hand,
            initial.groups,
            self.hand,
            self.groups
        );

        let mut ids = FxHashSet::default();
        for group in self.groups.iter() {
            assert!(ids.insert(group.id()), "Duplicate {}", group.id());
        }
        for group in initial.groups.iter() {
            assert!(ids.contains(&group.id()), "{} vanished", group.id());
        }
    }

    /// Every card in the snapshot, sorted by id.
    #[must_use]
    pub fn sorted_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.hand.iter().chain(self.groups.all_cards()).collect();
        cards.sort_unstable();
        cards
    }

    // === Primitives ===

    /// Lay `cards` down as a new group.
    pub fn add_new_set(&mut self, cards: impl IntoIterator<Item = Card>) -> GroupId {
        self.groups.add_group(cards)
    }

    /// Replace the group sharing `group`'s id.
    pub fn modify_set(&mut self, group: CardGroup) {
        self.groups.replace(group);
    }

    /// Empty the group with `id`.
    pub fn clear_set(&mut self, id: GroupId) {
        self.groups
            .get_mut(id)
            .unwrap_or_else(|| panic!("{} is not on the baize", id))
            .clear();
    }

    pub fn remove_card_from_hand(&mut self, card: Card) {
        assert!(self.hand.remove_card(card), "{} is not in hand {}", card, self.hand);
    }

    pub fn remove_cards_from_hand(&mut self, cards: &[Card]) {
        for &card in cards {
            self.remove_card_from_hand(card);
        }
    }

    /// Take `card` out of whichever group holds it. Returns that group's id.
    pub fn remove_card_from_groups(&mut self, card: Card) -> GroupId {
        self.groups
            .remove_card_from_groups(card)
            .unwrap_or_else(|| panic!("{} is not on the baize", card))
    }

    pub fn remove_cards_from_groups(&mut self, cards: &[Card]) {
        for &card in cards {
            self.remove_card_from_groups(card);
        }
    }
}
