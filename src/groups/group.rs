//! A single group of cards on the baize.

use serde::{Deserialize, Serialize};

use super::validate::{
    is_good_rank_set, is_good_run_set, rearranged_for_sets, set_type_of, GroupCards, SetType,
};
use crate::cards::Card;

/// Stable identity of a group.
///
/// Assigned once when the group is created and kept by every copy, so a
/// group in a speculative snapshot can be matched to the live group it came
/// from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u32);

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

/// Ordered cards forming one meld (or a lone initial free card).
///
/// A group may be any shape while it is being edited. Once a turn completes
/// every group is either a good set or an initial free-card group.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardGroup {
    id: GroupId,
    cards: GroupCards,
}

impl CardGroup {
    #[must_use]
    pub fn new(id: GroupId, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            id,
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Replace the cards, keeping the identity.
    pub fn set_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards = cards.into_iter().collect();
    }

    /// Remove `card` if present. Returns whether it was here.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn remove_cards(&mut self, cards: &[Card]) {
        self.cards.retain(|card| !cards.contains(card));
    }

    /// Put the cards in canonical set order in place.
    pub fn rearrange_for_sets(&mut self) {
        self.cards = rearranged_for_sets(&self.cards);
    }

    /// Copy of this group in canonical set order.
    #[must_use]
    pub fn rearranged(&self) -> Self {
        Self {
            id: self.id,
            cards: rearranged_for_sets(&self.cards),
        }
    }

    /// Copy with `card` appended, in canonical set order.
    #[must_use]
    pub fn with_card(&self, card: Card) -> Self {
        let mut cards = self.cards.clone();
        cards.push(card);
        Self {
            id: self.id,
            cards: rearranged_for_sets(&cards),
        }
    }

    /// Copy ordered by suit (Diamonds, Clubs, Hearts, Spades), ranks
    /// descending.
    #[must_use]
    pub fn sorted_by_suit(&self) -> Self {
        let mut cards = self.cards.clone();
        cards.sort_by(Card::cmp_by_suit);
        Self { id: self.id, cards }
    }

    // === Validity ===

    #[must_use]
    pub fn is_good_rank_set(&self) -> bool {
        is_good_rank_set(&self.cards)
    }

    #[must_use]
    pub fn is_good_run_set(&self) -> bool {
        is_good_run_set(&self.cards)
    }

    /// What kind of set this group forms, if any. Expects canonical order.
    #[must_use]
    pub fn set_type(&self) -> Option<SetType> {
        set_type_of(&self.cards)
    }

    #[must_use]
    pub fn is_good_set(&self) -> bool {
        self.set_type().is_some()
    }

    #[must_use]
    pub fn is_good_set_of_type(&self, wanted: SetType) -> bool {
        self.set_type() == Some(wanted)
    }
}

impl std::fmt::Display for CardGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        f.write_str("]")
    }
}
