//! The card arena and draw pile.
//!
//! `CardDeck` owns all 104 cards in deal order. Dealing walks a cursor
//! through that order, so the cards still to be drawn are always
//! `cards[next_to_deal..]`. The deck also remembers which cards were laid on
//! the baize as initial free cards and have not yet been claimed into a meld.

use serde::{Deserialize, Serialize};

use super::card::{Card, DECK_SIZE};
use crate::core::GameRng;
use crate::groups::{CardGroup, InitialCardGroups};

/// Two packs of cards in deal order, plus the initial free card register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDeck {
    cards: Vec<Card>,
    next_to_deal: usize,
    initial_free_cards: Vec<Card>,
}

impl Default for CardDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl CardDeck {
    /// Both packs in id order, nothing dealt.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: (0..DECK_SIZE).map(Card::new).collect(),
            next_to_deal: 0,
            initial_free_cards: Vec::new(),
        }
    }

    /// Forget everything dealt so far.
    pub fn reset_for_new_deal(&mut self) {
        self.next_to_deal = 0;
        self.initial_free_cards.clear();
    }

    /// Shuffle the whole deck and reset the deal cursor.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        self.reset_for_new_deal();
    }

    #[must_use]
    pub fn can_deal_next_card(&self) -> bool {
        self.next_to_deal < self.cards.len()
    }

    /// Deal the next card, or `None` once the draw pile is exhausted.
    pub fn deal_next_card(&mut self) -> Option<Card> {
        let card = self.cards.get(self.next_to_deal).copied()?;
        self.next_to_deal += 1;
        Some(card)
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len() - self.next_to_deal
    }

    /// Look up a card by arena id.
    #[must_use]
    pub fn find_card(&self, id: u8) -> Option<Card> {
        self.cards.iter().copied().find(|card| card.id() == id)
    }

    /// Cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    // === Initial free cards ===

    #[must_use]
    pub fn initial_free_cards(&self) -> &[Card] {
        &self.initial_free_cards
    }

    #[must_use]
    pub fn is_initial_free_card(&self, card: Card) -> bool {
        self.initial_free_cards.contains(&card)
    }

    pub fn add_initial_free_card(&mut self, card: Card) {
        assert!(
            !self.is_initial_free_card(card),
            "{} is already an initial free card",
            card
        );
        self.initial_free_cards.push(card);
    }

    pub fn remove_from_initial_free_cards(&mut self, card: Card) {
        let pos = self
            .initial_free_cards
            .iter()
            .position(|&c| c == card)
            .unwrap_or_else(|| panic!("{} is not an initial free card", card));
        self.initial_free_cards.remove(pos);
    }
}

impl InitialCardGroups for CardDeck {
    fn is_initial_card_group(&self, group: &CardGroup) -> bool {
        group.len() == 1 && self.is_initial_free_card(group.cards()[0])
    }
}
