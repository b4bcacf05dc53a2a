//! Player hands.
//!
//! A hand is an ordered list of cards. Order matters to the AI: its greedy
//! set extraction always starts from the hand's first remaining card, so
//! live hands are kept sorted with [`CardHand::sort_hand`].

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::deck::CardDeck;
use crate::core::{PlayerId, PlayerMap};

/// Cards held by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardHand {
    cards: Vec<Card>,
}

impl CardHand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Remove one occurrence of `card`. Returns whether it was held.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every card in `cards` that is held; cards not held are ignored.
    pub fn remove_cards(&mut self, cards: &[Card]) {
        for &card in cards {
            self.remove_card(card);
        }
    }

    /// Remove and return the first card.
    pub fn take_first(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Sort by suit (Diamonds, Clubs, Hearts, Spades), ranks descending.
    pub fn sort_hand(&mut self) {
        self.cards.sort_by(Card::cmp_by_suit);
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }
}

impl FromIterator<Card> for CardHand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for CardHand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("(")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", card)?;
        }
        f.write_str(")")
    }
}

/// One hand per seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardHands {
    hands: PlayerMap<CardHand>,
}

impl CardHands {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            hands: PlayerMap::with_default(player_count),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// Empty every hand.
    pub fn clear_hands(&mut self) {
        for (_, hand) in self.hands.iter_mut() {
            *hand = CardHand::new();
        }
    }

    /// Deal `hand_size` cards to each seat, one at a time round the table.
    ///
    /// Stops early if the deck runs out.
    pub fn deal_hands(&mut self, deck: &mut CardDeck, hand_size: usize) {
        self.clear_hands();
        for _ in 0..hand_size {
            for (_, hand) in self.hands.iter_mut() {
                match deck.deal_next_card() {
                    Some(card) => hand.push(card),
                    None => return,
                }
            }
        }
    }

    pub fn sort_hands(&mut self) {
        for (_, hand) in self.hands.iter_mut() {
            hand.sort_hand();
        }
    }

    /// Seat holding `card`, if any.
    #[must_use]
    pub fn find_card_in_hands(&self, card: Card) -> Option<PlayerId> {
        self.hands
            .iter()
            .find(|(_, hand)| hand.contains(card))
            .map(|(player, _)| player)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &CardHand)> {
        self.hands.iter()
    }
}

impl std::ops::Index<PlayerId> for CardHands {
    type Output = CardHand;

    fn index(&self, player: PlayerId) -> &CardHand {
        &self.hands[player]
    }
}

impl std::ops::IndexMut<PlayerId> for CardHands {
    fn index_mut(&mut self, player: PlayerId) -> &mut CardHand {
        &mut self.hands[player]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(pip: u8, suit: Suit) -> Card {
        Card::from_parts(0, suit, Rank::pip(pip))
    }

    #[test]
    fn test_remove_cards_ignores_missing() {
        let mut hand: CardHand = [card(4, Suit::Clubs), card(5, Suit::Clubs)].into_iter().collect();

        hand.remove_cards(&[card(4, Suit::Clubs), card(9, Suit::Hearts)]);

        assert_eq!(hand.cards(), &[card(5, Suit::Clubs)]);
    }

    #[test]
    fn test_take_first() {
        let mut hand: CardHand = [card(1, Suit::Spades), card(2, Suit::Spades)].into_iter().collect();

        assert_eq!(hand.take_first(), Some(card(1, Suit::Spades)));
        assert_eq!(hand.len(), 1);
        hand.take_first();
        assert_eq!(hand.take_first(), None);
    }

    #[test]
    fn test_sort_hand() {
        let mut hand: CardHand = [
            card(2, Suit::Spades),
            card(9, Suit::Diamonds),
            card(12, Suit::Diamonds),
            card(3, Suit::Clubs),
        ]
        .into_iter()
        .collect();

        hand.sort_hand();

        assert_eq!(hand.to_string(), "(Q♦ 9♦ 3♣ 2♠)");
    }

    #[test]
    fn test_deal_hands_round_robin() {
        let mut deck = CardDeck::new();
        let mut hands = CardHands::new(2);

        hands.deal_hands(&mut deck, 3);

        let p0: Vec<u8> = hands[PlayerId::new(0)].iter().map(Card::id).collect();
        let p1: Vec<u8> = hands[PlayerId::new(1)].iter().map(Card::id).collect();
        assert_eq!(p0, vec![0, 2, 4]);
        assert_eq!(p1, vec![1, 3, 5]);
        assert_eq!(deck.cards_remaining(), 98);
    }

    #[test]
    fn test_find_card_in_hands() {
        let mut deck = CardDeck::new();
        let mut hands = CardHands::new(2);
        hands.deal_hands(&mut deck, 2);

        assert_eq!(hands.find_card_in_hands(Card::new(3)), Some(PlayerId::new(1)));
        assert_eq!(hands.find_card_in_hands(Card::new(50)), None);
    }
}
