//! Card identity: pack, suit and rank packed into a single small id.
//!
//! Two standard 52-card packs give 104 cards. A card's properties are
//! derived from its id and never stored:
//!
//! - `pack = id / 52`
//! - `suit = id % 52 % 4`
//! - `rank = id % 52 / 4` (0 = Ace, 12 = King)
//!
//! ```
//! use rust_baize::cards::{Card, Rank, Suit};
//!
//! let card = Card::from_parts(1, Suit::Hearts, Rank::new(9));
//! assert_eq!(card.pack(), 1);
//! assert_eq!(card.suit(), Suit::Hearts);
//! assert_eq!(card.rank(), Rank::new(9));
//! assert_eq!(card.to_string(), "10♥");
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Number of suits in a pack.
pub const SUIT_COUNT: u8 = 4;
/// Number of ranks in a suit.
pub const RANK_COUNT: u8 = 13;
/// Cards in one pack.
pub const PACK_SIZE: u8 = SUIT_COUNT * RANK_COUNT;
/// Packs shuffled together.
pub const PACK_COUNT: u8 = 2;
/// Cards in the full deck.
pub const DECK_SIZE: u8 = PACK_SIZE * PACK_COUNT;

/// Card suit, numbered as encoded in the card id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs = 0,
    Diamonds = 1,
    Hearts = 2,
    Spades = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit for an encoded index in `0..4`.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        Self::ALL[index as usize]
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// Position of the suit when a hand is sorted for display:
    /// Diamonds, Clubs, Hearts, Spades.
    #[must_use]
    const fn display_order(self) -> u8 {
        match self {
            Suit::Diamonds => 0,
            Suit::Clubs => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        }
    }
}

/// Card rank, `0` (Ace) to `12` (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(0);
    pub const JACK: Rank = Rank(10);
    pub const QUEEN: Rank = Rank(11);
    pub const KING: Rank = Rank(12);

    #[must_use]
    pub fn new(rank: u8) -> Self {
        assert!(rank < RANK_COUNT, "Rank {} out of range", rank);
        Self(rank)
    }

    /// Pip value as printed on the card, 1 for Ace to 13 for King.
    #[must_use]
    pub fn pip(pip: u8) -> Self {
        assert!((1..=RANK_COUNT).contains(&pip), "Pip {} out of range", pip);
        Self(pip - 1)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    fn label(self) -> &'static str {
        const LABELS: [&str; 13] = [
            "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
        ];
        LABELS[self.0 as usize]
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A card, identified by its position in the two-pack arena.
///
/// Cards are `Copy`; hands, groups and snapshots hold them by value, which
/// is the same as holding a reference to the one canonical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Card with the given arena id.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!(id < DECK_SIZE, "Card id {} out of range", id);
        Self(id)
    }

    /// Card from its pack, suit and rank.
    #[must_use]
    pub fn from_parts(pack: u8, suit: Suit, rank: Rank) -> Self {
        assert!(pack < PACK_COUNT, "Pack {} out of range", pack);
        Self(pack * PACK_SIZE + rank.index() * SUIT_COUNT + suit.index())
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn pack(self) -> u8 {
        self.0 / PACK_SIZE
    }

    #[must_use]
    pub fn suit(self) -> Suit {
        Suit::from_index(self.0 % PACK_SIZE % SUIT_COUNT)
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank(self.0 % PACK_SIZE / SUIT_COUNT)
    }

    /// Ordering used to sort a hand for display: by suit (Diamonds, Clubs,
    /// Hearts, Spades), then by rank descending.
    #[must_use]
    pub fn cmp_by_suit(&self, other: &Card) -> Ordering {
        let key = |card: &Card| {
            (
                card.suit().display_order(),
                RANK_COUNT - 1 - card.rank().index(),
            )
        };
        key(self).cmp(&key(other))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit().symbol())
    }
}
