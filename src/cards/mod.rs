//! Cards, the two-pack deck and player hands.
//!
//! ## Key Types
//!
//! - `Card`: `Copy` id into the 104-card arena; pack, suit and rank are derived
//! - `CardDeck`: deal order, draw pile cursor, initial free card register
//! - `CardHand` / `CardHands`: what each seat holds

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Rank, Suit, DECK_SIZE, PACK_COUNT, PACK_SIZE, RANK_COUNT, SUIT_COUNT};
pub use deck::CardDeck;
pub use hand::{CardHand, CardHands};
