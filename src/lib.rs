//! # rust-baize
//!
//! A two-pack meld-building card game with a rule-driven AI.
//!
//! ## Design Principles
//!
//! 1. **Cards Are Ids**: A card is a `Copy` id into one 104-card arena.
//!    Hands, groups and snapshots hold ids, never owned card objects.
//!
//! 2. **Search On Copies**: The AI clones the hand and table into an
//!    `AiModelState` and only ever edits clones. The live game changes
//!    only when a chosen play is applied.
//!
//! 3. **Fail Fast On Contract Bugs**: A lost or duplicated card, a bad
//!    group left on the table, or a missing free card panics. "No play"
//!    is an ordinary `None`.
//!
//! ## Architecture
//!
//! - **Priority Search**: Four play levels tried strictly in order, ties
//!   broken by a seeded RNG.
//!
//! - **One-Step Rearrangement**: If nothing plays, validity-preserving
//!   table rearrangements are tried and the simple search rerun once.
//!
//! - **Persistent Data Structures**: The table grouping is an `im::Vector`,
//!   so snapshot clones share structure.
//!
//! ## Modules
//!
//! - `core`: Players, deal configuration, RNG
//! - `cards`: Card ids, the deck, hands
//! - `groups`: Groups, canonical ordering, set validity
//! - `ai`: The turn-play search engine
//! - `games`: The headless baize game

pub mod core;
pub mod cards;
pub mod groups;
pub mod ai;
pub mod games;

// Re-export commonly used types
pub use crate::core::{DealConfig, GameRng, GameRngState, PlayerId, PlayerMap};

pub use crate::cards::{Card, CardDeck, CardHand, CardHands, Rank, Suit};

pub use crate::groups::{
    rank_difference, rearranged_for_sets, CardGroup, CardGroups, GroupId, InitialCardGroups,
    SetType,
};

pub use crate::ai::{
    AiConfig, AiModel, AiModelState, PlayLevel, Rearrangement, SearchStats, TurnPlay,
};

pub use crate::games::baize::{BaizeGame, BaizeGameBuilder, DealOutcome, TurnChanges, TurnOutcome};
