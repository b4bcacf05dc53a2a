//! Headless baize game.
//!
//! Owns the live deck, hands and table, and runs the turn lifecycle around
//! the AI search:
//!
//! - Shuffle and deal; lay the initial free cards on the baize
//! - Each turn: snapshot, search, then apply the play or draw a card
//! - A deal ends when a hand empties (that seat wins) or when the draw pile
//!   is exhausted and the player to move has no play
//!
//! Supports 1-4 seats; the default deal is two players with seat 1 played
//! by the AI.

mod apply;
mod game;

pub use apply::TurnChanges;
pub use game::{BaizeGame, BaizeGameBuilder, DealOutcome, TurnOutcome};
