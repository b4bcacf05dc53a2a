//! AI turn-play search.
//!
//! Given the acting player's hand, the table grouping, and a predicate for
//! initial free-card groups, the engine decides whether a legal play exists
//! and returns the complete target hand and table.
//!
//! ## Search
//!
//! 1. Simple search: levels 1 to 4 in priority order; the first level with
//!    any candidate wins, with ties broken uniformly at random.
//! 2. Rearrangement search: if the simple search fails, each
//!    validity-preserving table rearrangement is tried in turn and the
//!    simple search rerun on it (without level 1). One level deep only.
//!
//! "No play" is an ordinary result; the caller draws a card.
//!
//! ## Example
//!
//! ```
//! use rust_baize::ai::{AiConfig, AiModel, PlayLevel};
//! use rust_baize::cards::{Card, CardHand, Rank, Suit};
//! use rust_baize::groups::CardGroups;
//! use rustc_hash::FxHashSet;
//!
//! let four = |suit| Card::from_parts(0, suit, Rank::pip(4));
//! let hand: CardHand = [four(Suit::Clubs), four(Suit::Diamonds), four(Suit::Hearts)]
//!     .into_iter()
//!     .collect();
//!
//! let mut ai = AiModel::new(AiConfig::default());
//! let play = ai
//!     .find_one_turn_play(&hand, &CardGroups::new(), &FxHashSet::default())
//!     .unwrap();
//!
//! assert_eq!(play.level, PlayLevel::CompleteSetInHand);
//! assert!(play.state.hand.is_empty());
//! ```

pub mod config;
pub mod free_cards;
pub mod generators;
pub mod rearrange;
pub mod search;
pub mod state;
pub mod stats;

pub use config::AiConfig;
pub use free_cards::{find_all_free_cards, free_cards_in_group};
pub use rearrange::Rearrangement;
pub use search::{AiModel, PlayLevel, TurnPlay};
pub use state::AiModelState;
pub use stats::SearchStats;
