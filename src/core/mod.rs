//! Core types shared by every layer: seats, configuration, RNG.

pub mod config;
pub mod player;
pub mod rng;

pub use config::DealConfig;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
