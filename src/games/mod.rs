//! Playable games built on the engine.
//!
//! - `baize`: the two-pack meld game, headless, with AI seats

pub mod baize;
