//! Groups of cards on the baize and the rules that make them sets.
//!
//! ## Key Types
//!
//! - `CardGroup`: ordered cards with a stable `GroupId`
//! - `CardGroups`: the table grouping and its id allocator
//! - `SetType`: rank set or run set, returned by the single validity check
//! - `InitialCardGroups`: predicate for lone initial free cards
//!
//! Canonical ordering and validity live in `validate` as pure functions.

pub mod group;
pub mod groups;
pub mod validate;

pub use group::{CardGroup, GroupId};
pub use groups::{CardGroups, InitialCardGroups};
pub use validate::{
    follows_in_run, is_good_rank_set, is_good_run_set, rank_difference, rearranged_for_sets,
    set_type_of, GroupCards, SetType, MIN_SET_SIZE,
};
