//! Which table cards may be borrowed without breaking their meld.

use crate::cards::Card;
use crate::groups::{CardGroup, CardGroups, InitialCardGroups, SetType, MIN_SET_SIZE};

/// Free cards of one group.
///
/// The lone card of an initial free-card group is free. In a good set longer
/// than the minimum, every card of a rank set is free, but only the two ends
/// of a run set. Nothing else is free.
///
/// Panics if `group` is neither an initial free-card group, empty, nor a
/// good set.
#[must_use]
pub fn free_cards_in_group(group: &CardGroup, table: &dyn InitialCardGroups) -> Vec<Card> {
    if group.is_empty() {
        return Vec::new();
    }
    if table.is_initial_card_group(group) {
        return group.cards().to_vec();
    }
    let set_type = group
        .set_type()
        .unwrap_or_else(|| panic!("{} on the baize is not a good set", group));
    if group.len() <= MIN_SET_SIZE {
        return Vec::new();
    }
    match set_type {
        SetType::RankSet => group.cards().to_vec(),
        SetType::RunSet => group.first().into_iter().chain(group.last()).collect(),
    }
}

/// Free cards across the whole table, group by group.
#[must_use]
pub fn find_all_free_cards(groups: &CardGroups, table: &dyn InitialCardGroups) -> Vec<Card> {
    groups
        .iter()
        .flat_map(|group| free_cards_in_group(group, table))
        .collect()
}
