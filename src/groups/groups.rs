//! The full table grouping.
//!
//! `CardGroups` stores the groups in an `im::Vector`, so cloning the table
//! for a speculative search shares structure instead of copying every group.
//! It also owns the group-id allocator: a clone carries the allocator with
//! it, so ids handed out inside a snapshot never collide with live ids.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::group::{CardGroup, GroupId};
use crate::cards::Card;

/// Tells the search which groups are lone initial free cards.
///
/// The deck owner keeps this register; the AI only needs the predicate.
pub trait InitialCardGroups {
    /// True if `group` is an initial free-card group: one card, dealt onto
    /// the baize at the start of the deal and never claimed into a meld.
    fn is_initial_card_group(&self, group: &CardGroup) -> bool;
}

impl InitialCardGroups for FxHashSet<Card> {
    fn is_initial_card_group(&self, group: &CardGroup) -> bool {
        group.len() == 1 && self.contains(&group.cards()[0])
    }
}

/// Every group on the baize, in layout order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardGroups {
    groups: Vector<CardGroup>,
    next_id: u32,
}

impl CardGroups {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardGroup> {
        self.groups.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CardGroup> {
        self.groups.iter_mut()
    }

    /// Group at a layout position.
    #[must_use]
    pub fn at(&self, index: usize) -> &CardGroup {
        &self.groups[index]
    }

    /// Remove every group. Ids already handed out stay retired.
    pub fn clear_groups(&mut self) {
        self.groups.clear();
    }

    /// Reserve a fresh group id.
    pub fn allocate_id(&mut self) -> GroupId {
        let id = GroupId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Create a new group from `cards` and return its id.
    pub fn add_group(&mut self, cards: impl IntoIterator<Item = Card>) -> GroupId {
        let id = self.allocate_id();
        self.groups.push_back(CardGroup::new(id, cards));
        id
    }

    /// Append an existing group, keeping its id.
    ///
    /// Panics if a group with the same id is already present.
    pub fn push(&mut self, group: CardGroup) {
        assert!(
            self.position_of(group.id()).is_none(),
            "{} is already on the baize",
            group.id()
        );
        self.next_id = self.next_id.max(group.id().0 + 1);
        self.groups.push_back(group);
    }

    /// Layout position of the group with `id`.
    #[must_use]
    pub fn position_of(&self, id: GroupId) -> Option<usize> {
        self.groups.iter().position(|group| group.id() == id)
    }

    #[must_use]
    pub fn get(&self, id: GroupId) -> Option<&CardGroup> {
        self.groups.iter().find(|group| group.id() == id)
    }

    pub fn get_mut(&mut self, id: GroupId) -> Option<&mut CardGroup> {
        self.groups.iter_mut().find(|group| group.id() == id)
    }

    /// Replace the group that has the same id as `group`.
    ///
    /// Panics if there is no such group.
    pub fn replace(&mut self, group: CardGroup) {
        let index = self
            .position_of(group.id())
            .unwrap_or_else(|| panic!("{} is not on the baize", group.id()));
        self.groups.set(index, group);
    }

    /// Group currently holding `card`.
    #[must_use]
    pub fn find_card_in_groups(&self, card: Card) -> Option<GroupId> {
        self.groups
            .iter()
            .find(|group| group.contains(card))
            .map(CardGroup::id)
    }

    /// Take `card` out of whichever group holds it.
    pub fn remove_card_from_groups(&mut self, card: Card) -> Option<GroupId> {
        let group = self.groups.iter_mut().find(|group| group.contains(card))?;
        group.remove_card(card);
        Some(group.id())
    }

    /// Drop groups that have been emptied.
    pub fn remove_empty_groups(&mut self) {
        self.groups.retain(|group| !group.is_empty());
    }

    /// Every card on the baize, group by group.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        self.groups
            .iter()
            .flat_map(|group| group.cards().iter().copied())
            .collect()
    }
}

impl FromIterator<CardGroup> for CardGroups {
    fn from_iter<I: IntoIterator<Item = CardGroup>>(iter: I) -> Self {
        let mut groups = Self::new();
        for group in iter {
            groups.push(group);
        }
        groups
    }
}

impl std::fmt::Display for CardGroups {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", group)?;
        }
        Ok(())
    }
}
