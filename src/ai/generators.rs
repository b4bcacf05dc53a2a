//! Candidate generators, one per play level.
//!
//! Each generator looks at a snapshot and returns every candidate snapshot
//! it can build at its level. Candidates are produced with
//! [`AiModelState::derive`], so conservation is checked for each one.
//!
//! ## Levels
//!
//! 1. A complete set made only of hand cards.
//! 2. Two hand cards completed by one free table card.
//! 3. One hand card added to an existing table set.
//! 4. One hand card plus two free table cards forming a new set.
//!
//! The hand-card extraction is greedy: starting from the first remaining
//! card, one rank grouping and one run grouping are taken, consuming the
//! cards they use. Other groupings that a different starting card would
//! reveal are not enumerated.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::free_cards::{find_all_free_cards, free_cards_in_group};
use super::state::AiModelState;
use crate::cards::{Card, Suit};
use crate::groups::{
    rank_difference, rearranged_for_sets, set_type_of, CardGroup, GroupCards, InitialCardGroups,
    MIN_SET_SIZE,
};

// =============================================================================
// Greedy extraction from a hand
// =============================================================================

/// Take the first card plus every later card of the same rank with a suit
/// not yet used.
fn take_first_card_rank_set(hand: &mut Vec<Card>) -> Vec<Card> {
    if hand.is_empty() {
        return Vec::new();
    }
    let first = hand.remove(0);
    let mut suits: FxHashSet<Suit> = FxHashSet::default();
    suits.insert(first.suit());
    let mut set = vec![first];
    hand.retain(|&card| {
        if card.rank() == first.rank() && suits.insert(card.suit()) {
            set.push(card);
            false
        } else {
            true
        }
    });
    set
}

/// Take the first card plus the longest run that grows from it, extending
/// at the top or the bottom. The scan restarts after every card taken.
fn take_first_card_run_set(hand: &mut Vec<Card>) -> Vec<Card> {
    if hand.is_empty() {
        return Vec::new();
    }
    let mut run = VecDeque::from([hand.remove(0)]);
    let mut i = 0;
    while i < hand.len() {
        let card = hand[i];
        let (head, tail) = (run[0], run[run.len() - 1]);
        if card.suit() == head.suit() && rank_difference(card.rank(), head.rank()) == 1 {
            run.push_front(hand.remove(i));
            i = 0;
        } else if card.suit() == tail.suit() && rank_difference(card.rank(), tail.rank()) == -1 {
            run.push_back(hand.remove(i));
            i = 0;
        } else {
            i += 1;
        }
    }
    run.into()
}

/// Repeatedly apply `take` to a copy of the hand, keeping the groupings
/// `keep` accepts.
fn greedy_groupings(
    hand: &[Card],
    take: fn(&mut Vec<Card>) -> Vec<Card>,
    keep: impl Fn(&[Card]) -> bool,
) -> Vec<Vec<Card>> {
    let mut rest = hand.to_vec();
    let mut found = Vec::new();
    while !rest.is_empty() {
        let grouping = take(&mut rest);
        if keep(&grouping) {
            found.push(grouping);
        }
    }
    found
}

/// Every same-suit pair of hand cards one or two ranks apart, higher rank
/// first.
fn all_two_card_partial_runs(hand: &[Card]) -> Vec<[Card; 2]> {
    let mut partials = Vec::new();
    for (i, &first) in hand.iter().enumerate() {
        for &second in &hand[i + 1..] {
            if first.suit() != second.suit() {
                continue;
            }
            let diff = rank_difference(first.rank(), second.rank());
            if diff == 0 || diff.abs() > 2 {
                continue;
            }
            partials.push(if diff > 0 { [first, second] } else { [second, first] });
        }
    }
    partials
}

/// Canonical order of `cards` if they form a good set.
fn as_good_set(cards: &[Card]) -> Option<GroupCards> {
    let arranged = rearranged_for_sets(cards);
    set_type_of(&arranged).map(|_| arranged)
}

fn shares_rank_or_suit(a: Card, b: Card) -> bool {
    a.rank() == b.rank() || a.suit() == b.suit()
}

// =============================================================================
// Level 1
// =============================================================================

/// Complete sets found entirely inside the hand.
#[must_use]
pub fn complete_sets_in_hand(state: &AiModelState) -> Vec<AiModelState> {
    let hand = state.hand.cards();
    let is_complete = |set: &[Card]| set.len() >= MIN_SET_SIZE;

    let mut sets = greedy_groupings(hand, take_first_card_rank_set, is_complete);
    sets.extend(greedy_groupings(hand, take_first_card_run_set, is_complete));

    sets.into_iter()
        .map(|set| {
            debug_assert!(set_type_of(&set).is_some(), "greedy grouping is not a set");
            state.derive(|s| {
                s.remove_cards_from_hand(&set);
                s.add_new_set(set.iter().copied());
            })
        })
        .collect()
}

// =============================================================================
// Level 2
// =============================================================================

/// Two hand cards completed by one free table card.
#[must_use]
pub fn complete_sets_from_two_cards_in_hand(
    state: &AiModelState,
    table: &dyn InitialCardGroups,
) -> Vec<AiModelState> {
    let free_cards = find_all_free_cards(&state.groups, table);
    if free_cards.is_empty() {
        return Vec::new();
    }
    let hand = state.hand.cards();

    let rank_partials: Vec<[Card; 2]> =
        greedy_groupings(hand, take_first_card_rank_set, |set| set.len() == 2)
            .into_iter()
            .map(|set| [set[0], set[1]])
            .collect();
    let run_partials = all_two_card_partial_runs(hand);

    let mut candidates = Vec::new();
    for partial in &rank_partials {
        for &free in free_cards.iter().filter(|f| f.rank() == partial[0].rank()) {
            candidates.extend(complete_partial(state, *partial, free));
        }
    }
    for partial in &run_partials {
        for &free in free_cards.iter().filter(|f| f.suit() == partial[0].suit()) {
            candidates.extend(complete_partial(state, *partial, free));
        }
    }
    candidates
}

fn complete_partial(state: &AiModelState, partial: [Card; 2], free: Card) -> Option<AiModelState> {
    let set = as_good_set(&[partial[0], partial[1], free])?;
    Some(state.derive(|s| {
        s.remove_cards_from_hand(&partial);
        s.remove_card_from_groups(free);
        s.add_new_set(set);
    }))
}

// =============================================================================
// Level 3
// =============================================================================

/// One hand card appended to an existing table set.
#[must_use]
pub fn add_to_sets_from_one_card_in_hand(state: &AiModelState) -> Vec<AiModelState> {
    let mut candidates = Vec::new();
    for card in state.hand.iter() {
        for group in state.groups.iter().filter(|g| g.len() >= 2) {
            let Some(first) = group.first() else { continue };
            if !shares_rank_or_suit(first, card) {
                continue;
            }
            let extended = group.with_card(card);
            if extended.is_good_set() {
                candidates.push(state.derive(|s| {
                    s.remove_card_from_hand(card);
                    s.modify_set(extended);
                }));
            }
        }
    }
    candidates
}

// =============================================================================
// Level 4
// =============================================================================

/// One hand card plus two free table cards forming a new set.
///
/// A run of five or more in the hand card's suit can give up two cards from
/// either end and still stand, so both end pairs are tried. Otherwise one
/// matching free card is taken from each of two distinct groups.
#[must_use]
pub fn make_new_sets_from_one_card_in_hand(
    state: &AiModelState,
    table: &dyn InitialCardGroups,
) -> Vec<AiModelState> {
    let groups: Vec<&CardGroup> = state.groups.iter().filter(|g| !g.is_empty()).collect();
    let free_by_group: Vec<Vec<Card>> = groups
        .iter()
        .map(|group| free_cards_in_group(group, table))
        .collect();

    let mut candidates = Vec::new();
    for card in state.hand.iter() {
        for group in &groups {
            if group.len() < MIN_SET_SIZE + 2
                || group.first().map(Card::suit) != Some(card.suit())
                || !group.is_good_run_set()
            {
                continue;
            }
            let cards = group.cards();
            let n = cards.len();
            for pair in [[cards[0], cards[1]], [cards[n - 2], cards[n - 1]]] {
                candidates.extend(new_set_with_two_table_cards(state, card, pair));
            }
        }

        for (i, free_i) in free_by_group.iter().enumerate() {
            for free_j in &free_by_group[i + 1..] {
                for &a in free_i.iter().filter(|&&f| shares_rank_or_suit(f, card)) {
                    for &b in free_j.iter().filter(|&&f| shares_rank_or_suit(f, card)) {
                        candidates.extend(new_set_with_two_table_cards(state, card, [a, b]));
                    }
                }
            }
        }
    }
    candidates
}

fn new_set_with_two_table_cards(
    state: &AiModelState,
    card: Card,
    table_cards: [Card; 2],
) -> Option<AiModelState> {
    let set = as_good_set(&[card, table_cards[0], table_cards[1]])?;
    Some(state.derive(|s| {
        s.remove_card_from_hand(card);
        s.remove_cards_from_groups(&table_cards);
        s.add_new_set(set);
    }))
}
