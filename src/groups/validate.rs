//! Set rules: rank distance, canonical ordering and validity.
//!
//! Everything here is a pure function over a card slice, so candidate
//! groups can be checked without building a `CardGroup` first.
//!
//! ## Ordering
//!
//! A run set is stored in descending visual order: scanning left to right,
//! each card is one rank *below* the previous one (`rank_difference == -1`).
//! Ranks wrap, so `2♣ A♣ K♣` is a run just like `K♣ Q♣ J♣`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Rank, RANK_COUNT, SUIT_COUNT};

/// Inline storage for the cards of one group.
pub type GroupCards = SmallVec<[Card; 8]>;

/// Smallest meld.
pub const MIN_SET_SIZE: usize = 3;

/// Which kind of meld a good group forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetType {
    /// Same rank, pairwise distinct suits.
    RankSet,
    /// Same suit, consecutive ranks.
    RunSet,
}

/// Signed distance from rank `b` to rank `a` around the 13-rank cycle.
///
/// Of the two candidate distances (`a - b` and the same going the other way
/// round) the one with the smaller magnitude wins. 13 is odd, so there is
/// never a tie.
///
/// ```
/// use rust_baize::cards::Rank;
/// use rust_baize::groups::rank_difference;
///
/// assert_eq!(rank_difference(Rank::ACE, Rank::pip(2)), -1);
/// assert_eq!(rank_difference(Rank::ACE, Rank::KING), 1);
/// assert_eq!(rank_difference(Rank::pip(9), Rank::pip(7)), 2);
/// ```
#[must_use]
pub fn rank_difference(a: Rank, b: Rank) -> i8 {
    let direct = a.index() as i8 - b.index() as i8;
    let around = if direct > 0 {
        direct - RANK_COUNT as i8
    } else {
        direct + RANK_COUNT as i8
    };
    if direct.abs() < around.abs() {
        direct
    } else {
        around
    }
}

/// Whether `next` may sit directly to the right of `prev` in a run set.
#[must_use]
pub fn follows_in_run(prev: Card, next: Card) -> bool {
    prev.suit() == next.suit() && rank_difference(next.rank(), prev.rank()) == -1
}

/// Canonical order of `cards`, so validity is a single left-to-right scan.
///
/// The first two cards decide what the group is trying to be:
///
/// - two cards of one suit in ascending order are swapped;
/// - if the first two share a rank, every further card of that rank is moved
///   up behind them (other cards keep their relative order);
/// - if the first two share a suit, the leading run is grown from the
///   remaining cards, one card at a time, at whichever end it fits: one rank
///   below the tail, or one rank above the head.
///
/// Cards that fit nowhere are left at the end in their original order.
///
/// ```
/// use rust_baize::cards::{Card, Rank, Suit};
/// use rust_baize::groups::rearranged_for_sets;
///
/// let c = |pip| Card::from_parts(0, Suit::Clubs, Rank::pip(pip));
/// let sorted = rearranged_for_sets(&[c(5), c(6), c(7)]);
/// assert_eq!(sorted.as_slice(), &[c(7), c(6), c(5)]);
/// ```
#[must_use]
pub fn rearranged_for_sets(cards: &[Card]) -> GroupCards {
    let mut out: GroupCards = cards.iter().copied().collect();
    if out.len() < 2 {
        return out;
    }
    let (first, second) = (out[0], out[1]);

    if out.len() == 2 {
        if follows_in_run(second, first) {
            out.swap(0, 1);
        }
        return out;
    }

    if first.rank() == second.rank() {
        let (same, other): (GroupCards, GroupCards) =
            out[2..].iter().copied().partition(|card| card.rank() == first.rank());
        out.truncate(2);
        out.extend(same);
        out.extend(other);
    } else if first.suit() == second.suit() {
        let prefix = 1 + out
            .windows(2)
            .take_while(|pair| follows_in_run(pair[0], pair[1]))
            .count();
        let mut run: VecDeque<Card> = out[..prefix].iter().copied().collect();
        let mut rest: Vec<Card> = out[prefix..].to_vec();

        loop {
            let (head, tail) = (run[0], run[run.len() - 1]);
            let next = rest.iter().enumerate().find_map(|(i, &card)| {
                if follows_in_run(tail, card) {
                    Some((i, true))
                } else if follows_in_run(card, head) {
                    Some((i, false))
                } else {
                    None
                }
            });
            match next {
                Some((i, true)) => run.push_back(rest.remove(i)),
                Some((i, false)) => run.push_front(rest.remove(i)),
                None => break,
            }
        }

        out = run.into_iter().chain(rest).collect();
    }
    out
}

/// At least three cards of one rank, no suit repeated.
#[must_use]
pub fn is_good_rank_set(cards: &[Card]) -> bool {
    if cards.len() < MIN_SET_SIZE || cards.len() > SUIT_COUNT as usize {
        return false;
    }
    let rank = cards[0].rank();
    let mut suits = 0u8;
    for card in cards {
        let bit = 1 << card.suit().index();
        if card.rank() != rank || suits & bit != 0 {
            return false;
        }
        suits |= bit;
    }
    true
}

/// At least three cards of one suit, each one rank below its left neighbour.
///
/// Assumes canonical order (see [`rearranged_for_sets`]).
#[must_use]
pub fn is_good_run_set(cards: &[Card]) -> bool {
    cards.len() >= MIN_SET_SIZE && cards.windows(2).all(|pair| follows_in_run(pair[0], pair[1]))
}

/// Classify a canonically ordered card sequence.
#[must_use]
pub fn set_type_of(cards: &[Card]) -> Option<SetType> {
    if is_good_rank_set(cards) {
        Some(SetType::RankSet)
    } else if is_good_run_set(cards) {
        Some(SetType::RunSet)
    } else {
        None
    }
}
