//! Table rearrangements that keep every meld valid.
//!
//! None of these plays a card. Each one reshapes the table so that cards
//! locked inside sets of three become free, or so that a set the hand can
//! extend appears. The simple search is then retried on the result.

use serde::{Deserialize, Serialize};

use super::free_cards::free_cards_in_group;
use super::state::AiModelState;
use crate::groups::{is_good_run_set, CardGroup, InitialCardGroups, MIN_SET_SIZE};

/// The rearrangement kinds, in the order they are tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rearrangement {
    /// A free card moved into another group it fits.
    FreeCardMove,
    /// Two runs of one suit joined end to end.
    JoinRuns,
    /// A long run cut in two.
    SplitRun,
    /// Three sets of three pivoted between rank sets and run sets.
    PivotSets,
}

impl Rearrangement {
    pub const ALL: [Rearrangement; 4] = [
        Rearrangement::FreeCardMove,
        Rearrangement::JoinRuns,
        Rearrangement::SplitRun,
        Rearrangement::PivotSets,
    ];

    /// Every rearranged layout of this kind, in a fixed order.
    #[must_use]
    pub fn generate(self, state: &AiModelState, table: &dyn InitialCardGroups) -> Vec<AiModelState> {
        match self {
            Rearrangement::FreeCardMove => move_free_cards(state, table),
            Rearrangement::JoinRuns => join_runs(state),
            Rearrangement::SplitRun => split_runs(state),
            Rearrangement::PivotSets => pivot_sets(state),
        }
    }
}

/// Move any free card into a different group it matches by rank or suit.
#[must_use]
pub fn move_free_cards(state: &AiModelState, table: &dyn InitialCardGroups) -> Vec<AiModelState> {
    let mut moved = Vec::new();
    for source in state.groups.iter() {
        for card in free_cards_in_group(source, table) {
            for target in state.groups.iter() {
                if target.id() == source.id() || target.contains(card) {
                    continue;
                }
                let Some(first) = target.first() else { continue };
                if first.rank() != card.rank() && first.suit() != card.suit() {
                    continue;
                }
                let grown = target.with_card(card);
                if grown.is_good_set() {
                    moved.push(state.derive(|s| {
                        s.remove_card_from_groups(card);
                        s.modify_set(grown);
                    }));
                }
            }
        }
    }
    moved
}

/// Join two good runs of the same suit into one.
#[must_use]
pub fn join_runs(state: &AiModelState) -> Vec<AiModelState> {
    let runs: Vec<&CardGroup> = state.groups.iter().filter(|g| g.is_good_run_set()).collect();
    let mut joined = Vec::new();
    for (i, a) in runs.iter().enumerate() {
        for b in &runs[i + 1..] {
            if a.cards()[0].suit() != b.cards()[0].suit() {
                continue;
            }
            let combined = CardGroup::new(a.id(), a.cards().iter().chain(b.cards()).copied()).rearranged();
            if combined.is_good_run_set() {
                let emptied = b.id();
                joined.push(state.derive(|s| {
                    s.modify_set(combined);
                    s.clear_set(emptied);
                }));
            }
        }
    }
    joined
}

/// Cut every good run long enough to leave a valid run on both sides.
#[must_use]
pub fn split_runs(state: &AiModelState) -> Vec<AiModelState> {
    let mut split = Vec::new();
    for run in state.groups.iter() {
        if run.len() < 2 * MIN_SET_SIZE || !run.is_good_run_set() {
            continue;
        }
        for cut in MIN_SET_SIZE..=run.len() - MIN_SET_SIZE {
            let (top, bottom) = run.cards().split_at(cut);
            let left = CardGroup::new(run.id(), top.iter().copied());
            if !left.is_good_run_set() || !is_good_run_set(bottom) {
                continue;
            }
            let bottom = bottom.to_vec();
            split.push(state.derive(|s| {
                s.modify_set(left);
                s.add_new_set(bottom);
            }));
        }
    }
    split
}

/// Pivot three same-kind sets of three.
///
/// Each set is sorted by suit, then the n-th new group takes the n-th card
/// of each set. Three rank sets of consecutive ranks become three runs, and
/// three runs over the same ranks become three rank sets. The new groups
/// keep the ids of the old ones.
#[must_use]
pub fn pivot_sets(state: &AiModelState) -> Vec<AiModelState> {
    let sets: Vec<&CardGroup> = state
        .groups
        .iter()
        .filter(|g| g.len() == MIN_SET_SIZE && g.is_good_set())
        .collect();
    let mut pivoted = Vec::new();
    for i in 0..sets.len() {
        for j in i + 1..sets.len() {
            for k in j + 1..sets.len() {
                let originals = [sets[i], sets[j], sets[k]];
                let kind = originals[0].set_type();
                if originals.iter().any(|g| g.set_type() != kind) {
                    continue;
                }
                let sorted = originals.map(CardGroup::sorted_by_suit);
                let rebuilt: Vec<CardGroup> = (0..MIN_SET_SIZE)
                    .map(|n| {
                        CardGroup::new(originals[n].id(), sorted.iter().map(|g| g.cards()[n]))
                            .rearranged()
                    })
                    .collect();
                if rebuilt.iter().all(CardGroup::is_good_set) {
                    pivoted.push(state.derive(|s| {
                        for group in rebuilt {
                            s.modify_set(group);
                        }
                    }));
                }
            }
        }
    }
    pivoted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardHand, Rank, Suit};
    use crate::groups::{CardGroups, SetType};
    use rustc_hash::FxHashSet;

    fn c(pip: u8, suit: Suit) -> Card {
        Card::from_parts(0, suit, Rank::pip(pip))
    }

    fn table(groups: &[&[Card]]) -> AiModelState {
        let mut table = CardGroups::new();
        for cards in groups {
            table.add_group(cards.iter().copied());
        }
        AiModelState::new(CardHand::new(), table)
    }

    fn shapes(state: &AiModelState) -> Vec<String> {
        state.groups.iter().map(|g| g.to_string()).collect()
    }

    #[test]
    fn test_free_card_moves_to_matching_set() {
        let before = table(&[
            &[c(9, Suit::Hearts), c(8, Suit::Hearts), c(7, Suit::Hearts), c(6, Suit::Hearts)],
            &[c(9, Suit::Clubs), c(9, Suit::Spades), c(9, Suit::Diamonds)],
        ]);

        let moved = move_free_cards(&before, &FxHashSet::default());

        assert_eq!(moved.len(), 1);
        assert_eq!(shapes(&moved[0]), vec!["[8♥ 7♥ 6♥]", "[9♣ 9♠ 9♦ 9♥]"]);
    }

    #[test]
    fn test_initial_free_card_can_move() {
        let lone = c(10, Suit::Spades);
        let initial: FxHashSet<Card> = [lone].into_iter().collect();
        let before = table(&[&[lone], &[c(9, Suit::Spades), c(8, Suit::Spades), c(7, Suit::Spades)]]);

        let moved = move_free_cards(&before, &initial);

        assert_eq!(moved.len(), 1);
        assert_eq!(shapes(&moved[0]), vec!["[]", "[10♠ 9♠ 8♠ 7♠]"]);
    }

    #[test]
    fn test_join_runs() {
        let before = table(&[
            &[c(5, Suit::Clubs), c(4, Suit::Clubs), c(3, Suit::Clubs)],
            &[c(8, Suit::Clubs), c(7, Suit::Clubs), c(6, Suit::Clubs)],
            &[c(2, Suit::Hearts), c(1, Suit::Hearts), c(13, Suit::Hearts)],
        ]);

        let joined = join_runs(&before);

        assert_eq!(joined.len(), 1);
        assert_eq!(
            shapes(&joined[0]),
            vec!["[8♣ 7♣ 6♣ 5♣ 4♣ 3♣]", "[]", "[2♥ A♥ K♥]"]
        );
    }

    #[test]
    fn test_join_rejects_gap() {
        let before = table(&[
            &[c(5, Suit::Clubs), c(4, Suit::Clubs), c(3, Suit::Clubs)],
            &[c(9, Suit::Clubs), c(8, Suit::Clubs), c(7, Suit::Clubs)],
        ]);
        assert!(join_runs(&before).is_empty());
    }

    #[test]
    fn test_split_long_run() {
        let before = table(&[&[
            c(9, Suit::Diamonds),
            c(8, Suit::Diamonds),
            c(7, Suit::Diamonds),
            c(6, Suit::Diamonds),
            c(5, Suit::Diamonds),
            c(4, Suit::Diamonds),
            c(3, Suit::Diamonds),
        ]]);

        let split = split_runs(&before);

        assert_eq!(split.len(), 2);
        assert_eq!(shapes(&split[0]), vec!["[9♦ 8♦ 7♦]", "[6♦ 5♦ 4♦ 3♦]"]);
        assert_eq!(shapes(&split[1]), vec!["[9♦ 8♦ 7♦ 6♦]", "[5♦ 4♦ 3♦]"]);
    }

    #[test]
    fn test_short_run_not_split() {
        let before = table(&[&[
            c(8, Suit::Diamonds),
            c(7, Suit::Diamonds),
            c(6, Suit::Diamonds),
            c(5, Suit::Diamonds),
            c(4, Suit::Diamonds),
        ]]);
        assert!(split_runs(&before).is_empty());
    }

    #[test]
    fn test_pivot_rank_sets_into_runs() {
        let before = table(&[
            &[c(5, Suit::Clubs), c(5, Suit::Hearts), c(5, Suit::Diamonds)],
            &[c(6, Suit::Hearts), c(6, Suit::Diamonds), c(6, Suit::Clubs)],
            &[c(7, Suit::Diamonds), c(7, Suit::Clubs), c(7, Suit::Hearts)],
        ]);

        let pivoted = pivot_sets(&before);

        assert_eq!(pivoted.len(), 1);
        assert_eq!(shapes(&pivoted[0]), vec!["[7♦ 6♦ 5♦]", "[7♣ 6♣ 5♣]", "[7♥ 6♥ 5♥]"]);
        assert!(pivoted[0]
            .groups
            .iter()
            .all(|g| g.is_good_set_of_type(SetType::RunSet)));
    }

    #[test]
    fn test_pivot_runs_into_rank_sets() {
        let before = table(&[
            &[c(4, Suit::Spades), c(3, Suit::Spades), c(2, Suit::Spades)],
            &[c(4, Suit::Clubs), c(3, Suit::Clubs), c(2, Suit::Clubs)],
            &[c(4, Suit::Hearts), c(3, Suit::Hearts), c(2, Suit::Hearts)],
        ]);

        let pivoted = pivot_sets(&before);

        assert_eq!(pivoted.len(), 1);
        assert!(pivoted[0]
            .groups
            .iter()
            .all(|g| g.is_good_set_of_type(SetType::RankSet)));
    }

    #[test]
    fn test_pivot_needs_matching_kinds() {
        let before = table(&[
            &[c(5, Suit::Clubs), c(5, Suit::Hearts), c(5, Suit::Diamonds)],
            &[c(6, Suit::Hearts), c(6, Suit::Diamonds), c(6, Suit::Clubs)],
            &[c(9, Suit::Clubs), c(8, Suit::Clubs), c(7, Suit::Clubs)],
        ]);
        assert!(pivot_sets(&before).is_empty());
    }
}
