//! End-to-end turn search scenarios.
//!
//! Each test builds a hand and a table by hand and checks which play level
//! the engine picks and what the resulting table looks like.

use rust_baize::ai::{find_all_free_cards, AiConfig, AiModel, AiModelState, PlayLevel, Rearrangement};
use rust_baize::cards::{Card, CardHand, Rank, Suit};
use rust_baize::games::baize::BaizeGameBuilder;
use rust_baize::groups::{CardGroup, CardGroups, SetType};
use rustc_hash::FxHashSet;

fn c(pip: u8, suit: Suit) -> Card {
    Card::from_parts(0, suit, Rank::pip(pip))
}

fn hand(cards: &[Card]) -> CardHand {
    cards.iter().copied().collect()
}

fn table(groups: &[&[Card]]) -> CardGroups {
    let mut table = CardGroups::new();
    for cards in groups {
        table.add_group(cards.iter().copied());
    }
    table
}

fn added_groups(before: &CardGroups, after: &AiModelState) -> Vec<CardGroup> {
    after
        .groups
        .iter()
        .filter(|g| before.get(g.id()).is_none())
        .cloned()
        .collect()
}

fn ai() -> AiModel {
    AiModel::new(AiConfig::default())
}

// =============================================================================
// Scenarios
// =============================================================================

/// Three fours in hand and an empty table: a level 1 rank set.
#[test]
fn test_scenario_complete_set_in_hand() {
    let hand = hand(&[c(4, Suit::Clubs), c(4, Suit::Diamonds), c(4, Suit::Hearts)]);
    let before = CardGroups::new();

    let play = ai()
        .find_one_turn_play(&hand, &before, &FxHashSet::default())
        .expect("three of a kind plays");

    assert_eq!(play.level, PlayLevel::CompleteSetInHand);
    assert_eq!(play.rearrangement, None);
    assert!(play.state.hand.is_empty());
    let added = added_groups(&before, &play.state);
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].set_type(), Some(SetType::RankSet));
    let mut cards = added[0].cards().to_vec();
    cards.sort();
    let mut expected = vec![c(4, Suit::Clubs), c(4, Suit::Diamonds), c(4, Suit::Hearts)];
    expected.sort();
    assert_eq!(cards, expected);
}

/// 7♠ 8♠ in hand, 9♠ lone on the table: level 2 completes the run and the
/// 9♠ stops being free.
#[test]
fn test_scenario_two_cards_plus_initial_free_card() {
    let lone = c(9, Suit::Spades);
    let hand = hand(&[c(7, Suit::Spades), c(8, Suit::Spades)]);
    let before = table(&[&[lone]]);
    let initial: FxHashSet<Card> = [lone].into_iter().collect();

    let play = ai()
        .find_one_turn_play(&hand, &before, &initial)
        .expect("run completes with the free nine");

    assert_eq!(play.level, PlayLevel::CompleteSetFromTwoCards);
    let added = added_groups(&before, &play.state);
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].to_string(), "[9♠ 8♠ 7♠]");
    assert!(play.state.groups.iter().any(|g| g.is_empty()));

    // the lone nine sits in a group of three now, so nothing is free
    assert!(find_all_free_cards(&play.state.groups, &initial)
        .iter()
        .all(|&card| card != lone));
}

/// Q♦ in hand and J♦..7♦ on the table: level 3 extends the run to six.
#[test]
fn test_scenario_add_to_run() {
    let hand = hand(&[c(12, Suit::Diamonds)]);
    let before = table(&[&[
        c(11, Suit::Diamonds),
        c(10, Suit::Diamonds),
        c(9, Suit::Diamonds),
        c(8, Suit::Diamonds),
        c(7, Suit::Diamonds),
    ]]);

    let play = ai()
        .find_one_turn_play(&hand, &before, &FxHashSet::default())
        .expect("queen extends the run");

    assert_eq!(play.level, PlayLevel::AddToSet);
    assert!(play.state.hand.is_empty());
    let run = play.state.groups.at(0);
    assert_eq!(run.len(), 6);
    assert_eq!(run.set_type(), Some(SetType::RunSet));
    assert_eq!(run.to_string(), "[Q♦ J♦ 10♦ 9♦ 8♦ 7♦]");
}

/// 8♦ 8♥ in hand with two club runs of three: nothing plays until the runs
/// are joined, which frees 8♣ for a level 2 rank set.
#[test]
fn test_scenario_join_unlocks_play() {
    let hand = hand(&[c(8, Suit::Diamonds), c(8, Suit::Hearts)]);
    let before = table(&[
        &[c(5, Suit::Clubs), c(4, Suit::Clubs), c(3, Suit::Clubs)],
        &[c(8, Suit::Clubs), c(7, Suit::Clubs), c(6, Suit::Clubs)],
    ]);
    let mut ai = ai();

    let state = AiModelState::new(hand.clone(), before.clone());
    assert!(ai
        .find_one_simple_turn_play(&state, &FxHashSet::default(), 0)
        .is_none());

    let play = ai
        .find_one_turn_play(&hand, &before, &FxHashSet::default())
        .expect("join frees the eight of clubs");

    assert_eq!(play.rearrangement, Some(Rearrangement::JoinRuns));
    assert_eq!(play.level, PlayLevel::CompleteSetFromTwoCards);
    assert!(play.state.hand.is_empty());
    let shapes: Vec<String> = play.state.groups.iter().map(|g| g.to_string()).collect();
    assert_eq!(shapes, vec!["[7♣ 6♣ 5♣ 4♣ 3♣]", "[]", "[8♦ 8♥ 8♣]"]);
}

/// Three rank sets of three pivot into runs, making room for a level 3 play.
#[test]
fn test_scenario_pivot_unlocks_play() {
    let hand = hand(&[c(8, Suit::Hearts)]);
    let before = table(&[
        &[c(5, Suit::Clubs), c(5, Suit::Hearts), c(5, Suit::Diamonds)],
        &[c(6, Suit::Hearts), c(6, Suit::Diamonds), c(6, Suit::Clubs)],
        &[c(7, Suit::Diamonds), c(7, Suit::Clubs), c(7, Suit::Hearts)],
    ]);

    let play = ai()
        .find_one_turn_play(&hand, &before, &FxHashSet::default())
        .expect("pivot makes a heart run");

    assert_eq!(play.rearrangement, Some(Rearrangement::PivotSets));
    assert_eq!(play.level, PlayLevel::AddToSet);
    assert!(play
        .state
        .groups
        .iter()
        .any(|g| g.to_string() == "[8♥ 7♥ 6♥ 5♥]"));
}

/// 4♥ in hand: the spare 5♥ of a four-card rank set moves onto the heart run,
/// and then the four extends it.
#[test]
fn test_scenario_free_card_move_unlocks_play() {
    let hand = hand(&[c(4, Suit::Hearts)]);
    let before = table(&[
        &[c(5, Suit::Clubs), c(5, Suit::Diamonds), c(5, Suit::Hearts), c(5, Suit::Spades)],
        &[c(8, Suit::Hearts), c(7, Suit::Hearts), c(6, Suit::Hearts)],
    ]);
    let mut ai = ai();

    let state = AiModelState::new(hand.clone(), before.clone());
    assert!(ai
        .find_one_simple_turn_play(&state, &FxHashSet::default(), 0)
        .is_none());

    let play = ai
        .find_one_turn_play(&hand, &before, &FxHashSet::default())
        .expect("moving 5♥ makes room for 4♥");

    assert_eq!(play.rearrangement, Some(Rearrangement::FreeCardMove));
    assert_eq!(play.level, PlayLevel::AddToSet);
    assert!(play.state.hand.is_empty());
    let shapes: Vec<String> = play.state.groups.iter().map(|g| g.to_string()).collect();
    assert_eq!(shapes, vec!["[5♣ 5♦ 5♠]", "[8♥ 7♥ 6♥ 5♥ 4♥]"]);
}

/// 7♦ 7♥ in hand and a club run of seven: 7♣ is locked in the middle until
/// the run is cut, then it completes a level 2 rank set.
#[test]
fn test_scenario_split_unlocks_play() {
    let hand = hand(&[c(7, Suit::Diamonds), c(7, Suit::Hearts)]);
    let run: Vec<Card> = (4..=10).rev().map(|p| c(p, Suit::Clubs)).collect();
    let before = table(&[run.as_slice()]);
    let mut ai = ai();

    let state = AiModelState::new(hand.clone(), before.clone());
    assert!(ai
        .find_one_simple_turn_play(&state, &FxHashSet::default(), 0)
        .is_none());

    let play = ai
        .find_one_turn_play(&hand, &before, &FxHashSet::default())
        .expect("splitting the run frees 7♣");

    assert_eq!(play.rearrangement, Some(Rearrangement::SplitRun));
    assert_eq!(play.level, PlayLevel::CompleteSetFromTwoCards);
    assert!(play.state.hand.is_empty());

    let groups: Vec<&CardGroup> = play.state.groups.iter().collect();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].to_string(), "[10♣ 9♣ 8♣]");
    assert_eq!(groups[1].to_string(), "[6♣ 5♣ 4♣]");
    assert_eq!(groups[2].set_type(), Some(SetType::RankSet));
    assert!(groups[2].contains(c(7, Suit::Clubs)));
}

/// Both a free-card move and a join would unlock a play here. Free-card
/// moves are tried first, so that is the play returned.
#[test]
fn test_rearrangements_tried_in_order() {
    let second_six = Card::from_parts(1, Suit::Hearts, Rank::pip(6));
    let hand = hand(&[second_six]);
    let before = table(&[
        &[c(10, Suit::Hearts), c(9, Suit::Hearts), c(8, Suit::Hearts)],
        &[c(7, Suit::Hearts), c(6, Suit::Hearts), c(5, Suit::Hearts), c(4, Suit::Hearts)],
    ]);
    let initial = FxHashSet::default();
    let mut ai = ai();

    let state = AiModelState::new(hand.clone(), before.clone());
    assert!(ai.find_one_simple_turn_play(&state, &initial, 0).is_none());

    // the joined run of seven would give up 5♥ 4♥ for a new set
    let joined = Rearrangement::JoinRuns.generate(&state, &initial);
    assert_eq!(joined.len(), 1);
    let via_join = ai.find_one_simple_turn_play(&joined[0], &initial, 1);
    assert_eq!(via_join.map(|(level, _)| level), Some(PlayLevel::NewSetFromOneCard));

    let play = ai
        .find_one_turn_play(&hand, &before, &initial)
        .expect("a rearrangement unlocks the six");

    assert_eq!(play.rearrangement, Some(Rearrangement::FreeCardMove));
    assert_eq!(play.level, PlayLevel::AddToSet);
    let shapes: Vec<String> = play.state.groups.iter().map(|g| g.to_string()).collect();
    assert_eq!(shapes, vec!["[10♥ 9♥ 8♥ 7♥ 6♥]", "[6♥ 5♥ 4♥]"]);
    assert!(play.state.groups.at(0).contains(second_six));
}

// =============================================================================
// Priorities and policy
// =============================================================================

/// A complete set in hand always wins, even when lower levels could play.
#[test]
fn test_priority_strictness() {
    let hand = hand(&[
        c(4, Suit::Clubs),
        c(4, Suit::Diamonds),
        c(4, Suit::Hearts),
        c(10, Suit::Spades),
        c(11, Suit::Spades),
    ]);
    let before = table(&[&[
        c(9, Suit::Spades),
        c(8, Suit::Spades),
        c(7, Suit::Spades),
        c(6, Suit::Spades),
    ]]);

    for seed in 0..20 {
        let mut ai = AiModel::new(AiConfig::default().with_seed(seed));
        let play = ai
            .find_one_turn_play(&hand, &before, &FxHashSet::default())
            .expect("level 1 exists");
        assert_eq!(play.level, PlayLevel::CompleteSetInHand, "seed {}", seed);
    }
}

/// Without a level 1 set, level 2 beats level 3 here.
#[test]
fn test_level2_beats_level3() {
    let hand = hand(&[c(10, Suit::Spades), c(11, Suit::Spades)]);
    let before = table(&[&[
        c(9, Suit::Spades),
        c(8, Suit::Spades),
        c(7, Suit::Spades),
        c(6, Suit::Spades),
    ]]);

    let play = ai()
        .find_one_turn_play(&hand, &before, &FxHashSet::default())
        .unwrap();

    assert_eq!(play.level, PlayLevel::CompleteSetFromTwoCards);
    assert_eq!(play.state.hand.len(), 0);
}

#[test]
fn test_free_card_policy() {
    let run_of_five: Vec<Card> = (4..=8).rev().map(|p| c(p, Suit::Clubs)).collect();
    let rank_of_four: Vec<Card> = Suit::ALL.iter().map(|&s| c(12, s)).collect();
    let groups = table(&[
        run_of_five.as_slice(),
        rank_of_four.as_slice(),
        &[c(2, Suit::Hearts), c(1, Suit::Hearts), c(13, Suit::Hearts)],
        &[c(3, Suit::Diamonds), c(3, Suit::Spades), c(3, Suit::Hearts)],
    ]);

    let free = find_all_free_cards(&groups, &FxHashSet::default());

    let mut expected = vec![c(8, Suit::Clubs), c(4, Suit::Clubs)];
    expected.extend(rank_of_four);
    assert_eq!(free, expected);
}

/// Every candidate the engine returns is a permutation of the same cards.
#[test]
fn test_conservation_in_dealt_positions() {
    for seed in 0..10 {
        let game = BaizeGameBuilder::new().all_ai().build(seed);
        let mut ai = AiModel::new(AiConfig::default().with_seed(seed));
        let before = game.snapshot(game.active_player());

        if let Some(play) = ai.find_one_turn_play(game.active_hand(), game.groups(), game.deck()) {
            assert_eq!(play.state.sorted_cards(), before.sorted_cards());
            assert!(play.state.hand.len() < before.hand.len());
            for group in play.state.groups.iter() {
                assert!(
                    group.is_empty() || group.is_good_set() || group.len() == 1,
                    "seed {}: {}",
                    seed,
                    group
                );
            }
        }
    }
}
