//! Baize game state and turn lifecycle.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::apply::TurnChanges;
use crate::ai::{AiModel, AiModelState, PlayLevel, Rearrangement};
use crate::cards::{Card, CardDeck, CardHand, CardHands, DECK_SIZE};
use crate::core::{DealConfig, GameRng, GameRngState, PlayerId};
use crate::groups::{CardGroup, CardGroups, InitialCardGroups};

/// How a deal ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealOutcome {
    /// This seat played its last card.
    Winner(PlayerId),
    /// The draw pile ran out and nobody could play.
    NoWinner,
}

/// What an AI seat did with its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played {
        level: PlayLevel,
        rearrangement: Option<Rearrangement>,
        changes: TurnChanges,
    },
    /// No play was found. Holds the drawn card, or `None` if the draw pile
    /// was already empty.
    Drew(Option<Card>),
}

/// Builder for creating a BaizeGame.
#[derive(Clone, Debug, Default)]
pub struct BaizeGameBuilder {
    config: DealConfig,
}

impl BaizeGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing deal configuration.
    pub fn config(mut self, config: DealConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config = self.config.with_player_count(count);
        self
    }

    pub fn hand_size(mut self, size: usize) -> Self {
        self.config = self.config.with_hand_size(size);
        self
    }

    pub fn initial_free_cards(mut self, count: usize) -> Self {
        self.config = self.config.with_initial_free_cards(count);
        self
    }

    /// Let the AI play every seat.
    pub fn all_ai(mut self) -> Self {
        self.config = self.config.all_ai();
        self
    }

    /// Build the game, shuffle, deal, and start the first turn.
    pub fn build(self, seed: u64) -> BaizeGame {
        assert!(
            self.config.cards_dealt() <= DECK_SIZE as usize,
            "Deal needs {} cards but the deck holds {}",
            self.config.cards_dealt(),
            DECK_SIZE
        );
        let mut game = BaizeGame::new(self.config, seed);
        game.shuffle_and_deal();
        game
    }
}

/// Live game: deck, hands, table, and whose turn it is.
#[derive(Clone, Debug)]
pub struct BaizeGame {
    config: DealConfig,
    pub(super) deck: CardDeck,
    pub(super) hands: CardHands,
    pub(super) groups: CardGroups,
    pub(super) active_player: PlayerId,
    start_of_turn_hand: CardHand,
    have_drawn_card: bool,
    rng: GameRng,
}

/// Everything needed to restart a turn.
#[derive(Serialize, Deserialize)]
struct Checkpoint {
    config: DealConfig,
    deck: CardDeck,
    hands: CardHands,
    groups: CardGroups,
    active_player: PlayerId,
    start_of_turn_hand: CardHand,
    have_drawn_card: bool,
    rng: GameRngState,
}

impl BaizeGame {
    /// Empty table and hands; call [`BaizeGame::shuffle_and_deal`] to start.
    #[must_use]
    pub fn new(config: DealConfig, seed: u64) -> Self {
        let hands = CardHands::new(config.player_count);
        Self {
            config,
            deck: CardDeck::new(),
            hands,
            groups: CardGroups::new(),
            active_player: PlayerId::new(0),
            start_of_turn_hand: CardHand::new(),
            have_drawn_card: false,
            rng: GameRng::new(seed),
        }
    }

    // === Accessors ===

    pub fn config(&self) -> &DealConfig {
        &self.config
    }

    pub fn deck(&self) -> &CardDeck {
        &self.deck
    }

    pub fn hands(&self) -> &CardHands {
        &self.hands
    }

    pub fn groups(&self) -> &CardGroups {
        &self.groups
    }

    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    pub fn active_hand(&self) -> &CardHand {
        &self.hands[self.active_player]
    }

    pub fn have_drawn_card(&self) -> bool {
        self.have_drawn_card
    }

    /// Fork an independent RNG stream, e.g. for an AI seat.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    // === Dealing ===

    /// Clear the table, shuffle, deal hands and initial free cards, and
    /// start the first player's turn.
    pub fn shuffle_and_deal(&mut self) {
        self.groups.clear_groups();
        self.deck.shuffle(&mut self.rng);
        self.hands.deal_hands(&mut self.deck, self.config.initial_hand_size);
        self.deal_initial_free_cards();
        self.hands.sort_hands();
        self.active_player = PlayerId::new(0);
        self.start_of_turn();
        debug!(
            "Dealt {} hands, {} initial free cards, {} left to draw",
            self.hands.player_count(),
            self.deck.initial_free_cards().len(),
            self.deck.cards_remaining()
        );
    }

    /// Lay single cards on the baize as initial free-card groups.
    pub fn deal_initial_free_cards(&mut self) {
        for _ in 0..self.config.initial_free_cards {
            let Some(card) = self.deck.deal_next_card() else { break };
            self.deck.add_initial_free_card(card);
            self.groups.add_group([card]);
        }
    }

    #[must_use]
    pub fn is_initial_card_group(&self, group: &CardGroup) -> bool {
        self.deck.is_initial_card_group(group)
    }

    /// The initial free-card group holding `card`.
    ///
    /// Panics if `card` is not on the baize as an initial free card.
    #[must_use]
    pub fn initial_free_card_group(&self, card: Card) -> &CardGroup {
        let group = self
            .groups
            .find_card_in_groups(card)
            .and_then(|id| self.groups.get(id))
            .unwrap_or_else(|| panic!("{} is not on the baize", card));
        assert!(
            self.is_initial_card_group(group),
            "{} is not an initial free-card group",
            group
        );
        group
    }

    /// Groups that are neither good sets nor initial free-card groups.
    #[must_use]
    pub fn bad_set_groups(&self) -> Vec<&CardGroup> {
        self.groups
            .iter()
            .filter(|g| !g.is_good_set() && !self.is_initial_card_group(g))
            .collect()
    }

    /// Draw one card into the active hand. `None` if the draw pile is empty.
    pub fn draw_card_from_draw_pile(&mut self) -> Option<Card> {
        let card = self.deck.deal_next_card()?;
        let hand = &mut self.hands[self.active_player];
        hand.push(card);
        hand.sort_hand();
        self.have_drawn_card = true;
        Some(card)
    }

    /// Forget initial free cards that have been claimed into a larger group.
    pub fn update_initial_free_cards(&mut self) {
        let claimed: Vec<Card> = self
            .deck
            .initial_free_cards()
            .iter()
            .copied()
            .filter(|&card| {
                self.groups
                    .find_card_in_groups(card)
                    .and_then(|id| self.groups.get(id))
                    .map_or(false, |group| group.len() > 1)
            })
            .collect();
        for card in claimed {
            self.deck.remove_from_initial_free_cards(card);
        }
    }

    /// Drop empty groups and put every group in canonical order.
    ///
    /// Panics if any group is left neither a good set nor an initial
    /// free-card group.
    pub fn tidy_groups(&mut self) {
        self.groups.remove_empty_groups();
        let deck = &self.deck;
        for group in self.groups.iter_mut() {
            group.rearrange_for_sets();
            assert!(
                group.is_good_set() || deck.is_initial_card_group(group),
                "{} is left as a bad set",
                group
            );
        }
    }

    // === Turns ===

    pub fn start_of_turn(&mut self) {
        self.start_of_turn_hand = self.hands[self.active_player].clone();
        self.have_drawn_card = false;
    }

    pub fn end_of_turn(&mut self) {
        self.update_initial_free_cards();
        self.active_player = self.active_player.next(self.hands.player_count());
    }

    /// Whether the active player has put down any card this turn.
    #[must_use]
    pub fn have_played_card(&self) -> bool {
        let hand = &self.hands[self.active_player];
        self.start_of_turn_hand.iter().any(|card| !hand.contains(card))
    }

    /// Copy of `player`'s hand and the table, for the AI.
    #[must_use]
    pub fn snapshot(&self, player: PlayerId) -> AiModelState {
        AiModelState::new(self.hands[player].clone(), self.groups.clone())
    }

    /// Whether the deal is over. `no_play` says the player who just moved
    /// found nothing to play.
    #[must_use]
    pub fn is_deal_over(&self, no_play: bool) -> Option<DealOutcome> {
        if let Some((winner, _)) = self.hands.iter().find(|(_, hand)| hand.is_empty()) {
            return Some(DealOutcome::Winner(winner));
        }
        if no_play && !self.deck.can_deal_next_card() {
            return Some(DealOutcome::NoWinner);
        }
        None
    }

    /// Let `ai` take the active player's turn: play if it can, else draw.
    pub fn play_ai_turn(&mut self, ai: &mut AiModel) -> TurnOutcome {
        assert!(
            self.config.is_ai_player(self.active_player),
            "{} is not an AI seat",
            self.active_player
        );
        let found = ai.find_one_turn_play(&self.hands[self.active_player], &self.groups, &self.deck);
        match found {
            Some(play) => {
                let changes = self.apply_turn_play(&play.state);
                TurnOutcome::Played {
                    level: play.level,
                    rearrangement: play.rearrangement,
                    changes,
                }
            }
            None => {
                let card = self.draw_card_from_draw_pile();
                debug!("{} draws {:?}", self.active_player, card.map(|c| c.to_string()));
                TurnOutcome::Drew(card)
            }
        }
    }

    /// Play AI turns until the deal ends or `max_turns` have been taken.
    pub fn run_deal(&mut self, ai: &mut AiModel, max_turns: usize) -> Option<DealOutcome> {
        for turn in 0..max_turns {
            let outcome = self.play_ai_turn(ai);
            let no_play = matches!(outcome, TurnOutcome::Drew(_));
            if let Some(result) = self.is_deal_over(no_play) {
                info!("Deal over after {} turns: {:?}", turn + 1, result);
                return Some(result);
            }
            self.end_of_turn();
            self.start_of_turn();
        }
        info!("Deal stopped after {} turns", max_turns);
        None
    }

    // === Checkpoints ===

    /// Encode the whole game, so the current turn can be restarted.
    pub fn checkpoint(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(&Checkpoint {
            config: self.config.clone(),
            deck: self.deck.clone(),
            hands: self.hands.clone(),
            groups: self.groups.clone(),
            active_player: self.active_player,
            start_of_turn_hand: self.start_of_turn_hand.clone(),
            have_drawn_card: self.have_drawn_card,
            rng: self.rng.state(),
        })
    }

    /// Rebuild a game from [`BaizeGame::checkpoint`] bytes.
    pub fn restore(bytes: &[u8]) -> Result<Self, bincode::Error> {
        let saved: Checkpoint = bincode::deserialize(bytes)?;
        let mut game = Self {
            config: saved.config,
            deck: saved.deck,
            hands: saved.hands,
            groups: saved.groups,
            active_player: saved.active_player,
            start_of_turn_hand: saved.start_of_turn_hand,
            have_drawn_card: saved.have_drawn_card,
            rng: GameRng::from_state(&saved.rng),
        };
        game.update_initial_free_cards();
        game.tidy_groups();
        Ok(game)
    }
}
