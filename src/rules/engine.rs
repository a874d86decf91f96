//! Rules engine trait for rulesets.
//!
//! A ruleset supplies its `RulesConfig` and an `apply_action`; setup, the
//! start-of-turn sequence, action generation and the win check have
//! default implementations driven by the config.
//!
//! - Legal actions come from `ActionGenerator`
//! - Actions are applied by the ruleset (usually via `ActionApplier`)
//! - A player loses at life 0 or below, or after decking out

use tracing::debug;

use super::generator::ActionGenerator;
use crate::cards::Card;
use crate::core::{Action, EngineError, GameState, PlayerId, RulesConfig};
use crate::resources::{ResourceManager, ResourcePool, Seat};
use crate::zones::DrawOutcome;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Every player lost at once.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action` may assume the action came from `possible_actions` for
///   the same state, but must return an error rather than corrupt state if
///   it did not.
/// - `check_win_condition` is called after every applied action.
pub trait RulesEngine {
    /// Ruleset constants.
    fn config(&self) -> &RulesConfig;

    /// Apply one action to the state.
    fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<(), EngineError>;

    // === Provided Methods ===

    /// Attach resources, set life totals and draw opening hands.
    ///
    /// Decks must already be loaded.
    fn setup_game(&self, state: &mut GameState) -> Result<(), EngineError> {
        let config = self.config();
        let ids: Vec<PlayerId> = state.player_ids().collect();

        for &id in &ids {
            let player = state.player_mut(id);
            player.resources = Some(ResourcePool::for_seat(config, Seat::from_index(id.index())));
            player.life = config.starting_life;
            for _ in 0..config.opening_hand {
                player.draw_card(config.hand_limit);
            }
        }

        if let Some(&second) = ids.get(1) {
            for _ in 0..config.second_player_bonus_draw {
                state.draw_card(second, config.hand_limit);
            }
        }

        debug!(players = ids.len(), life = config.starting_life, "game set up");
        Ok(())
    }

    /// Start the active player's turn: refresh resources and board, then draw.
    fn begin_turn(&self, state: &mut GameState) -> Result<Vec<DrawOutcome>, EngineError> {
        let config = self.config();
        let active = state.require_active()?;
        let turn_number = state.turn_number;
        let player = state.player_mut(active);

        player.resources_mut()?.start_turn(turn_number);
        player.board.iter_mut().for_each(Card::reset_for_turn);

        let draws = (0..config.draws_per_turn)
            .map(|_| player.draw_card(config.hand_limit))
            .collect();

        debug!(turn = turn_number, player = %player.name, "turn started");
        Ok(draws)
    }

    /// Legal actions for the active player. Empty only before the game starts.
    fn possible_actions(&self, state: &GameState) -> Vec<Action> {
        ActionGenerator::new(self.config()).possible_actions(state)
    }

    /// Check if the game is over.
    ///
    /// The last player standing wins; if everyone is defeated at once the
    /// game is a draw.
    fn check_win_condition(&self, state: &GameState) -> Option<GameResult> {
        let mut defeated = 0;
        let mut standing = None;
        for (id, player) in state.players.iter() {
            if player.is_defeated() {
                defeated += 1;
            } else if standing.is_none() {
                standing = Some(id);
            }
        }

        if defeated == 0 {
            return None;
        }
        let remaining = state.player_count() - defeated;
        match (remaining, standing) {
            (0, _) => Some(GameResult::Draw),
            (1, Some(winner)) => Some(GameResult::Winner(winner)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardTemplate;
    use crate::core::{GameMode, InstanceId};

    struct BareRules(RulesConfig);

    impl RulesEngine for BareRules {
        fn config(&self) -> &RulesConfig {
            &self.0
        }

        fn apply_action(
            &self,
            _state: &mut GameState,
            _action: &Action,
        ) -> Result<(), EngineError> {
            Ok(())
        }
    }

    fn state_with_decks(rules: &BareRules, size: u32) -> GameState {
        let mut state = GameState::new(&["Alice", "Bob"], 1, 3).unwrap();
        for p in 0..2u8 {
            let cards = (0..size)
                .map(|i| {
                    Card::from_template(
                        &CardTemplate::spell("S", "Spark", 0),
                        InstanceId(u32::from(p) * 100 + i + 1),
                    )
                })
                .collect();
            state.setup_deck(PlayerId::new(p), cards);
        }
        rules.setup_game(&mut state).unwrap();
        state
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert!(!GameResult::Draw.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_setup_classic_second_player_bonus() {
        let rules = BareRules(RulesConfig::shadowverse(GameMode::Classic));
        let state = state_with_decks(&rules, 10);

        assert_eq!(state.player(PlayerId::new(0)).hand.len(), 3);
        assert_eq!(state.player(PlayerId::new(1)).hand.len(), 4);
        assert_eq!(state.player(PlayerId::new(0)).life, 20);
        assert!(state.player(PlayerId::new(1)).resources.is_some());
    }

    #[test]
    fn test_begin_turn_draws_and_refills() {
        let rules = BareRules(RulesConfig::shadowverse(GameMode::WorldsBeyond));
        let mut state = state_with_decks(&rules, 10);
        state.start_game();

        let draws = rules.begin_turn(&mut state).unwrap();

        assert_eq!(draws.len(), 1);
        let alice = state.player(PlayerId::new(0));
        assert_eq!(alice.hand.len(), 5);
        assert_eq!(alice.resources().unwrap().play_points().unwrap().play_points(), 1);
    }

    #[test]
    fn test_begin_turn_requires_start() {
        let rules = BareRules(RulesConfig::ruleset_one());
        let mut state = state_with_decks(&rules, 5);
        assert_eq!(rules.begin_turn(&mut state), Err(EngineError::NotStarted));
    }

    #[test]
    fn test_win_by_life() {
        let rules = BareRules(RulesConfig::ruleset_one());
        let mut state = state_with_decks(&rules, 5);
        assert_eq!(rules.check_win_condition(&state), None);

        state.player_mut(PlayerId::new(1)).life = 0;
        assert_eq!(
            rules.check_win_condition(&state),
            Some(GameResult::Winner(PlayerId::new(0)))
        );

        state.player_mut(PlayerId::new(0)).life = -2;
        assert_eq!(rules.check_win_condition(&state), Some(GameResult::Draw));
    }

    #[test]
    fn test_win_by_deck_out() {
        let rules = BareRules(RulesConfig::ruleset_one());
        let mut state = state_with_decks(&rules, 3);
        state.start_game();

        rules.begin_turn(&mut state).unwrap();

        assert!(state.player(PlayerId::new(0)).has_decked_out);
        assert_eq!(
            rules.check_win_condition(&state),
            Some(GameResult::Winner(PlayerId::new(1)))
        );
    }
}
