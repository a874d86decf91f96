//! Simulation observers.
//!
//! The orchestrator reports every lifecycle step to a `GameObserver`. All
//! hooks default to no-ops, so an observer implements only what it needs.

use tracing::info;

use super::SimulationOutcome;
use crate::core::{Action, GameState, PlayerId};

/// Display and telemetry hooks.
pub trait GameObserver {
    /// After setup, before the first turn.
    fn on_game_start(&mut self, _state: &GameState) {}

    /// After the start-of-turn draw.
    fn on_turn_start(&mut self, _state: &GameState, _player: PlayerId) {}

    /// After an action was applied.
    fn on_action(&mut self, _state: &GameState, _action: &Action) {}

    /// After the active player ended their turn.
    fn on_turn_end(&mut self, _state: &GameState, _player: PlayerId) {}

    /// Once, when the run stops for any reason.
    fn on_game_end(&mut self, _state: &GameState, _outcome: &SimulationOutcome) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// Logs the game through `tracing`.
///
/// Simple mode writes one line per action; pretty mode adds a summary of
/// every player's life, hand and board.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver {
    pretty: bool,
}

impl TracingObserver {
    /// One line per action.
    #[must_use]
    pub fn simple() -> Self {
        Self { pretty: false }
    }

    /// Board summary after every action.
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn summarize(state: &GameState) {
        for (_, player) in state.players.iter() {
            let board: Vec<String> = player.board.iter().map(ToString::to_string).collect();
            let resources = player
                .resources
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default();
            info!(
                player = %player.name,
                life = player.life,
                hand = player.hand.len(),
                deck = player.deck.len(),
                board = %board.join(", "),
                %resources,
                "status"
            );
        }
    }
}

impl GameObserver for TracingObserver {
    fn on_game_start(&mut self, state: &GameState) {
        info!(players = state.player_count(), "game started");
        if self.pretty {
            Self::summarize(state);
        }
    }

    fn on_turn_start(&mut self, state: &GameState, player: PlayerId) {
        info!(turn = state.turn_number, player = %state.player(player).name, "turn");
    }

    fn on_action(&mut self, state: &GameState, action: &Action) {
        info!(turn = state.turn_number, action = %action.describe(state), "action");
        if self.pretty {
            Self::summarize(state);
        }
    }

    fn on_game_end(&mut self, state: &GameState, outcome: &SimulationOutcome) {
        info!(turn = state.turn_number, outcome = %outcome.describe(state), "game over");
    }
}

/// Keeps a copy of the state after every action.
///
/// Zones are persistent vectors, so each snapshot shares structure with
/// the previous one.
#[derive(Clone, Debug, Default)]
pub struct SnapshotRecorder {
    snapshots: Vec<GameState>,
}

impl SnapshotRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded states, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> &[GameState] {
        &self.snapshots
    }

    /// Number of recorded states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Take the recorded states.
    #[must_use]
    pub fn into_snapshots(self) -> Vec<GameState> {
        self.snapshots
    }
}

impl GameObserver for SnapshotRecorder {
    fn on_action(&mut self, state: &GameState, _action: &Action) {
        self.snapshots.push(state.clone());
    }
}
