//! The turn loop.

use tracing::{debug, info, trace};

use super::observer::{GameObserver, NoopObserver};
use crate::agents::{Agent, AgentDecision};
use crate::cards::Card;
use crate::core::{Action, ConfigError, EngineError, GameState, PlayerId, SimulationError};
use crate::rules::{GameResult, RulesEngine};

/// Turn cap used when none is configured.
pub const DEFAULT_MAX_TURNS: u32 = 50;

/// Lifecycle of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Finished,
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationOutcome {
    /// The win check fired.
    Finished(GameResult),
    /// The turn cap was passed with no winner.
    TurnLimit,
    /// An agent asked to stop.
    Aborted,
}

impl SimulationOutcome {
    /// The game result, if there was one.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            SimulationOutcome::Finished(result) => Some(*result),
            _ => None,
        }
    }

    /// Human-readable summary using player names.
    #[must_use]
    pub fn describe(&self, state: &GameState) -> String {
        match self {
            SimulationOutcome::Finished(GameResult::Winner(p)) => {
                format!("{} wins", state.player(*p).name)
            }
            SimulationOutcome::Finished(GameResult::Draw) => "draw".to_string(),
            SimulationOutcome::TurnLimit => "turn limit reached".to_string(),
            SimulationOutcome::Aborted => "aborted".to_string(),
        }
    }
}

enum TurnEnd {
    Passed,
    Decided(GameResult),
    Aborted,
}

/// Runs one game between agents under a rules engine.
pub struct GameSimulator<E: RulesEngine, O: GameObserver = NoopObserver> {
    engine: E,
    agents: Vec<Box<dyn Agent>>,
    state: GameState,
    phase: GamePhase,
    max_turns: u32,
    observer: O,
}

impl<E: RulesEngine> GameSimulator<E> {
    /// Create a simulator with one player per agent, named after the agent.
    ///
    /// `seed` drives every shuffle in the game.
    pub fn new(engine: E, agents: Vec<Box<dyn Agent>>, seed: u64) -> Result<Self, ConfigError> {
        let names: Vec<&str> = agents.iter().map(|a| a.name()).collect();
        let state = GameState::new(&names, engine.config().starting_life, seed)?;

        Ok(Self {
            engine,
            agents,
            state,
            phase: GamePhase::NotStarted,
            max_turns: DEFAULT_MAX_TURNS,
            observer: NoopObserver,
        })
    }
}

impl<E: RulesEngine, O: GameObserver> GameSimulator<E, O> {
    /// Replace the observer (builder pattern).
    pub fn with_observer<O2: GameObserver>(self, observer: O2) -> GameSimulator<E, O2> {
        GameSimulator {
            engine: self.engine,
            agents: self.agents,
            state: self.state,
            phase: self.phase,
            max_turns: self.max_turns,
            observer,
        }
    }

    /// Set the turn cap (builder pattern).
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Load and shuffle one deck per player, in seat order (builder pattern).
    pub fn with_decks(mut self, decks: Vec<Vec<Card>>) -> Result<Self, ConfigError> {
        let players = self.state.player_count();
        if decks.len() != players {
            return Err(ConfigError::DeckCountMismatch {
                decks: decks.len(),
                players,
            });
        }
        for (id, deck) in PlayerId::all(players).zip(decks) {
            self.setup_deck(id, deck);
        }
        Ok(self)
    }

    /// Load and shuffle one player's deck.
    pub fn setup_deck(&mut self, player: PlayerId, cards: Vec<Card>) {
        self.state.setup_deck(player, cards);
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The rules engine.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the simulator, keeping the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Play the game to the end.
    ///
    /// Runs once; a second call fails with `AlreadyStarted`.
    pub fn run(&mut self) -> Result<SimulationOutcome, SimulationError> {
        if self.phase != GamePhase::NotStarted {
            return Err(SimulationError::AlreadyStarted);
        }
        if self.agents.len() != self.state.player_count() {
            return Err(ConfigError::AgentCountMismatch {
                agents: self.agents.len(),
                players: self.state.player_count(),
            }
            .into());
        }

        self.engine.setup_game(&mut self.state)?;
        self.state.start_game();
        self.phase = GamePhase::InProgress;
        self.observer.on_game_start(&self.state);

        let outcome = self.turn_loop();
        self.phase = GamePhase::Finished;
        let outcome = outcome?;

        info!(
            turn = self.state.turn_number,
            outcome = %outcome.describe(&self.state),
            "simulation finished"
        );
        self.observer.on_game_end(&self.state, &outcome);
        Ok(outcome)
    }

    fn turn_loop(&mut self) -> Result<SimulationOutcome, SimulationError> {
        while self.state.turn_number <= self.max_turns {
            let active = self.state.require_active()?;
            self.engine.begin_turn(&mut self.state)?;
            self.observer.on_turn_start(&self.state, active);

            if let Some(result) = self.engine.check_win_condition(&self.state) {
                return Ok(SimulationOutcome::Finished(result));
            }

            match self.play_turn(active)? {
                TurnEnd::Passed => {}
                TurnEnd::Decided(result) => return Ok(SimulationOutcome::Finished(result)),
                TurnEnd::Aborted => return Ok(SimulationOutcome::Aborted),
            }

            self.observer.on_turn_end(&self.state, active);
            self.state.end_turn();
        }

        debug!(max_turns = self.max_turns, "turn limit reached");
        Ok(SimulationOutcome::TurnLimit)
    }

    fn play_turn(&mut self, active: PlayerId) -> Result<TurnEnd, SimulationError> {
        loop {
            let actions = self.engine.possible_actions(&self.state);
            trace!(player = %active, count = actions.len(), "legal actions");

            let agent = &mut self.agents[active.index()];
            let action = match agent.choose_action(&self.state, &actions) {
                AgentDecision::Chose(action) => action,
                AgentDecision::Abort => {
                    info!(agent = agent.name(), "agent aborted the run");
                    return Ok(TurnEnd::Aborted);
                }
            };
            Self::check_offered(&action, &actions)?;

            self.engine.apply_action(&mut self.state, &action)?;
            self.observer.on_action(&self.state, &action);

            if let Some(result) = self.engine.check_win_condition(&self.state) {
                return Ok(TurnEnd::Decided(result));
            }
            if action.is_end_turn() {
                return Ok(TurnEnd::Passed);
            }
        }
    }

    fn check_offered(action: &Action, actions: &[Action]) -> Result<(), EngineError> {
        if actions.contains(action) {
            Ok(())
        } else {
            Err(EngineError::IllegalAction(format!("{action} was not offered")))
        }
    }
}

impl<E: RulesEngine + std::fmt::Debug, O: GameObserver + std::fmt::Debug> std::fmt::Debug
    for GameSimulator<E, O>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let agents: Vec<&str> = self.agents.iter().map(|a| a.name()).collect();
        f.debug_struct("GameSimulator")
            .field("engine", &self.engine)
            .field("agents", &agents)
            .field("phase", &self.phase)
            .field("max_turns", &self.max_turns)
            .field("observer", &self.observer)
            .finish_non_exhaustive()
    }
}
