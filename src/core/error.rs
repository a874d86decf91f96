//! Error taxonomy.
//!
//! - `ConfigError`: bad setup, fatal at construction time.
//! - `ResourceError`: a spend was attempted without enough resources.
//! - `EngineError`: an action could not be applied to the current state.
//!   Generator-sourced actions never produce these; seeing one means the
//!   orchestration fed the applier a stale or foreign action.
//!
//! - `SimulationError`: anything that ends a simulation run early.
//!
//! Effect-script failures have their own type in `triggers` and never
//! escape the dispatcher.

use thiserror::Error;

use super::entity::InstanceId;
use super::player::PlayerId;
use crate::cards::CardId;
use crate::zones::ZoneKind;

/// Setup errors. Fatal to the run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown ruleset '{0}' (expected RuleSetOne, SV or SVWB)")]
    UnknownRuleset(String),
    #[error("a game needs at least one player")]
    NoPlayers,
    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),
    #[error("player name '{0}' is used more than once")]
    DuplicatePlayerName(String),
    #[error("{agents} agents were supplied for {players} players")]
    AgentCountMismatch { agents: usize, players: usize },
    #[error("{decks} decks were supplied for {players} players")]
    DeckCountMismatch { decks: usize, players: usize },
    #[error("card template '{0}' is not in the catalog")]
    UnknownCard(CardId),
    #[error("card template '{0}' is already registered")]
    DuplicateCard(CardId),
}

/// Resource spend failures. Never clamped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ResourceError {
    #[error("not enough play points: need {needed}, have {available}")]
    InsufficientPlayPoints { needed: i64, available: i64 },
    #[error("no evolution point available")]
    NoEvolutionPoints,
    #[error("no super evolution point available")]
    NoSuperEvolutionPoints,
}

/// Failures applying an action to a state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("the game has not started")]
    NotStarted,
    #[error("{actual} acted but it is {expected}'s turn")]
    NotActivePlayer { expected: PlayerId, actual: PlayerId },
    #[error("card {instance} not found in {owner}'s {zone}")]
    CardNotFound {
        instance: InstanceId,
        owner: PlayerId,
        zone: ZoneKind,
    },
    #[error("attack target {0} not found")]
    TargetNotFound(String),
    #[error("{0}'s board is full")]
    BoardFull(PlayerId),
    #[error("{0} has no resource manager; setup_game has not run")]
    ResourcesNotInitialized(PlayerId),
    #[error("insufficient resources: {0}")]
    InsufficientResources(#[from] ResourceError),
    #[error("illegal action: {0}")]
    IllegalAction(String),
}

/// Failures that abort a simulation run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("the simulation has already run")]
    AlreadyStarted,
}
