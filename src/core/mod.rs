//! Core engine types: instance ids, players, state, actions, RNG,
//! configuration and errors.
//!
//! These types are ruleset-agnostic. Rulesets differ only through the
//! `RulesConfig` they hand to the engine.

pub mod action;
pub mod config;
pub mod entity;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionKind, ActionType, AttackTarget};
pub use config::{GameMode, ResourceModel, RulesConfig, StatBoost};
pub use entity::{InstanceAllocator, InstanceId};
pub use error::{ConfigError, EngineError, ResourceError, SimulationError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{CardLocation, GameState, TurnState};
