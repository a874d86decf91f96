//! # tcg-sim
//!
//! A turn-based trading card game simulation engine with pluggable rulesets.
//!
//! ## Design Principles
//!
//! 1. **Rules as Data**: Rulesets differ by a `RulesConfig`, their card
//!    content and their scripts. Generation and application are shared.
//!
//! 2. **Generated Actions Only**: The orchestrator only applies actions the
//!    generator offered for the current state. Anything else is an
//!    `EngineError`, never a silent no-op.
//!
//! 3. **Deterministic**: All randomness flows from a seeded `GameRng`. A
//!    seed reproduces a whole run.
//!
//! ## Architecture
//!
//! The orchestrator asks the generator for legal actions, an agent picks
//! one, the applier mutates zones and resources and posts events, the
//! dispatcher routes events to card scripts, and the win condition is
//! checked after every action.
//!
//! - **Persistent Data Structures**: Zones are `im` vectors, so snapshots of
//!   the whole state are cheap.
//!
//! ## Modules
//!
//! - `core`: Instance ids, players, state, actions, RNG, configuration, errors
//! - `zones`: Hand, deck, graveyard and board
//! - `cards`: Properties, templates, instances and the catalog
//! - `resources`: Per-player economy (play points, evolution points)
//! - `rules`: Action generation, action application and the engine trait
//! - `effects`: Effects scripts can apply
//! - `triggers`: Event dispatch to card scripts
//! - `games`: Ruleset registry and shipped content
//! - `agents`: Decision-making collaborators
//! - `sim`: The turn-loop orchestrator and observers

pub mod agents;
pub mod cards;
pub mod core;
pub mod effects;
pub mod games;
pub mod resources;
pub mod rules;
pub mod sim;
pub mod triggers;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionKind, ActionType, AttackTarget, ConfigError, EngineError, GameMode, GameRng,
    GameState, InstanceId, Player, PlayerId, PlayerMap, ResourceError, RulesConfig,
    SimulationError,
};

pub use crate::zones::{DrawOutcome, Zone, ZoneKind, ZonePosition};

pub use crate::cards::{Card, CardCatalog, CardId, CardTemplate, CardType, Keyword, Property};

pub use crate::resources::{ResourceManager, ResourcePool};

pub use crate::rules::{ActionApplier, ActionGenerator, GameResult, RulesEngine};

pub use crate::effects::{Effect, EffectContext};

pub use crate::triggers::{EffectExecutor, EngineEvent, ScriptLibrary, TriggerDispatcher};

pub use crate::games::{GameEngine, Ruleset};

pub use crate::agents::{Agent, AgentDecision, SimpleAi};

pub use crate::sim::{GameSimulator, SimulationOutcome};
