//! Rules: legal-action generation, action application and the engine trait.
//!
//! Rulesets implement `RulesEngine` to define:
//! - Their constants (`RulesConfig`)
//! - How actions modify state (usually by delegating to `ActionApplier`)
//!
//! Setup, the start-of-turn sequence, action generation and win checks are
//! shared and driven by the config.

pub mod applier;
pub mod engine;
pub mod generator;

pub use applier::ActionApplier;
pub use engine::{GameResult, RulesEngine};
pub use generator::{ActionGenerator, AttackPermissions};
