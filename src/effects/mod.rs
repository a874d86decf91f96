//! Effect system shared by spells and card scripts.
//!
//! - `Effect`: Atomic state changes (leader damage and healing, draws, buffs)
//! - `EffectResolver`: Applies effects to a `GameState`
//! - `EffectContext`: State plus ruleset constants handed to scripts

mod effect;
mod resolver;

pub use effect::Effect;
pub use resolver::{EffectContext, EffectResolver};
