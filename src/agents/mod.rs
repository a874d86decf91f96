//! Decision-making collaborators.
//!
//! The orchestrator hands an agent the current state and the generator's
//! legal actions; the agent returns one of those actions or asks to abort
//! the run. Agents never mutate the state they are shown.
//!
//! ## Key Types
//!
//! - [`Agent`]: The decision contract
//! - [`AgentDecision`]: A chosen action or an abort
//! - [`SimpleAi`]: Uniform random choice from a seeded stream
//! - [`ScriptedAgent`]: Policy supplied as a closure

mod scripted;
mod simple;

pub use scripted::ScriptedAgent;
pub use simple::SimpleAi;

use crate::core::{Action, GameState};

/// An agent's answer to a decision point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentDecision {
    /// One of the offered actions.
    Chose(Action),
    /// Stop the simulation without a result.
    Abort,
}

/// Chooses actions for one seat.
pub trait Agent {
    /// Display name; also used as the player's name.
    fn name(&self) -> &str;

    /// Pick one of `actions` for the active player.
    ///
    /// `actions` is never empty once the game is running.
    fn choose_action(&mut self, state: &GameState, actions: &[Action]) -> AgentDecision;
}
