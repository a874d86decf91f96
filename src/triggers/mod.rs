//! Trigger dispatch for card scripts.
//!
//! The applier posts `EngineEvent`s; the `TriggerDispatcher` matches each
//! against the card's keyword markers and delegates to an injected
//! `EffectExecutor`.
//!
//! ## Key Components
//!
//! - [`EngineEvent`]: Lifecycle events (`on_play`, `on_destroy`, ...)
//! - [`TriggerDispatcher`]: Marker matching and delegation
//! - [`EffectExecutor`]: The script runtime contract
//! - [`ScriptLibrary`]: Closure-backed executor
//! - [`ScriptRef`]: Script location derived from a card's template id
//!
//! | Event | Marker | Script function |
//! |---|---|---|
//! | `on_play` | Fanfare | `on_fanfare` |
//! | `on_destroy` | Last Words | `on_last_words` |
//! | `on_evolve` | Evolve | `on_evolve` |
//! | `on_super_evolve` | Super-Evolve | `on_super_evolve` |

mod dispatcher;
mod event;
mod executor;

pub use dispatcher::{DispatchOutcome, TriggerDispatcher};
pub use event::EngineEvent;
pub use executor::{EffectExecutor, NoopExecutor, ScriptError, ScriptLibrary, ScriptRef};
