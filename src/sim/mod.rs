//! Game orchestration.
//!
//! `GameSimulator` owns one game: the engine, one agent per seat, the
//! state and an observer. `run` drives the turn loop until a player wins,
//! an agent aborts, or the turn cap is passed.
//!
//! ## Example
//!
//! ```
//! use tcg_sim::agents::{Agent, SimpleAi};
//! use tcg_sim::games::{GameEngine, Ruleset};
//! use tcg_sim::sim::GameSimulator;
//!
//! let ruleset = Ruleset::RuleSetOne;
//! let agents: Vec<Box<dyn Agent>> = vec![
//!     Box::new(SimpleAi::new("Alice", 1)),
//!     Box::new(SimpleAi::new("Bob", 2)),
//! ];
//! let mut sim = GameSimulator::new(GameEngine::new(ruleset), agents, 42)
//!     .unwrap()
//!     .with_decks(ruleset.build_decks(2).unwrap())
//!     .unwrap();
//!
//! let outcome = sim.run().unwrap();
//! assert!(sim.state().turn_number <= 51);
//! println!("{}", outcome.describe(sim.state()));
//! ```

mod observer;
mod simulator;

pub use observer::{GameObserver, NoopObserver, SnapshotRecorder, TracingObserver};
pub use simulator::{GamePhase, GameSimulator, SimulationOutcome, DEFAULT_MAX_TURNS};
