//! Engine lifecycle events.
//!
//! The applier posts one event right after the state change that caused
//! it. Each event is tied to a keyword marker and a script function: a card
//! only reacts to an event whose marker it carries.

use serde::{Deserialize, Serialize};

use crate::cards::Keyword;

/// Events a card can react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineEvent {
    /// The card was played from hand.
    Play,
    /// The card was destroyed in combat.
    Destroy,
    /// The card evolved.
    Evolve,
    /// The card super evolved.
    SuperEvolve,
}

impl EngineEvent {
    /// Every event.
    pub const ALL: [EngineEvent; 4] = [
        EngineEvent::Play,
        EngineEvent::Destroy,
        EngineEvent::Evolve,
        EngineEvent::SuperEvolve,
    ];

    /// Event name, e.g. `on_play`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EngineEvent::Play => "on_play",
            EngineEvent::Destroy => "on_destroy",
            EngineEvent::Evolve => "on_evolve",
            EngineEvent::SuperEvolve => "on_super_evolve",
        }
    }

    /// Keyword a card must carry to react.
    #[must_use]
    pub fn marker(self) -> Keyword {
        match self {
            EngineEvent::Play => Keyword::Fanfare,
            EngineEvent::Destroy => Keyword::LastWords,
            EngineEvent::Evolve => Keyword::Evolve,
            EngineEvent::SuperEvolve => Keyword::SuperEvolve,
        }
    }

    /// Script function invoked for this event.
    #[must_use]
    pub fn script_function(self) -> &'static str {
        match self {
            EngineEvent::Play => "on_fanfare",
            EngineEvent::Destroy => "on_last_words",
            EngineEvent::Evolve => "on_evolve",
            EngineEvent::SuperEvolve => "on_super_evolve",
        }
    }
}

impl std::fmt::Display for EngineEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
