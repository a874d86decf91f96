//! Ruleset registry and the concrete engine.
//!
//! Rulesets are selected by name and differ only by their `RulesConfig`,
//! card content and scripts. `GameEngine` wires a config and a trigger
//! dispatcher into the shared `RulesEngine` machinery.
//!
//! ## Example
//!
//! ```
//! use tcg_sim::games::{GameEngine, Ruleset};
//! use tcg_sim::rules::RulesEngine;
//!
//! let ruleset: Ruleset = "SVWB".parse().unwrap();
//! let engine = GameEngine::new(ruleset);
//! assert_eq!(engine.config().opening_hand, 4);
//! assert!("MTG".parse::<Ruleset>().is_err());
//! ```

pub mod ruleset_one;
pub mod sv;

use std::str::FromStr;

use crate::cards::{Card, CardCatalog};
use crate::core::{
    Action, ConfigError, EngineError, GameMode, GameState, InstanceAllocator, RulesConfig,
};
use crate::rules::{ActionApplier, RulesEngine};
use crate::triggers::{EffectExecutor, ScriptLibrary, TriggerDispatcher};

/// The rulesets the engine ships with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Ruleset {
    /// Ten life, free spells, no board play.
    RuleSetOne,
    /// Play points, evolution and a five-slot board.
    Shadowverse(GameMode),
}

impl Ruleset {
    /// Every ruleset, in registry order.
    pub const ALL: [Ruleset; 3] = [
        Ruleset::RuleSetOne,
        Ruleset::Shadowverse(GameMode::Classic),
        Ruleset::Shadowverse(GameMode::WorldsBeyond),
    ];

    /// Registry name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Ruleset::RuleSetOne => "RuleSetOne",
            Ruleset::Shadowverse(GameMode::Classic) => "SV",
            Ruleset::Shadowverse(GameMode::WorldsBeyond) => "SVWB",
        }
    }

    /// Constants for this ruleset.
    #[must_use]
    pub fn config(self) -> RulesConfig {
        match self {
            Ruleset::RuleSetOne => RulesConfig::ruleset_one(),
            Ruleset::Shadowverse(mode) => RulesConfig::shadowverse(mode),
        }
    }

    /// Card templates available under this ruleset.
    pub fn catalog(self) -> Result<CardCatalog, ConfigError> {
        match self {
            Ruleset::RuleSetOne => ruleset_one::starter_catalog(),
            Ruleset::Shadowverse(_) => sv::sample_catalog(),
        }
    }

    /// The default deck list.
    #[must_use]
    pub fn deck_list(self) -> &'static [(&'static str, usize)] {
        match self {
            Ruleset::RuleSetOne => ruleset_one::STARTER_DECK,
            Ruleset::Shadowverse(_) => sv::SAMPLE_DECK,
        }
    }

    /// Native scripts for the ruleset's cards.
    #[must_use]
    pub fn scripts(self) -> ScriptLibrary {
        match self {
            Ruleset::RuleSetOne => ScriptLibrary::new(),
            Ruleset::Shadowverse(_) => sv::sample_scripts(),
        }
    }

    /// Build one default deck per player, with instance ids unique across
    /// all of them.
    pub fn build_decks(self, player_count: usize) -> Result<Vec<Vec<Card>>, ConfigError> {
        let catalog = self.catalog()?;
        let mut ids = InstanceAllocator::new();
        (0..player_count)
            .map(|_| catalog.build_deck(self.deck_list(), &mut ids))
            .collect()
    }
}

impl FromStr for Ruleset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ruleset::ALL
            .into_iter()
            .find(|r| r.name() == s.trim())
            .ok_or_else(|| ConfigError::UnknownRuleset(s.to_string()))
    }
}

impl std::fmt::Display for Ruleset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rules engine for a registered ruleset.
#[derive(Debug)]
pub struct GameEngine {
    ruleset: Ruleset,
    config: RulesConfig,
    dispatcher: TriggerDispatcher,
}

impl GameEngine {
    /// Engine with the ruleset's config and native scripts.
    #[must_use]
    pub fn new(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            config: ruleset.config(),
            dispatcher: TriggerDispatcher::new(ruleset.scripts()),
        }
    }

    /// Override the ruleset constants (builder pattern).
    #[must_use]
    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the script executor (builder pattern).
    #[must_use]
    pub fn with_executor(mut self, executor: impl EffectExecutor + 'static) -> Self {
        self.dispatcher = TriggerDispatcher::new(executor);
        self
    }

    /// The ruleset this engine was built from.
    #[must_use]
    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    /// The trigger dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &TriggerDispatcher {
        &self.dispatcher
    }
}

impl RulesEngine for GameEngine {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn apply_action(&self, state: &mut GameState, action: &Action) -> Result<(), EngineError> {
        ActionApplier::new(&self.config, &self.dispatcher).apply(state, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_ruleset_names_round_trip() {
        for ruleset in Ruleset::ALL {
            assert_eq!(ruleset.name().parse::<Ruleset>().unwrap(), ruleset);
            assert_eq!(ruleset.to_string(), ruleset.name());
        }
    }

    #[test]
    fn test_unknown_ruleset() {
        assert_eq!(
            "Hearthstone".parse::<Ruleset>(),
            Err(ConfigError::UnknownRuleset("Hearthstone".to_string()))
        );
    }

    #[test]
    fn test_build_decks_unique_ids() {
        let decks = Ruleset::RuleSetOne.build_decks(2).unwrap();
        assert_eq!(decks.len(), 2);
        let mut ids: Vec<_> = decks.iter().flatten().map(|c| c.instance_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 40);
    }

    #[test]
    fn test_engine_applies_end_turn() {
        let engine = GameEngine::new(Ruleset::Shadowverse(GameMode::Classic));
        let mut state = GameState::new(&["A", "B"], 20, 1).unwrap();
        state.start_game();

        engine
            .apply_action(&mut state, &Action::end_turn(PlayerId::new(0)))
            .unwrap();
        assert_eq!(engine.ruleset(), Ruleset::Shadowverse(GameMode::Classic));
    }

    #[test]
    fn test_with_config_overrides() {
        let engine = GameEngine::new(Ruleset::RuleSetOne)
            .with_config(RulesConfig::ruleset_one().with_starting_life(3));
        assert_eq!(engine.config().starting_life, 3);
    }
}
