//! Ruleset configuration.
//!
//! Every constant a ruleset needs lives in `RulesConfig`. Functions that
//! depend on a rule (board capacity, hand limit) take the config as a
//! parameter; the game state never points back at the engine.
//!
//! Presets:
//! - `RulesConfig::ruleset_one()`: the minimal spell-only game
//! - `RulesConfig::shadowverse(GameMode::Classic)`: SV
//! - `RulesConfig::shadowverse(GameMode::WorldsBeyond)`: SVWB

use serde::{Deserialize, Serialize};

/// Shadowverse game mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Classic rules: evolution only.
    Classic,
    /// Worlds Beyond: evolution plus super evolution.
    WorldsBeyond,
}

/// How a ruleset meters card plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceModel {
    /// Cards are free and there is no evolution.
    Unmetered,
    /// Play points that ramp by one per turn, plus evolution pools.
    PlayPoints,
}

/// Attack/defense increase applied by an upgrade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBoost {
    pub attack: i64,
    pub defense: i64,
}

impl StatBoost {
    /// Create a boost.
    #[must_use]
    pub const fn new(attack: i64, defense: i64) -> Self {
        Self { attack, defense }
    }

    /// No change.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(0, 0)
    }
}

/// Ruleset constants.
///
/// ## Example
///
/// ```
/// use tcg_sim::core::{GameMode, RulesConfig};
///
/// let sv = RulesConfig::shadowverse(GameMode::Classic);
/// assert_eq!(sv.starting_life, 20);
/// assert_eq!(sv.board_capacity, 5);
///
/// let short = RulesConfig::ruleset_one().with_starting_life(5);
/// assert_eq!(short.starting_life, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Life every player starts with.
    pub starting_life: i64,

    /// Cards drawn by every player during setup.
    pub opening_hand: usize,

    /// Extra setup cards for the player who acts second.
    pub second_player_bonus_draw: usize,

    /// Cards drawn at the start of each turn.
    pub draws_per_turn: usize,

    /// Maximum permanents on a board.
    pub board_capacity: usize,

    /// Maximum hand size. A draw into a full hand burns the card.
    pub hand_limit: Option<usize>,

    /// Play metering.
    pub resources: ResourceModel,

    /// Play point ceiling.
    pub play_point_cap: i64,

    /// Turn from which the first seat may evolve.
    pub evolve_turn_first: u32,

    /// Turn from which the second seat may evolve.
    pub evolve_turn_second: u32,

    /// Evolution pool for the first seat.
    pub evolution_points_first: u32,

    /// Evolution pool for the second seat.
    pub evolution_points_second: u32,

    /// Turn from which super evolution is allowed. `None` disables it.
    pub super_evolve_turn: Option<u32>,

    /// Super evolution pool for each seat.
    pub super_evolution_points: u32,

    /// Boost applied by evolving.
    pub evolve_boost: StatBoost,

    /// Boost applied by super evolving.
    pub super_evolve_boost: StatBoost,
}

impl RulesConfig {
    /// The minimal spell-only ruleset: 10 life, 3 cards, no costs.
    #[must_use]
    pub fn ruleset_one() -> Self {
        Self {
            starting_life: 10,
            opening_hand: 3,
            second_player_bonus_draw: 0,
            draws_per_turn: 1,
            board_capacity: 5,
            hand_limit: None,
            resources: ResourceModel::Unmetered,
            play_point_cap: 0,
            evolve_turn_first: 0,
            evolve_turn_second: 0,
            evolution_points_first: 0,
            evolution_points_second: 0,
            super_evolve_turn: None,
            super_evolution_points: 0,
            evolve_boost: StatBoost::none(),
            super_evolve_boost: StatBoost::none(),
        }
    }

    /// Shadowverse rules for a game mode.
    #[must_use]
    pub fn shadowverse(mode: GameMode) -> Self {
        let classic = Self {
            starting_life: 20,
            opening_hand: 3,
            second_player_bonus_draw: 1,
            draws_per_turn: 1,
            board_capacity: 5,
            hand_limit: Some(9),
            resources: ResourceModel::PlayPoints,
            play_point_cap: 10,
            evolve_turn_first: 5,
            evolve_turn_second: 4,
            evolution_points_first: 2,
            evolution_points_second: 3,
            super_evolve_turn: None,
            super_evolution_points: 0,
            evolve_boost: StatBoost::new(2, 2),
            super_evolve_boost: StatBoost::none(),
        };

        match mode {
            GameMode::Classic => classic,
            GameMode::WorldsBeyond => Self {
                opening_hand: 4,
                evolution_points_first: 2,
                evolution_points_second: 2,
                super_evolve_turn: Some(7),
                super_evolution_points: 2,
                super_evolve_boost: StatBoost::new(3, 3),
                ..classic
            },
        }
    }

    /// Override starting life (builder pattern).
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Override the opening hand size (builder pattern).
    #[must_use]
    pub fn with_opening_hand(mut self, cards: usize) -> Self {
        self.opening_hand = cards;
        self
    }

    /// Override board capacity (builder pattern).
    #[must_use]
    pub fn with_board_capacity(mut self, capacity: usize) -> Self {
        self.board_capacity = capacity;
        self
    }

    /// Override the hand limit (builder pattern).
    #[must_use]
    pub fn with_hand_limit(mut self, limit: Option<usize>) -> Self {
        self.hand_limit = limit;
        self
    }

    /// Does this ruleset have super evolution?
    #[must_use]
    pub fn has_super_evolution(&self) -> bool {
        self.super_evolve_turn.is_some()
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::ruleset_one()
    }
}
