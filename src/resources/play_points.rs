//! Play point economy with evolution pools.
//!
//! - Maximum play points grow by one per owned turn up to the cap and refill
//!   to the maximum.
//! - Evolution unlocks on a seat-dependent turn while points remain.
//! - Super evolution needs its own pool and threshold, and only exists
//!   when the ruleset enables it.

use serde::{Deserialize, Serialize};

use super::{ResourceManager, Seat};
use crate::cards::Card;
use crate::core::config::RulesConfig;
use crate::core::error::ResourceError;

/// Play points, evolution points and super evolution points for one seat.
///
/// ## Example
///
/// ```
/// use tcg_sim::core::{GameMode, RulesConfig};
/// use tcg_sim::resources::{PlayPointResources, ResourceManager, Seat};
///
/// let config = RulesConfig::shadowverse(GameMode::Classic);
/// let mut pp = PlayPointResources::new(&config, Seat::Second);
///
/// pp.start_turn(1);
/// assert_eq!(pp.play_points(), 1);
/// assert!(!pp.can_evolve());
///
/// pp.start_turn(4);
/// assert!(pp.can_evolve());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayPointResources {
    seat: Seat,
    pp: i64,
    max_pp: i64,
    pp_cap: i64,
    ep: u32,
    sep: u32,
    evolve_turn: u32,
    super_evolve_turn: Option<u32>,
    current_turn: u32,
}

impl PlayPointResources {
    /// Create the pools a ruleset grants a seat.
    #[must_use]
    pub fn new(config: &RulesConfig, seat: Seat) -> Self {
        let (ep, evolve_turn) = match seat {
            Seat::First => (config.evolution_points_first, config.evolve_turn_first),
            Seat::Second => (config.evolution_points_second, config.evolve_turn_second),
        };
        let sep = if config.has_super_evolution() {
            config.super_evolution_points
        } else {
            0
        };

        Self {
            seat,
            pp: 0,
            max_pp: 0,
            pp_cap: config.play_point_cap,
            ep,
            sep,
            evolve_turn,
            super_evolve_turn: config.super_evolve_turn,
            current_turn: 0,
        }
    }

    /// Seat these pools belong to.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Unspent play points.
    #[must_use]
    pub fn play_points(&self) -> i64 {
        self.pp
    }

    /// Play points refilled each turn.
    #[must_use]
    pub fn max_play_points(&self) -> i64 {
        self.max_pp
    }

    /// Remaining evolution points.
    #[must_use]
    pub fn evolution_points(&self) -> u32 {
        self.ep
    }

    /// Remaining super evolution points.
    #[must_use]
    pub fn super_evolution_points(&self) -> u32 {
        self.sep
    }
}

impl ResourceManager for PlayPointResources {
    fn start_turn(&mut self, turn_number: u32) {
        if self.max_pp < self.pp_cap {
            self.max_pp += 1;
        }
        self.pp = self.max_pp;
        self.current_turn = turn_number;
    }

    fn can_play_card(&self, card: &Card) -> bool {
        self.pp >= card.cost()
    }

    fn spend_resources_for_card(&mut self, card: &Card) -> Result<(), ResourceError> {
        let cost = card.cost();
        if self.pp < cost {
            return Err(ResourceError::InsufficientPlayPoints {
                needed: cost,
                available: self.pp,
            });
        }
        self.pp -= cost.max(0);
        Ok(())
    }

    fn can_evolve(&self) -> bool {
        self.ep > 0 && self.current_turn >= self.evolve_turn
    }

    fn spend_evolution_point(&mut self) -> Result<(), ResourceError> {
        if self.ep == 0 {
            return Err(ResourceError::NoEvolutionPoints);
        }
        self.ep -= 1;
        Ok(())
    }

    fn can_super_evolve(&self) -> bool {
        self.sep > 0
            && self
                .super_evolve_turn
                .is_some_and(|turn| self.current_turn >= turn)
    }

    fn spend_super_evolution_point(&mut self) -> Result<(), ResourceError> {
        if self.sep == 0 {
            return Err(ResourceError::NoSuperEvolutionPoints);
        }
        self.sep -= 1;
        Ok(())
    }
}

impl std::fmt::Display for PlayPointResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PP: {}/{}, EP: {}", self.pp, self.max_pp, self.ep)?;
        if self.super_evolve_turn.is_some() {
            write!(f, ", SEP: {}", self.sep)?;
        }
        Ok(())
    }
}
