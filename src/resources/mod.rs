//! Per-player resource economies.
//!
//! A resource manager gates and pays for actions. It only touches its own
//! counters and never moves cards.
//!
//! ## Key Types
//!
//! - `ResourceManager`: The gate/spend contract
//! - `UnmeteredResources`: Free plays, no evolution
//! - `PlayPointResources`: Play points plus evolution pools
//! - `ResourcePool`: The manager a `Player` carries, one variant per economy
//! - `Seat`: Whether a player acts first or second

pub mod play_points;
pub mod unmetered;

pub use play_points::PlayPointResources;
pub use unmetered::UnmeteredResources;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::{ResourceModel, RulesConfig};
use crate::core::error::ResourceError;

/// Turn order position. Rulesets compensate the second seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Seat for a player index: index 0 acts first.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        if index == 0 {
            Seat::First
        } else {
            Seat::Second
        }
    }
}

/// Resource gate and spend contract.
///
/// Callers must check `can_*` before the matching spend. A spend without
/// enough resources returns an error and leaves the counters untouched.
pub trait ResourceManager {
    /// Refill and grow resources for the owner's turn.
    fn start_turn(&mut self, turn_number: u32);

    /// Can the owner afford this card?
    fn can_play_card(&self, card: &Card) -> bool;

    /// Pay for a card.
    fn spend_resources_for_card(&mut self, card: &Card) -> Result<(), ResourceError>;

    /// Is an evolution available right now?
    fn can_evolve(&self) -> bool;

    /// Pay for an evolution.
    fn spend_evolution_point(&mut self) -> Result<(), ResourceError>;

    /// Is a super evolution available right now?
    fn can_super_evolve(&self) -> bool;

    /// Pay for a super evolution.
    fn spend_super_evolution_point(&mut self) -> Result<(), ResourceError>;
}

/// The resource manager attached to a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourcePool {
    Unmetered(UnmeteredResources),
    PlayPoints(PlayPointResources),
}

impl ResourcePool {
    /// Build the pool a ruleset gives a seat.
    #[must_use]
    pub fn for_seat(config: &RulesConfig, seat: Seat) -> Self {
        match config.resources {
            ResourceModel::Unmetered => ResourcePool::Unmetered(UnmeteredResources::new()),
            ResourceModel::PlayPoints => {
                ResourcePool::PlayPoints(PlayPointResources::new(config, seat))
            }
        }
    }

    fn manager(&self) -> &dyn ResourceManager {
        match self {
            ResourcePool::Unmetered(r) => r,
            ResourcePool::PlayPoints(r) => r,
        }
    }

    fn manager_mut(&mut self) -> &mut dyn ResourceManager {
        match self {
            ResourcePool::Unmetered(r) => r,
            ResourcePool::PlayPoints(r) => r,
        }
    }

    /// Play point view, if this pool meters plays.
    #[must_use]
    pub fn play_points(&self) -> Option<&PlayPointResources> {
        match self {
            ResourcePool::PlayPoints(r) => Some(r),
            ResourcePool::Unmetered(_) => None,
        }
    }
}

impl ResourceManager for ResourcePool {
    fn start_turn(&mut self, turn_number: u32) {
        self.manager_mut().start_turn(turn_number);
    }

    fn can_play_card(&self, card: &Card) -> bool {
        self.manager().can_play_card(card)
    }

    fn spend_resources_for_card(&mut self, card: &Card) -> Result<(), ResourceError> {
        self.manager_mut().spend_resources_for_card(card)
    }

    fn can_evolve(&self) -> bool {
        self.manager().can_evolve()
    }

    fn spend_evolution_point(&mut self) -> Result<(), ResourceError> {
        self.manager_mut().spend_evolution_point()
    }

    fn can_super_evolve(&self) -> bool {
        self.manager().can_super_evolve()
    }

    fn spend_super_evolution_point(&mut self) -> Result<(), ResourceError> {
        self.manager_mut().spend_super_evolution_point()
    }
}

impl std::fmt::Display for ResourcePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourcePool::Unmetered(_) => f.write_str("unmetered"),
            ResourcePool::PlayPoints(r) => write!(f, "{r}"),
        }
    }
}
