//! Free-play economy.

use serde::{Deserialize, Serialize};

use super::ResourceManager;
use crate::cards::Card;
use crate::core::error::ResourceError;

/// Every card is affordable and there is nothing to evolve with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmeteredResources;

impl UnmeteredResources {
    /// Create the economy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ResourceManager for UnmeteredResources {
    fn start_turn(&mut self, _turn_number: u32) {}

    fn can_play_card(&self, _card: &Card) -> bool {
        true
    }

    fn spend_resources_for_card(&mut self, _card: &Card) -> Result<(), ResourceError> {
        Ok(())
    }

    fn can_evolve(&self) -> bool {
        false
    }

    fn spend_evolution_point(&mut self) -> Result<(), ResourceError> {
        Err(ResourceError::NoEvolutionPoints)
    }

    fn can_super_evolve(&self) -> bool {
        false
    }

    fn spend_super_evolution_point(&mut self) -> Result<(), ResourceError> {
        Err(ResourceError::NoSuperEvolutionPoints)
    }
}
