//! Effect definitions.
//!
//! Effects are the atomic state changes shared by property-driven spells
//! and card scripts. Combat and zone moves made by the applier itself do
//! not go through here.

use serde::{Deserialize, Serialize};

use crate::core::{InstanceId, PlayerId};

/// An atomic game effect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Reduce a player's life.
    DamageLeader { player: PlayerId, amount: i64 },

    /// Restore a player's life, never above the starting value.
    HealLeader { player: PlayerId, amount: i64 },

    /// Draw cards, honouring the hand limit.
    Draw { player: PlayerId, count: usize },

    /// Change a board card's attack and defense.
    Buff {
        card: InstanceId,
        attack: i64,
        defense: i64,
    },

    /// Apply several effects in order.
    Batch(Vec<Effect>),
}

impl Effect {
    /// Damage a player.
    #[must_use]
    pub fn damage(player: PlayerId, amount: i64) -> Self {
        Self::DamageLeader { player, amount }
    }

    /// Heal a player.
    #[must_use]
    pub fn heal(player: PlayerId, amount: i64) -> Self {
        Self::HealLeader { player, amount }
    }

    /// Draw cards for a player.
    #[must_use]
    pub fn draw(player: PlayerId, count: usize) -> Self {
        Self::Draw { player, count }
    }

    /// Buff a board card.
    #[must_use]
    pub fn buff(card: InstanceId, attack: i64, defense: i64) -> Self {
        Self::Buff {
            card,
            attack,
            defense,
        }
    }

    /// Combine effects, flattening a single effect.
    pub fn batch(effects: impl IntoIterator<Item = Effect>) -> Self {
        let mut effects: Vec<_> = effects.into_iter().collect();
        if effects.len() == 1 {
            if let Some(effect) = effects.pop() {
                return effect;
            }
        }
        Self::Batch(effects)
    }

    /// Does applying this effect change nothing?
    #[must_use]
    pub fn is_noop(&self) -> bool {
        match self {
            Effect::DamageLeader { amount, .. } | Effect::HealLeader { amount, .. } => *amount == 0,
            Effect::Draw { count, .. } => *count == 0,
            Effect::Buff {
                attack, defense, ..
            } => *attack == 0 && *defense == 0,
            Effect::Batch(effects) => effects.iter().all(Effect::is_noop),
        }
    }
}
