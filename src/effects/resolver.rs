//! Effect resolution.
//!
//! `EffectContext` bundles the state with the ruleset constants an effect
//! needs (hand limit, starting life). Scripts receive one and mutate the
//! game only through it.

use tracing::debug;

use super::Effect;
use crate::cards::{Card, Property};
use crate::core::{EngineError, GameState, PlayerId, RulesConfig};
use crate::zones::DrawOutcome;

/// Mutable view of a game used while resolving effects.
pub struct EffectContext<'a> {
    pub state: &'a mut GameState,
    pub config: &'a RulesConfig,
}

impl<'a> EffectContext<'a> {
    /// Create a context.
    pub fn new(state: &'a mut GameState, config: &'a RulesConfig) -> Self {
        Self { state, config }
    }

    /// Apply an effect.
    pub fn apply(&mut self, effect: &Effect) -> Result<(), EngineError> {
        EffectResolver::resolve(self.state, self.config, effect)
    }

    /// Draw `count` cards for a player.
    pub fn draw_cards(&mut self, player: PlayerId, count: usize) -> Vec<DrawOutcome> {
        EffectResolver::draw(self.state, self.config, player, count)
    }

    /// Opponents of a card's current owner.
    #[must_use]
    pub fn opponents_of(&self, card: &Card) -> Vec<PlayerId> {
        card.owner()
            .map(|owner| self.state.opponents(owner).collect())
            .unwrap_or_default()
    }
}

/// Applies effects to a game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve one effect.
    pub fn resolve(
        state: &mut GameState,
        config: &RulesConfig,
        effect: &Effect,
    ) -> Result<(), EngineError> {
        match effect {
            Effect::DamageLeader { player, amount } => {
                let target = state.player_mut(*player);
                target.life -= amount;
                debug!(player = %target.name, amount, life = target.life, "leader damaged");
            }

            Effect::HealLeader { player, amount } => {
                let target = state.player_mut(*player);
                target.life = (target.life + amount).min(config.starting_life);
                debug!(player = %target.name, amount, life = target.life, "leader healed");
            }

            Effect::Draw { player, count } => {
                Self::draw(state, config, *player, *count);
            }

            Effect::Buff {
                card,
                attack,
                defense,
            } => {
                let owner = state
                    .find_card(*card)
                    .map(|(location, _)| location.owner)
                    .ok_or_else(|| EngineError::TargetNotFound(card.to_string()))?;
                let target = state
                    .board_card_mut(owner, *card)
                    .ok_or_else(|| EngineError::TargetNotFound(card.to_string()))?;
                target.modify_int(Property::Attack, *attack);
                target.modify_int(Property::Defense, *defense);
                debug!(card = %target, "buffed");
            }

            Effect::Batch(effects) => {
                for effect in effects {
                    Self::resolve(state, config, effect)?;
                }
            }
        }
        Ok(())
    }

    /// Draw cards one at a time, stopping at deck-out.
    pub fn draw(
        state: &mut GameState,
        config: &RulesConfig,
        player: PlayerId,
        count: usize,
    ) -> Vec<DrawOutcome> {
        let mut outcomes = Vec::with_capacity(count);
        for _ in 0..count {
            let outcome = state.draw_card(player, config.hand_limit);
            outcomes.push(outcome);
            if outcome == DrawOutcome::DeckedOut {
                break;
            }
        }
        outcomes
    }
}
