//! Action application: the core state machine.
//!
//! Each action is applied in place and posts its trigger events right after
//! the mutation that caused them. Actions not drawn from the generator's
//! output for the current state fail with an `EngineError` and leave the
//! state untouched.
//!
//! ## Combat
//!
//! Attacks are re-checked against summoning sickness and Ward before any
//! damage is dealt. Damage is simultaneous. Destruction is checked target first, then
//! attacker, and each destroyed creature posts `on_destroy` in that order.

use tracing::debug;

use crate::cards::{Card, Property};
use crate::core::{
    Action, ActionKind, AttackTarget, EngineError, GameState, InstanceId, PlayerId, RulesConfig,
    StatBoost,
};
use super::generator::{attack_targets, AttackPermissions};
use crate::effects::{Effect, EffectContext};
use crate::resources::ResourceManager;
use crate::triggers::{EngineEvent, TriggerDispatcher};
use crate::zones::ZoneKind;

/// Applies actions under a ruleset, posting events to a dispatcher.
#[derive(Clone, Copy, Debug)]
pub struct ActionApplier<'a> {
    config: &'a RulesConfig,
    dispatcher: &'a TriggerDispatcher,
}

impl<'a> ActionApplier<'a> {
    /// Create an applier.
    #[must_use]
    pub fn new(config: &'a RulesConfig, dispatcher: &'a TriggerDispatcher) -> Self {
        Self { config, dispatcher }
    }

    /// Apply one action.
    pub fn apply(&self, state: &mut GameState, action: &Action) -> Result<(), EngineError> {
        let active = state.require_active()?;
        if action.player != active {
            return Err(EngineError::NotActivePlayer {
                expected: active,
                actual: action.player,
            });
        }

        debug!(turn = state.turn_number, action = %action.describe(state), "apply");

        match action.kind {
            ActionKind::EndTurn => Ok(()),
            ActionKind::PlayCard { card } => self.play_card(state, active, card),
            ActionKind::Attack { attacker, target } => self.attack(state, active, attacker, target),
            ActionKind::Evolve { target } => self.evolve(state, active, target),
            ActionKind::SuperEvolve { target } => self.super_evolve(state, active, target),
        }
    }

    fn play_card(
        &self,
        state: &mut GameState,
        player: PlayerId,
        instance: InstanceId,
    ) -> Result<(), EngineError> {
        let me = state.player_mut(player);
        let card = me
            .hand
            .get(instance)
            .cloned()
            .ok_or(EngineError::CardNotFound {
                instance,
                owner: player,
                zone: ZoneKind::Hand,
            })?;

        if me.board.len() >= self.config.board_capacity {
            return Err(EngineError::BoardFull(player));
        }
        let card_type = card.card_type();

        me.resources_mut()?.spend_resources_for_card(&card)?;

        let destination = if card_type.is_permanent() {
            ZoneKind::Board
        } else {
            ZoneKind::Graveyard
        };
        me.move_card(instance, ZoneKind::Hand, destination)?;

        if card.is_creature() {
            let turn_number = state.turn_number;
            if let Some(placed) = state.board_card_mut(player, instance) {
                placed.turn_played = Some(turn_number);
            }
        }

        let snapshot = self.snapshot(state, player, destination, instance)?;
        if !card_type.is_permanent() {
            self.resolve_spell(state, player, &snapshot)?;
        }
        self.post(EngineEvent::Play, &snapshot, state);
        Ok(())
    }

    /// Resolve a one-shot card's `damage` and `draw` properties.
    fn resolve_spell(
        &self,
        state: &mut GameState,
        player: PlayerId,
        spell: &Card,
    ) -> Result<(), EngineError> {
        let damage = spell.get_int(Property::Damage, 0);
        let draw = usize::try_from(spell.get_int(Property::Draw, 0)).unwrap_or(0);

        let mut effects: Vec<Effect> = state
            .opponents(player)
            .map(|opponent| Effect::damage(opponent, damage))
            .collect();
        effects.push(Effect::draw(player, draw));

        let effect = Effect::batch(effects);
        if effect.is_noop() {
            return Ok(());
        }
        EffectContext::new(state, self.config).apply(&effect)
    }

    fn attack(
        &self,
        state: &mut GameState,
        player: PlayerId,
        attacker_id: InstanceId,
        target: AttackTarget,
    ) -> Result<(), EngineError> {
        let attacker = state
            .player(player)
            .board
            .get(attacker_id)
            .ok_or(EngineError::CardNotFound {
                instance: attacker_id,
                owner: player,
                zone: ZoneKind::Board,
            })?;
        let permissions = AttackPermissions::for_card(attacker, state.turn_number);
        if !attacker.is_creature() || attacker.attacks_exhausted() || !permissions.any() {
            return Err(EngineError::IllegalAction(format!(
                "{} cannot attack",
                attacker.name
            )));
        }
        let power = attacker.power();

        let defender = match target {
            AttackTarget::Leader(defender) => {
                if defender == player || defender.index() >= state.player_count() {
                    return Err(EngineError::TargetNotFound(defender.to_string()));
                }
                defender
            }
            AttackTarget::Card(target_id) => state
                .opponents(player)
                .find(|&p| state.player(p).board.contains(target_id))
                .ok_or_else(|| EngineError::TargetNotFound(target_id.to_string()))?,
        };
        if !attack_targets(state.player(defender), permissions).contains(&target) {
            return Err(EngineError::IllegalAction(format!(
                "{} cannot attack {target:?}",
                attacker.name
            )));
        }

        match target {
            AttackTarget::Leader(_) => {
                self.mark_attacked(state, player, attacker_id);

                let defender = state.player_mut(defender);
                defender.life -= power;
                debug!(player = %defender.name, damage = power, life = defender.life, "leader hit");
                Ok(())
            }
            AttackTarget::Card(target_id) => {
                self.mark_attacked(state, player, attacker_id);

                let counter = state
                    .player(defender)
                    .board
                    .get(target_id)
                    .map_or(0, Card::power);

                if let Some(target) = state.board_card_mut(defender, target_id) {
                    target.modify_int(Property::Defense, -power);
                }
                if let Some(attacker) = state.board_card_mut(player, attacker_id) {
                    attacker.modify_int(Property::Defense, -counter);
                }

                self.destroy_if_dead(state, defender, target_id)?;
                self.destroy_if_dead(state, player, attacker_id)?;
                Ok(())
            }
        }
    }

    fn mark_attacked(&self, state: &mut GameState, player: PlayerId, attacker: InstanceId) {
        if let Some(card) = state.board_card_mut(player, attacker) {
            card.attacks_made_this_turn += 1;
        }
    }

    fn destroy_if_dead(
        &self,
        state: &mut GameState,
        owner: PlayerId,
        instance: InstanceId,
    ) -> Result<(), EngineError> {
        let dead = state
            .player(owner)
            .board
            .get(instance)
            .is_some_and(|c| c.defense() <= 0);
        if !dead {
            return Ok(());
        }

        state
            .player_mut(owner)
            .move_card(instance, ZoneKind::Board, ZoneKind::Graveyard)?;
        let snapshot = self.snapshot(state, owner, ZoneKind::Graveyard, instance)?;
        debug!(card = %snapshot.name, "destroyed");
        self.post(EngineEvent::Destroy, &snapshot, state);
        Ok(())
    }

    fn evolve(
        &self,
        state: &mut GameState,
        player: PlayerId,
        target: InstanceId,
    ) -> Result<(), EngineError> {
        if state.turn.evolved {
            return Err(EngineError::IllegalAction(
                "already evolved this turn".to_string(),
            ));
        }
        let card = self.board_creature(state, player, target)?;
        if card.is_evolved() {
            return Err(EngineError::IllegalAction(format!(
                "{} is already evolved",
                card.name
            )));
        }

        let resources = state.player_mut(player).resources_mut()?;
        if !resources.can_evolve() {
            return Err(EngineError::IllegalAction("cannot evolve yet".to_string()));
        }
        resources.spend_evolution_point()?;
        state.turn.evolved = true;

        self.upgrade(state, player, target, self.config.evolve_boost, Property::IsEvolved);
        let snapshot = self.snapshot(state, player, ZoneKind::Board, target)?;
        self.post(EngineEvent::Evolve, &snapshot, state);
        Ok(())
    }

    fn super_evolve(
        &self,
        state: &mut GameState,
        player: PlayerId,
        target: InstanceId,
    ) -> Result<(), EngineError> {
        if state.turn.evolved || state.turn.super_evolved {
            return Err(EngineError::IllegalAction(
                "already evolved this turn".to_string(),
            ));
        }
        let card = self.board_creature(state, player, target)?;
        if !card.is_evolved() || card.is_super_evolved() {
            return Err(EngineError::IllegalAction(format!(
                "{} cannot super evolve",
                card.name
            )));
        }

        let resources = state.player_mut(player).resources_mut()?;
        if !resources.can_super_evolve() {
            return Err(EngineError::IllegalAction(
                "cannot super evolve yet".to_string(),
            ));
        }
        resources.spend_super_evolution_point()?;
        state.turn.super_evolved = true;
        state.turn.evolved = true;

        self.upgrade(
            state,
            player,
            target,
            self.config.super_evolve_boost,
            Property::IsSuperEvolved,
        );
        let snapshot = self.snapshot(state, player, ZoneKind::Board, target)?;
        self.post(EngineEvent::SuperEvolve, &snapshot, state);
        Ok(())
    }

    fn board_creature<'s>(
        &self,
        state: &'s GameState,
        player: PlayerId,
        instance: InstanceId,
    ) -> Result<&'s Card, EngineError> {
        let card = state
            .player(player)
            .board
            .get(instance)
            .ok_or(EngineError::CardNotFound {
                instance,
                owner: player,
                zone: ZoneKind::Board,
            })?;
        if !card.is_creature() {
            return Err(EngineError::IllegalAction(format!(
                "{} is not a creature",
                card.name
            )));
        }
        Ok(card)
    }

    fn upgrade(
        &self,
        state: &mut GameState,
        player: PlayerId,
        instance: InstanceId,
        boost: StatBoost,
        flag: Property,
    ) {
        if let Some(card) = state.board_card_mut(player, instance) {
            card.modify_int(Property::Attack, boost.attack);
            card.modify_int(Property::Defense, boost.defense);
            card.set_property(flag, true);
            card.set_property(Property::GainedRushThisTurn, true);
            debug!(card = %card, "upgraded");
        }
    }

    fn snapshot(
        &self,
        state: &GameState,
        owner: PlayerId,
        zone: ZoneKind,
        instance: InstanceId,
    ) -> Result<Card, EngineError> {
        state
            .player(owner)
            .zone(zone)
            .get(instance)
            .cloned()
            .ok_or(EngineError::CardNotFound {
                instance,
                owner,
                zone,
            })
    }

    fn post(&self, event: EngineEvent, card: &Card, state: &mut GameState) {
        let mut ctx = EffectContext::new(state, self.config);
        self.dispatcher.post_event(event, card, &mut ctx);
    }
}
