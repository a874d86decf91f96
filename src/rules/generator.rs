//! Legal action enumeration.
//!
//! The generator is read-only over the state and is called once per
//! decision point. Output order is plays, attacks, evolves, super evolves,
//! then `END_TURN`, which is always present once the game has started.
//!
//! ## Attack eligibility
//!
//! A creature played this turn is summoning sick:
//! - Storm lifts the restriction entirely
//! - Rush, or fast-attack gained from evolving this turn, allows attacking
//!   creatures only
//!
//! If an opponent controls Ward creatures, those are the only legal targets
//! on that opponent's side and the leader cannot be attacked.

use smallvec::SmallVec;
use tracing::trace;

use crate::cards::{Card, Keyword};
use crate::core::{Action, AttackTarget, GameState, Player, PlayerId, RulesConfig};
use crate::resources::ResourceManager;

/// What a creature may attack this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackPermissions {
    pub leader: bool,
    pub creatures: bool,
}

impl AttackPermissions {
    /// Work out what `card` may attack on `turn_number`.
    #[must_use]
    pub fn for_card(card: &Card, turn_number: u32) -> Self {
        let summoning_sick = card.turn_played == Some(turn_number);
        if !summoning_sick || card.has_keyword(Keyword::Storm) {
            return Self {
                leader: true,
                creatures: true,
            };
        }
        let rush = card.has_keyword(Keyword::Rush) || card.gained_rush_this_turn();
        Self {
            leader: false,
            creatures: rush,
        }
    }

    /// Can the card attack anything at all?
    #[must_use]
    pub fn any(self) -> bool {
        self.leader || self.creatures
    }
}

/// Enumerates legal actions under a ruleset.
///
/// ## Example
///
/// ```
/// use tcg_sim::core::{GameState, RulesConfig};
/// use tcg_sim::rules::ActionGenerator;
///
/// let config = RulesConfig::ruleset_one();
/// let mut state = GameState::new(&["Alice", "Bob"], 10, 0).unwrap();
/// state.start_game();
///
/// let actions = ActionGenerator::new(&config).possible_actions(&state);
/// assert!(actions.last().unwrap().is_end_turn());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ActionGenerator<'a> {
    config: &'a RulesConfig,
}

impl<'a> ActionGenerator<'a> {
    /// Create a generator for a ruleset.
    #[must_use]
    pub fn new(config: &'a RulesConfig) -> Self {
        Self { config }
    }

    /// Legal actions for the active player. Empty before the game starts.
    #[must_use]
    pub fn possible_actions(&self, state: &GameState) -> Vec<Action> {
        match state.active_player() {
            Some(active) => self.actions_for(state, active),
            None => Vec::new(),
        }
    }

    /// Legal actions for `player`, assuming it is their turn.
    #[must_use]
    pub fn actions_for(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        let mut actions = Vec::new();
        self.play_actions(state, player, &mut actions);
        self.attack_actions(state, player, &mut actions);
        self.evolve_actions(state, player, &mut actions);
        self.super_evolve_actions(state, player, &mut actions);
        actions.push(Action::end_turn(player));

        trace!(player = %state.player(player).name, count = actions.len(), "actions generated");
        actions
    }

    fn play_actions(&self, state: &GameState, player: PlayerId, out: &mut Vec<Action>) {
        let me = state.player(player);
        let Some(resources) = me.resources.as_ref() else {
            return;
        };
        if me.board.len() >= self.config.board_capacity {
            return;
        }

        out.extend(
            me.hand
                .iter()
                .filter(|card| resources.can_play_card(card))
                .map(|card| Action::play_card(player, card.instance_id)),
        );
    }

    fn attack_actions(&self, state: &GameState, player: PlayerId, out: &mut Vec<Action>) {
        let me = state.player(player);

        for attacker in me.board.iter().filter(|c| c.is_creature()) {
            if attacker.attacks_exhausted() {
                continue;
            }
            let permissions = AttackPermissions::for_card(attacker, state.turn_number);
            if !permissions.any() {
                continue;
            }

            for opponent in state.opponents(player) {
                for target in attack_targets(state.player(opponent), permissions) {
                    out.push(Action::attack(player, attacker.instance_id, target));
                }
            }
        }
    }

    fn evolve_actions(&self, state: &GameState, player: PlayerId, out: &mut Vec<Action>) {
        if state.turn.evolved {
            return;
        }
        let me = state.player(player);
        if !me.resources.as_ref().is_some_and(|r| r.can_evolve()) {
            return;
        }

        out.extend(
            me.board
                .iter()
                .filter(|c| c.is_creature() && !c.is_evolved())
                .map(|c| Action::evolve(player, c.instance_id)),
        );
    }

    fn super_evolve_actions(&self, state: &GameState, player: PlayerId, out: &mut Vec<Action>) {
        if state.turn.evolved || state.turn.super_evolved || !self.config.has_super_evolution() {
            return;
        }
        let me = state.player(player);
        if !me.resources.as_ref().is_some_and(|r| r.can_super_evolve()) {
            return;
        }

        out.extend(
            me.board
                .iter()
                .filter(|c| c.is_creature() && c.is_evolved() && !c.is_super_evolved())
                .map(|c| Action::super_evolve(player, c.instance_id)),
        );
    }
}

/// Valid targets on one opponent's side.
pub(crate) fn attack_targets(
    opponent: &Player,
    permissions: AttackPermissions,
) -> SmallVec<[AttackTarget; 6]> {
    let creatures = || opponent.board.iter().filter(|c| c.is_creature());
    let mut targets = SmallVec::new();

    let has_ward = creatures().any(|c| c.has_keyword(Keyword::Ward));
    if has_ward {
        if permissions.creatures {
            targets.extend(
                creatures()
                    .filter(|c| c.has_keyword(Keyword::Ward))
                    .map(|c| AttackTarget::Card(c.instance_id)),
            );
        }
        return targets;
    }

    if permissions.leader {
        targets.push(AttackTarget::Leader(opponent.id));
    }
    if permissions.creatures {
        targets.extend(creatures().map(|c| AttackTarget::Card(c.instance_id)));
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardTemplate;
    use crate::core::{ActionType, GameMode, InstanceId};
    use crate::resources::{ResourcePool, Seat};

    fn sv_state() -> (GameState, RulesConfig) {
        let config = RulesConfig::shadowverse(GameMode::Classic);
        let mut state = GameState::new(&["Alice", "Bob"], 20, 0).unwrap();
        for id in [PlayerId::new(0), PlayerId::new(1)] {
            state.player_mut(id).resources =
                Some(ResourcePool::for_seat(&config, Seat::from_index(id.index())));
        }
        state.start_game();
        (state, config)
    }

    fn creature(id: u32, template: CardTemplate) -> Card {
        Card::from_template(&template, InstanceId(id))
    }

    fn goblin(id: u32) -> Card {
        creature(id, CardTemplate::creature("GOBLIN", "Goblin", 1, 1, 2))
    }

    #[test]
    fn test_permissions() {
        let mut card = goblin(1);
        assert!(AttackPermissions::for_card(&card, 3).leader);

        card.turn_played = Some(3);
        assert!(!AttackPermissions::for_card(&card, 3).any());

        card.set_property(crate::cards::Property::GainedRushThisTurn, true);
        let p = AttackPermissions::for_card(&card, 3);
        assert!(p.creatures && !p.leader);

        let mut storm = creature(
            2,
            CardTemplate::creature("S", "S", 1, 1, 1).with_keyword(Keyword::Storm),
        );
        storm.turn_played = Some(3);
        assert!(AttackPermissions::for_card(&storm, 3).leader);
    }

    #[test]
    fn test_not_started_is_empty() {
        let config = RulesConfig::ruleset_one();
        let state = GameState::new(&["Alice", "Bob"], 10, 0).unwrap();
        assert!(ActionGenerator::new(&config).possible_actions(&state).is_empty());
    }

    #[test]
    fn test_play_needs_resources() {
        let (mut state, config) = sv_state();
        let alice = PlayerId::new(0);
        state.player_mut(alice).hand.add(goblin(1));
        state
            .player_mut(alice)
            .hand
            .add(creature(2, CardTemplate::creature("OGRE", "Ogre", 3, 3, 3)));
        state.player_mut(alice).resources_mut().unwrap().start_turn(1);

        let actions = ActionGenerator::new(&config).possible_actions(&state);

        assert_eq!(actions, vec![Action::play_card(alice, InstanceId(1)), Action::end_turn(alice)]);
    }

    #[test]
    fn test_full_board_blocks_all_plays() {
        let (mut state, _) = sv_state();
        let config = RulesConfig::shadowverse(GameMode::Classic).with_board_capacity(1);
        let alice = PlayerId::new(0);
        state.player_mut(alice).board.add(goblin(1));
        state.player_mut(alice).hand.add(goblin(2));
        state
            .player_mut(alice)
            .hand
            .add(Card::from_template(&CardTemplate::spell("BOLT", "Bolt", 0), InstanceId(3)));
        state.player_mut(alice).resources_mut().unwrap().start_turn(1);

        let actions = ActionGenerator::new(&config).possible_actions(&state);

        assert!(actions.iter().all(|a| a.action_type() != ActionType::PlayCard));
        let bob = PlayerId::new(1);
        assert!(actions.contains(&Action::attack(alice, InstanceId(1), AttackTarget::Leader(bob))));
    }

    #[test]
    fn test_ward_restricts_targets() {
        let (mut state, config) = sv_state();
        let alice = PlayerId::new(0);
        let bob = PlayerId::new(1);
        state.player_mut(alice).board.add(goblin(1));
        state.player_mut(bob).board.add(goblin(2));
        state.player_mut(bob).board.add(creature(
            3,
            CardTemplate::creature("WALL", "Wall", 2, 0, 4).with_keyword(Keyword::Ward),
        ));

        let attacks: Vec<_> = ActionGenerator::new(&config)
            .possible_actions(&state)
            .into_iter()
            .filter(|a| a.action_type() == ActionType::Attack)
            .collect();

        assert_eq!(
            attacks,
            vec![Action::attack(alice, InstanceId(1), AttackTarget::Card(InstanceId(3)))]
        );
    }

    #[test]
    fn test_targets_without_ward() {
        let (mut state, config) = sv_state();
        let alice = PlayerId::new(0);
        let bob = PlayerId::new(1);
        state.player_mut(alice).board.add(goblin(1));
        state.player_mut(bob).board.add(goblin(2));
        state.player_mut(bob).board.add(creature(4, CardTemplate::amulet("TOTEM", "Totem", 1)));

        let actions = ActionGenerator::new(&config).possible_actions(&state);

        assert_eq!(
            actions,
            vec![
                Action::attack(alice, InstanceId(1), AttackTarget::Leader(bob)),
                Action::attack(alice, InstanceId(1), AttackTarget::Card(InstanceId(2))),
                Action::end_turn(alice),
            ]
        );
    }

    #[test]
    fn test_exhausted_attacker_skipped() {
        let (mut state, config) = sv_state();
        let mut tired = goblin(1);
        tired.attacks_made_this_turn = 1;
        state.player_mut(PlayerId::new(0)).board.add(tired);

        let actions = ActionGenerator::new(&config).possible_actions(&state);

        assert_eq!(actions, vec![Action::end_turn(PlayerId::new(0))]);
    }

    #[test]
    fn test_evolve_once_per_turn() {
        let (mut state, config) = sv_state();
        let alice = PlayerId::new(0);
        state.turn_number = 5;
        state.player_mut(alice).resources_mut().unwrap().start_turn(5);
        let mut evolved = goblin(2);
        evolved.set_property(crate::cards::Property::IsEvolved, true);
        state.player_mut(alice).board.add(goblin(1));
        state.player_mut(alice).board.add(evolved);

        let generator = ActionGenerator::new(&config);
        let actions = generator.possible_actions(&state);
        assert!(actions.contains(&Action::evolve(alice, InstanceId(1))));
        assert!(!actions.contains(&Action::evolve(alice, InstanceId(2))));

        state.turn.evolved = true;
        let actions = generator.possible_actions(&state);
        assert!(actions.iter().all(|a| a.action_type() != ActionType::Evolve));
    }

    #[test]
    fn test_super_evolve_needs_evolved_card() {
        let config = RulesConfig::shadowverse(GameMode::WorldsBeyond);
        let mut state = GameState::new(&["Alice", "Bob"], 20, 0).unwrap();
        let alice = PlayerId::new(0);
        state.player_mut(alice).resources = Some(ResourcePool::for_seat(&config, Seat::First));
        state.start_game();
        state.turn_number = 7;
        state.player_mut(alice).resources_mut().unwrap().start_turn(7);

        let mut evolved = goblin(2);
        evolved.set_property(crate::cards::Property::IsEvolved, true);
        state.player_mut(alice).board.add(goblin(1));
        state.player_mut(alice).board.add(evolved);

        let actions = ActionGenerator::new(&config).possible_actions(&state);

        assert!(actions.contains(&Action::super_evolve(alice, InstanceId(2))));
        assert!(!actions.contains(&Action::super_evolve(alice, InstanceId(1))));

        // An evolve earlier in the turn uses up the turn's upgrade.
        state.turn.evolved = true;
        let actions = ActionGenerator::new(&config).possible_actions(&state);
        assert!(actions.iter().all(|a| a.action_type() != ActionType::SuperEvolve));
    }
}
