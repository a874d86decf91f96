//! Candidate moves.
//!
//! An `Action` is an immutable description of one legal move: the acting
//! player plus a typed payload. The generator builds a fresh list at every
//! decision point and the applier consumes exactly one of them.
//!
//! Actions order by `(player, kind)`, which gives a stable key for comparing
//! two generator outputs.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::player::PlayerId;
use super::state::GameState;

/// Action type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    PlayCard,
    Attack,
    Evolve,
    SuperEvolve,
    EndTurn,
}

impl ActionType {
    /// Wire name, e.g. `PLAY_CARD`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::PlayCard => "PLAY_CARD",
            ActionType::Attack => "ATTACK",
            ActionType::Evolve => "EVOLVE",
            ActionType::SuperEvolve => "SUPER_EVOLVE",
            ActionType::EndTurn => "END_TURN",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an attack hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttackTarget {
    /// A player's life total.
    Leader(PlayerId),
    /// A creature on an opposing board.
    Card(InstanceId),
}

/// Typed action payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    PlayCard { card: InstanceId },
    Attack { attacker: InstanceId, target: AttackTarget },
    Evolve { target: InstanceId },
    SuperEvolve { target: InstanceId },
    EndTurn,
}

/// One candidate move.
///
/// ## Example
///
/// ```
/// use tcg_sim::core::{Action, ActionType, AttackTarget, InstanceId, PlayerId};
///
/// let p0 = PlayerId::new(0);
/// let attack = Action::attack(p0, InstanceId(3), AttackTarget::Leader(PlayerId::new(1)));
///
/// assert_eq!(attack.action_type(), ActionType::Attack);
/// assert_eq!(Action::end_turn(p0).action_type().as_str(), "END_TURN");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Acting player.
    pub player: PlayerId,

    /// Payload.
    pub kind: ActionKind,
}

impl Action {
    /// Create an action.
    #[must_use]
    pub const fn new(player: PlayerId, kind: ActionKind) -> Self {
        Self { player, kind }
    }

    /// Play a card from hand.
    #[must_use]
    pub const fn play_card(player: PlayerId, card: InstanceId) -> Self {
        Self::new(player, ActionKind::PlayCard { card })
    }

    /// Attack with a board creature.
    #[must_use]
    pub const fn attack(player: PlayerId, attacker: InstanceId, target: AttackTarget) -> Self {
        Self::new(player, ActionKind::Attack { attacker, target })
    }

    /// Evolve a board creature.
    #[must_use]
    pub const fn evolve(player: PlayerId, target: InstanceId) -> Self {
        Self::new(player, ActionKind::Evolve { target })
    }

    /// Super evolve an evolved board creature.
    #[must_use]
    pub const fn super_evolve(player: PlayerId, target: InstanceId) -> Self {
        Self::new(player, ActionKind::SuperEvolve { target })
    }

    /// Pass the turn.
    #[must_use]
    pub const fn end_turn(player: PlayerId) -> Self {
        Self::new(player, ActionKind::EndTurn)
    }

    /// The type tag.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self.kind {
            ActionKind::PlayCard { .. } => ActionType::PlayCard,
            ActionKind::Attack { .. } => ActionType::Attack,
            ActionKind::Evolve { .. } => ActionType::Evolve,
            ActionKind::SuperEvolve { .. } => ActionType::SuperEvolve,
            ActionKind::EndTurn => ActionType::EndTurn,
        }
    }

    /// Is this the end-of-turn action?
    #[must_use]
    pub fn is_end_turn(&self) -> bool {
        self.kind == ActionKind::EndTurn
    }

    /// Human-readable text using card and player names from `state`.
    ///
    /// Unknown ids fall back to their numeric form.
    #[must_use]
    pub fn describe(&self, state: &GameState) -> String {
        let card_name = |id: InstanceId| {
            state
                .find_card(id)
                .map_or_else(|| id.to_string(), |(_, card)| card.name.clone())
        };

        match self.kind {
            ActionKind::PlayCard { card } => format!("Play Card: {}", card_name(card)),
            ActionKind::Attack { attacker, target } => {
                let target = match target {
                    AttackTarget::Leader(p) => state.player(p).name.clone(),
                    AttackTarget::Card(id) => card_name(id),
                };
                format!("Attack: {} attacks {}", card_name(attacker), target)
            }
            ActionKind::Evolve { target } => format!("Evolve: {}", card_name(target)),
            ActionKind::SuperEvolve { target } => format!("Super Evolve: {}", card_name(target)),
            ActionKind::EndTurn => "End Turn".to_string(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ActionKind::PlayCard { card } => write!(f, "{} PLAY_CARD {}", self.player, card),
            ActionKind::Attack { attacker, target } => match target {
                AttackTarget::Leader(p) => {
                    write!(f, "{} ATTACK {} -> {}", self.player, attacker, p)
                }
                AttackTarget::Card(id) => {
                    write!(f, "{} ATTACK {} -> {}", self.player, attacker, id)
                }
            },
            ActionKind::Evolve { target } => write!(f, "{} EVOLVE {}", self.player, target),
            ActionKind::SuperEvolve { target } => {
                write!(f, "{} SUPER_EVOLVE {}", self.player, target)
            }
            ActionKind::EndTurn => write!(f, "{} END_TURN", self.player),
        }
    }
}
