//! Game state: players, turn counters and the RNG.
//!
//! `GameState` owns everything about one session. It holds no reference to
//! the rules engine; rules that need configuration receive a `RulesConfig`
//! explicitly.
//!
//! ## Turn Counters
//!
//! - `turn_number` is 0 before the game starts and 1 after `start_game`.
//! - `end_turn` advances the active seat and increments `turn_number` only
//!   when the seat index wraps back to 0.
//!
//! ## Snapshots
//!
//! Zones are persistent vectors, so `clone()` is cheap and shares card
//! storage with the original until either side mutates.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;
use super::error::{ConfigError, EngineError};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::Card;
use crate::zones::{DrawOutcome, ZoneKind};

/// Once-per-turn flags, cleared when the turn passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// An evolution happened this turn.
    pub evolved: bool,
    /// A super evolution happened this turn.
    pub super_evolved: bool,
}

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLocation {
    pub owner: PlayerId,
    pub zone: ZoneKind,
}

/// The complete state of one game session.
///
/// ## Example
///
/// ```
/// use tcg_sim::core::{GameState, PlayerId};
///
/// let mut state = GameState::new(&["Alice", "Bob"], 20, 42).unwrap();
/// assert_eq!(state.turn_number, 0);
/// assert_eq!(state.active_player(), None);
///
/// state.start_game();
/// assert_eq!(state.turn_number, 1);
/// assert_eq!(state.active_player(), Some(PlayerId::new(0)));
///
/// state.end_turn();
/// state.end_turn();
/// assert_eq!(state.turn_number, 2);
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    /// Players in seat order.
    pub players: PlayerMap<Player>,

    /// 0 before start.
    pub turn_number: u32,

    /// Once-per-turn flags for the active player.
    pub turn: TurnState,

    /// Deck shuffles and any other in-game randomness.
    pub rng: GameRng,

    active_player: Option<PlayerId>,
}

impl GameState {
    /// Create a state with one player per name.
    ///
    /// Fails with no names, too many names or a repeated name.
    pub fn new<S: AsRef<str>>(
        names: &[S],
        starting_life: i64,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if names.len() > usize::from(u8::MAX) {
            return Err(ConfigError::TooManyPlayers(names.len()));
        }
        for (i, name) in names.iter().enumerate() {
            let name = name.as_ref();
            if names[..i].iter().any(|other| other.as_ref() == name) {
                return Err(ConfigError::DuplicatePlayerName(name.to_string()));
            }
        }

        let players = PlayerMap::new(names.len(), |id| {
            Player::new(id, names[id.index()].as_ref(), starting_life)
        });

        Ok(Self {
            players,
            turn_number: 0,
            turn: TurnState::default(),
            rng: GameRng::new(seed),
            active_player: None,
        })
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// All player IDs in seat order.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        self.players.player_ids()
    }

    /// Get a player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Get a player mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Look a player up by name.
    #[must_use]
    pub fn player_by_name(&self, name: &str) -> Option<&Player> {
        self.players
            .iter()
            .map(|(_, p)| p)
            .find(|p| p.name == name)
    }

    /// Has `start_game` run?
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.active_player.is_some()
    }

    /// The active seat. `None` before start.
    #[must_use]
    pub fn active_player(&self) -> Option<PlayerId> {
        self.active_player
    }

    /// The active seat, or `NotStarted`.
    pub fn require_active(&self) -> Result<PlayerId, EngineError> {
        self.active_player.ok_or(EngineError::NotStarted)
    }

    /// Every other seat, in seat order.
    pub fn opponents(&self, player: PlayerId) -> impl Iterator<Item = PlayerId> {
        self.player_ids().filter(move |&p| p != player)
    }

    /// The first other seat. `None` in a solo game.
    #[must_use]
    pub fn opponent(&self, player: PlayerId) -> Option<PlayerId> {
        self.opponents(player).next()
    }

    /// Turn 1, seat 0 active.
    pub fn start_game(&mut self) {
        self.turn_number = 1;
        self.active_player = Some(PlayerId::new(0));
        self.turn = TurnState::default();
    }

    /// Pass the turn to the next seat. No-op before start.
    pub fn end_turn(&mut self) {
        let Some(active) = self.active_player else {
            return;
        };
        let next = (active.index() + 1) % self.player_count();
        if next == 0 {
            self.turn_number += 1;
        }
        // `next` is below player_count, which fits in u8
        self.active_player = Some(PlayerId::new(next as u8));
        self.turn = TurnState::default();
    }

    /// Replace a player's deck and shuffle it with the state RNG.
    pub fn setup_deck(&mut self, player: PlayerId, cards: Vec<Card>) {
        let Self { players, rng, .. } = self;
        players[player].setup_deck(cards, rng);
    }

    /// Draw one card for a player.
    pub fn draw_card(&mut self, player: PlayerId, hand_limit: Option<usize>) -> DrawOutcome {
        self.players[player].draw_card(hand_limit)
    }

    /// Find a card anywhere in the game.
    #[must_use]
    pub fn find_card(&self, instance: InstanceId) -> Option<(CardLocation, &Card)> {
        self.players.iter().find_map(|(owner, player)| {
            player
                .find_card(instance)
                .map(|(zone, card)| (CardLocation { owner, zone }, card))
        })
    }

    /// Get a card on a player's board mutably.
    pub fn board_card_mut(&mut self, owner: PlayerId, instance: InstanceId) -> Option<&mut Card> {
        self.players[owner].board.get_mut(instance)
    }

    /// Total cards in every zone of every player.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players
            .iter()
            .map(|(_, p)| ZoneKind::ALL.iter().map(|&k| p.zone(k).len()).sum::<usize>())
            .sum()
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.active_player {
            Some(active) => write!(
                f,
                "Turn {}: {} to act",
                self.turn_number, self.players[active].name
            ),
            None => write!(f, "Turn {}: not started", self.turn_number),
        }
    }
}
