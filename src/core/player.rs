//! Players and per-player storage.
//!
//! ## PlayerId
//!
//! Seat index, 0-based. Seat 0 acts first.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Name, life, the four owned zones and the resource pool attached by the
//! ruleset during setup.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use tracing::debug;

use super::entity::InstanceId;
use super::error::EngineError;
use super::rng::GameRng;
use crate::cards::Card;
use crate::resources::ResourcePool;
use crate::zones::{DrawOutcome, Zone, ZoneKind};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use tcg_sim::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize all entries to the same value.
///
/// ## Example
///
/// ```
/// use tcg_sim::core::{PlayerId, PlayerMap};
///
/// // Create with factory
/// let mut life: PlayerMap<i32> = PlayerMap::new(4, |_| 20);
///
/// // Access by player
/// assert_eq!(life[PlayerId::new(0)], 20);
///
/// // Modify
/// life[PlayerId::new(1)] = 15;
/// assert_eq!(life[PlayerId::new(1)], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A participant: name, life total, zones and resources.
///
/// ## Example
///
/// ```
/// use tcg_sim::cards::{Card, CardTemplate};
/// use tcg_sim::core::{InstanceId, Player, PlayerId};
/// use tcg_sim::zones::DrawOutcome;
///
/// let mut alice = Player::new(PlayerId::new(0), "Alice", 10);
/// alice.deck.add(Card::from_template(&CardTemplate::spell("BOLT", "Bolt", 1), InstanceId(1)));
///
/// assert_eq!(alice.draw_card(None), DrawOutcome::Drawn(InstanceId(1)));
/// assert_eq!(alice.draw_card(None), DrawOutcome::DeckedOut);
/// assert!(alice.has_decked_out);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat.
    pub id: PlayerId,

    /// Unique across the game.
    pub name: String,

    /// May go below zero before the loss is detected.
    pub life: i64,

    pub hand: Zone,
    pub deck: Zone,
    pub graveyard: Zone,
    pub board: Zone,

    /// Attached by the ruleset during setup.
    pub resources: Option<ResourcePool>,

    /// Set when a draw hits an empty deck.
    pub has_decked_out: bool,
}

impl Player {
    /// Create a player with empty zones and no resources.
    pub fn new(id: PlayerId, name: impl Into<String>, life: i64) -> Self {
        Self {
            id,
            name: name.into(),
            life,
            hand: Zone::new(ZoneKind::Hand, id),
            deck: Zone::new(ZoneKind::Deck, id),
            graveyard: Zone::new(ZoneKind::Graveyard, id),
            board: Zone::new(ZoneKind::Board, id),
            resources: None,
            has_decked_out: false,
        }
    }

    /// Get a zone by kind.
    #[must_use]
    pub fn zone(&self, kind: ZoneKind) -> &Zone {
        match kind {
            ZoneKind::Hand => &self.hand,
            ZoneKind::Deck => &self.deck,
            ZoneKind::Graveyard => &self.graveyard,
            ZoneKind::Board => &self.board,
        }
    }

    /// Get a mutable zone by kind.
    pub fn zone_mut(&mut self, kind: ZoneKind) -> &mut Zone {
        match kind {
            ZoneKind::Hand => &mut self.hand,
            ZoneKind::Deck => &mut self.deck,
            ZoneKind::Graveyard => &mut self.graveyard,
            ZoneKind::Board => &mut self.board,
        }
    }

    /// Replace the deck with `cards` and shuffle it.
    pub fn setup_deck(&mut self, cards: Vec<Card>, rng: &mut GameRng) {
        self.deck.take_all();
        for card in cards {
            self.deck.add(card);
        }
        self.deck.shuffle(rng);
    }

    /// Draw the top card of the deck.
    ///
    /// An empty deck flags the player as decked out instead of failing.
    /// With a hand limit, a draw into a full hand sends the card to the
    /// graveyard.
    pub fn draw_card(&mut self, hand_limit: Option<usize>) -> DrawOutcome {
        let Some(card) = self.deck.take_top() else {
            self.has_decked_out = true;
            debug!(player = %self.name, "decked out");
            return DrawOutcome::DeckedOut;
        };

        let id = card.instance_id;
        if hand_limit.is_some_and(|limit| self.hand.len() >= limit) {
            debug!(player = %self.name, card = %card.name, "hand full, card burned");
            self.graveyard.add(card);
            DrawOutcome::Burned(id)
        } else {
            self.hand.add(card);
            DrawOutcome::Drawn(id)
        }
    }

    /// Move a card between two of this player's zones.
    pub fn move_card(
        &mut self,
        instance: InstanceId,
        from: ZoneKind,
        to: ZoneKind,
    ) -> Result<(), EngineError> {
        let card = self
            .zone_mut(from)
            .remove(instance)
            .ok_or(EngineError::CardNotFound {
                instance,
                owner: self.id,
                zone: from,
            })?;
        debug!(player = %self.name, card = %card.name, %from, %to, "zone move");
        self.zone_mut(to).add(card);
        Ok(())
    }

    /// Find a card in any zone.
    #[must_use]
    pub fn find_card(&self, instance: InstanceId) -> Option<(ZoneKind, &Card)> {
        ZoneKind::ALL
            .into_iter()
            .find_map(|kind| self.zone(kind).get(instance).map(|card| (kind, card)))
    }

    /// The attached resource pool.
    pub fn resources(&self) -> Result<&ResourcePool, EngineError> {
        self.resources
            .as_ref()
            .ok_or(EngineError::ResourcesNotInitialized(self.id))
    }

    /// The attached resource pool, mutably.
    pub fn resources_mut(&mut self) -> Result<&mut ResourcePool, EngineError> {
        self.resources
            .as_mut()
            .ok_or(EngineError::ResourcesNotInitialized(self.id))
    }

    /// Has this player lost: life at or below zero, or decked out?
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.life <= 0 || self.has_decked_out
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (life {}, deck {}, hand {}, board {})",
            self.name,
            self.life,
            self.deck.len(),
            self.hand.len(),
            self.board.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(players.len(), 4);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[1], PlayerId::new(1));
        assert_eq!(players[2], PlayerId::new(2));
        assert_eq!(players[3], PlayerId::new(3));
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map[PlayerId::new(2)], 20);
        assert_eq!(map[PlayerId::new(3)], 30);
    }

    #[test]
    fn test_player_map_with_value() {
        let map: PlayerMap<i32> = PlayerMap::with_value(3, 20);

        assert_eq!(map[PlayerId::new(0)], 20);
        assert_eq!(map[PlayerId::new(1)], 20);
        assert_eq!(map[PlayerId::new(2)], 20);
    }

    #[test]
    fn test_player_map_with_default() {
        let map: PlayerMap<Vec<i32>> = PlayerMap::with_default(2);

        assert!(map[PlayerId::new(0)].is_empty());
        assert!(map[PlayerId::new(1)].is_empty());
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::with_value(2, 0);

        map[PlayerId::new(0)] = 10;
        map[PlayerId::new(1)] = 20;

        assert_eq!(map[PlayerId::new(0)], 10);
        assert_eq!(map[PlayerId::new(1)], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[1], (PlayerId::new(1), &1));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_player_count() {
        let map: PlayerMap<i32> = PlayerMap::with_value(5, 0);
        assert_eq!(map.player_count(), 5);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    fn spell(id: u32) -> Card {
        Card::from_template(&crate::cards::CardTemplate::spell("BOLT", "Bolt", 1), InstanceId(id))
    }

    fn player_with_deck(count: u32) -> Player {
        let mut player = Player::new(PlayerId::new(0), "Alice", 10);
        for i in 1..=count {
            player.deck.add(spell(i));
        }
        player
    }

    #[test]
    fn test_new_player_zones_owned() {
        let player = Player::new(PlayerId::new(1), "Bob", 20);

        for kind in ZoneKind::ALL {
            assert_eq!(player.zone(kind).owner(), PlayerId::new(1));
            assert_eq!(player.zone(kind).kind(), kind);
        }
        assert!(player.resources.is_none());
        assert_eq!(player.resources(), Err(EngineError::ResourcesNotInitialized(PlayerId::new(1))));
    }

    #[test]
    fn test_draw_from_top() {
        let mut player = player_with_deck(3);

        assert_eq!(player.draw_card(None), DrawOutcome::Drawn(InstanceId(1)));
        assert_eq!(player.hand.len(), 1);
        assert_eq!(player.deck.len(), 2);
        assert_eq!(player.hand.get(InstanceId(1)).unwrap().owner(), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_draw_empty_deck_decks_out() {
        let mut player = player_with_deck(0);

        assert_eq!(player.draw_card(None), DrawOutcome::DeckedOut);
        assert!(player.has_decked_out);
        assert!(player.is_defeated());
    }

    #[test]
    fn test_draw_into_full_hand_burns() {
        let mut player = player_with_deck(3);
        player.draw_card(Some(1));

        let outcome = player.draw_card(Some(1));

        assert_eq!(outcome, DrawOutcome::Burned(InstanceId(2)));
        assert_eq!(player.hand.len(), 1);
        assert!(player.graveyard.contains(InstanceId(2)));
    }

    #[test]
    fn test_move_card() {
        let mut player = player_with_deck(1);
        player.draw_card(None);

        player
            .move_card(InstanceId(1), ZoneKind::Hand, ZoneKind::Board)
            .unwrap();

        assert!(player.board.contains(InstanceId(1)));
        assert_eq!(player.find_card(InstanceId(1)).unwrap().0, ZoneKind::Board);

        let err = player
            .move_card(InstanceId(1), ZoneKind::Hand, ZoneKind::Graveyard)
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::CardNotFound {
                instance: InstanceId(1),
                owner: PlayerId::new(0),
                zone: ZoneKind::Hand
            }
        );
    }

    #[test]
    fn test_setup_deck_shuffles() {
        let mut player = Player::new(PlayerId::new(0), "Alice", 10);
        let cards: Vec<_> = (1..=20).map(spell).collect();
        let mut rng = GameRng::new(7);

        player.setup_deck(cards, &mut rng);

        assert_eq!(player.deck.len(), 20);
        assert_ne!(player.deck.ids(), (1..=20).map(InstanceId).collect::<Vec<_>>());
    }

    #[test]
    fn test_defeated_by_life() {
        let mut player = Player::new(PlayerId::new(0), "Alice", 1);
        assert!(!player.is_defeated());
        player.life = 0;
        assert!(player.is_defeated());
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }
}
