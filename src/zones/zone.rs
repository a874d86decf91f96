//! Player-owned card zones.
//!
//! A `Zone` is a named ordered sequence of cards owned by one player.
//! It maintains the card ownership back-reference:
//! - adding a card sets `card.owner()` to the zone's owner
//! - removing a card clears it
//!
//! The deck is ordered with its top at index 0. The board is treated as a
//! multiset; its order only reflects play order.
//!
//! Cards are stored in a persistent `im::Vector` so that cloning a whole
//! game state for snapshots is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::entity::InstanceId;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;

/// The four zones every player owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneKind {
    Hand,
    Deck,
    Graveyard,
    Board,
}

impl ZoneKind {
    /// Every zone kind.
    pub const ALL: [ZoneKind; 4] = [
        ZoneKind::Hand,
        ZoneKind::Deck,
        ZoneKind::Graveyard,
        ZoneKind::Board,
    ];
}

impl std::fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ZoneKind::Hand => "Hand",
            ZoneKind::Deck => "Deck",
            ZoneKind::Graveyard => "Graveyard",
            ZoneKind::Board => "Board",
        };
        f.write_str(name)
    }
}

/// Position for inserting a card into a zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// Index 0 (top of the deck).
    Top,
    /// End of the zone.
    Bottom,
}

/// Result of asking a player to draw one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// The card went to the hand.
    Drawn(InstanceId),
    /// The hand was full; the card went to the graveyard.
    Burned(InstanceId),
    /// The deck was empty. The player is flagged as decked out.
    DeckedOut,
}

impl DrawOutcome {
    /// The card that left the deck, if any.
    #[must_use]
    pub fn card(self) -> Option<InstanceId> {
        match self {
            DrawOutcome::Drawn(id) | DrawOutcome::Burned(id) => Some(id),
            DrawOutcome::DeckedOut => None,
        }
    }
}

/// A named sequence of cards owned by one player.
///
/// ## Usage
///
/// ```
/// use tcg_sim::cards::{Card, CardTemplate};
/// use tcg_sim::core::{InstanceId, PlayerId};
/// use tcg_sim::zones::{Zone, ZoneKind};
///
/// let mut hand = Zone::new(ZoneKind::Hand, PlayerId::new(0));
/// let card = Card::from_template(&CardTemplate::spell("BOLT", "Bolt", 1), InstanceId(1));
///
/// hand.add(card);
/// assert_eq!(hand.get(InstanceId(1)).unwrap().owner(), Some(PlayerId::new(0)));
///
/// let removed = hand.remove(InstanceId(1)).unwrap();
/// assert_eq!(removed.owner(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    kind: ZoneKind,
    owner: PlayerId,
    cards: Vector<Card>,
}

impl Zone {
    /// Create an empty zone.
    #[must_use]
    pub fn new(kind: ZoneKind, owner: PlayerId) -> Self {
        Self {
            kind,
            owner,
            cards: Vector::new(),
        }
    }

    /// Which zone this is.
    #[must_use]
    pub fn kind(&self) -> ZoneKind {
        self.kind
    }

    /// The owning player.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Add a card at the end of the zone.
    pub fn add(&mut self, card: Card) {
        self.add_at(card, ZonePosition::Bottom);
    }

    /// Add a card at a position.
    pub fn add_at(&mut self, mut card: Card, position: ZonePosition) {
        card.set_owner(Some(self.owner));
        match position {
            ZonePosition::Top => self.cards.push_front(card),
            ZonePosition::Bottom => self.cards.push_back(card),
        }
    }

    /// Remove a card by instance ID. The returned card has no owner.
    pub fn remove(&mut self, instance: InstanceId) -> Option<Card> {
        let index = self.position(instance)?;
        let mut card = self.cards.remove(index);
        card.set_owner(None);
        Some(card)
    }

    /// Remove and return the top card (index 0).
    pub fn take_top(&mut self) -> Option<Card> {
        let mut card = self.cards.pop_front()?;
        card.set_owner(None);
        Some(card)
    }

    /// Remove every card, in order.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
            .into_iter()
            .map(|mut card| {
                card.set_owner(None);
                card
            })
            .collect()
    }

    /// Get a card by instance ID.
    #[must_use]
    pub fn get(&self, instance: InstanceId) -> Option<&Card> {
        self.cards.iter().find(|c| c.instance_id == instance)
    }

    /// Get a mutable card by instance ID.
    pub fn get_mut(&mut self, instance: InstanceId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.instance_id == instance)
    }

    /// Index of a card in this zone.
    #[must_use]
    pub fn position(&self, instance: InstanceId) -> Option<usize> {
        self.cards.iter().position(|c| c.instance_id == instance)
    }

    /// Check if a card is in this zone.
    #[must_use]
    pub fn contains(&self, instance: InstanceId) -> bool {
        self.position(instance).is_some()
    }

    /// The top card (index 0).
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Iterate over cards in order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate mutably over cards in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    /// Instance IDs in order.
    #[must_use]
    pub fn ids(&self) -> Vec<InstanceId> {
        self.cards.iter().map(|c| c.instance_id).collect()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the zone is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle the zone in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = std::mem::take(&mut self.cards).into_iter().collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }
}
