//! Card instances - runtime card state.
//!
//! A `Card` is one physical copy in a game. It starts as a copy of its
//! template's properties and then diverges (combat damage, evolution
//! boosts, flags).
//!
//! ## Ownership
//!
//! `owner` is a back-reference maintained by `Zone`: adding a card to a
//! zone sets it to the zone's owner, removing it clears it. Callers cannot
//! set it directly.

use serde::{Deserialize, Serialize};

use super::attributes::{CardType, Keyword, Properties, Property, PropertyValue};
use super::definition::{CardId, CardTemplate};
use crate::core::entity::InstanceId;
use crate::core::player::PlayerId;

/// A card instance in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique per physical copy.
    pub instance_id: InstanceId,

    /// Template reference.
    pub card_id: CardId,

    /// Display name.
    pub name: String,

    /// Current properties (printed values plus modifications).
    pub properties: Properties,

    /// Attacks declared this turn.
    pub attacks_made_this_turn: u32,

    /// Attacks allowed per turn.
    pub max_attacks_per_turn: u32,

    /// Turn number on which the card entered the board.
    pub turn_played: Option<u32>,

    owner: Option<PlayerId>,
}

impl Card {
    /// Create a card with the given properties and no owner.
    pub fn new(
        instance_id: InstanceId,
        card_id: impl Into<CardId>,
        name: impl Into<String>,
        properties: Properties,
    ) -> Self {
        Self {
            instance_id,
            card_id: card_id.into(),
            name: name.into(),
            properties,
            attacks_made_this_turn: 0,
            max_attacks_per_turn: 1,
            turn_played: None,
            owner: None,
        }
    }

    /// Create a fresh copy of a template.
    #[must_use]
    pub fn from_template(template: &CardTemplate, instance_id: InstanceId) -> Self {
        Self::new(
            instance_id,
            template.id.clone(),
            template.name.clone(),
            template.properties.clone(),
        )
    }

    /// The player whose zone currently holds this card.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
    }

    // === Properties ===

    /// Get a raw property.
    #[must_use]
    pub fn get_property(&self, key: Property) -> Option<&PropertyValue> {
        self.properties.get(&key)
    }

    /// Set a property.
    pub fn set_property(&mut self, key: Property, value: impl Into<PropertyValue>) {
        self.properties.insert(key, value.into());
    }

    /// Get an integer property with a default.
    #[must_use]
    pub fn get_int(&self, key: Property, default: i64) -> i64 {
        self.get_property(key)
            .and_then(PropertyValue::as_int)
            .unwrap_or(default)
    }

    /// Modify an integer property by delta (absent counts as zero).
    pub fn modify_int(&mut self, key: Property, delta: i64) {
        let current = self.get_int(key, 0);
        self.set_property(key, current + delta);
    }

    /// Get a boolean property with a default.
    #[must_use]
    pub fn get_bool(&self, key: Property, default: bool) -> bool {
        self.get_property(key)
            .and_then(PropertyValue::as_bool)
            .unwrap_or(default)
    }

    /// Get a text property.
    #[must_use]
    pub fn get_text(&self, key: Property) -> Option<&str> {
        self.get_property(key).and_then(PropertyValue::as_text)
    }

    // === Typed accessors ===

    /// Play point cost.
    #[must_use]
    pub fn cost(&self) -> i64 {
        self.get_int(Property::Cost, 0)
    }

    /// Combat power.
    #[must_use]
    pub fn power(&self) -> i64 {
        self.get_int(Property::Attack, 0)
    }

    /// Remaining toughness.
    #[must_use]
    pub fn defense(&self) -> i64 {
        self.get_int(Property::Defense, 0)
    }

    /// Card type. A missing or unrecognized type is treated as a spell.
    #[must_use]
    pub fn card_type(&self) -> CardType {
        self.get_text(Property::CardType)
            .and_then(|t| t.parse().ok())
            .unwrap_or(CardType::Spell)
    }

    /// Is this a fighting permanent?
    #[must_use]
    pub fn is_creature(&self) -> bool {
        self.card_type() == CardType::Creature
    }

    /// Has this card evolved?
    #[must_use]
    pub fn is_evolved(&self) -> bool {
        self.get_bool(Property::IsEvolved, false)
    }

    /// Has this card super evolved?
    #[must_use]
    pub fn is_super_evolved(&self) -> bool {
        self.get_bool(Property::IsSuperEvolved, false)
    }

    /// Did evolution grant fast-attack this turn?
    #[must_use]
    pub fn gained_rush_this_turn(&self) -> bool {
        self.get_bool(Property::GainedRushThisTurn, false)
    }

    /// Has the card used all of its attacks this turn?
    #[must_use]
    pub fn attacks_exhausted(&self) -> bool {
        self.attacks_made_this_turn >= self.max_attacks_per_turn
    }

    /// Check for a keyword in the keyword list or the effect text.
    #[must_use]
    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        let listed = self
            .get_property(Property::Keywords)
            .and_then(PropertyValue::as_text_list)
            .is_some_and(|list| {
                list.iter()
                    .any(|k| k.parse::<Keyword>().is_ok_and(|k| k == keyword))
            });

        listed
            || self
                .get_text(Property::EffectText)
                .is_some_and(|text| keyword.appears_in(text))
    }

    /// Reset per-turn state at the start of the owner's turn.
    pub fn reset_for_turn(&mut self) {
        self.attacks_made_this_turn = 0;
        self.properties.remove(&Property::GainedRushThisTurn);
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_creature() {
            write!(f, "{} ({}/{})", self.name, self.power(), self.defense())
        } else {
            write!(f, "{}", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knight() -> Card {
        let template = CardTemplate::creature("KNIGHT", "Knight", 2, 2, 3);
        Card::from_template(&template, InstanceId(10))
    }

    #[test]
    fn test_card_from_template() {
        let card = knight();

        assert_eq!(card.instance_id, InstanceId(10));
        assert_eq!(card.card_id, CardId::new("KNIGHT"));
        assert_eq!(card.cost(), 2);
        assert_eq!(card.power(), 2);
        assert_eq!(card.defense(), 3);
        assert_eq!(card.max_attacks_per_turn, 1);
        assert_eq!(card.turn_played, None);
        assert_eq!(card.owner(), None);
        assert!(card.is_creature());
    }

    #[test]
    fn test_untyped_card_is_spell() {
        let card = Card::new(InstanceId(1), "ATTACK_BOT", "Attack Bot", Properties::default());
        assert_eq!(card.card_type(), CardType::Spell);
        assert!(!card.is_creature());
    }

    #[test]
    fn test_modify_int() {
        let mut card = knight();

        card.modify_int(Property::Defense, -2);
        assert_eq!(card.defense(), 1);

        card.modify_int(Property::Damage, 4);
        assert_eq!(card.get_int(Property::Damage, 0), 4);
    }

    #[test]
    fn test_keywords_from_list_and_text() {
        let template = CardTemplate::creature("A", "A", 1, 1, 1)
            .with_keyword(Keyword::Storm)
            .with_effect_text("Last Words: Draw a card.");
        let card = Card::from_template(&template, InstanceId(1));

        assert!(card.has_keyword(Keyword::Storm));
        assert!(card.has_keyword(Keyword::LastWords));
        assert!(!card.has_keyword(Keyword::Ward));
        assert!(!card.has_keyword(Keyword::Fanfare));
    }

    #[test]
    fn test_reset_for_turn() {
        let mut card = knight();
        card.attacks_made_this_turn = 1;
        card.set_property(Property::GainedRushThisTurn, true);
        assert!(card.attacks_exhausted());
        assert!(card.gained_rush_this_turn());

        card.reset_for_turn();

        assert!(!card.attacks_exhausted());
        assert!(!card.gained_rush_this_turn());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", knight()), "Knight (2/3)");
    }

    #[test]
    fn test_card_serialization() {
        let mut card = knight();
        card.turn_played = Some(3);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
