//! Card templates - static card data.
//!
//! `CardTemplate` holds what every copy of a card shares: its template id,
//! name and printed properties. Per-copy state (attack counters, the turn
//! it was played, stat changes) lives on `Card`.

use serde::{Deserialize, Serialize};

use super::attributes::{CardType, Keyword, Properties, Property, PropertyValue};

/// Template identifier, e.g. `ATTACK_BOT`.
///
/// Shared by every copy of a card. Script references are derived from it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static card template.
///
/// ## Example
///
/// ```
/// use tcg_sim::cards::{CardTemplate, Keyword, Property};
///
/// let goblin = CardTemplate::creature("GOBLIN", "Goblin", 1, 1, 2)
///     .with_keyword(Keyword::Rush);
///
/// assert_eq!(goblin.get_int(Property::Attack, 0), 1);
/// assert!(goblin.keywords().contains(&Keyword::Rush));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Template identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Printed properties.
    pub properties: Properties,
}

impl CardTemplate {
    /// Create a template with no properties.
    pub fn new(id: impl Into<CardId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            properties: Properties::default(),
        }
    }

    /// A creature with cost, attack and defense.
    pub fn creature(
        id: impl Into<CardId>,
        name: impl Into<String>,
        cost: i64,
        attack: i64,
        defense: i64,
    ) -> Self {
        Self::new(id, name)
            .with_prop(Property::CardType, CardType::Creature.as_str())
            .with_prop(Property::Cost, cost)
            .with_prop(Property::Attack, attack)
            .with_prop(Property::Defense, defense)
    }

    /// A one-shot spell with a cost.
    pub fn spell(id: impl Into<CardId>, name: impl Into<String>, cost: i64) -> Self {
        Self::new(id, name)
            .with_prop(Property::CardType, CardType::Spell.as_str())
            .with_prop(Property::Cost, cost)
    }

    /// A non-fighting permanent with a cost.
    pub fn amulet(id: impl Into<CardId>, name: impl Into<String>, cost: i64) -> Self {
        Self::new(id, name)
            .with_prop(Property::CardType, CardType::Amulet.as_str())
            .with_prop(Property::Cost, cost)
    }

    /// Set a property (builder pattern).
    #[must_use]
    pub fn with_prop(mut self, key: Property, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key, value.into());
        self
    }

    /// Add a keyword to the keyword list (builder pattern).
    #[must_use]
    pub fn with_keyword(mut self, keyword: Keyword) -> Self {
        let entry = self
            .properties
            .entry(Property::Keywords)
            .or_insert_with(|| PropertyValue::TextList(Vec::new()));
        if let PropertyValue::TextList(list) = entry {
            list.push(keyword.marker().to_string());
        }
        self
    }

    /// Set the effect text (builder pattern).
    #[must_use]
    pub fn with_effect_text(self, text: impl Into<String>) -> Self {
        self.with_prop(Property::EffectText, text.into())
    }

    /// Get an integer property with a default value.
    #[must_use]
    pub fn get_int(&self, key: Property, default: i64) -> i64 {
        self.properties
            .get(&key)
            .and_then(PropertyValue::as_int)
            .unwrap_or(default)
    }

    /// Keywords listed explicitly on the template.
    #[must_use]
    pub fn keywords(&self) -> Vec<Keyword> {
        self.properties
            .get(&Property::Keywords)
            .and_then(PropertyValue::as_text_list)
            .map(|list| list.iter().filter_map(|k| k.parse().ok()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new("ATTACK_BOT");
        assert_eq!(id.as_str(), "ATTACK_BOT");
        assert_eq!(format!("{}", id), "ATTACK_BOT");
        assert_eq!(CardId::from("ATTACK_BOT"), id);
    }

    #[test]
    fn test_creature_builder() {
        let card = CardTemplate::creature("KNIGHT", "Knight", 2, 2, 3)
            .with_keyword(Keyword::Ward)
            .with_keyword(Keyword::Fanfare);

        assert_eq!(card.name, "Knight");
        assert_eq!(card.get_int(Property::Cost, 0), 2);
        assert_eq!(card.get_int(Property::Attack, 0), 2);
        assert_eq!(card.get_int(Property::Defense, 0), 3);
        assert_eq!(card.get_int(Property::Damage, 0), 0);
        assert_eq!(card.keywords(), vec![Keyword::Ward, Keyword::Fanfare]);
    }

    #[test]
    fn test_spell_builder() {
        let card = CardTemplate::spell("BOLT", "Bolt", 1).with_prop(Property::Damage, 3);

        assert_eq!(
            card.properties.get(&Property::CardType).and_then(PropertyValue::as_text),
            Some("spell")
        );
        assert_eq!(card.get_int(Property::Damage, 0), 3);
    }

    #[test]
    fn test_template_serialization() {
        let card = CardTemplate::creature("KNIGHT", "Knight", 2, 2, 3)
            .with_effect_text("Ward.");

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardTemplate = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
