//! Card property system.
//!
//! Cards carry an open-ended property map (cost, attack, defense, type,
//! effect text, flags). Keys are a fixed enum so a misspelt key is a
//! compile error rather than a silently missing value.
//!
//! ## PropertyValue Types
//!
//! - `Int`: Numbers (cost, attack, defense, spell damage)
//! - `Bool`: Flags (evolved, gained rush this turn)
//! - `Text`: Strings (card type, effect text)
//! - `TextList`: String lists (keywords)

use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Recognized property keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Play point cost.
    Cost,
    /// Power dealt in combat.
    Attack,
    /// Toughness; the card is destroyed at zero or below.
    Defense,
    /// `creature`/`follower`, `amulet` or `spell`.
    CardType,
    /// Rules text. Scanned for keyword markers.
    EffectText,
    /// Explicit keyword list.
    Keywords,
    /// Damage a spell deals to each opponent on resolution.
    Damage,
    /// Cards a spell draws on resolution.
    Draw,
    /// Set once the card has evolved.
    IsEvolved,
    /// Set once the card has super evolved.
    IsSuperEvolved,
    /// Transient fast-attack granted by evolution, cleared next turn.
    GainedRushThisTurn,
}

/// Value for a card property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Integer value.
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Text value.
    Text(String),
    /// List of strings.
    TextList(Vec<String>),
}

impl PropertyValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as text list reference if this is a TextList value.
    #[must_use]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::TextList(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(i64::from(v))
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::Text(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::Text(v.to_string())
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(v: Vec<String>) -> Self {
        PropertyValue::TextList(v)
    }
}

/// Collection of properties.
pub type Properties = FxHashMap<Property, PropertyValue>;

/// Card category, deciding where a played card goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// Persistent permanent that fights (a follower).
    Creature,
    /// Persistent permanent that does not fight.
    Amulet,
    /// One-shot; resolves and goes to the graveyard.
    Spell,
}

impl CardType {
    /// Does a played card of this type stay on the board?
    #[must_use]
    pub fn is_permanent(self) -> bool {
        matches!(self, CardType::Creature | CardType::Amulet)
    }

    /// Name used in the `card_type` property.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Creature => "creature",
            CardType::Amulet => "amulet",
            CardType::Spell => "spell",
        }
    }
}

impl FromStr for CardType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "creature" | "follower" => Ok(CardType::Creature),
            "amulet" => Ok(CardType::Amulet),
            "spell" => Ok(CardType::Spell),
            other => Err(format!("unknown card type '{other}'")),
        }
    }
}

/// Keywords the engine gives meaning to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    /// Can attack anything the turn it is played.
    Storm,
    /// Can attack creatures the turn it is played.
    Rush,
    /// Opponents must attack Ward creatures first.
    Ward,
    /// Triggers a script when played.
    Fanfare,
    /// Triggers a script when destroyed.
    LastWords,
    /// Triggers a script when evolved.
    Evolve,
    /// Triggers a script when super evolved.
    SuperEvolve,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 7] = [
        Keyword::Storm,
        Keyword::Rush,
        Keyword::Ward,
        Keyword::Fanfare,
        Keyword::LastWords,
        Keyword::Evolve,
        Keyword::SuperEvolve,
    ];

    /// Marker looked for in effect text and keyword lists.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Keyword::Storm => "Storm",
            Keyword::Rush => "Rush",
            Keyword::Ward => "Ward",
            Keyword::Fanfare => "Fanfare",
            Keyword::LastWords => "Last Words",
            Keyword::Evolve => "Evolve",
            Keyword::SuperEvolve => "Super-Evolve",
        }
    }

    /// Check effect text for this keyword as a whole word.
    ///
    /// "Evolve" does not match inside "Super-Evolve", and "Ward" does not
    /// match inside "Warden".
    #[must_use]
    pub fn appears_in(self, text: &str) -> bool {
        let marker = self.marker();
        text.match_indices(marker).any(|(start, _)| {
            let before = text[..start].chars().next_back();
            let after = text[start + marker.len()..].chars().next();
            let boundary_before = before.is_none_or(|c| !c.is_alphanumeric() && c != '-');
            let boundary_after = after.is_none_or(|c| !c.is_alphanumeric() && c != '-');
            boundary_before && boundary_after
        })
    }
}

impl FromStr for Keyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Keyword::ALL
            .into_iter()
            .find(|k| k.marker().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown keyword '{trimmed}'"))
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.marker())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_accessors() {
        assert_eq!(PropertyValue::Int(5).as_int(), Some(5));
        assert_eq!(PropertyValue::Int(5).as_bool(), None);
        assert_eq!(PropertyValue::Bool(true).as_bool(), Some(true));
        assert_eq!(PropertyValue::from("spell").as_text(), Some("spell"));
    }

    #[test]
    fn test_properties_map() {
        let mut props = Properties::default();
        props.insert(Property::Attack, 3i32.into());
        props.insert(Property::IsEvolved, true.into());

        assert_eq!(props.get(&Property::Attack).and_then(PropertyValue::as_int), Some(3));
        assert_eq!(props.get(&Property::IsEvolved).and_then(PropertyValue::as_bool), Some(true));
        assert!(props.get(&Property::Defense).is_none());
    }

    #[test]
    fn test_card_type_parse() {
        assert_eq!("Follower".parse::<CardType>(), Ok(CardType::Creature));
        assert_eq!("creature".parse::<CardType>(), Ok(CardType::Creature));
        assert_eq!("AMULET".parse::<CardType>(), Ok(CardType::Amulet));
        assert_eq!("spell".parse::<CardType>(), Ok(CardType::Spell));
        assert!("land".parse::<CardType>().is_err());

        assert!(CardType::Creature.is_permanent());
        assert!(CardType::Amulet.is_permanent());
        assert!(!CardType::Spell.is_permanent());
    }

    #[test]
    fn test_keyword_parse() {
        assert_eq!("last words".parse::<Keyword>(), Ok(Keyword::LastWords));
        assert_eq!("Storm".parse::<Keyword>(), Ok(Keyword::Storm));
        assert!("Trample".parse::<Keyword>().is_err());
    }

    #[test]
    fn test_keyword_word_boundaries() {
        assert!(Keyword::Fanfare.appears_in("Fanfare: Draw a card."));
        assert!(Keyword::Ward.appears_in("Ward."));
        assert!(!Keyword::Ward.appears_in("Summon a Warden."));
        assert!(Keyword::SuperEvolve.appears_in("Super-Evolve: Deal 3 damage."));
        assert!(!Keyword::Evolve.appears_in("Super-Evolve: Deal 3 damage."));
        assert!(Keyword::Evolve.appears_in("Evolve: Deal 1 damage."));
        assert!(Keyword::LastWords.appears_in("Storm. Last Words: Draw a card."));
    }
}
