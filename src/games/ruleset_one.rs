//! RuleSetOne starter content.
//!
//! Two zero-cost spells and nothing else: ATTACK_BOT deals 1 damage to each
//! opponent, DRAW_BOT draws a card. Each player gets ten of each.

use crate::cards::{CardCatalog, CardTemplate, Property};
use crate::core::ConfigError;

/// Deals 1 damage to each opponent.
pub const ATTACK_BOT: &str = "ATTACK_BOT";

/// Draws one card.
pub const DRAW_BOT: &str = "DRAW_BOT";

/// Deck list used by every RuleSetOne player.
pub const STARTER_DECK: &[(&str, usize)] = &[(ATTACK_BOT, 10), (DRAW_BOT, 10)];

/// Templates for the starter deck.
pub fn starter_templates() -> Vec<CardTemplate> {
    vec![
        CardTemplate::spell(ATTACK_BOT, "Attack Bot", 0)
            .with_prop(Property::Damage, 1)
            .with_effect_text("Deal 1 damage to the enemy leader."),
        CardTemplate::spell(DRAW_BOT, "Draw Bot", 0)
            .with_prop(Property::Draw, 1)
            .with_effect_text("Draw a card."),
    ]
}

/// Catalog holding the starter templates.
pub fn starter_catalog() -> Result<CardCatalog, ConfigError> {
    let mut catalog = CardCatalog::new();
    for template in starter_templates() {
        catalog.register(template)?;
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardType};
    use crate::core::InstanceAllocator;

    #[test]
    fn test_starter_deck() {
        let catalog = starter_catalog().unwrap();
        let mut ids = InstanceAllocator::new();
        let deck = catalog.build_deck(STARTER_DECK, &mut ids).unwrap();

        assert_eq!(deck.len(), 20);
        assert!(deck.iter().all(|c| c.card_type() == CardType::Spell && c.cost() == 0));
        let attacks = deck
            .iter()
            .filter(|c| c.card_id == CardId::new(ATTACK_BOT))
            .count();
        assert_eq!(attacks, 10);
    }
}
