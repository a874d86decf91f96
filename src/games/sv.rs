//! Sample content for the SV rulesets.
//!
//! A small catalog that exercises every keyword the engine understands,
//! with native scripts for the cards that carry trigger markers.

use crate::cards::{CardCatalog, CardTemplate, Keyword, Property};
use crate::core::ConfigError;
use crate::effects::Effect;
use crate::triggers::ScriptLibrary;

/// Sample templates.
pub fn sample_templates() -> Vec<CardTemplate> {
    vec![
        CardTemplate::creature("GOBLIN", "Goblin", 1, 1, 2),
        CardTemplate::creature("FIGHTER", "Fighter", 2, 2, 2),
        CardTemplate::creature("QUICKBLADER", "Quickblader", 1, 1, 1).with_keyword(Keyword::Storm),
        CardTemplate::creature("DASHING_LANCER", "Dashing Lancer", 2, 2, 1)
            .with_keyword(Keyword::Rush),
        CardTemplate::creature("SHIELD_SENTINEL", "Shield Sentinel", 3, 1, 4)
            .with_keyword(Keyword::Ward),
        CardTemplate::creature("FLAME_ARCHER", "Flame Archer", 2, 2, 1)
            .with_effect_text("Fanfare: Deal 1 damage to the enemy leader."),
        CardTemplate::creature("EMBER_GOLEM", "Ember Golem", 3, 3, 2)
            .with_effect_text("Last Words: Deal 2 damage to the enemy leader."),
        CardTemplate::creature("SKY_SCOUT", "Sky Scout", 4, 3, 3).with_effect_text(
            "Evolve: Draw a card.\nSuper-Evolve: Restore 3 defense to your leader.",
        ),
        CardTemplate::creature("DRAGON_KNIGHT", "Dragon Knight", 5, 5, 5),
        CardTemplate::amulet("HEALING_TOTEM", "Healing Totem", 2)
            .with_effect_text("Fanfare: Restore 2 defense to your leader."),
        CardTemplate::spell("FIRE_BOLT", "Fire Bolt", 1).with_prop(Property::Damage, 2),
        CardTemplate::spell("INSIGHT", "Insight", 1).with_prop(Property::Draw, 1),
        CardTemplate::spell("BLAZE", "Blaze", 3)
            .with_prop(Property::Damage, 3)
            .with_prop(Property::Draw, 1),
    ]
}

/// Catalog holding the sample templates.
pub fn sample_catalog() -> Result<CardCatalog, ConfigError> {
    let mut catalog = CardCatalog::new();
    for template in sample_templates() {
        catalog.register(template)?;
    }
    Ok(catalog)
}

/// Forty-card sample deck.
pub const SAMPLE_DECK: &[(&str, usize)] = &[
    ("GOBLIN", 4),
    ("FIGHTER", 4),
    ("QUICKBLADER", 3),
    ("DASHING_LANCER", 3),
    ("SHIELD_SENTINEL", 3),
    ("FLAME_ARCHER", 3),
    ("EMBER_GOLEM", 3),
    ("SKY_SCOUT", 3),
    ("DRAGON_KNIGHT", 2),
    ("HEALING_TOTEM", 2),
    ("FIRE_BOLT", 4),
    ("INSIGHT", 3),
    ("BLAZE", 3),
];

/// Scripts for the sample cards with trigger markers.
pub fn sample_scripts() -> ScriptLibrary {
    ScriptLibrary::new()
        .with_script("FLAME_ARCHER", "on_fanfare", |card, ctx| {
            for opponent in ctx.opponents_of(card) {
                ctx.apply(&Effect::damage(opponent, 1))?;
            }
            Ok(())
        })
        .with_script("EMBER_GOLEM", "on_last_words", |card, ctx| {
            for opponent in ctx.opponents_of(card) {
                ctx.apply(&Effect::damage(opponent, 2))?;
            }
            Ok(())
        })
        .with_script("SKY_SCOUT", "on_evolve", |card, ctx| {
            if let Some(owner) = card.owner() {
                ctx.draw_cards(owner, 1);
            }
            Ok(())
        })
        .with_script("SKY_SCOUT", "on_super_evolve", |card, ctx| match card.owner() {
            Some(owner) => Ok(ctx.apply(&Effect::heal(owner, 3))?),
            None => Ok(()),
        })
        .with_script("HEALING_TOTEM", "on_fanfare", |card, ctx| match card.owner() {
            Some(owner) => Ok(ctx.apply(&Effect::heal(owner, 2))?),
            None => Ok(()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::core::InstanceAllocator;
    use crate::triggers::ScriptRef;

    #[test]
    fn test_sample_deck_size() {
        let catalog = sample_catalog().unwrap();
        let mut ids = InstanceAllocator::new();
        let deck = catalog.build_deck(SAMPLE_DECK, &mut ids).unwrap();
        assert_eq!(deck.len(), 40);
    }

    #[test]
    fn test_every_marked_card_has_a_script() {
        let scripts = sample_scripts();
        let triggers = [
            Keyword::Fanfare,
            Keyword::LastWords,
            Keyword::Evolve,
            Keyword::SuperEvolve,
        ];
        for template in sample_templates() {
            let card = crate::cards::Card::from_template(&template, crate::core::InstanceId(1));
            if triggers.iter().any(|&k| card.has_keyword(k)) {
                assert!(
                    scripts.has_script(&ScriptRef::for_card(&template.id)),
                    "{} has no script",
                    template.id
                );
            }
        }
        assert!(!scripts.has_script(&ScriptRef::for_card(&CardId::new("GOBLIN"))));
    }
}
