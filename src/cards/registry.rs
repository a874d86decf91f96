//! Card catalog and deck construction.
//!
//! The `CardCatalog` stores templates and stamps out `Card` instances for
//! decks. It does not validate deck legality (copy limits, deck size);
//! that is a pre-flight concern of whoever builds the decks.

use rustc_hash::FxHashMap;

use super::definition::{CardId, CardTemplate};
use super::instance::Card;
use crate::core::entity::InstanceAllocator;
use crate::core::error::ConfigError;

/// Catalog of card templates.
///
/// ## Example
///
/// ```
/// use tcg_sim::cards::{CardCatalog, CardTemplate};
/// use tcg_sim::core::InstanceAllocator;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardTemplate::creature("GOBLIN", "Goblin", 1, 1, 2)).unwrap();
///
/// let mut ids = InstanceAllocator::new();
/// let deck = catalog.build_deck(&[("GOBLIN", 3)], &mut ids).unwrap();
/// assert_eq!(deck.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    templates: FxHashMap<CardId, CardTemplate>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template.
    pub fn register(&mut self, template: CardTemplate) -> Result<(), ConfigError> {
        if self.templates.contains_key(&template.id) {
            return Err(ConfigError::DuplicateCard(template.id));
        }
        self.templates.insert(template.id.clone(), template);
        Ok(())
    }

    /// Get a template by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardTemplate> {
        self.templates.get(id)
    }

    /// Check if a template ID is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.templates.contains_key(id)
    }

    /// Get the number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over all templates.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.templates.values()
    }

    /// Create one fresh instance of a template.
    pub fn instantiate(
        &self,
        id: &CardId,
        ids: &mut InstanceAllocator,
    ) -> Result<Card, ConfigError> {
        let template = self
            .get(id)
            .ok_or_else(|| ConfigError::UnknownCard(id.clone()))?;
        Ok(Card::from_template(template, ids.alloc()))
    }

    /// Build a deck from `(template id, copies)` entries, in list order.
    pub fn build_deck(
        &self,
        list: &[(&str, usize)],
        ids: &mut InstanceAllocator,
    ) -> Result<Vec<Card>, ConfigError> {
        let mut deck = Vec::with_capacity(list.iter().map(|(_, n)| n).sum());
        for (id, copies) in list {
            let id = CardId::new(*id);
            for _ in 0..*copies {
                deck.push(self.instantiate(&id, ids)?);
            }
        }
        Ok(deck)
    }
}
