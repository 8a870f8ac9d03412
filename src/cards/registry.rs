//! Card catalog for name lookup.
//!
//! The `CardCatalog` maps card names to their descriptors. It is built
//! once with every card type and never changes afterwards; every name
//! lookup in the engine goes through the shared [`CardCatalog::standard`].

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::definition::Card;
use crate::core::error::{EngineError, EngineResult};

/// Lookup table from card name to card.
///
/// ## Example
///
/// ```
/// use spire_engine::cards::{Card, CardCatalog};
///
/// let catalog = CardCatalog::new();
/// assert_eq!(catalog.get("Defend").unwrap(), Card::Defend);
/// assert!(catalog.get("Fireball").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    cards: FxHashMap<&'static str, Card>,
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CardCatalog {
    /// Create a catalog holding every card type.
    #[must_use]
    pub fn new() -> Self {
        let cards = Card::ALL.into_iter().map(|card| (card.name(), card)).collect();
        Self { cards }
    }

    /// The shared catalog, built on first use.
    #[must_use]
    pub fn standard() -> &'static CardCatalog {
        static STANDARD: OnceLock<CardCatalog> = OnceLock::new();
        STANDARD.get_or_init(CardCatalog::new)
    }

    /// Look up a card by name.
    pub fn get(&self, name: &str) -> EngineResult<Card> {
        self.cards
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnknownCard(name.to_string()))
    }

    /// Check if a name is in the catalog.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Number of card types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = Card> {
        Card::ALL.into_iter()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = Card>
    where
        F: Fn(Card) -> bool,
    {
        self.iter().filter(move |card| predicate(*card))
    }
}

/// Look up a card by name in the standard catalog.
pub fn catalog(name: &str) -> EngineResult<Card> {
    CardCatalog::standard().get(name)
}
