//! Deck, hand and discard piles.
//!
//! `Piles` owns every card the player has. Cards only ever move between
//! the three piles; nothing here creates or destroys a card, so the
//! combined multiset is fixed for the lifetime of the player.
//!
//! The deck is drawn from the front. Recycling appends the discard pile
//! after whatever is left in the deck, keeping its order.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// One of the player's card piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pile {
    Deck,
    Hand,
    Discard,
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Pile::Deck => "deck",
            Pile::Hand => "hand",
            Pile::Discard => "discard",
        })
    }
}

/// The player's cards, split across deck, hand and discard.
///
/// ## Usage
///
/// ```
/// use spire_engine::cards::Card;
/// use spire_engine::zones::{Pile, Piles};
///
/// let mut piles = Piles::new(vec![Card::Strike, Card::Defend, Card::Bash]);
/// assert_eq!(piles.draw(2), 2);
/// assert_eq!(piles.hand(), &[Card::Strike, Card::Defend]);
///
/// piles.discard_hand();
/// assert_eq!(piles.len(Pile::Discard), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    deck: Vec<Card>,
    hand: Vec<Card>,
    discard: Vec<Card>,
}

impl Piles {
    /// Create piles with every card in the deck.
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        Self {
            deck,
            hand: Vec::new(),
            discard: Vec::new(),
        }
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn discard(&self) -> &[Card] {
        &self.discard
    }

    /// Get the cards in a pile, in order.
    #[must_use]
    pub fn cards(&self, pile: Pile) -> &[Card] {
        match pile {
            Pile::Deck => &self.deck,
            Pile::Hand => &self.hand,
            Pile::Discard => &self.discard,
        }
    }

    /// Get the number of cards in a pile.
    #[must_use]
    pub fn len(&self, pile: Pile) -> usize {
        self.cards(pile).len()
    }

    /// Get the number of cards across all piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Move the discard pile to the back of the deck.
    pub fn recycle_discard(&mut self) {
        self.deck.append(&mut self.discard);
    }

    /// Draw up to `count` cards from the front of the deck into the hand.
    ///
    /// An empty deck is refilled from the discard pile mid-draw. Returns the
    /// number of cards actually drawn, which is less than `count` only when
    /// both piles run dry.
    pub fn draw(&mut self, count: usize) -> usize {
        let mut drawn = 0;
        while drawn < count {
            if self.deck.is_empty() {
                self.recycle_discard();
                if self.deck.is_empty() {
                    break;
                }
            }
            let card = self.deck.remove(0);
            self.hand.push(card);
            drawn += 1;
        }
        drawn
    }

    /// Move every card in hand to the discard pile.
    pub fn discard_hand(&mut self) {
        self.discard.append(&mut self.hand);
    }

    /// Find the first card in hand with the given name.
    #[must_use]
    pub fn find_in_hand(&self, name: &str) -> Option<(usize, Card)> {
        self.hand
            .iter()
            .enumerate()
            .find(|(_, card)| card.name() == name)
            .map(|(index, card)| (index, *card))
    }

    /// Move the hand card at `index` to the discard pile.
    ///
    /// Returns `None` if the index is out of range.
    pub fn discard_from_hand(&mut self, index: usize) -> Option<Card> {
        if index >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(index);
        self.discard.push(card);
        Some(card)
    }
}
