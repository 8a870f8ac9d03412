//! The player: combat stats, energy and card piles.
//!
//! ## Turn cycle
//!
//! - `start_encounter`: between encounters, folds the discard pile back
//!   into the deck
//! - `new_turn`: status decay, fresh hand, energy reset
//! - `play_card`: spends energy and discards one card
//! - `end_turn`: discards whatever is left in hand
//!
//! ## Characters
//!
//! The two starting characters are available through [`Character`]:
//!
//! ```
//! use spire_engine::core::{Character, Player};
//!
//! let player = Player::from_character("silent".parse::<Character>().unwrap());
//! assert_eq!(player.stats().max_hp(), 70);
//! assert_eq!(player.deck().len(), 12);
//! ```

use serde::{Deserialize, Serialize};

use super::config::{CombatConfig, DEFAULT_ENERGY_PER_TURN, DEFAULT_HAND_SIZE};
use super::entity::Stats;
use super::error::{EngineError, EngineResult};
use crate::cards::Card;
use crate::zones::{Pile, Piles};

/// A playable starting character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Character {
    Ironclad,
    Silent,
}

impl Character {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Character::Ironclad => "IronClad",
            Character::Silent => "Silent",
        }
    }

    /// Starting maximum hp.
    #[must_use]
    pub const fn max_hp(self) -> i32 {
        match self {
            Character::Ironclad => 80,
            Character::Silent => 70,
        }
    }

    /// Starting deck, in draw order.
    #[must_use]
    pub fn starting_deck(self) -> Vec<Card> {
        let mut deck = vec![Card::Strike; 5];
        match self {
            Character::Ironclad => {
                deck.extend([Card::Defend; 4]);
                deck.push(Card::Bash);
            }
            Character::Silent => {
                deck.extend([Card::Defend; 5]);
                deck.push(Card::Neutralize);
                deck.push(Card::Survivor);
            }
        }
        deck
    }
}

impl std::str::FromStr for Character {
    type Err = EngineError;

    fn from_str(name: &str) -> EngineResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ironclad" => Ok(Character::Ironclad),
            "silent" => Ok(Character::Silent),
            _ => Err(EngineError::UnknownCharacter(name.to_string())),
        }
    }
}

/// The player-controlled entity.
///
/// Lives for the whole session; its deck, hp and strength carry over from
/// one encounter to the next.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    stats: Stats,
    energy: i32,
    energy_per_turn: i32,
    hand_size: usize,
    piles: Piles,
}

impl Player {
    /// Create a player with the given deck and default turn rules.
    #[must_use]
    pub fn new(max_hp: i32, deck: Vec<Card>) -> Self {
        Self {
            name: "Player".to_string(),
            stats: Stats::new(max_hp),
            energy: DEFAULT_ENERGY_PER_TURN,
            energy_per_turn: DEFAULT_ENERGY_PER_TURN,
            hand_size: DEFAULT_HAND_SIZE,
            piles: Piles::new(deck),
        }
    }

    /// Create a player from a starting character.
    #[must_use]
    pub fn from_character(character: Character) -> Self {
        let mut player = Self::new(character.max_hp(), character.starting_deck());
        player.name = character.name().to_string();
        player
    }

    /// Apply the turn rules of a combat configuration.
    #[must_use]
    pub fn with_config(mut self, config: &CombatConfig) -> Self {
        self.energy_per_turn = config.energy_per_turn;
        self.energy = config.energy_per_turn;
        self.hand_size = config.hand_size;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    #[must_use]
    pub fn energy(&self) -> i32 {
        self.energy
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        self.piles.deck()
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.piles.hand()
    }

    #[must_use]
    pub fn discard(&self) -> &[Card] {
        self.piles.discard()
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    /// Get the cards in one pile.
    #[must_use]
    pub fn pile(&self, pile: Pile) -> &[Card] {
        self.piles.cards(pile)
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.stats.is_defeated()
    }

    /// Prepare the piles for a new encounter.
    ///
    /// With an empty hand, the discard pile is appended to the deck.
    pub fn start_encounter(&mut self) {
        if self.piles.hand().is_empty() {
            self.piles.recycle_discard();
        }
    }

    /// Start a player turn: decay statuses, draw a fresh hand, reset energy.
    ///
    /// Cards still in hand are discarded before drawing.
    pub fn new_turn(&mut self) {
        self.stats.on_turn_start();
        self.piles.discard_hand();
        self.piles.draw(self.hand_size);
        self.energy = self.energy_per_turn;
    }

    /// End the player turn, discarding the hand.
    pub fn end_turn(&mut self) {
        self.piles.discard_hand();
    }

    /// Check whether a card could be played right now.
    ///
    /// Returns the card and its position in hand without changing anything.
    pub fn check_playable(&self, name: &str) -> EngineResult<(usize, Card)> {
        let (index, card) = self
            .piles
            .find_in_hand(name)
            .ok_or_else(|| EngineError::CardNotInHand(name.to_string()))?;
        if card.energy_cost() > self.energy {
            return Err(EngineError::InsufficientEnergy {
                cost: card.energy_cost(),
                available: self.energy,
            });
        }
        Ok((index, card))
    }

    /// Play the first card in hand with the given name.
    ///
    /// Returns `None`, changing nothing, if no such card is in hand or it
    /// costs more than the remaining energy. Otherwise spends the energy,
    /// moves exactly one card to the discard pile and returns it.
    pub fn play_card(&mut self, name: &str) -> Option<Card> {
        let (index, card) = self.check_playable(name).ok()?;
        self.energy -= card.energy_cost();
        self.piles.discard_from_hand(index)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.stats)
    }
}
