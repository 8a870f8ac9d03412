//! Card definitions - static card data.
//!
//! `Card` is a closed set of five card types. Each variant carries no data;
//! its damage, block, cost and status modifiers are fixed by the type and
//! exposed through accessor methods, so every `Card::Strike` is
//! interchangeable with every other.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::error::{EngineError, EngineResult};

/// A status effect that can be applied to an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Outgoing damage is reduced by 25%.
    Weak,
    /// Incoming damage is increased by 50%.
    Vulnerable,
    /// Flat bonus to outgoing damage.
    Strength,
}

impl Status {
    /// Lowercase name of the status.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Status::Weak => "weak",
            Status::Vulnerable => "vulnerable",
            Status::Strength => "strength",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Status amounts a card applies when played, in application order.
pub type StatusModifiers = SmallVec<[(Status, i32); 3]>;

/// A card type.
///
/// ## Example
///
/// ```
/// use spire_engine::cards::Card;
///
/// let bash: Card = "Bash".parse().unwrap();
/// assert_eq!(bash.damage(), 7);
/// assert_eq!(bash.block(), 5);
/// assert_eq!(bash.energy_cost(), 2);
/// assert!(bash.requires_target());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Strike,
    Defend,
    Bash,
    Neutralize,
    Survivor,
}

impl Card {
    /// Every card type, in catalog order.
    pub const ALL: [Card; 5] = [
        Card::Strike,
        Card::Defend,
        Card::Bash,
        Card::Neutralize,
        Card::Survivor,
    ];

    /// Card name as written in commands.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Strike => "Strike",
            Card::Defend => "Defend",
            Card::Bash => "Bash",
            Card::Neutralize => "Neutralize",
            Card::Survivor => "Survivor",
        }
    }

    /// Base damage dealt to the target.
    #[must_use]
    pub const fn damage(self) -> i32 {
        match self {
            Card::Strike => 6,
            Card::Bash => 7,
            Card::Neutralize => 3,
            Card::Defend | Card::Survivor => 0,
        }
    }

    /// Block gained by the player.
    #[must_use]
    pub const fn block(self) -> i32 {
        match self {
            Card::Defend | Card::Bash => 5,
            Card::Survivor => 8,
            Card::Strike | Card::Neutralize => 0,
        }
    }

    /// Energy needed to play the card.
    #[must_use]
    pub const fn energy_cost(self) -> i32 {
        match self {
            Card::Bash => 2,
            Card::Neutralize => 0,
            Card::Strike | Card::Defend | Card::Survivor => 1,
        }
    }

    /// Statuses applied when the card is played.
    ///
    /// Weak and vulnerable land on the target; strength goes to the player.
    #[must_use]
    pub fn status_modifiers(self) -> StatusModifiers {
        let mut modifiers = StatusModifiers::new();
        match self {
            Card::Neutralize => {
                modifiers.push((Status::Weak, 1));
                modifiers.push((Status::Vulnerable, 2));
            }
            Card::Survivor => modifiers.push((Status::Strength, 1)),
            Card::Strike | Card::Defend | Card::Bash => {}
        }
        modifiers
    }

    /// Amount of one status this card applies, zero if none.
    #[must_use]
    pub fn status_modifier(self, status: Status) -> i32 {
        self.status_modifiers()
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, amount)| *amount)
    }

    /// Must the card be played at a monster?
    #[must_use]
    pub const fn requires_target(self) -> bool {
        !matches!(self, Card::Defend | Card::Survivor)
    }

    /// Human-readable rules text.
    #[must_use]
    pub fn description(self) -> String {
        match self {
            Card::Strike => format!("Deal {} damage.", self.damage()),
            Card::Defend => format!("Gain {} block.", self.block()),
            Card::Bash => format!("Deal {} damage. Gain {} block.", self.damage(), self.block()),
            Card::Neutralize => format!(
                "Deal {} damage. Apply {} weak. Apply {} vulnerable.",
                self.damage(),
                self.status_modifier(Status::Weak),
                self.status_modifier(Status::Vulnerable),
            ),
            Card::Survivor => format!(
                "Gain {} block and {} strength.",
                self.block(),
                self.status_modifier(Status::Strength),
            ),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Card {
    type Err = EngineError;

    fn from_str(name: &str) -> EngineResult<Self> {
        super::registry::catalog(name)
    }
}
