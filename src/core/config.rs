//! Combat configuration.
//!
//! Sessions are configured at startup with a [`CombatConfig`]. The
//! defaults are the rules of the base game; tests shrink or stretch them
//! to reach edge cases quickly.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Default number of cards drawn at the start of each player turn.
pub const DEFAULT_HAND_SIZE: usize = 5;

/// Default energy available each player turn.
pub const DEFAULT_ENERGY_PER_TURN: i32 = 3;

/// Default Louse damage roll bounds (inclusive).
pub const DEFAULT_LOUSE_DAMAGE: (i32, i32) = (5, 7);

/// Rules shared by every encounter of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Cards drawn at the start of each player turn.
    pub hand_size: usize,

    /// Energy the player is reset to at the start of each turn.
    pub energy_per_turn: i32,

    /// Lowest damage a Louse can roll.
    pub louse_damage_min: i32,

    /// Highest damage a Louse can roll.
    pub louse_damage_max: i32,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            energy_per_turn: DEFAULT_ENERGY_PER_TURN,
            louse_damage_min: DEFAULT_LOUSE_DAMAGE.0,
            louse_damage_max: DEFAULT_LOUSE_DAMAGE.1,
        }
    }
}

impl CombatConfig {
    /// Create a configuration with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards drawn per turn.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the energy available per turn.
    #[must_use]
    pub fn with_energy_per_turn(mut self, energy: i32) -> Self {
        self.energy_per_turn = energy;
        self
    }

    /// Set the Louse damage roll range.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[must_use]
    pub fn with_louse_damage(mut self, min: i32, max: i32) -> Self {
        assert!(min <= max, "Louse damage range must not be empty");
        self.louse_damage_min = min;
        self.louse_damage_max = max;
        self
    }

    /// Louse damage roll range.
    #[must_use]
    pub fn louse_damage(&self) -> RangeInclusive<i32> {
        self.louse_damage_min..=self.louse_damage_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CombatConfig::new();
        assert_eq!(config.hand_size, 5);
        assert_eq!(config.energy_per_turn, 3);
        assert_eq!(config.louse_damage(), 5..=7);
    }

    #[test]
    fn test_builder() {
        let config = CombatConfig::new()
            .with_hand_size(3)
            .with_energy_per_turn(10)
            .with_louse_damage(2, 2);

        assert_eq!(config.hand_size, 3);
        assert_eq!(config.energy_per_turn, 10);
        assert_eq!(config.louse_damage(), 2..=2);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_inverted_louse_range_panics() {
        let _ = CombatConfig::new().with_louse_damage(8, 3);
    }

    #[test]
    fn test_serde() {
        let config = CombatConfig::new().with_hand_size(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: CombatConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
