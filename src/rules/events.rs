//! Combat log events.
//!
//! Every state change an encounter makes is recorded as a `CombatEvent`,
//! in order. The log is an `im::Vector`, so snapshots of it are cheap.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Status};
use crate::core::MonsterId;
use crate::monsters::Intent;

/// Who an event happened to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combatant {
    Player,
    Monster(MonsterId),
}

impl std::fmt::Display for Combatant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Combatant::Player => f.write_str("Player"),
            Combatant::Monster(id) => write!(f, "{}", id),
        }
    }
}

/// A single recorded state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// An encounter began with these monsters.
    EncounterStarted { monsters: Vec<MonsterId> },

    /// The player drew a fresh hand.
    PlayerTurnStarted { turn: u32 },

    /// A card left the hand.
    CardPlayed { card: Card, target: Option<MonsterId> },

    /// Block was added.
    BlockGained { target: Combatant, amount: i32 },

    /// A status was added.
    StatusApplied { target: Combatant, status: Status, amount: i32 },

    /// Damage after multipliers, before block.
    DamageDealt { source: Combatant, target: Combatant, amount: i32 },

    /// A monster committed to its intent.
    IntentRevealed { monster: MonsterId, intent: Intent },

    /// A monster reached 0 hp and left the encounter.
    MonsterDefeated { monster: MonsterId },

    /// The player ended their turn.
    PlayerTurnEnded { turn: u32 },

    /// The player reached 0 hp.
    PlayerDefeated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combatant_display() {
        assert_eq!(Combatant::Player.to_string(), "Player");
        assert_eq!(Combatant::Monster(MonsterId(4)).to_string(), "Monster(4)");
    }

    #[test]
    fn test_event_serialization() {
        let event = CombatEvent::StatusApplied {
            target: Combatant::Monster(MonsterId(1)),
            status: Status::Vulnerable,
            amount: 2,
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: CombatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
