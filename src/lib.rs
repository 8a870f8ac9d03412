//! # spire-engine
//!
//! A turn-based deckbuilder combat engine.
//!
//! A player with a fixed deck fights a queue of monster encounters. Each
//! turn the player draws a hand, spends energy on cards, then every monster
//! acts on its intent. Statuses (weak, vulnerable, strength) scale damage
//! and decay at the start of their owner's turn.
//!
//! ## Design Principles
//!
//! 1. **Closed Sets**: Cards and monster kinds are enums. Adding one is a
//!    compile-time change, not a registry lookup that can fail at runtime.
//!
//! 2. **Atomic Plays**: Every card play is validated before it mutates, so
//!    a rejected play leaves the game exactly as it was.
//!
//! 3. **Explicit Context**: Monster ids, the RNG and combat configuration
//!    are owned by the session and passed in, never global.
//!
//! ## Modules
//!
//! - `core`: Entity stats, monster ids, player, RNG, configuration, errors
//! - `zones`: Deck, hand and discard piles
//! - `cards`: Card catalog and status types
//! - `monsters`: Monster kinds, intents and AI state
//! - `rules`: Damage formula, encounter engine, session controller
//! - `definition`: Game definitions and the JSON loader
//! - `command`: Text command parser
//!
//! ## Example
//!
//! ```
//! use spire_engine::{Character, CombatConfig, GameDefinition, MonsterId, Player, Session};
//!
//! let game = GameDefinition::from_json_str(
//!     r#"{"encounters": [[{"kind": "Louse", "max_hp": 6}]]}"#,
//! ).unwrap();
//! let player = Player::from_character(Character::Ironclad);
//! let mut session = Session::new(player, game, CombatConfig::new(), 7).unwrap();
//!
//! let outcome = session.play("Strike", Some(MonsterId(0))).unwrap();
//! assert!(outcome.status.is_terminal());
//! ```

pub mod core;
pub mod zones;
pub mod cards;
pub mod monsters;
pub mod rules;
pub mod definition;
pub mod command;

// Re-export commonly used types
pub use crate::core::{
    MonsterId, MonsterIdAllocator, Stats,
    Character, Player,
    GameRng, GameRngState,
    CombatConfig,
    EngineError, EngineResult,
};

pub use crate::zones::{Pile, Piles};

pub use crate::cards::{catalog, Card, CardCatalog, Status, StatusModifiers};

pub use crate::monsters::{Intent, Monster, MonsterBrain, MonsterKind};

pub use crate::rules::{
    attack_damage,
    CombatEvent, Combatant,
    Encounter, MonsterAction, PlayReport, Resolution, TurnPhase,
    PlayOutcome, Response, Session, SessionStatus, TurnOutcome,
};

pub use crate::definition::{EncounterSpec, GameDefinition, MonsterSpec};

pub use crate::command::Command;
