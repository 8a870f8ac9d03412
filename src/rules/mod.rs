//! Combat rules: damage, the encounter turn engine, and the session.
//!
//! `Encounter` runs a single battle and never outlives it. `Session` owns
//! the player across a queue of encounters and decides when the game is
//! won or lost. Neither interprets text; see `command` for that.
//!
//! ## Key Types
//!
//! - `Encounter`: Phases, card plays, enemy turns, combat log
//! - `Session`: Encounter queue, monster ids, RNG, game status
//! - `CombatEvent`: One entry in the combat log

pub mod damage;
pub mod encounter;
pub mod events;
pub mod session;

pub use damage::attack_damage;
pub use encounter::{Encounter, MonsterAction, PlayReport, Resolution, TurnPhase};
pub use events::{CombatEvent, Combatant};
pub use session::{PlayOutcome, Response, Session, SessionStatus, TurnOutcome};
