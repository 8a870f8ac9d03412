//! Monster AI.
//!
//! ## Key Types
//!
//! - `MonsterKind`: Louse, Cultist, JawWorm
//! - `MonsterBrain`: Kind-specific state driving intent selection
//! - `Monster`: Stats, id and brain of a live monster
//! - `Intent`: What a monster does on its turn

pub mod monster;

pub use monster::{Intent, Monster, MonsterBrain, MonsterKind};
