//! Core engine types: entity stats, ids, the player, RNG, configuration, errors.
//!
//! Everything here is independent of any particular monster or encounter.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::{MonsterId, MonsterIdAllocator, Stats};
pub use player::{Character, Player};
pub use rng::{GameRng, GameRngState};
pub use config::CombatConfig;
pub use error::{EngineError, EngineResult};
