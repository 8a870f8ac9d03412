//! Card piles for the player.
//!
//! ## Key Types
//!
//! - `Pile`: Deck, hand or discard
//! - `Piles`: Ordered card storage and movement between piles

pub mod piles;

pub use piles::{Pile, Piles};
