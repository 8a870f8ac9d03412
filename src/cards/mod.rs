//! Card catalog: the five card types and name lookup.
//!
//! ## Key Types
//!
//! - `Card`: Closed set of card types with fixed stats
//! - `Status`: Weak, vulnerable, strength
//! - `CardCatalog`: Name to card lookup

pub mod definition;
pub mod registry;

pub use definition::{Card, Status, StatusModifiers};
pub use registry::{catalog, CardCatalog};
