//! Combat entities: identifiers and the shared status model.
//!
//! Players and monsters carry the same set of combat attributes, held in
//! [`Stats`]. Every mutation goes through one of its methods so the
//! invariants below hold at all times:
//!
//! - `0 <= hp <= max_hp`
//! - `block`, `weak` and `vulnerable` never drop below zero through decay
//! - `hp == 0` exactly when the entity is defeated
//!
//! ## Monster IDs
//!
//! Monsters are identified by a [`MonsterId`] handed out by a
//! [`MonsterIdAllocator`]. The allocator is owned by the session and
//! threaded into each spawn, so ids are unique across every encounter
//! of a session and never reused.
//!
//! ```
//! use spire_engine::core::MonsterIdAllocator;
//!
//! let mut ids = MonsterIdAllocator::new();
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_eq!(first.raw(), 0);
//! assert_eq!(second.raw(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    /// Create a monster ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for MonsterId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Monster({})", self.0)
    }
}

/// Monotonic monster ID source.
///
/// IDs start at 0 and increase by one per allocation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MonsterIdAllocator {
    next: u32,
}

impl MonsterIdAllocator {
    /// Create an allocator starting at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ID.
    pub fn alloc(&mut self) -> MonsterId {
        let id = MonsterId(self.next);
        self.next += 1;
        id
    }

    /// The ID the next call to `alloc` will return.
    #[must_use]
    pub fn peek(&self) -> MonsterId {
        MonsterId(self.next)
    }
}

/// Combat attributes shared by the player and every monster.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    max_hp: i32,
    hp: i32,
    block: i32,
    strength: i32,
    weak: i32,
    vulnerable: i32,
}

impl Stats {
    /// Create stats at full health with no statuses.
    ///
    /// # Panics
    ///
    /// Panics if `max_hp` is not positive. Monster hp from a loaded definition
    /// is checked by `MonsterSpec::validate` before it gets here.
    #[must_use]
    pub fn new(max_hp: i32) -> Self {
        assert!(max_hp > 0, "max_hp must be positive");
        Self {
            max_hp,
            hp: max_hp,
            block: 0,
            strength: 0,
            weak: 0,
            vulnerable: 0,
        }
    }

    #[must_use]
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    #[must_use]
    pub fn hp(&self) -> i32 {
        self.hp
    }

    #[must_use]
    pub fn block(&self) -> i32 {
        self.block
    }

    #[must_use]
    pub fn strength(&self) -> i32 {
        self.strength
    }

    #[must_use]
    pub fn weak(&self) -> i32 {
        self.weak
    }

    #[must_use]
    pub fn vulnerable(&self) -> i32 {
        self.vulnerable
    }

    /// Damage taken so far (`max_hp - hp`).
    #[must_use]
    pub fn damage_taken(&self) -> i32 {
        self.max_hp - self.hp
    }

    /// Apply incoming damage.
    ///
    /// Block absorbs damage first. Whatever block cannot absorb is taken
    /// from hp, which never drops below zero.
    ///
    /// ```
    /// use spire_engine::core::Stats;
    ///
    /// let mut stats = Stats::new(20);
    /// stats.add_block(5);
    /// stats.apply_damage(8);
    ///
    /// assert_eq!(stats.block(), 0);
    /// assert_eq!(stats.hp(), 17);
    /// ```
    pub fn apply_damage(&mut self, amount: i32) {
        if self.block > 0 {
            self.block -= amount;
            if self.block < 0 {
                self.hp += self.block;
                self.block = 0;
            }
        } else {
            self.hp -= amount;
        }
        self.hp = self.hp.max(0);
    }

    pub fn add_block(&mut self, amount: i32) {
        self.block += amount;
    }

    pub fn add_strength(&mut self, amount: i32) {
        self.strength += amount;
    }

    pub fn add_weak(&mut self, amount: i32) {
        self.weak += amount;
    }

    pub fn add_vulnerable(&mut self, amount: i32) {
        self.vulnerable += amount;
    }

    /// Overwrite block. Used by monsters whose intent sets block directly.
    pub fn set_block(&mut self, amount: i32) {
        self.block = amount;
    }

    /// Start-of-turn decay: block resets, weak and vulnerable tick down.
    ///
    /// Strength is never decayed.
    pub fn on_turn_start(&mut self) {
        self.block = 0;
        self.weak = (self.weak - 1).max(0);
        self.vulnerable = (self.vulnerable - 1).max(0);
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} HP", self.hp, self.max_hp)
    }
}
