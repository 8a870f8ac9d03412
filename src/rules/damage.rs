//! Damage formula.
//!
//! ```text
//! damage = trunc((base + attacker.strength) × 1.5 if defender vulnerable
//!                                            × 0.75 if attacker weak)
//! ```
//!
//! The vulnerable multiplier is applied before the weak one, and the result
//! is truncated toward zero, never rounded.

use crate::core::Stats;

/// Multiplier on damage dealt to a vulnerable entity.
pub const VULNERABLE_MULTIPLIER: f64 = 1.5;

/// Multiplier on damage dealt by a weakened entity.
pub const WEAK_MULTIPLIER: f64 = 0.75;

/// Compute the damage an attack deals.
///
/// ```
/// use spire_engine::core::Stats;
/// use spire_engine::rules::damage::attack_damage;
///
/// let attacker = Stats::new(50);
/// let mut defender = Stats::new(20);
/// assert_eq!(attack_damage(6, &attacker, &defender), 6);
///
/// defender.add_vulnerable(1);
/// assert_eq!(attack_damage(6, &attacker, &defender), 9);
/// ```
#[must_use]
pub fn attack_damage(base: i32, attacker: &Stats, defender: &Stats) -> i32 {
    let mut damage = f64::from(base + attacker.strength());
    if defender.vulnerable() > 0 {
        damage *= VULNERABLE_MULTIPLIER;
    }
    if attacker.weak() > 0 {
        damage *= WEAK_MULTIPLIER;
    }
    damage as i32
}
