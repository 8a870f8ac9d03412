//! Monsters and their intent selection.
//!
//! A monster's behaviour lives in its [`MonsterBrain`], a closed set of
//! three kinds. Intent selection is split in two:
//!
//! - [`Monster::peek_intent`] is pure and reports what the monster would do
//! - [`Monster::action`] commits to that intent, advancing any internal
//!   counters exactly once
//!
//! The encounter calls `action` once per monster per enemy turn and reuses
//! the returned [`Intent`] for every decision that turn.

use serde::{Deserialize, Serialize};

use crate::cards::{Status, StatusModifiers};
use crate::core::{
    CombatConfig, EngineError, EngineResult, GameRng, MonsterId, MonsterIdAllocator, Stats,
};

/// Base damage of the Cultist's first real attack.
const CULTIST_BASE_DAMAGE: i32 = 6;

/// Monster type names accepted in game definitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Louse,
    Cultist,
    JawWorm,
}

impl MonsterKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            MonsterKind::Louse => "Louse",
            MonsterKind::Cultist => "Cultist",
            MonsterKind::JawWorm => "JawWorm",
        }
    }
}

impl std::fmt::Display for MonsterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for MonsterKind {
    type Err = EngineError;

    fn from_str(name: &str) -> EngineResult<Self> {
        match name {
            "Louse" => Ok(MonsterKind::Louse),
            "Cultist" => Ok(MonsterKind::Cultist),
            "JawWorm" => Ok(MonsterKind::JawWorm),
            _ => Err(EngineError::UnknownMonsterKind(name.to_string())),
        }
    }
}

/// Kind-specific monster state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterBrain {
    /// Attacks for the same amount every turn, rolled at spawn.
    Louse { damage: i32 },
    /// Skips its first turn, then attacks for escalating damage.
    Cultist { calls: u32 },
    /// Blocks and attacks based on the damage it has taken.
    JawWorm,
}

impl MonsterBrain {
    #[must_use]
    pub fn kind(&self) -> MonsterKind {
        match self {
            MonsterBrain::Louse { .. } => MonsterKind::Louse,
            MonsterBrain::Cultist { .. } => MonsterKind::Cultist,
            MonsterBrain::JawWorm => MonsterKind::JawWorm,
        }
    }
}

/// What a monster does on its turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Base damage before strength and multipliers.
    pub damage: i32,
    /// Block the monster grants itself when it commits to the intent.
    pub block: i32,
    /// Statuses: weak and vulnerable land on the player, strength on the monster.
    pub statuses: StatusModifiers,
}

impl Intent {
    /// An intent that only attacks.
    #[must_use]
    pub fn attack(damage: i32) -> Self {
        Self {
            damage,
            ..Self::default()
        }
    }

    /// Add a status to the intent.
    #[must_use]
    pub fn with_status(mut self, status: Status, amount: i32) -> Self {
        self.statuses.push((status, amount));
        self
    }

    /// Set the block granted by the intent.
    #[must_use]
    pub fn with_block(mut self, block: i32) -> Self {
        self.block = block;
        self
    }

    /// Amount of a status, zero if not present.
    #[must_use]
    pub fn status(&self, status: Status) -> i32 {
        self.statuses
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, amount)| *amount)
    }
}

/// A monster in an encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    id: MonsterId,
    stats: Stats,
    brain: MonsterBrain,
}

impl Monster {
    /// Create a monster with an explicit brain.
    #[must_use]
    pub fn new(id: MonsterId, max_hp: i32, brain: MonsterBrain) -> Self {
        Self {
            id,
            stats: Stats::new(max_hp),
            brain,
        }
    }

    /// Spawn a fresh monster of the given kind.
    ///
    /// Takes the next ID from `ids`. A Louse rolls its damage from `rng`
    /// within the configured range.
    pub fn spawn(
        kind: MonsterKind,
        max_hp: i32,
        ids: &mut MonsterIdAllocator,
        rng: &mut GameRng,
        config: &CombatConfig,
    ) -> Self {
        let brain = match kind {
            MonsterKind::Louse => MonsterBrain::Louse {
                damage: rng.gen_range_inclusive(config.louse_damage()),
            },
            MonsterKind::Cultist => MonsterBrain::Cultist { calls: 0 },
            MonsterKind::JawWorm => MonsterBrain::JawWorm,
        };
        Self::new(ids.alloc(), max_hp, brain)
    }

    #[must_use]
    pub fn id(&self) -> MonsterId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> MonsterKind {
        self.brain.kind()
    }

    #[must_use]
    pub fn brain(&self) -> &MonsterBrain {
        &self.brain
    }

    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut Stats {
        &mut self.stats
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.stats.is_defeated()
    }

    /// The intent the next call to `action` would return.
    #[must_use]
    pub fn peek_intent(&self) -> Intent {
        match &self.brain {
            MonsterBrain::Louse { damage } => Intent::attack(*damage),
            MonsterBrain::Cultist { calls: 0 } => Intent::attack(0).with_status(Status::Weak, 0),
            MonsterBrain::Cultist { calls } => {
                let calls = *calls as i32;
                Intent::attack(CULTIST_BASE_DAMAGE + calls - 1)
                    .with_status(Status::Weak, calls % 2)
            }
            MonsterBrain::JawWorm => {
                let taken = self.stats.damage_taken();
                Intent::attack(taken / 2).with_block((taken + 1) / 2)
            }
        }
    }

    /// Commit to this turn's intent.
    ///
    /// Advances the monster's internal state once and applies any block the
    /// intent grants. Call exactly once per enemy turn.
    pub fn action(&mut self) -> Intent {
        let intent = self.peek_intent();
        match &mut self.brain {
            MonsterBrain::Cultist { calls } => *calls += 1,
            MonsterBrain::JawWorm => self.stats.set_block(intent.block),
            MonsterBrain::Louse { .. } => {}
        }
        intent
    }
}

impl std::fmt::Display for Monster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{}: {}", self.kind(), self.id.raw(), self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cultist() -> Monster {
        Monster::new(MonsterId(0), 50, MonsterBrain::Cultist { calls: 0 })
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("JawWorm".parse::<MonsterKind>().unwrap(), MonsterKind::JawWorm);
        assert!(matches!(
            "Slime".parse::<MonsterKind>(),
            Err(EngineError::UnknownMonsterKind(name)) if name == "Slime"
        ));
    }

    #[test]
    fn test_louse_is_constant() {
        let mut louse = Monster::new(MonsterId(1), 10, MonsterBrain::Louse { damage: 6 });
        for _ in 0..5 {
            assert_eq!(louse.action(), Intent::attack(6));
        }
    }

    #[test]
    fn test_louse_roll_within_range() {
        let config = CombatConfig::new();
        let mut ids = MonsterIdAllocator::new();
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            let louse = Monster::spawn(MonsterKind::Louse, 10, &mut ids, &mut rng, &config);
            let damage = louse.peek_intent().damage;
            assert!((5..=7).contains(&damage));
        }
        assert_eq!(ids.peek(), MonsterId(50));
    }

    #[test]
    fn test_louse_roll_is_seeded() {
        let config = CombatConfig::new();
        let roll = |seed| {
            let mut rng = GameRng::new(seed);
            let mut ids = MonsterIdAllocator::new();
            Monster::spawn(MonsterKind::Louse, 10, &mut ids, &mut rng, &config).peek_intent()
        };
        assert_eq!(roll(9), roll(9));
    }

    #[test]
    fn test_cultist_sequence() {
        let mut cultist = cultist();

        let damage: Vec<_> = (0..5).map(|_| cultist.action()).collect();
        assert_eq!(
            damage.iter().map(|i| i.damage).collect::<Vec<_>>(),
            vec![0, 6, 7, 8, 9]
        );
        assert_eq!(
            damage.iter().map(|i| i.status(Status::Weak)).collect::<Vec<_>>(),
            vec![0, 1, 0, 1, 0]
        );
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut cultist = cultist();
        assert_eq!(cultist.peek_intent().damage, 0);
        assert_eq!(cultist.peek_intent().damage, 0);
        assert_eq!(cultist.action().damage, 0);
        assert_eq!(cultist.peek_intent().damage, 6);
        assert_eq!(cultist.brain(), &MonsterBrain::Cultist { calls: 1 });
    }

    #[test]
    fn test_jaw_worm_from_damage_taken() {
        let mut worm = Monster::new(MonsterId(2), 44, MonsterBrain::JawWorm);
        worm.stats_mut().apply_damage(14);
        assert_eq!(worm.stats().hp(), 30);

        let intent = worm.action();
        assert_eq!(intent.damage, 7);
        assert_eq!(worm.stats().block(), 7);
    }

    #[test]
    fn test_jaw_worm_odd_damage_rounds_block_up() {
        let mut worm = Monster::new(MonsterId(2), 40, MonsterBrain::JawWorm);
        worm.stats_mut().apply_damage(9);

        let intent = worm.action();
        assert_eq!(intent.damage, 4);
        assert_eq!(intent.block, 5);
        assert_eq!(worm.stats().block(), 5);
    }

    #[test]
    fn test_jaw_worm_unhurt_does_nothing() {
        let mut worm = Monster::new(MonsterId(2), 40, MonsterBrain::JawWorm);
        assert_eq!(worm.action(), Intent::attack(0).with_block(0));
        assert_eq!(worm.stats().block(), 0);
    }

    #[test]
    fn test_display() {
        let worm = Monster::new(MonsterId(3), 40, MonsterBrain::JawWorm);
        assert_eq!(worm.to_string(), "JawWorm #3: 40/40 HP");
    }
}
