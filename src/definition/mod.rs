//! Game definitions: the ordered list of encounters a session plays.
//!
//! A definition is plain data. Monster kinds are kept as the names found in
//! the source and only checked by `MonsterSpec::validate`, which sessions and
//! encounters call before building anything, so an unknown kind fails loudly
//! instead of being skipped.
//!
//! ## JSON shape
//!
//! ```
//! use spire_engine::definition::GameDefinition;
//!
//! let json = r#"{
//!     "encounters": [
//!         [{"kind": "Louse", "max_hp": 10}],
//!         [{"kind": "Cultist", "max_hp": 40}, {"kind": "JawWorm", "max_hp": 44}]
//!     ]
//! }"#;
//!
//! let game = GameDefinition::from_json_str(json).unwrap();
//! assert_eq!(game.encounters().len(), 2);
//! assert_eq!(game.encounters()[1].monsters()[1].kind, "JawWorm");
//! ```

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};
use crate::monsters::MonsterKind;

/// One monster to spawn: kind name and maximum hp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSpec {
    pub kind: String,
    pub max_hp: i32,
}

impl MonsterSpec {
    pub fn new(kind: impl Into<String>, max_hp: i32) -> Self {
        Self {
            kind: kind.into(),
            max_hp,
        }
    }

    /// Resolve the kind name and check the hp, without spawning anything.
    pub fn validate(&self) -> EngineResult<MonsterKind> {
        let kind = self.kind.parse::<MonsterKind>()?;
        if self.max_hp <= 0 {
            return Err(EngineError::InvalidMaxHp {
                kind: self.kind.clone(),
                max_hp: self.max_hp,
            });
        }
        Ok(kind)
    }
}

/// The monster group of one encounter, in spawn order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncounterSpec {
    monsters: Vec<MonsterSpec>,
}

impl EncounterSpec {
    #[must_use]
    pub fn new(monsters: Vec<MonsterSpec>) -> Self {
        Self { monsters }
    }

    /// Add a monster (builder pattern).
    #[must_use]
    pub fn with_monster(mut self, kind: impl Into<String>, max_hp: i32) -> Self {
        self.monsters.push(MonsterSpec::new(kind, max_hp));
        self
    }

    #[must_use]
    pub fn monsters(&self) -> &[MonsterSpec] {
        &self.monsters
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for EncounterSpec {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(kind, max_hp)| MonsterSpec::new(kind, max_hp))
                .collect(),
        )
    }
}

/// Ordered encounters making up one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDefinition {
    encounters: Vec<EncounterSpec>,
}

impl GameDefinition {
    /// Create a definition. At least one encounter is required.
    pub fn new(encounters: Vec<EncounterSpec>) -> EngineResult<Self> {
        if encounters.is_empty() {
            return Err(EngineError::EmptyGame);
        }
        Ok(Self { encounters })
    }

    /// Parse a definition from JSON text.
    pub fn from_json_str(json: &str) -> EngineResult<Self> {
        let raw: GameDefinition = serde_json::from_str(json)?;
        Self::new(raw.encounters)
    }

    /// Parse a definition from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> EngineResult<Self> {
        let raw: GameDefinition = serde_json::from_reader(reader)?;
        Self::new(raw.encounters)
    }

    /// Read and parse a JSON definition file.
    pub fn from_path(path: impl AsRef<Path>) -> EngineResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    #[must_use]
    pub fn encounters(&self) -> &[EncounterSpec] {
        &self.encounters
    }

    /// Consume the definition, yielding its encounters in order.
    #[must_use]
    pub fn into_encounters(self) -> Vec<EncounterSpec> {
        self.encounters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let spec = EncounterSpec::default()
            .with_monster("Louse", 10)
            .with_monster("Cultist", 30);

        assert_eq!(spec.monsters().len(), 2);
        assert_eq!(spec.monsters()[0], MonsterSpec::new("Louse", 10));
    }

    #[test]
    fn test_from_pairs() {
        let spec: EncounterSpec = [("JawWorm", 44), ("Louse", 12)].into_iter().collect();
        assert_eq!(spec.monsters()[0].kind, "JawWorm");
        assert_eq!(spec.monsters()[1].max_hp, 12);
    }

    #[test]
    fn test_empty_game_rejected() {
        assert!(matches!(GameDefinition::new(vec![]), Err(EngineError::EmptyGame)));
        assert!(matches!(
            GameDefinition::from_json_str(r#"{"encounters": []}"#),
            Err(EngineError::EmptyGame)
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GameDefinition::from_json_str(r#"{"encounters": [[{"kind": "Louse"}]]}"#),
            Err(EngineError::Json(_))
        ));
    }

    #[test]
    fn test_unknown_kind_is_kept_as_data() {
        let game =
            GameDefinition::from_json_str(r#"{"encounters": [[{"kind": "Dragon", "max_hp": 5}]]}"#)
                .unwrap();
        assert_eq!(game.encounters()[0].monsters()[0].kind, "Dragon");
    }

    #[test]
    fn test_validate() {
        assert_eq!(MonsterSpec::new("Cultist", 40).validate().unwrap(), MonsterKind::Cultist);
        assert!(matches!(
            MonsterSpec::new("Slime", 40).validate(),
            Err(EngineError::UnknownMonsterKind(_))
        ));
        assert!(matches!(
            MonsterSpec::new("Louse", -3).validate(),
            Err(EngineError::InvalidMaxHp { max_hp: -3, .. })
        ));
    }

    #[test]
    fn test_from_reader() {
        let json = br#"{"encounters": [[{"kind": "Louse", "max_hp": 3}]]}"#;
        let game = GameDefinition::from_reader(&json[..]).unwrap();
        assert_eq!(game.into_encounters().len(), 1);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            GameDefinition::from_path("/nonexistent/game.json"),
            Err(EngineError::Io(_))
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let game = GameDefinition::new(vec![EncounterSpec::default().with_monster("Louse", 4)])
            .unwrap();
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(json, r#"{"encounters":[[{"kind":"Louse","max_hp":4}]]}"#);
    }
}
