//! Encounter turn engine.
//!
//! An `Encounter` is one battle between the player and a group of monsters.
//! It owns the live monsters, the turn phase and the combat log. The player
//! outlives every encounter, so each operation borrows it mutably instead of
//! the encounter holding it.
//!
//! ## Phases
//!
//! ```text
//! PlayerTurn --end_player_turn--> MonsterTurn --enemy_turn--> PlayerTurn
//!     |                                            |
//!     +-- last monster defeated --> Resolved(Won)  +-- player at 0 hp --> Resolved(PlayerDefeated)
//! ```
//!
//! ## Atomic card plays
//!
//! `apply_card` checks every precondition before it touches any state. An
//! `Err` means the player, the monsters and the log are exactly as before.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::damage::attack_damage;
use super::events::{CombatEvent, Combatant};
use crate::cards::{catalog, Card, Status};
use crate::core::{
    CombatConfig, EngineError, EngineResult, GameRng, MonsterId, MonsterIdAllocator, Player,
};
use crate::definition::{EncounterSpec, MonsterSpec};
use crate::monsters::{Intent, Monster};

/// How an encounter ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Every monster was defeated.
    Won,
    /// The player reached 0 hp.
    PlayerDefeated,
}

/// Current phase of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The player may play cards.
    PlayerTurn,
    /// The player has ended the turn; monsters act next.
    MonsterTurn,
    /// The encounter is over.
    Resolved(Resolution),
}

/// Outcome of a successful card play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayReport {
    pub card: Card,
    pub target: Option<MonsterId>,
    /// Damage dealt to the target, if one was given.
    pub damage: Option<i32>,
    /// Whether the target was defeated by this play.
    pub defeated: bool,
}

/// What one monster did during the enemy turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterAction {
    pub monster: MonsterId,
    pub intent: Intent,
    /// Damage dealt to the player after multipliers.
    pub damage: i32,
}

/// One battle against a fixed group of monsters.
#[derive(Clone, Debug)]
pub struct Encounter {
    monsters: Vec<Monster>,
    phase: TurnPhase,
    turn: u32,
    log: Vector<CombatEvent>,
}

impl Encounter {
    /// Build an encounter from a monster-group spec and start the first turn.
    ///
    /// Every monster is checked before anything is spawned: an unknown kind
    /// fails with `UnknownMonsterKind`, a non-positive max hp with
    /// `InvalidMaxHp`, and either leaves the player, the ID allocator and the
    /// RNG untouched.
    pub fn new(
        player: &mut Player,
        spec: &EncounterSpec,
        ids: &mut MonsterIdAllocator,
        rng: &mut GameRng,
        config: &CombatConfig,
    ) -> EngineResult<Self> {
        let kinds = spec
            .monsters()
            .iter()
            .map(MonsterSpec::validate)
            .collect::<EngineResult<Vec<_>>>()?;

        let monsters = kinds
            .into_iter()
            .zip(spec.monsters())
            .map(|(kind, m)| Monster::spawn(kind, m.max_hp, ids, rng, config))
            .collect();

        Ok(Self::from_monsters(player, monsters))
    }

    /// Start an encounter against already-built monsters.
    pub fn from_monsters(player: &mut Player, monsters: Vec<Monster>) -> Self {
        let mut encounter = Self {
            monsters,
            phase: TurnPhase::PlayerTurn,
            turn: 1,
            log: Vector::new(),
        };

        let ids = encounter.monster_ids();
        encounter.log.push_back(CombatEvent::EncounterStarted { monsters: ids });
        info!(monsters = encounter.monsters.len(), "new encounter");

        player.start_encounter();
        player.new_turn();
        encounter.log.push_back(CombatEvent::PlayerTurnStarted { turn: 1 });

        if encounter.monsters.is_empty() {
            encounter.phase = TurnPhase::Resolved(Resolution::Won);
        }
        encounter
    }

    // === Accessors ===

    /// Live monsters, in spawn order.
    #[must_use]
    pub fn monsters(&self) -> &[Monster] {
        &self.monsters
    }

    /// Get a live monster by ID.
    #[must_use]
    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| m.id() == id)
    }

    /// IDs of the live monsters, in spawn order.
    #[must_use]
    pub fn monster_ids(&self) -> Vec<MonsterId> {
        self.monsters.iter().map(Monster::id).collect()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Player turn number, starting at 1.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn log(&self) -> &Vector<CombatEvent> {
        &self.log
    }

    /// How the encounter ended, if it has.
    #[must_use]
    pub fn resolution(&self) -> Option<Resolution> {
        match self.phase {
            TurnPhase::Resolved(resolution) => Some(resolution),
            _ => None,
        }
    }

    /// True while any monster is alive.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.monsters.is_empty()
    }

    // === Player Turn ===

    /// Check that a card could be played, without changing anything.
    fn validate_play(
        &self,
        player: &Player,
        name: &str,
        target: Option<MonsterId>,
    ) -> EngineResult<Card> {
        if !self.is_active() {
            return Err(EngineError::NoActiveMonsters);
        }
        if self.phase != TurnPhase::PlayerTurn {
            return Err(EngineError::NotPlayerTurn);
        }
        if player.hand().is_empty() {
            return Err(EngineError::EmptyHand);
        }

        let card = catalog(name)?;
        if card.requires_target() && target.is_none() {
            return Err(EngineError::MissingRequiredTarget(name.to_string()));
        }
        if let Some(id) = target {
            if self.monster(id).is_none() {
                return Err(EngineError::InvalidTargetId(id));
            }
        }

        player.check_playable(name)?;
        Ok(card)
    }

    /// Play a card from the player's hand.
    ///
    /// Block goes to the player. When a target is given, that monster
    /// receives the card's weak, vulnerable and strength modifiers and then
    /// takes the card's damage; a monster reduced to 0 hp leaves the
    /// encounter. Without a target the card only grants its block.
    pub fn apply_card(
        &mut self,
        player: &mut Player,
        name: &str,
        target: Option<MonsterId>,
    ) -> EngineResult<PlayReport> {
        let card = match self.validate_play(player, name, target) {
            Ok(card) => card,
            Err(err) => {
                warn!(card = name, ?target, %err, "card play rejected");
                return Err(err);
            }
        };

        player
            .play_card(name)
            .ok_or_else(|| EngineError::CardNotInHand(name.to_string()))?;
        self.log.push_back(CombatEvent::CardPlayed { card, target });
        debug!(%card, ?target, energy = player.energy(), "card played");

        if card.block() > 0 {
            player.stats_mut().add_block(card.block());
            self.log.push_back(CombatEvent::BlockGained {
                target: Combatant::Player,
                amount: card.block(),
            });
        }

        let mut report = PlayReport {
            card,
            target,
            damage: None,
            defeated: false,
        };

        let Some(id) = target else {
            return Ok(report);
        };
        let Some(index) = self.monsters.iter().position(|m| m.id() == id) else {
            return Ok(report);
        };

        let monster = &mut self.monsters[index];
        for (status, amount) in card.status_modifiers() {
            match status {
                Status::Weak => monster.stats_mut().add_weak(amount),
                Status::Vulnerable => monster.stats_mut().add_vulnerable(amount),
                Status::Strength => monster.stats_mut().add_strength(amount),
            }
            self.log.push_back(CombatEvent::StatusApplied {
                target: Combatant::Monster(id),
                status,
                amount,
            });
        }

        let damage = attack_damage(card.damage(), player.stats(), monster.stats());
        monster.stats_mut().apply_damage(damage);
        self.log.push_back(CombatEvent::DamageDealt {
            source: Combatant::Player,
            target: Combatant::Monster(id),
            amount: damage,
        });
        report.damage = Some(damage);

        if monster.is_defeated() {
            self.monsters.remove(index);
            self.log.push_back(CombatEvent::MonsterDefeated { monster: id });
            report.defeated = true;
            debug!(%id, "monster defeated");

            if self.monsters.is_empty() {
                self.phase = TurnPhase::Resolved(Resolution::Won);
                info!(turn = self.turn, "encounter won");
            }
        }

        Ok(report)
    }

    /// End the player's turn.
    ///
    /// Discards the player's hand, then runs start-of-turn decay for every
    /// live monster. Once the encounter is won this only discards the hand,
    /// readying the piles for the next encounter.
    pub fn end_player_turn(&mut self, player: &mut Player) -> EngineResult<()> {
        match self.phase {
            TurnPhase::PlayerTurn => {
                player.end_turn();
                for monster in &mut self.monsters {
                    monster.stats_mut().on_turn_start();
                }
                self.log.push_back(CombatEvent::PlayerTurnEnded { turn: self.turn });
                self.phase = TurnPhase::MonsterTurn;
                Ok(())
            }
            TurnPhase::Resolved(Resolution::Won) => {
                player.end_turn();
                Ok(())
            }
            _ => Err(EngineError::OutOfPhase("end_player_turn")),
        }
    }

    /// Run the monsters' turn.
    ///
    /// Each live monster, in spawn order, commits to its intent exactly once.
    /// Weak and vulnerable land on the player, strength on the monster, then
    /// the attack is resolved against the player. If the player falls, the
    /// remaining monsters do not act and the encounter resolves; otherwise a
    /// new player turn begins.
    pub fn enemy_turn(&mut self, player: &mut Player) -> EngineResult<Vec<MonsterAction>> {
        if self.phase != TurnPhase::MonsterTurn {
            return Err(EngineError::OutOfPhase("enemy_turn"));
        }

        let mut actions = Vec::with_capacity(self.monsters.len());
        for monster in &mut self.monsters {
            let id = monster.id();
            let intent = monster.action();
            self.log.push_back(CombatEvent::IntentRevealed {
                monster: id,
                intent: intent.clone(),
            });

            for &(status, amount) in &intent.statuses {
                let target = match status {
                    Status::Weak => {
                        player.stats_mut().add_weak(amount);
                        Combatant::Player
                    }
                    Status::Vulnerable => {
                        player.stats_mut().add_vulnerable(amount);
                        Combatant::Player
                    }
                    Status::Strength => {
                        monster.stats_mut().add_strength(amount);
                        Combatant::Monster(id)
                    }
                };
                self.log.push_back(CombatEvent::StatusApplied {
                    target,
                    status,
                    amount,
                });
            }

            let damage = attack_damage(intent.damage, monster.stats(), player.stats());
            player.stats_mut().apply_damage(damage);
            self.log.push_back(CombatEvent::DamageDealt {
                source: Combatant::Monster(id),
                target: Combatant::Player,
                amount: damage,
            });
            debug!(%id, damage, player_hp = player.stats().hp(), "monster acted");

            actions.push(MonsterAction {
                monster: id,
                intent,
                damage,
            });

            if player.is_defeated() {
                self.log.push_back(CombatEvent::PlayerDefeated);
                self.phase = TurnPhase::Resolved(Resolution::PlayerDefeated);
                info!(turn = self.turn, "player defeated");
                return Ok(actions);
            }
        }

        player.new_turn();
        self.turn += 1;
        self.phase = TurnPhase::PlayerTurn;
        self.log.push_back(CombatEvent::PlayerTurnStarted { turn: self.turn });
        Ok(actions)
    }
}
