//! Session controller: a full run of encounters for one player.
//!
//! The session owns the player for its whole lifetime, together with the
//! queue of remaining encounter specs, the monster ID allocator and the RNG.
//! The encounter at the front of the queue is the one being fought.
//!
//! After every card play and every enemy turn the session checks progress:
//!
//! - player at 0 hp: `GameLost`, immediately
//! - last monster defeated, queue exhausted: `GameWon`
//! - last monster defeated, more encounters left: `EncounterCleared`, and
//!   the next encounter starts with the same player

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::encounter::{Encounter, MonsterAction, PlayReport};
use crate::cards::Card;
use crate::command::Command;
use crate::core::{
    CombatConfig, EngineError, EngineResult, GameRng, GameRngState, MonsterId, MonsterIdAllocator,
    Player,
};
use crate::definition::{EncounterSpec, GameDefinition};
use crate::zones::Pile;

/// Where the session stands after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// The current encounter continues.
    InProgress,
    /// The current encounter was won and the next one has started.
    EncounterCleared,
    /// Every encounter was won.
    GameWon,
    /// The player was defeated.
    GameLost,
}

impl SessionStatus {
    /// Has the session ended?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::GameWon | SessionStatus::GameLost)
    }
}

/// Result of playing a card through the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub report: PlayReport,
    pub status: SessionStatus,
}

/// Result of ending the player's turn through the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub actions: Vec<MonsterAction>,
    pub status: SessionStatus,
}

/// Answer to an executed [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Played(PlayOutcome),
    TurnEnded(TurnOutcome),
    Pile { pile: Pile, cards: Vec<Card> },
    Description { card: Card, text: String },
}

/// A run of encounters for one player.
#[derive(Clone, Debug)]
pub struct Session {
    player: Player,
    queue: VecDeque<EncounterSpec>,
    encounter: Encounter,
    ids: MonsterIdAllocator,
    rng: GameRng,
    config: CombatConfig,
    status: SessionStatus,
    encounters_cleared: usize,
}

impl Session {
    /// Start a session and its first encounter.
    ///
    /// Every monster in the definition is checked up front; an unknown kind
    /// or a non-positive max hp fails before any encounter is built.
    pub fn new(
        player: Player,
        definition: GameDefinition,
        config: CombatConfig,
        seed: u64,
    ) -> EngineResult<Self> {
        Self::with_rng(player, definition, config, GameRng::new(seed))
    }

    /// Start a session with an existing RNG, e.g. one restored with
    /// [`GameRng::from_state`] from an earlier [`Session::rng_state`].
    pub fn with_rng(
        player: Player,
        definition: GameDefinition,
        config: CombatConfig,
        mut rng: GameRng,
    ) -> EngineResult<Self> {
        for spec in definition.encounters() {
            for monster in spec.monsters() {
                monster.validate()?;
            }
        }

        let mut player = player.with_config(&config);
        let mut queue: VecDeque<_> = definition.into_encounters().into();
        let mut ids = MonsterIdAllocator::new();

        let first = queue.front().ok_or(EngineError::EmptyGame)?;
        let encounter = Encounter::new(&mut player, first, &mut ids, &mut rng, &config)?;
        info!(
            player = player.name(),
            encounters = queue.len(),
            seed = rng.seed(),
            "session started"
        );

        let mut session = Self {
            player,
            queue,
            encounter,
            ids,
            rng,
            config,
            status: SessionStatus::InProgress,
            encounters_cleared: 0,
        };
        // An encounter spec with no monsters is cleared on arrival.
        session.advance()?;
        Ok(session)
    }

    // === Accessors ===

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    #[must_use]
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Status after the most recent action.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Encounters still to fight, including the current one.
    #[must_use]
    pub fn remaining_encounters(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn encounters_cleared(&self) -> usize {
        self.encounters_cleared
    }

    /// Snapshot of the RNG, enough to replay every later spawn.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Actions ===

    /// Play a card in the current encounter.
    pub fn play(&mut self, card: &str, target: Option<MonsterId>) -> EngineResult<PlayOutcome> {
        self.ensure_running()?;
        let report = self.encounter.apply_card(&mut self.player, card, target)?;
        let status = self.advance()?;
        Ok(PlayOutcome { report, status })
    }

    /// End the player's turn and let the monsters act.
    pub fn end_turn(&mut self) -> EngineResult<TurnOutcome> {
        self.ensure_running()?;
        self.encounter.end_player_turn(&mut self.player)?;
        let actions = self.encounter.enemy_turn(&mut self.player)?;
        let status = self.advance()?;
        Ok(TurnOutcome { actions, status })
    }

    /// Run a parsed command.
    ///
    /// `inspect` and `describe` only read state and work even after the
    /// session has ended.
    pub fn execute(&mut self, command: Command) -> EngineResult<Response> {
        match command {
            Command::Play { card, target } => self.play(&card, target).map(Response::Played),
            Command::EndTurn => self.end_turn().map(Response::TurnEnded),
            Command::Inspect(pile) => Ok(Response::Pile {
                pile,
                cards: self.player.pile(pile).to_vec(),
            }),
            Command::Describe(card) => Ok(Response::Description {
                card,
                text: card.description(),
            }),
        }
    }

    fn ensure_running(&self) -> EngineResult<()> {
        if self.is_over() {
            return Err(EngineError::SessionOver);
        }
        Ok(())
    }

    /// Check for defeat or a cleared encounter and move the session on.
    fn advance(&mut self) -> EngineResult<SessionStatus> {
        let mut status = SessionStatus::InProgress;
        if self.player.is_defeated() {
            info!(cleared = self.encounters_cleared, "game lost");
            status = SessionStatus::GameLost;
        }

        while status == SessionStatus::InProgress || status == SessionStatus::EncounterCleared {
            if self.encounter.is_active() {
                break;
            }
            self.encounter.end_player_turn(&mut self.player)?;
            self.queue.pop_front();
            self.encounters_cleared += 1;

            let Some(next) = self.queue.front() else {
                info!(cleared = self.encounters_cleared, "game won");
                status = SessionStatus::GameWon;
                break;
            };
            self.encounter = Encounter::new(
                &mut self.player,
                next,
                &mut self.ids,
                &mut self.rng,
                &self.config,
            )?;
            status = SessionStatus::EncounterCleared;
        }

        self.status = status;
        Ok(status)
    }
}
