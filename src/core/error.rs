//! Engine error type.
//!
//! Card-play and targeting failures are recoverable: the engine validates
//! everything before it mutates, so an `Err` always means nothing changed.
//! Loading failures (`UnknownMonsterKind`, `EmptyGame`, I/O, JSON) are fatal
//! to the encounter or game being built and are surfaced to the caller.

use super::entity::MonsterId;

/// Errors raised by the combat engine.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// No card with this name is in the player's hand.
    #[error("card '{0}' is not in hand")]
    CardNotInHand(String),

    /// The card costs more energy than the player has left.
    #[error("not enough energy: card costs {cost}, player has {available}")]
    InsufficientEnergy { cost: i32, available: i32 },

    /// The card must be played at a monster but no target was given.
    #[error("card '{0}' requires a target")]
    MissingRequiredTarget(String),

    /// No live monster has this id.
    #[error("no live monster with id {0}")]
    InvalidTargetId(MonsterId),

    /// Name does not match any card in the catalog.
    #[error("unknown card '{0}'")]
    UnknownCard(String),

    /// Name does not match any monster kind.
    #[error("unknown monster kind '{0}'")]
    UnknownMonsterKind(String),

    /// A monster spec with no hit points.
    #[error("monster '{kind}' has max hp {max_hp}, must be positive")]
    InvalidMaxHp { kind: String, max_hp: i32 },

    /// Name does not match any playable character.
    #[error("unknown character '{0}'")]
    UnknownCharacter(String),

    /// The encounter has no monsters left to fight.
    #[error("no active monsters")]
    NoActiveMonsters,

    /// The player has no cards in hand.
    #[error("hand is empty")]
    EmptyHand,

    /// Cards can only be played during the player's turn.
    #[error("not the player's turn")]
    NotPlayerTurn,

    /// The operation does not apply to the encounter's current phase.
    #[error("operation '{0}' is not valid in the current phase")]
    OutOfPhase(&'static str),

    /// The session already ended in a win or a loss.
    #[error("session is over")]
    SessionOver,

    /// Text could not be parsed as a command.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// A game definition with no encounters.
    #[error("game definition has no encounters")]
    EmptyGame,

    /// I/O failure while reading a game definition.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed game definition.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
