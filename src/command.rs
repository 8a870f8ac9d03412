//! Text commands for driving a session.
//!
//! ```text
//! play <card> [<monster id>]
//! end turn
//! inspect deck|hand|discard
//! describe <card>
//! ```
//!
//! Keywords are case-insensitive; card names are matched exactly.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{EngineError, EngineResult, MonsterId};
use crate::zones::Pile;

/// A parsed player command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Play a card by name, optionally at a monster.
    Play { card: String, target: Option<MonsterId> },
    /// End the player's turn.
    EndTurn,
    /// List the cards in one of the player's piles.
    Inspect(Pile),
    /// Show a card's description.
    Describe(Card),
}

impl Command {
    /// Convenience constructor for a targeted play.
    pub fn play_at(card: impl Into<String>, target: MonsterId) -> Self {
        Command::Play {
            card: card.into(),
            target: Some(target),
        }
    }
}

fn invalid(input: &str) -> EngineError {
    EngineError::InvalidCommand(input.trim().to_string())
}

fn parse_pile(word: &str) -> Option<Pile> {
    match word.to_ascii_lowercase().as_str() {
        "deck" => Some(Pile::Deck),
        "hand" => Some(Pile::Hand),
        "discard" => Some(Pile::Discard),
        _ => None,
    }
}

impl std::str::FromStr for Command {
    type Err = EngineError;

    fn from_str(input: &str) -> EngineResult<Self> {
        let words: Vec<&str> = input.split_whitespace().collect();
        let Some((keyword, args)) = words.split_first() else {
            return Err(invalid(input));
        };

        match (keyword.to_ascii_lowercase().as_str(), args) {
            ("play", [card]) => Ok(Command::Play {
                card: (*card).to_string(),
                target: None,
            }),
            ("play", [card, target]) => {
                let id: u32 = target.parse().map_err(|_| invalid(input))?;
                Ok(Command::play_at(*card, MonsterId(id)))
            }
            ("end", [word]) if word.eq_ignore_ascii_case("turn") => Ok(Command::EndTurn),
            ("inspect", [pile]) => parse_pile(pile)
                .map(Command::Inspect)
                .ok_or_else(|| invalid(input)),
            ("describe", [card]) => Ok(Command::Describe(card.parse()?)),
            _ => Err(invalid(input)),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Play { card, target: None } => write!(f, "play {}", card),
            Command::Play {
                card,
                target: Some(id),
            } => write!(f, "play {} {}", card, id.raw()),
            Command::EndTurn => f.write_str("end turn"),
            Command::Inspect(pile) => write!(f, "inspect {}", pile),
            Command::Describe(card) => write!(f, "describe {}", card),
        }
    }
}
