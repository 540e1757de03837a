//! Questions, answers, and the results of asking for the next question.

use pokedex::ItemId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// Identifies one row of one attribute group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionRef {
    pub group: usize,
    pub row: usize,
}

/// A yes/no question ready to show the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub target: QuestionRef,
    pub text: String,
    /// Information score of the row when it was selected (0.0 - 1.0).
    pub information: f64,
}

/// What `generate_question` produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Ask this next.
    Question(Question),

    /// Exactly one candidate remains.
    Guessed { item: ItemId, name: String },

    /// No candidate remains, or no question can split the survivors.
    CannotGuess,
}

impl Outcome {
    /// Does this outcome end the game?
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Question(_))
    }

    pub fn question(&self) -> Option<&Question> {
        match self {
            Outcome::Question(question) => Some(question),
            _ => None,
        }
    }
}

/// The player's ternary answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
    Unknown,
}

impl Answer {
    /// Console encoding: `1` yes, `-1` no, `0` unsure.
    pub fn as_ternary(self) -> i8 {
        match self {
            Answer::Yes => 1,
            Answer::No => -1,
            Answer::Unknown => 0,
        }
    }

    pub fn from_ternary(value: i8) -> Option<Self> {
        match value {
            1 => Some(Answer::Yes),
            -1 => Some(Answer::No),
            0 => Some(Answer::Unknown),
            _ => None,
        }
    }
}

impl FromStr for Answer {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "y" | "yes" | "true" => Ok(Answer::Yes),
            "-1" | "n" | "no" | "false" => Ok(Answer::No),
            "0" | "?" | "unknown" | "unsure" | "not sure" => Ok(Answer::Unknown),
            other => Err(EngineError::UnrecognizedAnswer(other.to_string())),
        }
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Answer::Yes => "yes",
            Answer::No => "no",
            Answer::Unknown => "unknown",
        };
        write!(f, "{}", text)
    }
}
