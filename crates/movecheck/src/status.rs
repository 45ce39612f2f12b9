//! Validation status and game outcomes.

use super::types::Tag;
use serde::{Deserialize, Serialize};

/// Outcome of a decided game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player with this tag completed a win line.
    Winner(Tag),
    /// All cells claimed, no win line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Tag> {
        match self {
            Outcome::Winner(tag) => Some(*tag),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(tag) => write!(f, "Player {} wins", tag),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Result of validating a well-formed move sequence.
///
/// Malformed sequences never produce a `Status`; they surface as a
/// [`CheckError`](crate::CheckError) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Zero-length sequence.
    Empty,
    /// Legal and undecided.
    Running,
    /// Legal and decided.
    Complete(Outcome),
}

impl Status {
    /// Returns the outcome of a decided game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Status::Complete(outcome) => Some(*outcome),
            Status::Empty | Status::Running => None,
        }
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Tag> {
        self.outcome().and_then(|outcome| outcome.winner())
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.outcome().is_some_and(|outcome| outcome.is_draw())
    }

    /// Short lowercase name of the status.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Empty => "empty",
            Status::Running => "running",
            Status::Complete(_) => "complete",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Complete(outcome) => write!(f, "complete ({})", outcome),
            other => write!(f, "{}", other.label()),
        }
    }
}
