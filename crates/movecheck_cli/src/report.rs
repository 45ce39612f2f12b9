//! Printable results for the `check` command.

use movecheck::{CheckError, CheckErrorKind, Outcome, Status, Tag};
use serde::Serialize;

/// Outcome of checking one sequence, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// One of empty, running, complete, malformed.
    pub status: &'static str,
    /// Winning tag, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Tag>,
    /// True when all cells are claimed without a winner.
    pub draw: bool,
    /// Error kind for malformed sequences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CheckErrorKind>,
    /// Index of the offending token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<usize>,
}

impl CheckReport {
    /// Builds a report from a validation result.
    pub fn new(result: &Result<Status, CheckError>) -> Self {
        match result {
            Ok(status) => Self {
                status: status.label(),
                winner: status.winner(),
                draw: status.is_draw(),
                error: None,
                token: None,
            },
            Err(err) => Self {
                status: "malformed",
                winner: None,
                draw: false,
                error: Some(err.kind()),
                token: err.token,
            },
        }
    }

    /// Returns true for malformed sequences.
    pub fn is_malformed(&self) -> bool {
        self.error.is_some()
    }
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status)?;
        match (self.winner, self.draw) {
            (Some(tag), _) => write!(f, ": {}", Outcome::Winner(tag))?,
            (None, true) => write!(f, ": {}", Outcome::Draw)?,
            (None, false) => {}
        }
        if let Some(kind) = self.error {
            write!(f, ": {}", kind)?;
            if let Some(token) = self.token {
                write!(f, " (token {})", token)?;
            }
        }
        Ok(())
    }
}
