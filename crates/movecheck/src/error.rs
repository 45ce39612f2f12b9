//! Error types for sequence validation, board updates and configuration.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Why a move sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum CheckErrorKind {
    /// Structural problem not covered by the other kinds.
    #[display("invalid board state")]
    Invalid,

    /// Odd number of characters: the last token is incomplete.
    #[display("board state has an incomplete token")]
    BoardStateLength,

    /// A token's tag does not match the player whose turn it is.
    #[display("board state has a move out of turn")]
    BoardStatePlayer,

    /// A cell was claimed twice.
    #[display("board state claims a cell twice")]
    BoardStateRepeated,
}

/// A rejected move sequence, with the token where validation stopped.
#[derive(Debug, Clone, Display, Error)]
#[display("Check error: {}: {} at {}:{}", kind, message, file, line)]
pub struct CheckError {
    /// What went wrong.
    pub kind: CheckErrorKind,
    /// Human-readable detail.
    pub message: String,
    /// Zero-based index of the offending token, when one applies.
    pub token: Option<usize>,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CheckError {
    /// Creates a new check error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: CheckErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            token: None,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Attaches the index of the offending token.
    pub fn at_token(mut self, index: usize) -> Self {
        self.token = Some(index);
        self
    }

    /// Returns the error kind.
    pub fn kind(&self) -> CheckErrorKind {
        self.kind
    }
}

/// Error returned when a move cannot be committed to a board.
#[derive(Debug, Clone, Display, Error, From)]
pub enum BoardError {
    /// The extended sequence failed validation.
    #[display("{}", _0)]
    #[from]
    Check(#[error(source)] CheckError),

    /// The game configuration was rejected.
    #[display("{}", _0)]
    #[from]
    Config(#[error(source)] ConfigError),

    /// The player name is not registered on this board.
    #[display("Unknown player: {}", _0)]
    UnknownPlayer(#[error(not(source))] String),

    /// The board is sealed after a win or draw.
    #[display("Game is already over")]
    GameOver,
}

impl BoardError {
    /// Returns the validation error kind, if validation caused the failure.
    pub fn check_kind(&self) -> Option<CheckErrorKind> {
        match self {
            BoardError::Check(err) => Some(err.kind),
            BoardError::Config(_) | BoardError::UnknownPlayer(_) | BoardError::GameOver => None,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_check_error_records_location_and_token() {
        let err =
            CheckError::new(CheckErrorKind::BoardStatePlayer, "expected Y").at_token(3);
        assert_eq!(err.kind(), CheckErrorKind::BoardStatePlayer);
        assert_eq!(err.token, Some(3));
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().contains("out of turn"));
    }

    #[test]
    fn test_board_error_exposes_check_source() {
        let check = CheckError::new(CheckErrorKind::BoardStateRepeated, "cell 5");
        let err = BoardError::from(check);
        assert_eq!(err.check_kind(), Some(CheckErrorKind::BoardStateRepeated));
        assert!(err.source().is_some());

        let err = BoardError::UnknownPlayer("carol".to_string());
        assert_eq!(err.check_kind(), None);
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "Unknown player: carol");
    }

    #[test]
    fn test_board_error_from_config_error() {
        let err: BoardError = ConfigError::new("Both players are named \"am\"").into();
        assert!(matches!(err, BoardError::Config(_)));
        assert_eq!(err.check_kind(), None);
        assert!(err.source().is_some());
    }
}
