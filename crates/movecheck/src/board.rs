//! Board: the committed move sequence for one game.

use super::config::GameConfig;
use super::error::{BoardError, CheckError, CheckErrorKind, ConfigError};
use super::occupancy::Occupancy;
use super::status::{Outcome, Status};
use super::types::{Cell, Tag, Token};
use super::validator::validate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A registered player: external name and the tag written for their moves.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Player's name.
    name: String,
    /// Tag used in the move sequence.
    tag: Tag,
}

/// Owns the committed move sequence and the two player identities.
///
/// Every move is validated against the full history before it is
/// appended. The move that decides the game is stored, after which
/// the board is sealed and accepts no further moves.
///
/// A board carries no internal locking; share it behind a lock such as
/// `Arc<Mutex<Board>>` when several callers submit moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    state: String,
    player1: Player,
    player2: Player,
    outcome: Option<Outcome>,
}

impl Board {
    /// Creates an empty board using the default tags.
    ///
    /// Names are not checked; use [`Board::from_config`] to reject a pair
    /// of identical names.
    #[instrument(skip(player1_name, player2_name))]
    pub fn new(player1_name: impl Into<String>, player2_name: impl Into<String>) -> Self {
        Self::with_tags(player1_name, Tag::FIRST, player2_name, Tag::SECOND)
    }

    /// Creates an empty board with explicit tags.
    ///
    /// Neither names nor tags are checked. With identical tags every move is
    /// rejected as [`CheckErrorKind::Invalid`]; with identical names every
    /// move maps to the first player.
    pub fn with_tags(
        player1_name: impl Into<String>,
        player1_tag: Tag,
        player2_name: impl Into<String>,
        player2_tag: Tag,
    ) -> Self {
        let board = Self {
            state: String::new(),
            player1: Player {
                name: player1_name.into(),
                tag: player1_tag,
            },
            player2: Player {
                name: player2_name.into(),
                tag: player2_tag,
            },
            outcome: None,
        };
        info!(
            player1 = %board.player1.name,
            player2 = %board.player2.name,
            "Created board"
        );
        board
    }

    /// Creates an empty board from a validated game configuration.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_tags(
            config.player1_name().clone(),
            *config.player1_tag(),
            config.player2_name().clone(),
            *config.player2_tag(),
        ))
    }

    /// Rebuilds a board from a previously committed sequence.
    ///
    /// The sequence is validated once; a decided sequence yields a
    /// sealed board.
    #[instrument(skip(config))]
    pub fn resume(config: &GameConfig, state: &str) -> Result<Self, BoardError> {
        let mut board = Self::from_config(config)?;
        let status = board.check(board.player1.tag, board.player2.tag, state)?;
        board.state = state.to_string();
        board.outcome = status.outcome();
        debug!(%status, "Board resumed");
        Ok(board)
    }

    /// Returns the committed move sequence.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Returns the first player.
    pub fn player1(&self) -> &Player {
        &self.player1
    }

    /// Returns the second player.
    pub fn player2(&self) -> &Player {
        &self.player2
    }

    /// Returns the outcome once the game is decided.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns true once a win or draw has been committed.
    pub fn is_sealed(&self) -> bool {
        self.outcome.is_some()
    }

    /// Maps a player name to its tag.
    ///
    /// The first registered name wins if both players share a name.
    pub fn tag_for(&self, player_name: &str) -> Option<Tag> {
        if player_name == self.player1.name {
            Some(self.player1.tag)
        } else if player_name == self.player2.name {
            Some(self.player2.tag)
        } else {
            None
        }
    }

    /// Returns the player whose turn it is, or `None` once sealed.
    pub fn to_move(&self) -> Option<&Player> {
        if self.is_sealed() {
            return None;
        }
        let next = self.occupancy().ok()?.to_move();
        [&self.player1, &self.player2]
            .into_iter()
            .find(|player| player.tag == next)
    }

    /// Returns the cells claimed so far.
    ///
    /// The committed sequence is always valid, so this fails only when the
    /// board was built with identical tags.
    pub fn occupancy(&self) -> Result<Occupancy, CheckError> {
        let sequence: Vec<char> = self.state.chars().collect();
        Occupancy::from_sequence(&sequence, self.player1.tag, self.player2.tag)
    }

    /// Validates the committed sequence extended by `candidate`, without committing.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn check(
        &self,
        player1_tag: Tag,
        player2_tag: Tag,
        candidate: &str,
    ) -> Result<Status, CheckError> {
        validate(&self.state, player1_tag, player2_tag, candidate)
    }

    /// Submits a move for the named player.
    ///
    /// Returns `true` when the move decides the game. The deciding move is
    /// committed and the board sealed.
    ///
    /// # Errors
    ///
    /// - [`BoardError::GameOver`] if the board is already sealed.
    /// - [`BoardError::UnknownPlayer`] if the name is not registered.
    /// - [`BoardError::Check`] if the extended sequence fails validation.
    ///
    /// Nothing is committed on any error path.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn submit_move(&mut self, player_name: &str, cell: Cell) -> Result<bool, BoardError> {
        if let Some(outcome) = self.outcome {
            warn!(player_name, %outcome, "Move submitted after game over");
            return Err(BoardError::GameOver);
        }

        let tag = self.tag_for(player_name).ok_or_else(|| {
            warn!(player_name, "Unknown player attempted move");
            BoardError::UnknownPlayer(player_name.to_string())
        })?;

        let token = Token::new(tag, cell);
        let candidate = token.to_string();
        let status = self
            .check(self.player1.tag, self.player2.tag, &candidate)
            .inspect_err(|e| warn!(player_name, %token, error = %e, "Invalid move"))?;

        match status {
            Status::Running => {
                self.state.push_str(&candidate);
                info!(player_name, %token, "Move committed");
                Ok(false)
            }
            Status::Complete(outcome) => {
                self.state.push_str(&candidate);
                self.outcome = Some(outcome);
                info!(player_name, %token, %outcome, "Game over, board sealed");
                Ok(true)
            }
            Status::Empty => Err(CheckError::new(
                CheckErrorKind::Invalid,
                "validated an empty sequence after appending a token",
            )
            .into()),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.occupancy() {
            Ok(occupancy) => write!(f, "{}", occupancy),
            Err(_) => write!(f, "{}", self.state),
        }
    }
}
