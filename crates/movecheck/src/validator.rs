//! Move-sequence validation with win and draw detection.

use super::error::CheckError;
use super::occupancy::Occupancy;
use super::rules::is_exhausted;
use super::status::{Outcome, Status};
use super::types::Tag;
use tracing::{debug, instrument};

/// Validates `prior` extended by `candidate` and reports the game status.
///
/// The combined sequence is a flat string of (tag, cell-id) character
/// pairs. `player1` always moves first and tags must alternate strictly.
/// Neither input is modified.
///
/// # Errors
///
/// - [`CheckErrorKind::BoardStateLength`] if the sequence has an odd length.
/// - [`CheckErrorKind::Invalid`] if both players share a tag or a cell-id
///   is outside `1`-`9`.
/// - [`CheckErrorKind::BoardStatePlayer`] if a token is out of turn.
/// - [`CheckErrorKind::BoardStateRepeated`] if a cell is claimed twice.
#[instrument]
pub fn validate(
    prior: &str,
    player1: Tag,
    player2: Tag,
    candidate: &str,
) -> Result<Status, CheckError> {
    let sequence: Vec<char> = prior.chars().chain(candidate.chars()).collect();

    if sequence.is_empty() {
        debug!("Empty sequence");
        return Ok(Status::Empty);
    }

    let occupancy = Occupancy::from_sequence(&sequence, player1, player2)?;

    if let Some((winner, line)) = occupancy.winner() {
        debug!(%winner, ?line, "Win line completed");
        return Ok(Status::Complete(Outcome::Winner(winner)));
    }

    if is_exhausted(occupancy.turns()) {
        debug!("Board exhausted without a winner");
        return Ok(Status::Complete(Outcome::Draw));
    }

    Ok(Status::Running)
}
