//! Per-player cell claims derived from a move sequence.

use super::error::{CheckError, CheckErrorKind};
use super::rules::{WinLine, completed_line};
use super::types::{Cell, Tag};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Cells claimed by one player.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Claims {
    tag: Tag,
    cells: BTreeSet<Cell>,
}

impl Claims {
    fn new(tag: Tag) -> Self {
        Self {
            tag,
            cells: BTreeSet::new(),
        }
    }
}

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

impl Side {
    fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Occupancy map rebuilt from a move sequence.
///
/// Claims are held in fixed (player 1, player 2) order so that
/// winner enumeration is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    first: Claims,
    second: Claims,
    turns: usize,
}

impl Occupancy {
    fn new(player1: Tag, player2: Tag) -> Self {
        Self {
            first: Claims::new(player1),
            second: Claims::new(player2),
            turns: 0,
        }
    }

    /// Walks a sequence of (tag, cell) character pairs and records every claim.
    ///
    /// The sequence must have even length and the two tags must differ.
    /// Tags must strictly alternate starting with `player1`, and no cell
    /// may be claimed twice.
    #[instrument(skip(sequence), fields(len = sequence.len()))]
    pub fn from_sequence(
        sequence: &[char],
        player1: Tag,
        player2: Tag,
    ) -> Result<Self, CheckError> {
        if sequence.len() % 2 != 0 {
            return Err(CheckError::new(
                CheckErrorKind::BoardStateLength,
                format!("{} characters do not form whole tokens", sequence.len()),
            ));
        }

        if player1 == player2 {
            return Err(CheckError::new(
                CheckErrorKind::Invalid,
                format!("both players use tag {}", player1),
            ));
        }

        let mut occupancy = Self::new(player1, player2);
        let mut expected = Side::First;

        for (index, pair) in sequence.chunks_exact(2).enumerate() {
            let (tag, id) = (Tag::new(pair[0]), pair[1]);
            let want = occupancy.claims(expected).tag;
            if tag != want {
                debug!(index, %tag, expected = %want, "Token out of turn");
                return Err(CheckError::new(
                    CheckErrorKind::BoardStatePlayer,
                    format!("found player {} where {} was expected", tag, want),
                )
                .at_token(index));
            }

            let cell = Cell::from_char(id).ok_or_else(|| {
                debug!(index, id = %id, "Unknown cell id");
                CheckError::new(CheckErrorKind::Invalid, format!("unknown cell id {:?}", id))
                    .at_token(index)
            })?;

            if !occupancy.claims_mut(expected).cells.insert(cell) {
                return Err(CheckError::new(
                    CheckErrorKind::BoardStateRepeated,
                    format!("player {} already holds cell {}", tag, id),
                )
                .at_token(index));
            }
            if occupancy.claims(expected.opponent()).cells.contains(&cell) {
                return Err(CheckError::new(
                    CheckErrorKind::BoardStateRepeated,
                    format!("cell {} already belongs to the opponent", id),
                )
                .at_token(index));
            }

            occupancy.turns += 1;
            expected = expected.opponent();
        }

        debug!(turns = occupancy.turns, "Sequence walked");
        Ok(occupancy)
    }

    fn claims(&self, side: Side) -> &Claims {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    fn claims_mut(&mut self, side: Side) -> &mut Claims {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }

    /// Number of tokens walked.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Tag of the player whose turn comes next.
    pub fn to_move(&self) -> Tag {
        if self.turns % 2 == 0 {
            self.first.tag
        } else {
            self.second.tag
        }
    }

    /// Returns the tag holding `cell`, if any.
    pub fn owner(&self, cell: Cell) -> Option<Tag> {
        [&self.first, &self.second]
            .into_iter()
            .find(|claims| claims.cells.contains(&cell))
            .map(|claims| claims.tag)
    }

    /// Returns the first player holding a complete win line, with the line.
    ///
    /// Player 1 is checked before player 2.
    pub fn winner(&self) -> Option<(Tag, WinLine)> {
        [&self.first, &self.second]
            .into_iter()
            .find_map(|claims| completed_line(&claims.cells).map(|line| (claims.tag, line)))
    }
}

impl std::fmt::Display for Occupancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, cell) in Cell::ALL.iter().enumerate() {
            match self.owner(*cell) {
                Some(tag) => write!(f, "{}", tag)?,
                None => write!(f, "{}", cell.to_char())?,
            }
            match index % 3 {
                2 if index < 8 => write!(f, "\n-+-+-\n")?,
                2 => {}
                _ => write!(f, "|")?,
            }
        }
        Ok(())
    }
}
