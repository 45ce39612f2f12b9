//! Core domain types for move sequences.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Single-character symbol identifying which player made a move.
///
/// Tags are fixed per game instance. The first player's tag always
/// opens the sequence.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct Tag(char);

impl Tag {
    /// Default tag for the first player.
    pub const FIRST: Tag = Tag('X');

    /// Default tag for the second player.
    pub const SECOND: Tag = Tag('Y');

    /// Creates a tag from its symbol.
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the tag symbol.
    pub fn as_char(self) -> char {
        self.0
    }
}

/// A cell on the 3x3 board, numbered in row-major order.
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Cell {
    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Get label for this cell (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Creates a cell from its board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the cell-id character used in move sequences ('1'-'9').
    pub fn to_char(self) -> char {
        match self {
            Cell::TopLeft => '1',
            Cell::TopCenter => '2',
            Cell::TopRight => '3',
            Cell::MiddleLeft => '4',
            Cell::Center => '5',
            Cell::MiddleRight => '6',
            Cell::BottomLeft => '7',
            Cell::BottomCenter => '8',
            Cell::BottomRight => '9',
        }
    }

    /// Parses a cell-id character ('1'-'9').
    #[instrument]
    pub fn from_char(id: char) -> Option<Self> {
        let digit = id.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(Self::from_index)
    }

    /// Parse from cell-id or label (case-insensitive).
    #[instrument]
    pub fn from_label_or_id(s: &str) -> Option<Cell> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(id), None) = (chars.next(), chars.next())
            && let Some(cell) = Self::from_char(id)
        {
            return Some(cell);
        }

        <Cell as strum::IntoEnumIterator>::iter()
            .find(|cell| cell.label().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A move token: a player tag paired with the cell it claims.
///
/// Serialized into move sequences as two characters, tag then cell-id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// The player making the move.
    pub tag: Tag,
    /// The cell being claimed.
    pub cell: Cell,
}

impl Token {
    /// Creates a new token.
    pub fn new(tag: Tag, cell: Cell) -> Self {
        Self { tag, cell }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.tag, self.cell.to_char())
    }
}
