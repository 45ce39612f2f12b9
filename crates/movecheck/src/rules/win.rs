//! Win detection logic for tic-tac-toe.

use crate::types::Cell;
use std::collections::BTreeSet;
use tracing::instrument;

/// Three cells that win the game when one player holds all of them.
pub type WinLine = [Cell; 3];

/// Every win line, rows first, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    // Columns
    [Cell::TopLeft, Cell::MiddleLeft, Cell::BottomLeft],
    [Cell::TopCenter, Cell::Center, Cell::BottomCenter],
    [Cell::TopRight, Cell::MiddleRight, Cell::BottomRight],
    // Diagonals
    [Cell::TopLeft, Cell::Center, Cell::BottomRight],
    [Cell::TopRight, Cell::Center, Cell::BottomLeft],
];

/// Returns the first win line fully contained in `cells`.
#[instrument(level = "trace")]
pub fn completed_line(cells: &BTreeSet<Cell>) -> Option<WinLine> {
    WIN_LINES
        .iter()
        .find(|line| line.iter().all(|cell| cells.contains(cell)))
        .copied()
}
