//! Draw detection logic for tic-tac-toe.

/// At most 9 turns fit on a 3x3 board.
const MAX_TURNS: usize = 9;

/// Checks if every cell has been claimed.
///
/// An exhausted board with no winner is a draw.
pub fn is_exhausted(tokens: usize) -> bool {
    tokens >= MAX_TURNS
}
