//! Game rules for tic-tac-toe.
//!
//! Pure functions over claimed cells. Rules are kept apart from the
//! sequence walk so they can be checked on their own.

pub mod draw;
pub mod win;

pub use draw::is_exhausted;
pub use win::{WIN_LINES, WinLine, completed_line};
