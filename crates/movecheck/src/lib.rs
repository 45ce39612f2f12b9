//! Tic-tac-toe move-sequence validation.
//!
//! A game is a flat string of (tag, cell-id) character pairs such as
//! `"X1Y5X9"`. [`validate`] checks a sequence for structure, turn order
//! and repeated cells, then reports whether the game is running, won or
//! drawn. [`Board`] keeps the committed sequence for one game and only
//! appends moves that pass validation.
//!
//! # Example
//!
//! ```
//! use movecheck::{Board, Cell, Outcome, Tag};
//!
//! let mut board = Board::new("am", "ni");
//! for (player, cell) in [
//!     ("am", Cell::TopLeft),
//!     ("ni", Cell::MiddleLeft),
//!     ("am", Cell::TopCenter),
//!     ("ni", Cell::Center),
//! ] {
//!     assert!(!board.submit_move(player, cell).unwrap());
//! }
//! assert!(board.submit_move("am", Cell::TopRight).unwrap());
//! assert_eq!(board.outcome(), Some(Outcome::Winner(Tag::FIRST)));
//! assert_eq!(board.state(), "X1Y4X2Y5X3");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;
mod occupancy;
pub mod rules;
mod status;
mod types;
mod validator;

pub use board::{Board, Player};
pub use config::GameConfig;
pub use error::{BoardError, CheckError, CheckErrorKind, ConfigError};
pub use occupancy::Occupancy;
pub use status::{Outcome, Status};
pub use types::{Cell, Tag, Token};
pub use validator::validate;
