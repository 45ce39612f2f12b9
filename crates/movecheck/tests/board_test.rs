//! Tests for committing moves through a board.

use movecheck::{Board, BoardError, Cell, CheckErrorKind, GameConfig, Outcome, Status, Tag};
use std::sync::{Arc, Mutex};
use std::thread;

fn play(board: &mut Board, moves: &[(&str, Cell)]) {
    for (player, cell) in moves {
        assert!(
            !board.submit_move(player, *cell).expect("move should be legal"),
            "game ended early at {:?}",
            cell
        );
    }
}

#[test]
fn test_first_move_commits() {
    let mut board = Board::new("am", "ni");
    let over = board.submit_move("am", Cell::TopLeft).unwrap();
    assert!(!over);
    assert_eq!(board.state(), "X1");
    assert!(!board.is_sealed());
}

#[test]
fn test_repeated_cell_is_rejected_without_commit() {
    let mut board = Board::new("am", "ni");
    board.submit_move("am", Cell::TopLeft).unwrap();

    let err = board.submit_move("ni", Cell::TopLeft).unwrap_err();
    assert!(matches!(err, BoardError::Check(_)));
    assert_eq!(err.check_kind(), Some(CheckErrorKind::BoardStateRepeated));
    assert_eq!(board.state(), "X1");
}

#[test]
fn test_out_of_turn_is_rejected() {
    let mut board = Board::new("am", "ni");
    board.submit_move("am", Cell::Center).unwrap();

    let err = board.submit_move("am", Cell::TopLeft).unwrap_err();
    assert_eq!(err.check_kind(), Some(CheckErrorKind::BoardStatePlayer));
    assert_eq!(board.state(), "X5");
}

#[test]
fn test_unknown_player_is_rejected_before_validation() {
    let mut board = Board::new("am", "ni");
    let err = board.submit_move("zo", Cell::Center).unwrap_err();
    assert!(matches!(err, BoardError::UnknownPlayer(ref name) if name == "zo"));
    assert_eq!(board.state(), "");
}

#[test]
fn test_winning_move_is_committed_and_seals() {
    let mut board = Board::new("am", "ni");
    play(
        &mut board,
        &[
            ("am", Cell::TopLeft),
            ("ni", Cell::MiddleLeft),
            ("am", Cell::TopCenter),
            ("ni", Cell::Center),
        ],
    );

    assert!(board.submit_move("am", Cell::TopRight).unwrap());
    assert_eq!(board.state(), "X1Y4X2Y5X3");
    assert_eq!(board.outcome(), Some(Outcome::Winner(Tag::FIRST)));
    assert!(board.is_sealed());
    assert!(board.to_move().is_none());

    let err = board.submit_move("ni", Cell::MiddleRight).unwrap_err();
    assert!(matches!(err, BoardError::GameOver));
    assert_eq!(board.state(), "X1Y4X2Y5X3");
}

#[test]
fn test_draw_seals_board() {
    let mut board = Board::new("am", "ni");
    play(
        &mut board,
        &[
            ("am", Cell::TopLeft),
            ("ni", Cell::MiddleLeft),
            ("am", Cell::TopCenter),
            ("ni", Cell::Center),
            ("am", Cell::BottomLeft),
            ("ni", Cell::BottomCenter),
            ("am", Cell::MiddleRight),
            ("ni", Cell::TopRight),
        ],
    );

    assert!(board.submit_move("am", Cell::BottomRight).unwrap());
    assert_eq!(board.outcome(), Some(Outcome::Draw));
    assert_eq!(board.state(), "X1Y4X2Y5X7Y8X6Y3X9");
}

#[test]
fn test_check_does_not_commit() {
    let mut board = Board::new("am", "ni");
    board.submit_move("am", Cell::Center).unwrap();

    let status = board.check(Tag::FIRST, Tag::SECOND, "Y1").unwrap();
    assert_eq!(status, Status::Running);
    assert_eq!(board.state(), "X5");

    let err = board.check(Tag::FIRST, Tag::SECOND, "Y5").unwrap_err();
    assert_eq!(err.kind(), CheckErrorKind::BoardStateRepeated);
}

#[test]
fn test_config_tags_flow_into_state() {
    let config = GameConfig::new("am", "ni").with_tags(Tag::new('O'), Tag::new('X'));
    let mut board = Board::from_config(&config).unwrap();
    board.submit_move("am", Cell::Center).unwrap();
    board.submit_move("ni", Cell::TopLeft).unwrap();
    assert_eq!(board.state(), "O5X1");
    assert_eq!(board.player2().tag(), &Tag::new('X'));
}

#[test]
fn test_from_config_rejects_invalid_config() {
    let err = Board::from_config(&GameConfig::new("am", "am")).unwrap_err();
    assert!(err.message.contains("am"));

    let config = GameConfig::new("am", "ni").with_tags(Tag::FIRST, Tag::FIRST);
    assert!(Board::from_config(&config).is_err());
}

#[test]
fn test_resume_rejects_invalid_config() {
    let err = Board::resume(&GameConfig::new("am", "am"), "X1").unwrap_err();
    assert!(matches!(err, BoardError::Config(_)));
    assert_eq!(err.check_kind(), None);
}

#[test]
fn test_resume_running_game() {
    let config = GameConfig::new("am", "ni");
    let mut board = Board::resume(&config, "X1Y5").unwrap();
    assert!(!board.is_sealed());
    assert_eq!(board.to_move().map(|p| p.name().as_str()), Some("am"));
    assert!(!board.submit_move("am", Cell::BottomRight).unwrap());
    assert_eq!(board.state(), "X1Y5X9");
}

#[test]
fn test_resume_finished_game_is_sealed() {
    let config = GameConfig::new("am", "ni");
    let mut board = Board::resume(&config, "X1Y4X2Y5X3").unwrap();
    assert_eq!(board.outcome(), Some(Outcome::Winner(Tag::FIRST)));
    assert!(matches!(
        board.submit_move("ni", Cell::MiddleRight),
        Err(BoardError::GameOver)
    ));
}

#[test]
fn test_resume_rejects_malformed_state() {
    let config = GameConfig::new("am", "ni");
    let err = Board::resume(&config, "X1Y2X3X4").unwrap_err();
    assert_eq!(err.check_kind(), Some(CheckErrorKind::BoardStatePlayer));
}

#[test]
fn test_shared_board_behind_lock() {
    let board = Arc::new(Mutex::new(Board::new("am", "ni")));

    // Both players race for the center. Whichever order the lock grants,
    // only the first player's claim is legal.
    let handles: Vec<_> = [("am", Cell::Center), ("ni", Cell::Center)]
        .into_iter()
        .map(|(player, cell)| {
            let board = Arc::clone(&board);
            thread::spawn(move || {
                let mut board = board.lock().unwrap();
                board.submit_move(player, cell).is_ok()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    let board = board.lock().unwrap();
    assert_eq!(successes, 1);
    assert_eq!(board.state(), "X5");
}
