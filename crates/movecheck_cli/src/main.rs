//! Movecheck - command-line front end
//!
//! Checks move sequences and replays games through a board.

#![warn(missing_docs)]

mod cli;
mod report;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use cli::{Cli, Command};
use movecheck::{Board, Cell, GameConfig, Tag, validate};
use report::CheckReport;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            sequence,
            candidate,
            player1_tag,
            player2_tag,
            json,
        } => run_check(
            &sequence,
            &candidate,
            Tag::new(player1_tag),
            Tag::new(player2_tag),
            json,
        ),
        Command::Play {
            config,
            player1,
            player2,
            moves,
        } => {
            let config = match config {
                Some(path) => GameConfig::from_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => {
                    let config = GameConfig::new(player1, player2);
                    config.validate()?;
                    config
                }
            };
            run_play(&config, &moves)
        }
    }
}

/// Validate one sequence and print the status
#[instrument]
fn run_check(
    sequence: &str,
    candidate: &str,
    player1_tag: Tag,
    player2_tag: Tag,
    json: bool,
) -> Result<()> {
    let result = validate(sequence, player1_tag, player2_tag, candidate);
    if let Err(e) = &result {
        debug!(error = %e, "Sequence rejected");
    }

    let report = CheckReport::new(&result);
    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report);
    }

    if report.is_malformed() {
        bail!("malformed move sequence");
    }
    Ok(())
}

/// Submit every move through a fresh board and print the result
#[instrument(skip(config))]
fn run_play(config: &GameConfig, moves: &[String]) -> Result<()> {
    let mut board = Board::from_config(config)?;

    for raw in moves {
        let (player, cell) = parse_move(raw)?;
        let over = board
            .submit_move(player, cell)
            .with_context(|| format!("move {:?} rejected", raw))?;
        info!(player, %cell, over, "Move submitted");
    }

    println!("{}", board);
    println!("sequence: {}", board.state());
    match (board.outcome(), board.to_move()) {
        (Some(outcome), _) => println!("result: {}", outcome),
        (None, Some(next)) => println!("next: {}", next.name()),
        (None, None) => {}
    }
    Ok(())
}

/// Split "NAME:CELL" into a player name and a cell
fn parse_move(raw: &str) -> Result<(&str, Cell)> {
    let (player, cell) = raw
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("expected NAME:CELL, got {:?}", raw))?;
    let cell =
        Cell::from_label_or_id(cell).ok_or_else(|| anyhow!("unknown cell {:?}", cell))?;
    Ok((player, cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_by_id() {
        let (player, cell) = parse_move("am:5").unwrap();
        assert_eq!(player, "am");
        assert_eq!(cell, Cell::Center);
    }

    #[test]
    fn test_parse_move_by_label() {
        let (player, cell) = parse_move("ni:bottom-right").unwrap();
        assert_eq!(player, "ni");
        assert_eq!(cell, Cell::BottomRight);
    }

    #[test]
    fn test_parse_move_rejects_bad_input() {
        assert!(parse_move("am5").is_err());
        assert!(parse_move("am:0").is_err());
    }

    #[test]
    fn test_play_to_completion() {
        let config = GameConfig::new("am", "ni");
        let moves: Vec<String> = ["am:1", "ni:4", "am:2", "ni:5", "am:3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(run_play(&config, &moves).is_ok());
    }

    #[test]
    fn test_play_after_game_over_fails() {
        let config = GameConfig::new("am", "ni");
        let moves: Vec<String> = ["am:1", "ni:4", "am:2", "ni:5", "am:3", "ni:6"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert!(run_play(&config, &moves).is_err());
    }

    #[test]
    fn test_check_malformed_is_error() {
        assert!(run_check("X1Y2X2", "", Tag::FIRST, Tag::SECOND, false).is_err());
        assert!(run_check("X1", "Y2", Tag::FIRST, Tag::SECOND, true).is_ok());
    }
}
