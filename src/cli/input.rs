use crate::chess::{PieceKind, Position};
use regex::Regex;
use std::sync::OnceLock;

/// A line typed at the game prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Click(Position),
    Promote(PieceKind),
    Board,
    Captures,
    History,
    New,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty input")]
    Empty,

    #[error("Square {0} is off the board (columns and rows run 0-7)")]
    OffBoard(String),

    #[error("Unknown piece '{0}'. Choose queen, rook, bishop or knight")]
    UnknownPiece(String),

    #[error("Unrecognised input '{0}'. Type 'help' for commands")]
    Unrecognised(String),
}

fn algebraic_square() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?i)([a-h])([1-8])$").expect("valid square pattern"))
}

fn coordinate_square() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)\s*[,\s]\s*(\d+)$").expect("valid coordinate pattern"))
}

fn promote_command() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?i)(?:promote|p)\s+([a-z]+)$").expect("valid promote pattern")
    })
}

/// Parse one line of input.
///
/// Squares outside the board are rejected here, before they can reach the
/// engine.
pub fn parse_command(line: &str) -> Result<SessionCommand, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }

    match line.to_lowercase().as_str() {
        "board" | "b" => return Ok(SessionCommand::Board),
        "captures" | "c" => return Ok(SessionCommand::Captures),
        "history" | "h" => return Ok(SessionCommand::History),
        "new" => return Ok(SessionCommand::New),
        "help" | "?" => return Ok(SessionCommand::Help),
        "quit" | "q" | "exit" => return Ok(SessionCommand::Quit),
        _ => {}
    }

    if algebraic_square().is_match(line) {
        return line
            .parse::<Position>()
            .map(SessionCommand::Click)
            .map_err(|_| InputError::OffBoard(line.to_string()));
    }

    if let Some(caps) = coordinate_square().captures(line) {
        let file = caps[1].parse::<u8>().ok();
        let rank = caps[2].parse::<u8>().ok();
        return match (file, rank) {
            (Some(file), Some(rank)) => Position::new(file, rank)
                .map(SessionCommand::Click)
                .map_err(|_| InputError::OffBoard(line.to_string())),
            _ => Err(InputError::OffBoard(line.to_string())),
        };
    }

    if let Some(caps) = promote_command().captures(line) {
        let name = &caps[1];
        return match name.parse::<PieceKind>() {
            Ok(kind) if kind.is_promotion_choice() => Ok(SessionCommand::Promote(kind)),
            _ => Err(InputError::UnknownPiece(name.to_string())),
        };
    }

    Err(InputError::Unrecognised(line.to_string()))
}
