use crate::chess::{Board, CaptureList, Color, GameState, GameStatus, MoveList, Piece, Position};
use crate::cli::app::DisplayStyle;
use std::fmt::Write;

/// Glyph for a piece, keyed by "{color}-{kind}"
pub fn glyph(key: &str) -> Option<&'static str> {
    let glyph = match key {
        "white-king" => "♔",
        "white-queen" => "♕",
        "white-rook" => "♖",
        "white-bishop" => "♗",
        "white-knight" => "♘",
        "white-pawn" => "♙",
        "black-king" => "♚",
        "black-queen" => "♛",
        "black-rook" => "♜",
        "black-bishop" => "♝",
        "black-knight" => "♞",
        "black-pawn" => "♟",
        _ => return None,
    };
    Some(glyph)
}

fn piece_symbol(piece: &Piece, style: DisplayStyle) -> String {
    match style {
        DisplayStyle::Unicode => glyph(&piece.key())
            .map(str::to_string)
            .unwrap_or_else(|| piece.to_string()),
        DisplayStyle::Ascii => piece.to_string(),
    }
}

/// Render the board from White's side (rank 8 at the top).
///
/// The selected piece is wrapped in brackets, reachable captures in
/// parentheses and reachable empty squares get a dot.
pub fn render_board(
    board: &Board,
    selected: Option<Position>,
    style: DisplayStyle,
    show_highlights: bool,
) -> String {
    let target_mark = match style {
        DisplayStyle::Unicode => "·",
        DisplayStyle::Ascii => "*",
    };

    let mut out = String::new();
    out.push_str("    a  b  c  d  e  f  g  h\n");
    for rank in (0..8u8).rev() {
        let _ = write!(out, "{}  ", rank + 1);
        for file in 0..8u8 {
            let pos = Position::new_unchecked(file, rank);
            let highlighted = show_highlights && board.is_valid_move(pos);
            let cell = match (board.piece_at(pos), highlighted) {
                (Some(piece), _) if selected == Some(pos) => {
                    format!("[{}]", piece_symbol(&piece, style))
                }
                (Some(piece), true) => format!("({})", piece_symbol(&piece, style)),
                (Some(piece), false) => format!(" {} ", piece_symbol(&piece, style)),
                (None, true) => format!(" {} ", target_mark),
                (None, false) => " . ".to_string(),
            };
            out.push_str(&cell);
        }
        let _ = writeln!(out, " {}", rank + 1);
    }
    out.push_str("    a  b  c  d  e  f  g  h\n");
    out
}

/// "Lost pieces" listing, one line per color
pub fn render_captures(captures: &CaptureList, style: DisplayStyle) -> String {
    let mut out = String::from("Lost pieces\n");
    for color in [Color::White, Color::Black] {
        let pieces: Vec<String> = captures
            .by_color(color)
            .map(|piece| piece_symbol(piece, style))
            .collect();
        let listing = if pieces.is_empty() {
            "-".to_string()
        } else {
            pieces.join(" ")
        };
        let _ = writeln!(out, "  {}: {}", color, listing);
    }
    out
}

/// Numbered move history, one entry per line
pub fn render_history(moves: &MoveList) -> String {
    if moves.is_empty() {
        return "No moves yet.\n".to_string();
    }
    moves
        .iter()
        .enumerate()
        .map(|(i, record)| format!("{:>3}. {}\n", i + 1, record))
        .collect()
}

/// Whose turn it is, plus a check or checkmate banner
pub fn render_status(state: &GameState) -> String {
    match state.status() {
        GameStatus::Checkmate => format!(
            "Checkmate! {} wins.",
            state.current_turn().opposite()
        ),
        GameStatus::Check => format!("Check! {} to move.", state.current_turn()),
        GameStatus::InProgress => format!("{} to move.", state.current_turn()),
    }
}
