//! King safety: danger zones, check and checkmate.

use super::rules::{attacks, is_legal_move};
use super::{Board, ChessError, Color, Piece, PieceKind, Position};

/// Whether any piece of the other color could move to `square`.
///
/// The scan runs on a hypothetical board where `excluding` (the moving
/// king's own square) is empty and `square` holds a piece of `color`, so
/// that a slider aimed through an empty square counts as a threat rather
/// than a non-capture.
pub fn in_danger_zone(
    board: &Board,
    color: Color,
    square: Position,
    excluding: Option<Position>,
) -> bool {
    let mut variant = board.clone();
    if let Some(vacated) = excluding {
        variant = variant.with_piece(vacated, None);
    }
    let stand_in = Piece {
        has_moved: true,
        ..Piece::new(PieceKind::King, color)
    };
    let variant = variant.with_piece(square, Some(stand_in));

    let threatened = variant
        .pieces()
        .filter(|(_, piece)| piece.color != color)
        .any(|(from, attacker)| attacks(&variant, &attacker, from, square));
    threatened
}

/// Locate the one king of `color`.
///
/// A board without exactly one such king is broken, and reported as an error.
pub fn king_position(board: &Board, color: Color) -> Result<Position, ChessError> {
    let mut kings = board
        .pieces()
        .filter(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
        .map(|(pos, _)| pos);

    let found = kings.next().ok_or(ChessError::KingNotFound(color))?;
    if kings.next().is_some() {
        return Err(ChessError::MultipleKings(color));
    }
    Ok(found)
}

pub fn in_check(board: &Board, color: Color) -> Result<bool, ChessError> {
    let king = king_position(board, color)?;
    Ok(in_danger_zone(board, color, king, None))
}

/// In check with no king move out of it.
///
/// Only the king's own escapes are searched; blocking or capturing the
/// checking piece with another piece does not count.
pub fn in_checkmate(board: &Board, color: Color) -> Result<bool, ChessError> {
    if !in_check(board, color)? {
        return Ok(false);
    }

    let from = king_position(board, color)?;
    let king = board.piece_at(from);
    let can_escape = king_steps(from).any(|to| is_legal_move(board, king.as_ref(), from, to));
    Ok(!can_escape)
}

fn king_steps(from: Position) -> impl Iterator<Item = Position> {
    (-1..=1)
        .flat_map(|file_step| (-1..=1).map(move |rank_step| (file_step, rank_step)))
        .filter(|&step| step != (0, 0))
        .filter_map(move |(file_step, rank_step)| from.offset(file_step, rank_step))
}
