//! Per-kind move legality.

use super::path::{scan_diagonal, scan_horizontal, scan_vertical};
use super::safety::in_danger_zone;
use super::{Board, Piece, PieceKind, Position};

/// Whether `piece` standing on `from` may move to `to` on this board.
///
/// An absent piece never has a legal move. A king may not step into a
/// square the other side controls.
pub fn is_legal_move(board: &Board, piece: Option<&Piece>, from: Position, to: Position) -> bool {
    match piece {
        Some(piece) => movement_allowed(board, piece, from, to, true),
        None => false,
    }
}

/// Whether `piece` on `from` threatens `to`.
///
/// The same predicate as [`is_legal_move`] except that a king is not asked
/// about its own safety, which is what an attack scan needs and keeps two
/// kings from consulting each other forever.
pub fn attacks(board: &Board, piece: &Piece, from: Position, to: Position) -> bool {
    movement_allowed(board, piece, from, to, false)
}

/// Every square `piece` on `from` may legally move to
pub fn legal_destinations<'a>(
    board: &'a Board,
    piece: &'a Piece,
    from: Position,
) -> impl Iterator<Item = Position> + 'a {
    Position::all_positions().filter(move |&to| movement_allowed(board, piece, from, to, true))
}

fn movement_allowed(
    board: &Board,
    piece: &Piece,
    from: Position,
    to: Position,
    guard_king: bool,
) -> bool {
    if from == to || !from.is_on_board() || !to.is_on_board() {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move(board, piece, from, to),
        PieceKind::Knight => knight_move(board, piece, from, to),
        PieceKind::Bishop => scan_diagonal(board, piece, from, to),
        PieceKind::Rook => rook_move(board, piece, from, to),
        PieceKind::Queen => queen_move(board, piece, from, to),
        PieceKind::King => {
            king_step(board, piece, from, to)
                && !(guard_king && in_danger_zone(board, piece.color, to, Some(from)))
        }
    }
}

fn rook_move(board: &Board, piece: &Piece, from: Position, to: Position) -> bool {
    if from.same_rank(&to) {
        scan_horizontal(board, piece, from, to)
    } else if from.same_file(&to) {
        scan_vertical(board, piece, from, to)
    } else {
        false
    }
}

fn queen_move(board: &Board, piece: &Piece, from: Position, to: Position) -> bool {
    if from.same_file(&to) {
        scan_vertical(board, piece, from, to)
    } else if from.same_rank(&to) {
        scan_horizontal(board, piece, from, to)
    } else {
        scan_diagonal(board, piece, from, to)
    }
}

fn knight_move(board: &Board, piece: &Piece, from: Position, to: Position) -> bool {
    let (file_diff, rank_diff) = from.delta(&to);
    let shape = (file_diff.abs(), rank_diff.abs());
    if shape != (2, 1) && shape != (1, 2) {
        return false;
    }
    !occupied_by_own(board, piece, to)
}

fn king_step(board: &Board, piece: &Piece, from: Position, to: Position) -> bool {
    let (file_diff, rank_diff) = from.delta(&to);
    if file_diff.abs() > 1 || rank_diff.abs() > 1 {
        return false;
    }
    !occupied_by_own(board, piece, to)
}

// The double step does not look at the square it passes over.
fn pawn_move(board: &Board, piece: &Piece, from: Position, to: Position) -> bool {
    let (file_diff, rank_diff) = from.delta(&to);
    let advance = rank_diff * piece.color.forward();
    if advance <= 0 {
        return false;
    }

    let occupant = board.piece_at(to);
    match (file_diff.abs(), advance) {
        (0, 1) => occupant.is_none(),
        (0, 2) => occupant.is_none() && !piece.has_moved,
        (1, 1) => occupant.is_some_and(|other| other.color != piece.color),
        _ => false,
    }
}

fn occupied_by_own(board: &Board, piece: &Piece, pos: Position) -> bool {
    board
        .piece_at(pos)
        .is_some_and(|other| other.color == piece.color)
}
