//! Ray walkers for the sliding pieces.
//!
//! Each walker steps one square at a time from the origin toward the
//! destination. The first occupied square ends the walk: it is a legal
//! capture when it is the destination and holds the other color, otherwise
//! the path is blocked. Reaching the destination over empty squares is legal.

use super::{Board, Piece, Position};

/// Walk along the rank. Both squares must share it.
pub fn scan_horizontal(board: &Board, mover: &Piece, from: Position, to: Position) -> bool {
    if !from.same_rank(&to) || from == to {
        return false;
    }
    let (file_diff, _) = from.delta(&to);
    walk(board, mover, from, to, (file_diff.signum(), 0))
}

/// Walk along the file. Both squares must share it.
pub fn scan_vertical(board: &Board, mover: &Piece, from: Position, to: Position) -> bool {
    if !from.same_file(&to) || from == to {
        return false;
    }
    let (_, rank_diff) = from.delta(&to);
    walk(board, mover, from, to, (0, rank_diff.signum()))
}

/// Walk along a diagonal. Rejects destinations that are not on one.
pub fn scan_diagonal(board: &Board, mover: &Piece, from: Position, to: Position) -> bool {
    if !from.same_diagonal(&to) || from == to {
        return false;
    }
    let (file_diff, rank_diff) = from.delta(&to);
    walk(board, mover, from, to, (file_diff.signum(), rank_diff.signum()))
}

fn walk(board: &Board, mover: &Piece, from: Position, to: Position, step: (i8, i8)) -> bool {
    let mut current = from;
    loop {
        current = match current.offset(step.0, step.1) {
            Some(next) => next,
            None => return false,
        };

        if let Some(occupant) = board.piece_at(current) {
            return current == to && occupant.color != mover.color;
        }

        if current == to {
            return true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Color, PieceKind};

    fn at(file: u8, rank: u8) -> Position {
        Position::new_unchecked(file, rank)
    }

    const ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);

    #[test]
    fn test_clear_path_is_legal() {
        let board = Board::empty();
        assert!(scan_horizontal(&board, &ROOK, at(0, 0), at(7, 0)));
        assert!(scan_vertical(&board, &ROOK, at(3, 7), at(3, 0)));
        assert!(scan_diagonal(&board, &ROOK, at(0, 0), at(7, 7)));
        assert!(scan_diagonal(&board, &ROOK, at(5, 2), at(2, 5)));
    }

    #[test]
    fn test_blocker_before_destination() {
        let board =
            Board::empty().with_piece(at(3, 0), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(!scan_horizontal(&board, &ROOK, at(0, 0), at(5, 0)));
        assert!(scan_horizontal(&board, &ROOK, at(0, 0), at(3, 0)));
    }

    #[test]
    fn test_own_piece_at_destination_is_blocked() {
        let board =
            Board::empty().with_piece(at(3, 3), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(!scan_diagonal(&board, &ROOK, at(0, 0), at(3, 3)));
    }

    #[test]
    fn test_squares_off_the_line_are_rejected() {
        let board = Board::empty();
        assert!(!scan_horizontal(&board, &ROOK, at(0, 0), at(3, 1)));
        assert!(!scan_vertical(&board, &ROOK, at(0, 0), at(1, 3)));
        assert!(!scan_diagonal(&board, &ROOK, at(0, 0), at(2, 3)));
        assert!(!scan_diagonal(&board, &ROOK, at(2, 2), at(2, 2)));
    }
}
