//! Castling swap, en passant and promotion.

use super::moves::MoveRecord;
use super::path::scan_horizontal;
use super::{Board, Piece, PieceKind, Position};

/// Whether clicking `clicked` with `selected` chosen swaps a king and rook.
///
/// This is a simplified stand-in for castling: an unmoved king and an
/// unmoved rook on one rank with nothing between them trade squares. The
/// target's color is flipped on a scratch board so that the horizontal walk
/// accepts landing on it.
pub fn is_castling_swap(board: &Board, selected: Position, clicked: Position) -> bool {
    let (Some(piece), Some(target)) = (board.piece_at(selected), board.piece_at(clicked)) else {
        return false;
    };

    if !piece.kind.is_castling_kind()
        || !target.kind.is_castling_kind()
        || piece.kind == target.kind
        || piece.has_moved
        || target.has_moved
    {
        return false;
    }

    let flipped = Piece {
        color: target.color.opposite(),
        ..target
    };
    let verification = board.with_piece(clicked, Some(flipped));
    scan_horizontal(&verification, &piece, selected, clicked)
}

/// The square of the pawn taken en passant if `from`→`to` is one.
///
/// The previous ply must be a pawn's two-square advance that ended beside
/// `from`, on the file of `to`, and the move itself must be a one-square
/// diagonal pawn step onto an empty square. The captured pawn sits on
/// `(to.file, from.rank)`, not on `to`.
///
/// A backward diagonal, an occupied `to`, or a `(to.file, from.rank)` square
/// that is not the opposing pawn which just advanced is never en passant.
pub fn en_passant_capture(
    board: &Board,
    previous: Option<&MoveRecord>,
    from: Position,
    to: Position,
) -> Option<Position> {
    let previous = previous?;
    let pawn = board.piece_at(from)?;

    if pawn.kind != PieceKind::Pawn
        || previous.piece.kind != PieceKind::Pawn
        || previous.to.file != to.file
        || previous.rank_distance() != 2
    {
        return None;
    }

    let (file_diff, rank_diff) = from.delta(&to);
    if file_diff.abs() != 1 || rank_diff != pawn.color.forward() || board.piece_at(to).is_some() {
        return None;
    }

    let captured_at = Position::new_unchecked(to.file, from.rank);
    let victim = board.piece_at(captured_at)?;
    if captured_at != previous.to || victim.kind != PieceKind::Pawn || victim.color == pawn.color {
        return None;
    }

    Some(captured_at)
}

/// A pawn landing on its far rank must be promoted
pub fn reaches_promotion(piece: &Piece, to: Position) -> bool {
    piece.kind == PieceKind::Pawn && to.rank == piece.color.promotion_rank()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Color;

    fn at(file: u8, rank: u8) -> Position {
        Position::new_unchecked(file, rank)
    }

    fn back_rank() -> Board {
        Board::empty()
            .with_piece(at(4, 0), Some(Piece::new(PieceKind::King, Color::White)))
            .with_piece(at(7, 0), Some(Piece::new(PieceKind::Rook, Color::White)))
    }

    #[test]
    fn test_swap_needs_clear_rank() {
        let board = back_rank();
        assert!(is_castling_swap(&board, at(4, 0), at(7, 0)));
        assert!(is_castling_swap(&board, at(7, 0), at(4, 0)));

        let blocked =
            board.with_piece(at(6, 0), Some(Piece::new(PieceKind::Knight, Color::White)));
        assert!(!is_castling_swap(&blocked, at(4, 0), at(7, 0)));
    }

    #[test]
    fn test_swap_needs_unmoved_pieces_of_both_kinds() {
        let board = back_rank().place(at(7, 0), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert!(!is_castling_swap(&board, at(4, 0), at(7, 0)));

        let rooks = Board::empty()
            .with_piece(at(0, 0), Some(Piece::new(PieceKind::Rook, Color::White)))
            .with_piece(at(7, 0), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert!(!is_castling_swap(&rooks, at(0, 0), at(7, 0)));
    }

    #[test]
    fn test_swap_with_enemy_rook_is_refused() {
        let board = Board::empty()
            .with_piece(at(4, 0), Some(Piece::new(PieceKind::King, Color::White)))
            .with_piece(at(7, 0), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert!(!is_castling_swap(&board, at(4, 0), at(7, 0)));
    }

    #[test]
    fn test_en_passant_after_double_step() {
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let board = Board::empty()
            .with_piece(at(4, 4), Some(Piece::new(PieceKind::Pawn, Color::White)))
            .place(at(3, 4), Some(black_pawn));
        let double_step = MoveRecord::new(black_pawn, at(3, 6), at(3, 4));

        assert_eq!(
            en_passant_capture(&board, Some(&double_step), at(4, 4), at(3, 5)),
            Some(at(3, 4))
        );
        assert_eq!(
            en_passant_capture(&board, Some(&double_step), at(4, 4), at(5, 5)),
            None
        );
        assert_eq!(en_passant_capture(&board, None, at(4, 4), at(3, 5)), None);
    }

    #[test]
    fn test_en_passant_needs_two_square_advance() {
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let board = Board::empty()
            .with_piece(at(4, 4), Some(Piece::new(PieceKind::Pawn, Color::White)))
            .place(at(3, 4), Some(black_pawn));
        let single_step = MoveRecord::new(black_pawn, at(3, 5), at(3, 4));
        assert_eq!(
            en_passant_capture(&board, Some(&single_step), at(4, 4), at(3, 5)),
            None
        );
    }

    #[test]
    fn test_en_passant_refuses_backward_or_occupied_landing() {
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        let board = Board::empty()
            .with_piece(at(4, 4), Some(Piece::new(PieceKind::Pawn, Color::White)))
            .place(at(3, 4), Some(black_pawn));
        let double_step = MoveRecord::new(black_pawn, at(3, 6), at(3, 4));

        assert_eq!(
            en_passant_capture(&board, Some(&double_step), at(4, 4), at(3, 3)),
            None,
            "Backward diagonal"
        );

        let occupied =
            board.with_piece(at(3, 5), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert_eq!(
            en_passant_capture(&occupied, Some(&double_step), at(4, 4), at(3, 5)),
            None,
            "Landing square taken"
        );

        let double_step_away = MoveRecord::new(
            Piece::new(PieceKind::Pawn, Color::Black),
            at(3, 6),
            at(3, 4),
        );
        let no_victim = board.with_piece(at(3, 4), None);
        assert_eq!(
            en_passant_capture(&no_victim, Some(&double_step_away), at(4, 4), at(3, 5)),
            None,
            "Nothing beside the pawn"
        );
    }

    #[test]
    fn test_promotion_rank_by_color() {
        let white = Piece::new(PieceKind::Pawn, Color::White);
        let black = Piece::new(PieceKind::Pawn, Color::Black);
        assert!(reaches_promotion(&white, at(0, 7)));
        assert!(!reaches_promotion(&white, at(0, 0)));
        assert!(reaches_promotion(&black, at(5, 0)));
        assert!(!reaches_promotion(
            &Piece::new(PieceKind::Rook, Color::White),
            at(0, 7)
        ));
    }
}
