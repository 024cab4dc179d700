use clickchess::chess::{
    in_check, in_checkmate, in_danger_zone, is_legal_move, king_position, Board, Color, Piece,
    PieceKind, Position, BOARD_SIZE,
};

fn at(file: u8, rank: u8) -> Position {
    Position::new_unchecked(file, rank)
}

fn put(board: Board, pos: Position, kind: PieceKind, color: Color) -> Board {
    board.with_piece(pos, Some(Piece::new(kind, color)))
}

#[test]
fn test_knight_reach_matches_l_shapes_everywhere() {
    let knight = Piece::new(PieceKind::Knight, Color::White);
    for from in Position::all_positions() {
        let board = put(Board::empty(), from, PieceKind::Knight, Color::White);
        for to in Position::all_positions() {
            let (df, dr) = from.delta(&to);
            let l_shape = matches!((df.abs(), dr.abs()), (1, 2) | (2, 1));
            assert_eq!(
                is_legal_move(&board, Some(&knight), from, to),
                l_shape,
                "Knight {} -> {}",
                from,
                to
            );
        }
    }
}

#[test]
fn test_rook_stops_at_first_piece() {
    let rook = Piece::new(PieceKind::Rook, Color::White);
    let from = at(0, 3);
    let board = put(Board::empty(), from, PieceKind::Rook, Color::White);
    let board = put(board, at(4, 3), PieceKind::Bishop, Color::Black);

    for file in 1..BOARD_SIZE {
        let legal = is_legal_move(&board, Some(&rook), from, at(file, 3));
        assert_eq!(legal, file <= 4, "Rook to file {}", file);
    }

    let blocked_by_own = put(board, at(2, 3), PieceKind::Pawn, Color::White);
    assert!(!is_legal_move(&blocked_by_own, Some(&rook), from, at(2, 3)));
    assert!(!is_legal_move(&blocked_by_own, Some(&rook), from, at(4, 3)));
    assert!(is_legal_move(&blocked_by_own, Some(&rook), from, at(1, 3)));
}

#[test]
fn test_no_king_move_ends_in_danger() {
    let board = put(Board::empty(), at(3, 3), PieceKind::King, Color::White);
    let board = put(board, at(5, 7), PieceKind::Rook, Color::Black);
    let board = put(board, at(0, 5), PieceKind::Bishop, Color::Black);
    let board = put(board, at(4, 5), PieceKind::Knight, Color::Black);
    let king = board.piece_at(at(3, 3));

    for to in Position::all_positions() {
        if is_legal_move(&board, king.as_ref(), at(3, 3), to) {
            assert!(
                !in_danger_zone(&board, Color::White, to, Some(at(3, 3))),
                "King allowed onto attacked square {}",
                to
            );
        }
    }
}

#[test]
fn test_back_rank_mate_skeleton() {
    let board = put(Board::empty(), at(4, 0), PieceKind::King, Color::White);
    let board = put(board, at(7, 7), PieceKind::King, Color::Black);
    let board = put(board, at(0, 0), PieceKind::Rook, Color::Black);
    let board = put(board, at(1, 1), PieceKind::Rook, Color::Black);

    assert_eq!(king_position(&board, Color::White), Ok(at(4, 0)));
    assert!(in_check(&board, Color::White).unwrap());
    assert!(in_checkmate(&board, Color::White).unwrap());
    assert!(!in_check(&board, Color::Black).unwrap());
}

#[test]
fn test_mate_scan_only_counts_king_escapes() {
    // The white rook could take the checking rook, but only king moves count
    let board = put(Board::empty(), at(4, 0), PieceKind::King, Color::White);
    let board = put(board, at(7, 7), PieceKind::King, Color::Black);
    let board = put(board, at(0, 0), PieceKind::Rook, Color::Black);
    let board = put(board, at(1, 1), PieceKind::Rook, Color::Black);
    let board = put(board, at(0, 5), PieceKind::Rook, Color::White);

    assert!(in_checkmate(&board, Color::White).unwrap());
}
