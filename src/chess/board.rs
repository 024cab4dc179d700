use super::{Piece, Position, BOARD_SIZE};
use std::sync::Arc;

/// One square of the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub piece: Option<Piece>,
    /// Highlight for the current selection. Derived, recomputed on every
    /// selection change, never part of the game rules.
    pub valid_move: bool,
}

type Row = [Cell; BOARD_SIZE as usize];

/// Immutable 8x8 board snapshot.
///
/// Rows are shared between snapshots and copied only when a square in them
/// changes, so every update hands back a new board and leaves the old one
/// untouched for anyone still reading it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    /// rows[rank][file], rank 0 = White's back rank
    rows: [Arc<Row>; BOARD_SIZE as usize],
}

impl Board {
    /// Create a board with no pieces
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the piece at the specified position, if any
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cell(pos).and_then(|cell| cell.piece)
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.rows
            .get(pos.rank as usize)
            .and_then(|row| row.get(pos.file as usize))
    }

    /// Whether the square is highlighted as a destination for the selection
    pub fn is_valid_move(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|cell| cell.valid_move)
    }

    /// Return a new board with `piece` placed at `pos`.
    ///
    /// A placed piece counts as moved from then on; clearing a square resets
    /// it to a blank cell. Both forms drop the square's highlight.
    pub fn place(&self, pos: Position, piece: Option<Piece>) -> Board {
        let cell = match piece {
            Some(piece) => Cell {
                piece: Some(Piece {
                    has_moved: true,
                    ..piece
                }),
                valid_move: false,
            },
            None => Cell::default(),
        };
        self.with_cell(pos, cell)
    }

    /// Return a new board with `piece` at `pos` exactly as given.
    ///
    /// Used for setting up positions, and for the hypothetical boards that
    /// rule checks evaluate, where the moved flag must stay as it is.
    pub fn with_piece(&self, pos: Position, piece: Option<Piece>) -> Board {
        let valid_move = self.is_valid_move(pos);
        self.with_cell(pos, Cell { piece, valid_move })
    }

    fn with_cell(&self, pos: Position, cell: Cell) -> Board {
        debug_assert!(pos.is_on_board(), "position {:?} is off the board", pos);
        let mut board = self.clone();
        Arc::make_mut(&mut board.rows[pos.rank as usize])[pos.file as usize] = cell;
        board
    }

    /// Return a new board whose highlights are set by `is_target` for
    /// every square.
    pub fn with_highlights(&self, mut is_target: impl FnMut(Position) -> bool) -> Board {
        let mut board = self.clone();
        for (rank, row) in board.rows.iter_mut().enumerate() {
            let mut flags = [false; BOARD_SIZE as usize];
            for (file, flag) in flags.iter_mut().enumerate() {
                *flag = is_target(Position::new_unchecked(file as u8, rank as u8));
            }
            let needs_change = row
                .iter()
                .zip(flags.iter())
                .any(|(cell, &flag)| cell.valid_move != flag);
            if needs_change {
                let row = Arc::make_mut(row);
                for (cell, flag) in row.iter_mut().zip(flags) {
                    cell.valid_move = flag;
                }
            }
        }
        board
    }

    /// Return a new board with every highlight cleared
    pub fn without_highlights(&self) -> Board {
        self.with_highlights(|_| false)
    }

    /// All occupied squares with their pieces
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all_positions().filter_map(move |pos| self.piece_at(pos).map(|p| (pos, p)))
    }

    /// Squares currently highlighted
    pub fn highlighted(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all_positions().filter(move |pos| self.is_valid_move(*pos))
    }

    /// Whether two boards share the storage of the given rank
    pub fn shares_rank_with(&self, other: &Board, rank: u8) -> bool {
        Arc::ptr_eq(&self.rows[rank as usize], &other.rows[rank as usize])
    }
}
