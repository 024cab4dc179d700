use super::{Color, Piece, Position};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One ply as it happened: which piece went where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The piece as it stood before the move
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
}

impl MoveRecord {
    pub const fn new(piece: Piece, from: Position, to: Position) -> Self {
        Self { piece, from, to }
    }

    /// Rank distance covered, regardless of direction
    pub fn rank_distance(&self) -> u8 {
        self.from.rank.abs_diff(self.to.rank)
    }
}

// Piece letter then squares, e.g. "Pe2e4" or "pd7d5"
impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.piece, self.from, self.to)
    }
}

/// Append-only history of moves.
///
/// A capture or a castling swap adds a second entry for the piece on the
/// clicked square, going the other way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveList {
    moves: Vec<MoveRecord>,
}

impl MoveList {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new list with `records` appended; the receiver is left as it was
    pub fn with(&self, records: impl IntoIterator<Item = MoveRecord>) -> Self {
        let mut moves = self.moves.clone();
        moves.extend(records);
        Self { moves }
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }
}

/// Captured pieces in the order they were taken
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureList {
    pieces: Vec<Piece>,
}

impl CaptureList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(&self, piece: Piece) -> Self {
        let mut pieces = self.pieces.clone();
        pieces.push(piece);
        Self { pieces }
    }

    /// Captured pieces of one color, keeping capture order
    pub fn by_color(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |piece| piece.color == color)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
