use super::{Board, ChessError, Color, Piece, PieceKind, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

const STANDARD_LAYOUT: &str = include_str!("../../assets/start-position.json");

/// Initial piece placements, keyed by row (rank) then column (file).
///
/// Stored as JSON, e.g. `{"0": {"4": {"kind": "king", "color": "white"}}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StartingLayout {
    rows: BTreeMap<u8, BTreeMap<u8, Piece>>,
}

impl StartingLayout {
    /// The standard 32-piece setup, White on rows 0 and 1
    pub fn standard() -> Result<Self, ChessError> {
        Self::from_json(STANDARD_LAYOUT)
    }

    pub fn from_json(json: &str) -> Result<Self, ChessError> {
        let layout: StartingLayout = serde_json::from_str(json)
            .map_err(|e| ChessError::InvalidLayout(format!("Failed to parse layout: {}", e)))?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn from_file(path: &Path) -> Result<Self, ChessError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            ChessError::InvalidLayout(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&json)
    }

    /// Reject squares off the board and boards without exactly one king per color
    pub fn validate(&self) -> Result<(), ChessError> {
        for (pos, _) in self.placements() {
            pos.ensure_on_board()
                .map_err(|e| ChessError::InvalidLayout(e.to_string()))?;
        }

        for color in [Color::White, Color::Black] {
            let kings = self
                .placements()
                .filter(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
                .count();
            if kings != 1 {
                return Err(ChessError::InvalidLayout(format!(
                    "Expected exactly one {} king, found {}",
                    color, kings
                )));
            }
        }

        Ok(())
    }

    pub fn placements(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.rows.iter().flat_map(|(&rank, row)| {
            row.iter()
                .map(move |(&file, &piece)| (Position::new_unchecked(file, rank), piece))
        })
    }

    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lay the pieces out on a fresh board. Nothing has moved yet.
    pub fn to_board(&self) -> Board {
        self.placements().fold(Board::empty(), |board, (pos, piece)| {
            board.with_piece(
                pos,
                Some(Piece {
                    has_moved: false,
                    ..piece
                }),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_has_32_pieces() {
        let layout = StartingLayout::standard().unwrap();
        assert_eq!(layout.len(), 32);

        let board = layout.to_board();
        assert_eq!(
            board.piece_at(Position::new_unchecked(4, 0)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(Position::new_unchecked(3, 7)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert!(board.pieces().all(|(_, piece)| !piece.has_moved));
    }

    #[test]
    fn test_layout_without_black_king_is_rejected() {
        let json = r#"{"0": {"4": {"kind": "king", "color": "white"}}}"#;
        let err = StartingLayout::from_json(json).unwrap_err();
        match err {
            ChessError::InvalidLayout(msg) => assert!(msg.contains("Black king")),
            other => panic!("Expected InvalidLayout, got {:?}", other),
        }
    }

    #[test]
    fn test_layout_off_board_is_rejected() {
        let json = r#"{"0": {"4": {"kind": "king", "color": "white"}},
                       "9": {"4": {"kind": "king", "color": "black"}}}"#;
        assert!(matches!(
            StartingLayout::from_json(json),
            Err(ChessError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            StartingLayout::from_json("not json"),
            Err(ChessError::InvalidLayout(_))
        ));
    }
}
