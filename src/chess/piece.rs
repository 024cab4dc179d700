use super::error::ChessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Opposite color
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color takes when advancing.
    /// White starts on the low ranks and moves up the board.
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The far rank where a pawn of this color promotes
    pub fn promotion_rank(&self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    /// Kinds a pawn may turn into. Pawn is never offered, and neither is
    /// king since a second king breaks the one-king-per-color board.
    pub fn is_promotion_choice(&self) -> bool {
        !matches!(self, PieceKind::Pawn | PieceKind::King)
    }

    /// Rook and king are the two kinds taking part in a castling swap
    pub fn is_castling_kind(&self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::King)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "P"),
            PieceKind::Rook => write!(f, "R"),
            PieceKind::Knight => write!(f, "N"),
            PieceKind::Bishop => write!(f, "B"),
            PieceKind::Queen => write!(f, "Q"),
            PieceKind::King => write!(f, "K"),
        }
    }
}

impl FromStr for PieceKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "P" | "PAWN" => Ok(PieceKind::Pawn),
            "R" | "ROOK" => Ok(PieceKind::Rook),
            "N" | "KNIGHT" => Ok(PieceKind::Knight),
            "B" | "BISHOP" => Ok(PieceKind::Bishop),
            "Q" | "QUEEN" => Ok(PieceKind::Queen),
            "K" | "KING" => Ok(PieceKind::King),
            _ => Err(ChessError::InvalidPieceKind(format!(
                "Expected one of: P, R, N, B, Q, K, got '{}'",
                s
            ))),
        }
    }
}

/// Every kind a pawn may be promoted to, in display order
pub fn promotion_choices() -> impl Iterator<Item = PieceKind> {
    PieceKind::ALL
        .into_iter()
        .filter(PieceKind::is_promotion_choice)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    /// Flips to true on the piece's first move and never back
    #[serde(default)]
    pub has_moved: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Lookup key shared with the display layer, e.g. "white-knight"
    pub fn key(&self) -> String {
        format!("{}-{}", self.color.name(), self.kind.name())
    }
}

// White pieces upper case, black lower case
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = self.kind.to_string();
        match self.color {
            Color::White => write!(f, "{}", letter),
            Color::Black => write!(f, "{}", letter.to_lowercase()),
        }
    }
}
