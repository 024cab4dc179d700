use super::piece::Color;
use thiserror::Error;

/// Contract violations. These are never the result of an ordinary bad click;
/// they mean the caller or the board configuration broke an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("Invalid piece kind: {0}")]
    InvalidPieceKind(String),

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Invalid starting layout: {0}")]
    InvalidLayout(String),

    #[error("No {0} king on the board")]
    KingNotFound(Color),

    #[error("More than one {0} king on the board")]
    MultipleKings(Color),

    #[error("No pawn is waiting for promotion")]
    NoPendingPromotion,

    #[error("Cannot promote to {0}")]
    InvalidPromotion(String),
}

/// Why a click that tried to move a piece was turned down.
///
/// This is an ordinary outcome, reported alongside the unchanged state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// No castling swap, en passant or ordinary move applies.
    RuleViolation,
    /// A pawn is waiting for a promotion choice.
    PromotionPending,
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::RuleViolation => write!(f, "not a valid move"),
            IllegalMove::PromotionPending => write!(f, "choose a promotion piece first"),
        }
    }
}
