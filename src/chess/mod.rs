// Re-export all public items
pub use self::board::{Board, Cell};
pub use self::error::{ChessError, IllegalMove};
pub use self::game::{ClickOutcome, GameState, GameStatus, MoveKind, PendingPromotion, Transition};
pub use self::layout::StartingLayout;
pub use self::moves::{CaptureList, MoveList, MoveRecord};
pub use self::piece::{promotion_choices, Color, Piece, PieceKind};
pub use self::position::{Position, BOARD_SIZE};
pub use self::rules::{attacks, is_legal_move, legal_destinations};
pub use self::safety::{in_check, in_checkmate, in_danger_zone, king_position};
pub use self::special::{en_passant_capture, is_castling_swap, reaches_promotion};

// Define submodules
mod board;
mod error;
mod game;
mod layout;
mod moves;
pub mod path;
mod piece;
mod position;
mod rules;
mod safety;
mod special;
