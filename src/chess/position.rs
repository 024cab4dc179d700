use super::error::ChessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub file: u8, // x, 0-7 corresponding to a-h
    pub rank: u8, // y, 0-7 corresponding to 1-8
}

impl Position {
    pub fn new(file: u8, rank: u8) -> Result<Self, ChessError> {
        if file >= BOARD_SIZE {
            return Err(ChessError::InvalidPosition(format!(
                "File must be 0-7, got {}",
                file
            )));
        }
        if rank >= BOARD_SIZE {
            return Err(ChessError::InvalidPosition(format!(
                "Rank must be 0-7, got {}",
                rank
            )));
        }

        Ok(Self { file, rank })
    }

    /// Create position without validation (for internal use when bounds are guaranteed)
    pub const fn new_unchecked(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Create position from file and rank characters
    pub fn from_chars(file: char, rank: char) -> Result<Self, ChessError> {
        let file_lower = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file_lower) {
            return Err(ChessError::InvalidPosition(format!(
                "Invalid file '{}'. Must be a-h.",
                file
            )));
        }

        if !('1'..='8').contains(&rank) {
            return Err(ChessError::InvalidPosition(format!(
                "Invalid rank '{}'. Must be 1-8.",
                rank
            )));
        }

        Ok(Position {
            file: file_lower as u8 - b'a',
            rank: rank as u8 - b'1',
        })
    }

    pub fn is_on_board(&self) -> bool {
        self.file < BOARD_SIZE && self.rank < BOARD_SIZE
    }

    /// Fail loudly on a position outside the board.
    pub fn ensure_on_board(&self) -> Result<(), ChessError> {
        Self::new(self.file, self.rank).map(|_| ())
    }

    // Convert file to character (0 -> 'a', 1 -> 'b', etc.)
    pub fn file_char(&self) -> char {
        (self.file + b'a') as char
    }

    // Convert rank to chess notation (0 -> '1', 1 -> '2', etc.)
    pub fn rank_char(&self) -> char {
        (self.rank + b'1') as char
    }

    /// Signed (file, rank) difference from `self` to `other`
    pub fn delta(&self, other: &Position) -> (i8, i8) {
        (
            other.file as i8 - self.file as i8,
            other.rank as i8 - self.rank as i8,
        )
    }

    /// Step by a signed offset, or `None` when that leaves the board
    pub fn offset(&self, file_step: i8, rank_step: i8) -> Option<Position> {
        let file = self.file as i8 + file_step;
        let rank = self.rank as i8 + rank_step;
        if (0..BOARD_SIZE as i8).contains(&file) && (0..BOARD_SIZE as i8).contains(&rank) {
            Some(Position::new_unchecked(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Check if positions are on the same rank
    pub fn same_rank(&self, other: &Position) -> bool {
        self.rank == other.rank
    }

    /// Check if positions are on the same file
    pub fn same_file(&self, other: &Position) -> bool {
        self.file == other.file
    }

    /// Check if positions are on the same diagonal
    pub fn same_diagonal(&self, other: &Position) -> bool {
        let (file_diff, rank_diff) = self.delta(other);
        file_diff.abs() == rank_diff.abs()
    }

    /// Get all positions on the board, rank by rank
    pub fn all_positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Position { file, rank }))
    }
}

// Algebraic notation, e.g. "e4"
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => Self::from_chars(file, rank),
            _ => Err(ChessError::InvalidPosition(format!(
                "Position must be exactly 2 characters (e.g., 'e4'), got '{}'",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Position::new_unchecked(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Some(Position::new_unchecked(1, 1)));
        assert_eq!(Position::new_unchecked(7, 7).offset(0, 1), None);
    }

    #[test]
    fn test_delta_is_signed() {
        let from = Position::new_unchecked(4, 4);
        assert_eq!(from.delta(&Position::new_unchecked(2, 5)), (-2, 1));
    }

    #[test]
    fn test_parse_algebraic() {
        let pos: Position = "e2".parse().unwrap();
        assert_eq!(pos, Position::new_unchecked(4, 1));
        assert_eq!(pos.to_string(), "e2");
        assert!("e9".parse::<Position>().is_err());
        assert!("e".parse::<Position>().is_err());
    }
}
