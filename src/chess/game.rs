//! Turn-based game state and the click-to-move protocol.
//!
//! [`GameState`] is an immutable value. Every click produces a new state
//! (inside a [`Transition`]) and the caller replaces its reference wholesale.

use super::error::IllegalMove;
use super::moves::{CaptureList, MoveList, MoveRecord};
use super::rules::is_legal_move;
use super::safety::{in_check, in_checkmate, king_position};
use super::special::{en_passant_capture, is_castling_swap, reaches_promotion};
use super::{Board, ChessError, Color, Piece, PieceKind, Position, StartingLayout};
use tracing::{debug, info, trace};

/// A pawn on its far rank waiting for the player to pick its new kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub piece: Piece,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Ordinary,
    Capture,
    CastlingSwap,
    EnPassant,
}

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The game is over; clicks no longer do anything
    Ignored,
    /// A piece of the side to move is now selected
    Selected(Position),
    /// Nothing was selected and the click did not pick up a piece
    NothingSelected,
    /// The selected square was clicked again
    Deselected,
    Moved { kind: MoveKind, record: MoveRecord },
    /// The move was refused; the state is unchanged
    Illegal(IllegalMove),
}

/// Result of a click: the next state and what happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub outcome: ClickOutcome,
}

/// Overall status, as shown to the players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    move_list: MoveList,
    captures: CaptureList,
    player_turn: Color,
    selected: Option<Position>,
    in_check: bool,
    checkmate: bool,
    pending_promotion: Option<PendingPromotion>,
}

impl GameState {
    /// Start a game from the given layout with White to move
    pub fn new_game(layout: &StartingLayout) -> Result<Self, ChessError> {
        layout.validate()?;
        Self::from_position(layout.to_board(), Color::White)
    }

    /// Start from an arbitrary board, e.g. a composed problem
    pub fn from_position(board: Board, player_turn: Color) -> Result<Self, ChessError> {
        for color in [Color::White, Color::Black] {
            king_position(&board, color)?;
        }

        let board = board.without_highlights();
        let checked = in_check(&board, player_turn)?;
        let checkmate = checked && in_checkmate(&board, player_turn)?;

        Ok(Self {
            board,
            move_list: MoveList::new(),
            captures: CaptureList::new(),
            player_turn,
            selected: None,
            in_check: checked,
            checkmate,
            pending_promotion: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_list(&self) -> &MoveList {
        &self.move_list
    }

    pub fn captures(&self) -> &CaptureList {
        &self.captures
    }

    pub fn current_turn(&self) -> Color {
        self.player_turn
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        self.pending_promotion.as_ref()
    }

    pub fn status(&self) -> GameStatus {
        match (self.in_check, self.checkmate) {
            (_, true) => GameStatus::Checkmate,
            (true, false) => GameStatus::Check,
            (false, false) => GameStatus::InProgress,
        }
    }

    /// Advance the game by one click on `pos`.
    ///
    /// Refused moves come back as [`ClickOutcome::Illegal`] with the state
    /// untouched. Only a position off the board or a board that lost a king
    /// is an error.
    pub fn handle_click(&self, pos: Position) -> Result<Transition, ChessError> {
        pos.ensure_on_board()?;

        if self.checkmate {
            return Ok(self.unchanged(ClickOutcome::Ignored));
        }
        if self.pending_promotion.is_some() {
            return Ok(self.unchanged(ClickOutcome::Illegal(IllegalMove::PromotionPending)));
        }

        match self.selected {
            None => Ok(self.select(pos)),
            Some(selected) if selected == pos => {
                trace!(square = %pos, "selection cleared");
                Ok(Transition {
                    state: Self {
                        board: self.board.without_highlights(),
                        selected: None,
                        ..self.clone()
                    },
                    outcome: ClickOutcome::Deselected,
                })
            }
            Some(selected) => self.attempt_move(selected, pos),
        }
    }

    /// Replace the waiting pawn with `kind` and let play continue
    pub fn resolve_promotion(&self, kind: PieceKind) -> Result<GameState, ChessError> {
        let pending = self
            .pending_promotion
            .ok_or(ChessError::NoPendingPromotion)?;
        if !kind.is_promotion_choice() {
            return Err(ChessError::InvalidPromotion(kind.name().to_string()));
        }

        let pawn = self
            .board
            .piece_at(pending.position)
            .unwrap_or(pending.piece);
        let board = self
            .board
            .with_piece(pending.position, Some(Piece { kind, ..pawn }));
        let checked = in_check(&board, self.player_turn)?;
        let checkmate = checked && in_checkmate(&board, self.player_turn)?;

        info!(square = %pending.position, kind = kind.name(), "pawn promoted");
        Ok(Self {
            board,
            in_check: checked,
            checkmate,
            pending_promotion: None,
            ..self.clone()
        })
    }

    /// Whether a click on `to` with `from` selected would make a move
    pub fn accepts_move(&self, from: Position, to: Position) -> bool {
        self.classify(from, to).is_some()
    }

    fn unchanged(&self, outcome: ClickOutcome) -> Transition {
        Transition {
            state: self.clone(),
            outcome,
        }
    }

    fn select(&self, pos: Position) -> Transition {
        match self.board.piece_at(pos) {
            Some(piece) if piece.color == self.player_turn => {
                trace!(square = %pos, piece = %piece.key(), "piece selected");
                let board = self
                    .board
                    .with_highlights(|to| self.accepts_move(pos, to));
                Transition {
                    state: Self {
                        board,
                        selected: Some(pos),
                        ..self.clone()
                    },
                    outcome: ClickOutcome::Selected(pos),
                }
            }
            _ => Transition {
                state: Self {
                    selected: None,
                    ..self.clone()
                },
                outcome: ClickOutcome::NothingSelected,
            },
        }
    }

    /// First applicable rule wins: castling swap, en passant, ordinary move
    fn classify(&self, from: Position, to: Position) -> Option<MoveKind> {
        let piece = self.board.piece_at(from)?;
        let target = self.board.piece_at(to);

        if target.is_some_and(|other| other.kind == PieceKind::King && other.color != piece.color)
        {
            return None;
        }

        if is_castling_swap(&self.board, from, to) {
            Some(MoveKind::CastlingSwap)
        } else if en_passant_capture(&self.board, self.move_list.last(), from, to).is_some() {
            Some(MoveKind::EnPassant)
        } else if is_legal_move(&self.board, Some(&piece), from, to) {
            Some(match target {
                Some(_) => MoveKind::Capture,
                None => MoveKind::Ordinary,
            })
        } else {
            None
        }
    }

    fn attempt_move(&self, from: Position, to: Position) -> Result<Transition, ChessError> {
        let (Some(kind), Some(piece)) = (self.classify(from, to), self.board.piece_at(from)) else {
            debug!(from = %from, to = %to, "{} is not a valid move", to);
            return Ok(self.unchanged(ClickOutcome::Illegal(IllegalMove::RuleViolation)));
        };

        let target = self.board.piece_at(to);
        let record = MoveRecord::new(piece, from, to);
        let mut records = vec![record];
        let mut captures = self.captures.clone();

        let board = match kind {
            MoveKind::CastlingSwap => {
                if let Some(partner) = target {
                    records.push(MoveRecord::new(partner, to, from));
                }
                self.board.place(to, Some(piece)).place(from, target)
            }
            MoveKind::EnPassant => {
                let victim_at = Position::new_unchecked(to.file, from.rank);
                if let Some(victim) = self.board.piece_at(victim_at) {
                    captures = captures.with(victim);
                }
                self.board
                    .place(victim_at, None)
                    .place(to, Some(piece))
                    .place(from, None)
            }
            MoveKind::Capture | MoveKind::Ordinary => {
                if let Some(victim) = target {
                    records.push(MoveRecord::new(victim, to, from));
                    captures = captures.with(victim);
                }
                self.board.place(to, Some(piece)).place(from, None)
            }
        };
        let board = board.without_highlights();

        let opponent = self.player_turn.opposite();
        let checked = in_check(&board, opponent)?;
        let checkmate = checked && in_checkmate(&board, opponent)?;
        let pending_promotion = reaches_promotion(&piece, to).then(|| PendingPromotion {
            piece,
            position: to,
        });

        info!(mv = %record, kind = ?kind, "move played");
        if checkmate {
            info!(color = %opponent, "checkmate");
        } else if checked {
            info!(color = %opponent, "check");
        }

        Ok(Transition {
            state: Self {
                board,
                move_list: self.move_list.with(records),
                captures,
                player_turn: opponent,
                selected: None,
                in_check: checked,
                checkmate,
                pending_promotion,
            },
            outcome: ClickOutcome::Moved { kind, record },
        })
    }
}
