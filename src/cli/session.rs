use crate::chess::{
    promotion_choices, ChessError, ClickOutcome, GameState, MoveKind, StartingLayout,
};
use crate::cli::app::DisplayStyle;
use crate::cli::display::{render_board, render_captures, render_history, render_status};
use crate::cli::input::{parse_command, SessionCommand};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  e2 | 4,1        click a square (select, move, or deselect)
  promote <kind>  choose queen, rook, bishop or knight for a promoted pawn
  board           redraw the board
  captures        list lost pieces
  history         list moves played
  new             start over
  quit            leave the game
";

/// Text to show after a command, and whether the loop should stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

/// One interactive game. Holds the single current state and swaps it
/// for the next one after every command.
pub struct Session {
    state: GameState,
    layout: StartingLayout,
    style: DisplayStyle,
    show_highlights: bool,
}

impl Session {
    pub fn new(
        layout: StartingLayout,
        style: DisplayStyle,
        show_highlights: bool,
    ) -> Result<Self, ChessError> {
        let state = GameState::new_game(&layout)?;
        Ok(Self {
            state,
            layout,
            style,
            show_highlights,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    fn board_view(&self) -> String {
        format!(
            "{}{}\n",
            render_board(
                self.state.board(),
                self.state.selected(),
                self.style,
                self.show_highlights
            ),
            render_status(&self.state)
        )
    }

    pub fn execute(&mut self, command: SessionCommand) -> Result<Reply, ChessError> {
        let reply = match command {
            SessionCommand::Click(pos) => {
                let transition = self.state.handle_click(pos)?;
                self.state = transition.state;
                self.describe(transition.outcome)
            }
            SessionCommand::Promote(kind) => match self.state.resolve_promotion(kind) {
                Ok(next) => {
                    self.state = next;
                    Reply::say(self.board_view())
                }
                Err(ChessError::NoPendingPromotion) => {
                    Reply::say("There is no pawn to promote.\n")
                }
                Err(e) => return Err(e),
            },
            SessionCommand::Board => Reply::say(self.board_view()),
            SessionCommand::Captures => {
                Reply::say(render_captures(self.state.captures(), self.style))
            }
            SessionCommand::History => Reply::say(render_history(self.state.move_list())),
            SessionCommand::New => {
                self.state = GameState::new_game(&self.layout)?;
                Reply::say(self.board_view())
            }
            SessionCommand::Help => Reply::say(HELP),
            SessionCommand::Quit => Reply {
                text: "Bye.\n".to_string(),
                quit: true,
            },
        };
        Ok(reply)
    }

    fn describe(&self, outcome: ClickOutcome) -> Reply {
        match outcome {
            ClickOutcome::Ignored => {
                Reply::say("The game is over. Type 'new' to play again.\n")
            }
            ClickOutcome::NothingSelected => {
                Reply::say(format!("Select a {} piece.\n", self.state.current_turn()))
            }
            ClickOutcome::Selected(_) | ClickOutcome::Deselected => Reply::say(self.board_view()),
            ClickOutcome::Illegal(reason) => Reply::say(format!("Illegal move: {}.\n", reason)),
            ClickOutcome::Moved { kind, record } => {
                let mut text = self.board_view();
                match kind {
                    MoveKind::CastlingSwap => text.push_str("Castled.\n"),
                    MoveKind::EnPassant => text.push_str("En passant!\n"),
                    MoveKind::Capture | MoveKind::Ordinary => {}
                }
                if self.state.pending_promotion().is_some() {
                    let choices: Vec<&str> = promotion_choices().map(|k| k.name()).collect();
                    text.push_str(&format!(
                        "Pawn on {} promotes. Type 'promote <{}>'.\n",
                        record.to,
                        choices.join("|")
                    ));
                }
                Reply::say(text)
            }
        }
    }

    /// Read commands line by line until 'quit' or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        write!(output, "{}", self.board_view()).context("Failed to write board")?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    debug!(input = %line, "rejected input: {}", e);
                    writeln!(output, "{}", e).context("Failed to write reply")?;
                    continue;
                }
            };

            let reply = self.execute(command).map_err(|e| {
                warn!("game aborted: {}", e);
                e
            })?;
            write!(output, "{}", reply.text).context("Failed to write reply")?;
            output.flush().context("Failed to flush output")?;
            if reply.quit {
                break;
            }
        }

        Ok(())
    }
}
