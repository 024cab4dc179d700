pub mod app;
pub mod commands;
pub mod display;
pub mod input;
pub mod session;

pub use app::{Config, DisplayStyle};
pub use commands::{Cli, Commands, ConfigCommand};
pub use display::{glyph, render_board, render_captures, render_history, render_status};
pub use input::{parse_command, InputError, SessionCommand};
pub use session::{Reply, Session};
