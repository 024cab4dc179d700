use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clickchess")]
#[command(about = "Two-player chess in the terminal, played one square at a time")]
pub struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive game
    ///
    /// Type a square (e2, or x,y such as 4,1) to click it: the first click
    /// selects a piece, the second moves it. Type 'help' for other commands.
    ///
    /// Examples:
    ///   clickchess play
    ///   clickchess play --ascii
    ///   clickchess play --layout problem.json
    Play {
        /// Draw pieces with ASCII letters
        #[arg(long)]
        ascii: bool,
        /// Do not mark the squares a selected piece can reach
        #[arg(long)]
        no_highlights: bool,
        /// JSON starting layout to play from
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },

    /// Print the starting board and exit
    Show {
        /// Draw pieces with ASCII letters
        #[arg(long)]
        ascii: bool,
        /// JSON starting layout to show
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the configuration file path
    Path,
    /// Print the configuration in effect
    Show,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
