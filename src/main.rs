use anyhow::{Context, Result};
use clap::Parser;
use clickchess::chess::StartingLayout;
use clickchess::cli::{render_board, Cli, Commands, Config, ConfigCommand, DisplayStyle, Session};
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn config_path(cli_path: Option<PathBuf>) -> Result<PathBuf> {
    match cli_path {
        Some(path) => Ok(path),
        None => Config::default_config_file(),
    }
}

fn layout_for(config: &Config, layout: Option<PathBuf>) -> Result<StartingLayout> {
    match layout {
        Some(path) => StartingLayout::from_file(&path)
            .with_context(|| format!("Failed to load layout from {}", path.display())),
        None => config.starting_layout(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Play {
            ascii,
            no_highlights,
            layout,
        } => {
            let style = if ascii {
                DisplayStyle::Ascii
            } else {
                config.display
            };
            let layout = layout_for(&config, layout)?;
            info!(pieces = layout.len(), "starting game");

            let mut session = Session::new(layout, style, config.show_highlights && !no_highlights)
                .context("Failed to start game")?;
            let stdin = io::stdin();
            session.run(stdin.lock(), io::stdout())?;
        }
        Commands::Show { ascii, layout } => {
            let style = if ascii {
                DisplayStyle::Ascii
            } else {
                config.display
            };
            let board = layout_for(&config, layout)?.to_board();
            print!("{}", render_board(&board, None, style, false));
        }
        Commands::Config { command } => {
            let path = config_path(cli.config)?;
            match command {
                ConfigCommand::Path => {
                    println!("{}", path.display());
                    if !path.exists() {
                        println!("(file does not exist, defaults are in use)");
                    }
                }
                ConfigCommand::Show => {
                    let content = toml::to_string_pretty(&config)
                        .context("Failed to serialize configuration")?;
                    print!("{}", content);
                }
                ConfigCommand::Init { force } => {
                    if path.exists() && !force {
                        warn!("Configuration already exists at {}", path.display());
                        println!("{} already exists; use --force to overwrite", path.display());
                        return Ok(());
                    }
                    Config::default().save_to(&path)?;
                    println!("Wrote default configuration to {}", path.display());
                }
            }
        }
    }

    Ok(())
}
