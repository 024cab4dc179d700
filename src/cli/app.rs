use crate::chess::StartingLayout;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How pieces are drawn in the terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    #[default]
    Unicode,
    Ascii,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Piece glyphs to draw the board with
    pub display: DisplayStyle,
    /// Mark the squares the selected piece can move to
    pub show_highlights: bool,
    /// JSON starting layout to use instead of the standard one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<PathBuf>,
    /// Default tracing filter when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: DisplayStyle::Unicode,
            show_highlights: true,
            layout_file: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Get the default config directory
    pub fn default_config_dir() -> Result<PathBuf> {
        ProjectDirs::from("dev", "clickchess", "clickchess")
            .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    /// Get the default config file path
    pub fn default_config_file() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_file = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_file()?,
        };

        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        toml::from_str(&content).context("Failed to parse configuration file")
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(path, content).context("Failed to write configuration file")?;

        Ok(())
    }

    /// The layout games start from
    pub fn starting_layout(&self) -> Result<StartingLayout> {
        match &self.layout_file {
            Some(path) => StartingLayout::from_file(path)
                .with_context(|| format!("Failed to load layout from {}", path.display())),
            None => StartingLayout::standard().context("Built-in layout is invalid"),
        }
    }
}
