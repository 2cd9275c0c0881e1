//! Global planboard configuration.

use std::path::PathBuf;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};
use crate::window::Horizon;

static DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:4210";

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_insert_chunk() -> usize {
    100
}

/// Global configuration at ~/.config/planboard/config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Base URL of the calendar backend.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// How far around today the board may fetch.
    #[serde(default)]
    pub horizon: Horizon,

    /// Records per store insert during bulk apply; the engine yields between
    /// chunks so rendering clients stay responsive.
    #[serde(default = "default_insert_chunk")]
    pub insert_chunk: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            backend_url: default_backend_url(),
            horizon: Horizon::default(),
            insert_chunk: default_insert_chunk(),
        }
    }
}

impl BoardConfig {
    pub fn config_path() -> BoardResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BoardError::Config("Could not determine config directory".into()))?
            .join("planboard");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from ~/.config/planboard/config.toml, writing a commented-out
    /// template on first run.
    pub fn load() -> BoardResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| BoardError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| BoardError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> BoardResult<()> {
        let contents = format!(
            "\
# planboard configuration

# Calendar backend to talk to:
# backend_url = \"{}\"

# How far around today the board may fetch:
# [horizon]
# past_months = 3
# future_months = 12
",
            DEFAULT_BACKEND_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BoardError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| BoardError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
