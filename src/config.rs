//! Trainer configuration
//!
//! Read from `config.toml` in the platform config directory
//! (e.g. `~/.config/flipcards/config.toml`). Every field is optional.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::words::{Columns, WordStore};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Longest reveal delay honoured; larger values are clamped to it
pub const MAX_REVEAL_DELAY: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding both word lists
    pub data_dir: PathBuf,
    /// Full word list, never written
    pub default_file: String,
    /// Words not yet known, rewritten after each learned word
    pub remaining_file: String,
    pub source_column: String,
    pub target_column: String,
    /// Seconds before the translation is revealed
    pub reveal_delay_secs: f64,
}

impl Default for Config {
    fn default() -> Self {
        let columns = Columns::default();
        Self {
            data_dir: PathBuf::from("data"),
            default_file: "french_words.csv".to_string(),
            remaining_file: "words_to_learn.csv".to_string(),
            source_column: columns.source,
            target_column: columns.target,
            reveal_delay_secs: 3.0,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("flipcards").join("config.toml"))
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("Reading config from {:?}", path);
                Ok(toml::from_str(&content)?)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn default_list_path(&self) -> PathBuf {
        self.data_dir.join(&self.default_file)
    }

    pub fn remaining_list_path(&self) -> PathBuf {
        self.data_dir.join(&self.remaining_file)
    }

    pub fn columns(&self) -> Columns {
        Columns {
            source: self.source_column.clone(),
            target: self.target_column.clone(),
        }
    }

    /// Reveal delay, clamped to `0..=MAX_REVEAL_DELAY`
    pub fn reveal_delay(&self) -> Duration {
        if self.reveal_delay_secs.is_nan() || self.reveal_delay_secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(self.reveal_delay_secs)
            .map_or(MAX_REVEAL_DELAY, |delay| delay.min(MAX_REVEAL_DELAY))
    }

    pub fn word_store(&self) -> WordStore {
        WordStore::new(
            self.default_list_path(),
            self.remaining_list_path(),
            self.columns(),
        )
    }
}
