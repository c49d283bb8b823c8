use std::path::Path;

use anyhow::{Context, Result};

#[cfg(feature = "tui")]
use flipcards_lib::review::{DeadlineScheduler, ReviewSession};
use flipcards_lib::words::{Progress, WordStore};
use flipcards_lib::Config;
#[cfg(feature = "tui")]
use flipcards_lib::CardView;

#[cfg(feature = "tui")]
pub type TuiSession = ReviewSession<DeadlineScheduler, CardView>;

/// Shared application state for CLI commands
pub struct App {
    pub config: Config,
    pub store: WordStore,
}

impl App {
    /// Load configuration, applying command-line overrides
    pub fn new(config_path: Option<&Path>, data_dir: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Config::load(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?,
            None => match Config::default_path() {
                Some(path) => Config::load(&path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?,
                None => Config::default(),
            },
        };

        if let Some(dir) = data_dir {
            config.data_dir = dir.to_path_buf();
        }

        let store = config.word_store();
        Ok(Self { config, store })
    }

    /// Load the words and deal the first card
    #[cfg(feature = "tui")]
    pub fn start_session(&self) -> Result<TuiSession> {
        let mut session = ReviewSession::new(
            self.store.clone(),
            DeadlineScheduler::new(),
            CardView::new(),
            self.config.reveal_delay(),
        )
        .context("Failed to load words")?;

        session.advance().context("Failed to deal the first card")?;
        Ok(session)
    }

    pub fn progress(&self) -> Result<Progress> {
        self.store.progress().context("Failed to read word lists")
    }

    pub fn reset(&self) -> Result<()> {
        self.store.reset().context("Failed to reset progress")
    }
}
