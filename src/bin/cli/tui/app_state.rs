use std::time::{Duration, Instant};

use anyhow::Result;

use crate::app::{App, TuiSession};
use flipcards_lib::{CardView, ReviewState, WordStoreError};

pub struct TuiState {
    pub session: TuiSession,
    /// Cards dealt since the TUI started
    pub dealt: usize,

    pub flash_message: Option<String>,
    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: &App) -> Result<Self> {
        let session = app.start_session()?;
        Ok(Self {
            session,
            dealt: 1,
            flash_message: None,
            show_help: false,
            quit: false,
        })
    }

    pub fn card(&self) -> &CardView {
        self.session.surface()
    }

    pub fn is_revealed(&self) -> bool {
        self.session.state() == ReviewState::ShowingTranslation
    }

    pub fn remaining(&self) -> usize {
        self.session.words().len()
    }

    /// Words marked as known since the TUI started
    pub fn learned(&self) -> usize {
        self.session.learned()
    }

    pub fn mark_known(&mut self) {
        let result = self.session.mark_known();
        self.after_action(result);
    }

    pub fn mark_unknown(&mut self) {
        let result = self.session.mark_unknown();
        self.after_action(result);
    }

    fn after_action(&mut self, result: flipcards_lib::words::storage::Result<()>) {
        match result {
            Ok(()) => self.dealt += 1,
            Err(e) => {
                log::error!("Review action failed: {}", e);
                self.flash_message = Some(failure_message(&e));
                if self.session.state() == ReviewState::ShowingSource {
                    self.dealt += 1;
                }
            }
        }
    }

    /// Fire every reveal timer that is due
    pub fn tick(&mut self, now: Instant) {
        while let Some(handle) = self.session.scheduler_mut().take_expired(now) {
            self.session.timer_fired(handle);
        }
    }

    /// How long to wait for input before the next timer is due
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        match self.session.scheduler().next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(max),
            None => max,
        }
    }
}

/// Flash text for a failed review action
fn failure_message(e: &WordStoreError) -> String {
    match e {
        WordStoreError::Io(_) | WordStoreError::Csv(_) => format!("Could not save progress: {}", e),
        WordStoreError::DatasetUnavailable { .. } | WordStoreError::MissingColumn { .. } => {
            format!("Could not load words: {}", e)
        }
    }
}

/// Build a TUI state over a temporary data directory holding `default_csv`
#[cfg(test)]
pub(super) fn create_test_state(default_csv: &str) -> (TuiState, tempfile::TempDir) {
    let temp_dir = tempfile::TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("french_words.csv"), default_csv).unwrap();

    let app = App::new(
        Some(temp_dir.path().join("config.toml").as_path()),
        Some(temp_dir.path()),
    )
    .unwrap();
    let state = TuiState::new(&app).unwrap();
    (state, temp_dir)
}
