//! Review session state machine
//!
//! ```text
//!  AwaitingSelection ──advance()──▶ ShowingSource ──reveal timer──▶ ShowingTranslation
//!          ▲                              │                                  │
//!          └──── mark_known() / mark_unknown() ◀─────────────────────────────┘
//! ```
//!
//! Every path back to `AwaitingSelection` immediately deals the next card.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::words::storage::{Result, WordStore, WordStoreError};
use crate::words::{WordEntry, WordSet};

use super::scheduler::{Scheduler, TimerHandle};
use super::surface::{CardFace, CardSurface};

/// Default time before the translation is revealed
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    AwaitingSelection,
    ShowingSource,
    ShowingTranslation,
}

/// A single-user review session over one word store
pub struct ReviewSession<S: Scheduler, V: CardSurface> {
    store: WordStore,
    words: WordSet,
    current: Option<WordEntry>,
    state: ReviewState,
    pending_timer: Option<TimerHandle>,
    reveal_delay: Duration,
    /// Words removed by `mark_known` since the session started
    learned: usize,
    rng: StdRng,
    scheduler: S,
    surface: V,
}

impl<S: Scheduler, V: CardSurface> ReviewSession<S, V> {
    /// Load the word set and wait for the first `advance()`
    pub fn new(store: WordStore, scheduler: S, surface: V, reveal_delay: Duration) -> Result<Self> {
        let words = store.load()?;
        Ok(Self {
            store,
            words,
            current: None,
            state: ReviewState::AwaitingSelection,
            pending_timer: None,
            reveal_delay,
            learned: 0,
            rng: StdRng::from_entropy(),
            scheduler,
            surface,
        })
    }

    /// Replace the random source, e.g. with a seeded one
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn state(&self) -> ReviewState {
        self.state
    }

    pub fn current_card(&self) -> Option<&WordEntry> {
        self.current.as_ref()
    }

    pub fn words(&self) -> &WordSet {
        &self.words
    }

    pub fn pending_timer(&self) -> Option<TimerHandle> {
        self.pending_timer
    }

    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    pub fn learned(&self) -> usize {
        self.learned
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Deal a random card and start its reveal timer.
    ///
    /// Reloads from the store first when every word has been learned.
    pub fn advance(&mut self) -> Result<()> {
        if self.words.is_empty() {
            log::info!("Word set exhausted, reloading");
            self.words = self.store.load()?;
        }

        let card = self
            .words
            .choose_random(&mut self.rng)
            .cloned()
            .ok_or_else(|| WordStoreError::DatasetUnavailable {
                path: self.store.default_path().to_path_buf(),
                reason: "no words to review".to_string(),
            })?;

        let columns = self.store.columns();
        self.surface
            .show_card(&columns.source, &card.source, CardFace::Source);
        log::debug!("Showing '{}'", card.source);
        self.current = Some(card);

        self.cancel_reveal();
        self.pending_timer = Some(self.scheduler.schedule(self.reveal_delay));
        self.state = ReviewState::ShowingSource;
        Ok(())
    }

    /// Handle a fired timer. Returns `true` if the card was flipped.
    ///
    /// Handles other than the pending reveal timer are ignored.
    pub fn timer_fired(&mut self, handle: TimerHandle) -> bool {
        if self.pending_timer != Some(handle) {
            log::debug!("Ignoring stale timer {}", handle.id());
            return false;
        }
        self.pending_timer = None;

        if self.state != ReviewState::ShowingSource {
            return false;
        }
        let Some(card) = self.current.as_ref() else {
            return false;
        };

        let columns = self.store.columns();
        self.surface
            .show_card(&columns.target, &card.target, CardFace::Translation);
        self.state = ReviewState::ShowingTranslation;
        true
    }

    /// The user did not know the word. It stays in the set.
    pub fn mark_unknown(&mut self) -> Result<()> {
        self.cancel_reveal();
        self.state = ReviewState::AwaitingSelection;
        self.advance()
    }

    /// The user knew the word. It is removed and the remaining list rewritten.
    ///
    /// The next card is dealt even when saving fails. A save error takes
    /// precedence over a failure to deal the next card.
    pub fn mark_known(&mut self) -> Result<()> {
        self.cancel_reveal();
        self.state = ReviewState::AwaitingSelection;

        let saved = match self.current.as_ref() {
            Some(card) => {
                if self.words.remove_entry(card) {
                    self.learned += 1;
                } else {
                    log::warn!("'{}' was already removed from the word set", card.source);
                }
                log::info!("Learned '{}', {} words left", card.source, self.words.len());
                self.store.persist(&self.words)
            }
            None => Ok(()),
        };

        if let Err(e) = &saved {
            log::error!("Failed to save remaining words: {}", e);
        }

        let dealt = self.advance();
        if let (Err(_), Err(e)) = (&saved, &dealt) {
            log::error!("Failed to deal the next card: {}", e);
        }
        saved.and(dealt)
    }

    fn cancel_reveal(&mut self) {
        if let Some(handle) = self.pending_timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::review::scheduler::ManualScheduler;
    use crate::review::surface::CardView;
    use crate::words::Columns;
    use tempfile::TempDir;

    type TestSession = ReviewSession<ManualScheduler, CardView>;

    const DEFAULT_CSV: &str = "French,English\npartie,part\nhistoire,history\nchercher,search\n";

    fn create_test_session(remaining: Option<&str>) -> (TestSession, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = WordStore::new(
            temp_dir.path().join("french_words.csv"),
            temp_dir.path().join("words_to_learn.csv"),
            Columns::default(),
        );
        fs::write(store.default_path(), DEFAULT_CSV).unwrap();
        if let Some(content) = remaining {
            fs::write(store.remaining_path(), content).unwrap();
        }

        let session = ReviewSession::new(
            store,
            ManualScheduler::new(),
            CardView::new(),
            DEFAULT_REVEAL_DELAY,
        )
        .unwrap()
        .with_rng(StdRng::seed_from_u64(42));
        (session, temp_dir)
    }

    fn fire_reveal(session: &mut TestSession) -> bool {
        let handle = session.scheduler_mut().fire_next().unwrap();
        session.timer_fired(handle)
    }

    #[test]
    fn test_starts_awaiting_selection() {
        let (session, _temp) = create_test_session(None);

        assert_eq!(session.state(), ReviewState::AwaitingSelection);
        assert!(session.current_card().is_none());
        assert!(session.surface().is_blank());
        assert_eq!(session.words().len(), 3);
    }

    #[test]
    fn test_cat_and_dog_walkthrough() {
        let (mut session, temp) =
            create_test_session(Some("French,English\nle chat,cat\nle chien,dog\n"));
        let cat = WordEntry::new("le chat", "cat");
        let dog = WordEntry::new("le chien", "dog");

        session.advance().unwrap();
        let card = session.current_card().cloned().unwrap();
        assert!(card == cat || card == dog);
        assert_eq!(session.state(), ReviewState::ShowingSource);
        assert_eq!(session.surface().label, "French");
        assert_eq!(session.surface().text, card.source);
        assert_eq!(session.surface().face, CardFace::Source);
        assert_eq!(session.scheduler().last_delay(), Some(Duration::from_secs(3)));

        assert!(fire_reveal(&mut session));
        assert_eq!(session.state(), ReviewState::ShowingTranslation);
        assert_eq!(session.surface().label, "English");
        assert_eq!(session.surface().text, card.target);
        assert_eq!(session.surface().face, CardFace::Translation);
        assert_eq!(session.scheduler().pending(), 0);

        session.mark_known().unwrap();

        let other = if card == cat { dog } else { cat };
        let saved = fs::read_to_string(temp.path().join("words_to_learn.csv")).unwrap();
        assert_eq!(saved, format!("French,English\n{},{}\n", other.source, other.target));
        assert_eq!(session.words().as_slice(), &[other.clone()]);
        assert_eq!(session.current_card(), Some(&other));
    }

    #[test]
    fn test_mark_known_removes_exactly_one() {
        let (mut session, temp) = create_test_session(None);
        session.advance().unwrap();
        let card = session.current_card().cloned().unwrap();

        session.mark_known().unwrap();

        let store = session.store().clone();
        let saved = store.load().unwrap();
        assert_eq!(saved.len(), 2);
        assert!(!saved.contains(&card));
        assert!(temp.path().join("words_to_learn.csv").exists());
    }

    #[test]
    fn test_mark_unknown_keeps_word() {
        let (mut session, temp) = create_test_session(None);
        session.advance().unwrap();
        let card = session.current_card().cloned().unwrap();

        session.mark_unknown().unwrap();

        assert_eq!(session.words().len(), 3);
        assert!(session.words().contains(&card));
        assert_eq!(session.state(), ReviewState::ShowingSource);
        assert!(!temp.path().join("words_to_learn.csv").exists());
    }

    #[test]
    fn test_exhaustion_reloads_default() {
        let (mut session, _temp) = create_test_session(Some("French,English\nle chat,cat\n"));
        session.advance().unwrap();
        assert_eq!(session.current_card(), Some(&WordEntry::new("le chat", "cat")));

        session.mark_known().unwrap();

        // The remaining list is now empty, so the default list comes back
        assert_eq!(session.words().len(), 3);
        assert_eq!(session.state(), ReviewState::ShowingSource);
        let card = session.current_card().unwrap();
        assert!(session.words().contains(card));
    }

    #[test]
    fn test_advance_twice_leaves_one_timer() {
        let (mut session, _temp) = create_test_session(None);

        session.advance().unwrap();
        let first = session.pending_timer().unwrap();
        session.advance().unwrap();
        let second = session.pending_timer().unwrap();

        assert_ne!(first, second);
        assert_eq!(session.scheduler().pending(), 1);
        assert_eq!(session.scheduler().cancelled(), 1);
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let (mut session, _temp) = create_test_session(None);
        session.advance().unwrap();
        let stale = session.pending_timer().unwrap();
        session.mark_unknown().unwrap();

        let renders = session.surface().renders;
        assert!(!session.timer_fired(stale));
        assert_eq!(session.state(), ReviewState::ShowingSource);
        assert_eq!(session.surface().renders, renders);
    }

    #[test]
    fn test_user_action_cancels_reveal() {
        let (mut session, _temp) = create_test_session(None);
        session.advance().unwrap();

        session.mark_known().unwrap();
        assert_eq!(session.scheduler().pending(), 1);
        assert_eq!(session.scheduler().cancelled(), 1);

        assert!(fire_reveal(&mut session));
        assert_eq!(session.state(), ReviewState::ShowingTranslation);

        // Acting on a revealed card has no timer left to cancel
        session.mark_unknown().unwrap();
        assert_eq!(session.scheduler().cancelled(), 1);
        assert_eq!(session.scheduler().pending(), 1);
    }

    #[test]
    fn test_mark_before_first_card_just_advances() {
        let (mut session, temp) = create_test_session(None);

        session.mark_known().unwrap();

        assert_eq!(session.words().len(), 3);
        assert_eq!(session.state(), ReviewState::ShowingSource);
        assert!(!temp.path().join("words_to_learn.csv").exists());
    }

    #[test]
    fn test_learning_every_word_persists_empty_list() {
        let (mut session, temp) = create_test_session(Some("French,English\nun,one\ndeux,two\n"));
        session.advance().unwrap();

        session.mark_known().unwrap();
        assert_eq!(session.words().len(), 1);
        session.mark_known().unwrap();

        let saved = fs::read_to_string(temp.path().join("words_to_learn.csv")).unwrap();
        assert_eq!(saved, "French,English\n");
        assert_eq!(session.words().len(), 3);
    }

    #[test]
    fn test_learned_counts_removals_across_reload() {
        let (mut session, temp) = create_test_session(None);
        fs::write(temp.path().join("french_words.csv"), "French,English\nle chat,cat\n").unwrap();
        fs::write(temp.path().join("words_to_learn.csv"), "French,English\nle chat,cat\n").unwrap();
        let store = session.store().clone();
        session = ReviewSession::new(store, ManualScheduler::new(), CardView::new(), DEFAULT_REVEAL_DELAY)
            .unwrap();
        session.advance().unwrap();

        // Learning the only word refills the set to the same size
        session.mark_known().unwrap();

        assert_eq!(session.learned(), 1);
        assert_eq!(session.words().len(), 1);
        let saved = fs::read_to_string(temp.path().join("words_to_learn.csv")).unwrap();
        assert_eq!(saved, "French,English\n");

        session.mark_unknown().unwrap();
        assert_eq!(session.learned(), 1);
    }

    #[test]
    fn test_save_error_wins_over_reload_error() {
        let (mut session, temp) = create_test_session(Some("French,English\nle chat,cat\n"));
        session.advance().unwrap();

        // Block the save, then take the default list away so the refill fails too
        fs::remove_file(temp.path().join("words_to_learn.csv")).unwrap();
        fs::create_dir(temp.path().join("words_to_learn.csv")).unwrap();
        fs::remove_file(temp.path().join("french_words.csv")).unwrap();

        let err = session.mark_known().unwrap_err();
        assert!(matches!(err, WordStoreError::Io(_)));
        assert_eq!(session.learned(), 1);
        assert_eq!(session.state(), ReviewState::AwaitingSelection);
    }

    #[test]
    fn test_save_failure_still_deals_next_card() {
        let (mut session, temp) = create_test_session(None);
        session.advance().unwrap();

        // A directory where the remaining list should go makes the rename fail
        fs::create_dir(temp.path().join("words_to_learn.csv")).unwrap();

        assert!(session.mark_known().is_err());
        assert_eq!(session.words().len(), 2);
        assert_eq!(session.state(), ReviewState::ShowingSource);
    }
}
