//! Storage operations for word lists
//!
//! Both lists are CSV files with a header row naming the two columns:
//! ```text
//! data/
//! ├── french_words.csv     # Full default list (read-only)
//! └── words_to_learn.csv   # Words not yet known (rewritten after each review)
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::*;

#[derive(Error, Debug)]
pub enum WordStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{column}' not found in {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Word list unavailable at {}: {reason}", path.display())]
    DatasetUnavailable { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, WordStoreError>;

/// Storage manager for the default and remaining word lists
#[derive(Debug, Clone)]
pub struct WordStore {
    default_path: PathBuf,
    remaining_path: PathBuf,
    columns: Columns,
}

impl WordStore {
    pub fn new(default_path: PathBuf, remaining_path: PathBuf, columns: Columns) -> Self {
        Self {
            default_path,
            remaining_path,
            columns,
        }
    }

    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    pub fn remaining_path(&self) -> &Path {
        &self.remaining_path
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Load the words still to learn.
    ///
    /// Falls back to the default list when the remaining list is absent,
    /// empty or unreadable. Never returns an empty set.
    pub fn load(&self) -> Result<WordSet> {
        match self.read_list(&self.remaining_path) {
            Ok(Some(words)) if !words.is_empty() => {
                log::info!(
                    "Loaded {} words from {:?}",
                    words.len(),
                    self.remaining_path
                );
                return Ok(words);
            }
            Ok(Some(_)) => {
                log::info!("{:?} has no words, using default list", self.remaining_path);
            }
            Ok(None) => {
                log::debug!("{:?} does not exist, using default list", self.remaining_path);
            }
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable word list {:?}: {}",
                    self.remaining_path,
                    e
                );
            }
        }

        self.load_default()
    }

    /// Load the full default list
    pub fn load_default(&self) -> Result<WordSet> {
        let unavailable = |reason: String| WordStoreError::DatasetUnavailable {
            path: self.default_path.clone(),
            reason,
        };

        let words = match self.read_list(&self.default_path) {
            Ok(Some(words)) => words,
            Ok(None) => return Err(unavailable("file not found".to_string())),
            Err(e) => return Err(unavailable(e.to_string())),
        };

        if words.is_empty() {
            return Err(unavailable("no words in list".to_string()));
        }

        log::info!("Loaded {} words from {:?}", words.len(), self.default_path);
        Ok(words)
    }

    /// Overwrite the remaining list with `words`.
    ///
    /// Writes a sibling temporary file and renames it into place.
    pub fn persist(&self, words: &WordSet) -> Result<()> {
        if let Some(parent) = self.remaining_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.remaining_path.with_extension("csv.tmp");
        {
            let mut writer = csv::Writer::from_path(&tmp_path)?;
            writer.write_record([&self.columns.source, &self.columns.target])?;
            for entry in words {
                writer.write_record([&entry.source, &entry.target])?;
            }
            writer.flush()?;
        }
        fs::rename(&tmp_path, &self.remaining_path)?;

        log::debug!("Saved {} words to {:?}", words.len(), self.remaining_path);
        Ok(())
    }

    /// Forget all progress by deleting the remaining list
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.remaining_path) {
            Ok(()) => {
                log::info!("Removed {:?}", self.remaining_path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Compare the remaining list against the full default list
    pub fn progress(&self) -> Result<Progress> {
        let total = self.load_default()?.len();
        let remaining = self.load()?.len();
        Ok(Progress::new(total, remaining))
    }

    /// Read a word list. `Ok(None)` means the file does not exist.
    fn read_list(&self, path: &Path) -> Result<Option<WordSet>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Some(WordSet::default()));
        }

        parse_word_list(&content, path, &self.columns).map(Some)
    }
}

/// Parse CSV content into a word set, skipping malformed rows
fn parse_word_list(content: &str, path: &Path, columns: &Columns) -> Result<WordSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let column_index = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| WordStoreError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
    };
    let source_col = column_index(&columns.source)?;
    let target_col = column_index(&columns.target)?;

    let mut entries = Vec::new();
    let mut skipped = 0;

    for (row_idx, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Malformed entry at row {} of {:?}: {}", row_idx + 1, path, e);
                skipped += 1;
                continue;
            }
        };

        let source = record.get(source_col).filter(|s| !s.trim().is_empty());
        let target = record.get(target_col).filter(|s| !s.trim().is_empty());

        match (source, target) {
            (Some(source), Some(target)) => entries.push(WordEntry::new(source, target)),
            _ => {
                log::warn!(
                    "Malformed entry at row {} of {:?}: missing '{}' or '{}'",
                    row_idx + 1,
                    path,
                    columns.source,
                    columns.target
                );
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} malformed entries in {:?}", skipped, path);
    }

    Ok(WordSet::new(entries))
}
