//! Data models for the word lists

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One word pair: a source-language term and its translation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub source: String,
    pub target: String,
}

impl WordEntry {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Header names of the two columns in a word list.
///
/// They also label the two faces of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Columns {
    pub source: String,
    pub target: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            source: "French".to_string(),
            target: "English".to_string(),
        }
    }
}

/// An ordered list of word entries held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordSet {
    entries: Vec<WordEntry>,
}

impl WordSet {
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    pub fn contains(&self, entry: &WordEntry) -> bool {
        self.entries.contains(entry)
    }

    pub fn as_slice(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Pick one entry uniformly at random
    pub fn choose_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&WordEntry> {
        self.entries.choose(rng)
    }

    /// Remove the first entry structurally equal to `entry`.
    ///
    /// Returns `false` when no entry matched. With duplicate rows only the
    /// earliest one is removed, the others stay in the set.
    pub fn remove_entry(&mut self, entry: &WordEntry) -> bool {
        match self.entries.iter().position(|e| e == entry) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl From<Vec<WordEntry>> for WordSet {
    fn from(entries: Vec<WordEntry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<WordEntry> for WordSet {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Learning progress against the full word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub total: usize,
    pub remaining: usize,
    pub learned: usize,
}

impl Progress {
    pub fn new(total: usize, remaining: usize) -> Self {
        Self {
            total,
            remaining,
            learned: total.saturating_sub(remaining),
        }
    }
}
