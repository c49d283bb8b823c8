//! Display surface for review cards

use serde::{Deserialize, Serialize};

/// Which side of the card is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardFace {
    /// The source-language term, shown first
    #[default]
    Source,
    /// The translation, shown once the reveal timer fires
    Translation,
}

/// Anything that can show one face of a card
pub trait CardSurface {
    fn show_card(&mut self, label: &str, text: &str, face: CardFace);
}

/// A surface that keeps the most recently shown card.
///
/// The terminal UI draws from it on every frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardView {
    pub label: String,
    pub text: String,
    pub face: CardFace,
    /// Number of times a card face has been shown
    pub renders: usize,
}

impl CardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.renders == 0
    }
}

impl CardSurface for CardView {
    fn show_card(&mut self, label: &str, text: &str, face: CardFace) {
        self.label = label.to_string();
        self.text = text.to_string();
        self.face = face;
        self.renders += 1;
    }
}
