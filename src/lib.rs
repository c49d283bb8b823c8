pub mod config;
pub mod review;
pub mod words;

pub use config::Config;
pub use review::{CardFace, CardSurface, CardView, ReviewSession, ReviewState};
pub use words::{WordEntry, WordSet, WordStore, WordStoreError};
