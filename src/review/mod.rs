//! Flashcard review for Flipcards
//!
//! This module provides:
//! - The review session state machine (deal, reveal, known, unknown)
//! - The scheduler capability driving the reveal timer
//! - The card surface the session renders to

pub mod scheduler;
pub mod session;
pub mod surface;

pub use scheduler::{DeadlineScheduler, ManualScheduler, Scheduler, TimerHandle};
pub use session::{ReviewSession, ReviewState, DEFAULT_REVEAL_DELAY};
pub use surface::{CardFace, CardSurface, CardView};
