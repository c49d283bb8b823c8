//! Word lists for the trainer
//!
//! This module provides:
//! - Word entry and word set models
//! - Loading with fallback from the remaining list to the default list
//! - Full rewrite of the remaining list after each learned word

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::{WordStore, WordStoreError};
