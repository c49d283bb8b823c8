pub mod reset;
pub mod stats;
