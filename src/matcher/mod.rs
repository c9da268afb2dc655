//! Word matching
//!
//! Turns a letter pool and a mask into the dictionary words they can form.

mod arrangements;
mod engine;

pub use arrangements::for_each_arrangement;
pub use engine::{MatchReport, Matcher};
