//! Terminal output formatting
//!
//! Display utilities for the line-oriented front ends, plus stdin prompts.

pub mod display;
pub mod formatters;
pub mod prompt;

pub use display::{print_match_report, write_words};
