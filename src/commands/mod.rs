//! Command implementations

pub mod find;
pub mod simple;

pub use find::{FindConfig, FindResult, find_words};
pub use simple::{run_simple, run_simple_with};
