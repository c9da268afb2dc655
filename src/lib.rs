//! Word Finder
//!
//! Finds dictionary words that can be spelled from a set of letters and fit a
//! positional mask, where `*` stands for any single letter.
//!
//! # Quick Start
//!
//! ```rust
//! use word_finder::core::{CodepointCollation, Dictionary, Mask};
//! use word_finder::matcher::Matcher;
//!
//! let dictionary = Dictionary::from_words(["cat", "act", "tac", "dog"]);
//! let matcher = Matcher::new(Box::new(CodepointCollation));
//!
//! let words = matcher.find("tac", &Mask::parse("*a*"), &dictionary);
//! assert_eq!(words, ["cat", "tac"]);
//! ```

// Core domain types
pub mod core;

// Arrangement search
pub mod matcher;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Config file and tracing setup
pub mod config;
pub mod logging;
