//! One-shot lookup command
//!
//! Takes letters and mask from the command line instead of prompting.

use crate::core::{Dictionary, Mask};
use crate::matcher::{MatchReport, Matcher};

/// Configuration for a one-shot lookup
pub struct FindConfig {
    pub letters: String,
    pub mask: String,
    pub plain: bool,
    pub verbose: bool,
}

impl FindConfig {
    #[must_use]
    pub const fn new(letters: String, mask: String) -> Self {
        Self {
            letters,
            mask,
            plain: false,
            verbose: false,
        }
    }
}

/// Normalized inputs and result of a lookup
pub struct FindResult {
    pub letters: String,
    pub mask: Mask,
    pub report: MatchReport,
}

/// Look up the words for `config`
///
/// Letters are lower-cased the same way the interactive field does it.
#[must_use]
pub fn find_words(config: &FindConfig, matcher: &Matcher, dictionary: &Dictionary) -> FindResult {
    let letters = config.letters.to_lowercase();
    let mask = Mask::parse(&config.mask);
    let report = matcher.search(&letters, &mask, dictionary);
    FindResult {
        letters,
        mask,
        report,
    }
}
