//! Letters + mask → sorted dictionary words

use super::arrangements::for_each_arrangement;
use crate::core::{Collation, Dictionary, Mask};
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::debug;

/// Outcome of one search, with the work it took
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchReport {
    /// Matching words in collation order
    pub words: Vec<String>,
    /// Arrangements generated from the letter pool
    pub arrangements: u64,
    /// Distinct arrangements that fit the mask
    pub candidates: usize,
}

/// Finds the words that can be spelled from a letter pool and fit a mask
///
/// Holds the collation used to order results, so the same matcher always
/// produces the same order for the same inputs.
///
/// The search enumerates every ordered selection of `mask.len()` letters,
/// which costs `n! / (n - k)!` for `n` letters. That is fine for pools a
/// person types (a dozen or so letters) and grows very quickly past that.
/// Repeated letters are tried in every position and the duplicate
/// candidates collapse in a set.
///
/// # Examples
/// ```
/// use word_finder::core::{CodepointCollation, Dictionary, Mask};
/// use word_finder::matcher::Matcher;
///
/// let dict = Dictionary::from_words(["cat", "act", "tac", "dog"]);
/// let matcher = Matcher::new(Box::new(CodepointCollation));
///
/// let words = matcher.find("tac", &Mask::parse("*a*"), &dict);
/// assert_eq!(words, ["cat", "tac"]);
/// ```
pub struct Matcher {
    collation: Box<dyn Collation>,
}

impl Matcher {
    #[must_use]
    pub fn new(collation: Box<dyn Collation>) -> Self {
        Self { collation }
    }

    #[must_use]
    pub fn collation(&self) -> &dyn Collation {
        self.collation.as_ref()
    }

    /// Matching words in collation order
    #[must_use]
    pub fn find(&self, letters: &str, mask: &Mask, dictionary: &Dictionary) -> Vec<String> {
        self.search(letters, mask, dictionary).words
    }

    /// Run a search and keep the counters alongside the words
    #[must_use]
    pub fn search(&self, letters: &str, mask: &Mask, dictionary: &Dictionary) -> MatchReport {
        let start = Instant::now();
        let pool: Vec<char> = letters.chars().collect();

        let mut candidates: FxHashSet<String> = FxHashSet::default();
        let arrangements = for_each_arrangement(&pool, mask.len(), |arrangement| {
            if mask.matches_chars(arrangement) {
                candidates.insert(arrangement.iter().collect());
            }
        });

        let mut words: Vec<String> = candidates
            .iter()
            .filter(|candidate| dictionary.contains(candidate))
            .cloned()
            .collect();
        words.sort_by(|a, b| self.collation.compare(a, b));

        debug!(
            letters,
            mask = %mask,
            arrangements,
            candidates = candidates.len(),
            found = words.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "search finished"
        );

        MatchReport {
            words,
            arrangements,
            candidates: candidates.len(),
        }
    }
}
