//! Formatting utilities for terminal output

use crate::core::Mask;
use crate::matcher::MatchReport;

/// One-line summary of a search
#[must_use]
pub fn search_summary(letters: &str, mask: &Mask, report: &MatchReport) -> String {
    let noun = if report.words.len() == 1 { "word" } else { "words" };
    format!(
        "{} {noun} from '{letters}' matching '{mask}'",
        report.words.len()
    )
}

/// Work counters of a search, for verbose output
#[must_use]
pub fn search_counters(report: &MatchReport) -> String {
    format!(
        "{} arrangements, {} distinct candidates",
        report.arrangements, report.candidates
    )
}
