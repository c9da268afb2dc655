//! Display functions for command results

use super::formatters::{search_counters, search_summary};
use crate::core::Mask;
use crate::matcher::MatchReport;
use colored::Colorize;
use std::io::{self, Write};

/// Write words one per line
///
/// # Errors
///
/// Returns an I/O error if writing fails.
pub fn write_words<W: Write>(out: &mut W, words: &[String]) -> io::Result<()> {
    for word in words {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// Print the result of a one-shot search
///
/// `plain` prints only the words, for piping into other tools.
///
/// # Errors
///
/// Returns an I/O error if stdout cannot be written.
pub fn print_match_report(
    letters: &str,
    mask: &Mask,
    report: &MatchReport,
    plain: bool,
    verbose: bool,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !plain {
        writeln!(out, "{}", "─".repeat(60).cyan())?;
        writeln!(
            out,
            "{}",
            search_summary(letters, mask, report).bright_yellow().bold()
        )?;
        if verbose {
            writeln!(out, "{}", search_counters(report).bright_black())?;
        }
        writeln!(out, "{}", "─".repeat(60).cyan())?;
    }

    write_words(&mut out, &report.words)?;

    if !plain && report.words.is_empty() {
        writeln!(out, "{}", "No matching words.".red())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_one_per_line() {
        let mut out: Vec<u8> = Vec::new();
        write_words(&mut out, &["act".to_string(), "cat".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "act\ncat\n");
    }

    #[test]
    fn no_words_writes_nothing() {
        let mut out: Vec<u8> = Vec::new();
        write_words(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
