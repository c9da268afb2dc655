//! Simple line-oriented mode
//!
//! Asks for letters and a mask on standard input, prints the matches one per
//! line, and waits for Enter before closing.

use crate::core::{Dictionary, Mask};
use crate::matcher::Matcher;
use crate::output::prompt::read_prompted;
use crate::output::write_words;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the simple mode on the process's stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple(matcher: &Matcher, dictionary: &Dictionary) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(&mut stdin.lock(), &mut stdout.lock(), matcher, dictionary)
}

/// Run the simple mode on arbitrary streams
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    matcher: &Matcher,
    dictionary: &Dictionary,
) -> io::Result<()> {
    let letters = read_prompted(input, output, "Enter letters: ")?;
    let mask = Mask::parse(&read_prompted(input, output, "Enter mask: ")?);

    let words = matcher.find(&letters.to_lowercase(), &mask, dictionary);
    debug!(found = words.len(), "simple search finished");

    writeln!(output, "Possible words: ")?;
    write_words(output, &words)?;

    read_prompted(input, output, "Press Enter to close.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CodepointCollation;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let dictionary = Dictionary::from_words(["cat", "act", "tac", "dog"]);
        let matcher = Matcher::new(Box::new(CodepointCollation));
        let mut output: Vec<u8> = Vec::new();
        run_simple_with(&mut Cursor::new(input), &mut output, &matcher, &dictionary).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn prints_matches_between_prompts() {
        assert_eq!(
            run("tac\n*a*\n\n"),
            "Enter letters: Enter mask: Possible words: \ncat\ntac\nPress Enter to close."
        );
    }

    #[test]
    fn uppercase_input_still_matches() {
        let out = run("TAC\n***\n\n");
        assert!(out.contains("\nact\ncat\ntac\n"));
    }

    #[test]
    fn no_matches_prints_only_the_header() {
        assert_eq!(
            run("ta\n***\n"),
            "Enter letters: Enter mask: Possible words: \nPress Enter to close."
        );
    }
}
