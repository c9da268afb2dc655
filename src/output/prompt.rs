//! Line prompts on standard input/output

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one line from stdin, without the line ending
///
/// # Errors
///
/// Returns an I/O error if stdout cannot be flushed or stdin cannot be read.
pub fn prompt_line(prompt: &str) -> io::Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_prompted(&mut stdin.lock(), &mut stdout.lock(), prompt)
}

/// Print `prompt` and wait until the user presses Enter
///
/// # Errors
///
/// See [`prompt_line`].
pub fn wait_for_enter(prompt: &str) -> io::Result<()> {
    prompt_line(prompt).map(|_| ())
}

/// Prompt on `output` and read one line from `input`
///
/// End of input reads as an empty line.
///
/// # Errors
///
/// Returns an I/O error if writing the prompt or reading the line fails.
pub fn read_prompted<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}
