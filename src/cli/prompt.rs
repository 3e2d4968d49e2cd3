//! Interactive prompting with a bounded number of attempts.

use crate::error::VlsmError;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Print `question` and read one trimmed line. `None` at end of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> Result<Option<String>, VlsmError> {
    write!(out, "{question}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask until `parse` accepts the answer, at most `attempts` times.
///
/// Each rejection is shown to the user. The last error is returned once the
/// attempts are used up or the input ends.
pub fn ask_with_retry<R, W, T, F>(
    input: &mut R,
    out: &mut W,
    question: &str,
    attempts: usize,
    parse: F,
) -> Result<T, VlsmError>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, VlsmError>,
{
    let mut last_err = VlsmError::Io(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        "no input given",
    ));

    for attempt in 1..=attempts.max(1) {
        let Some(answer) = prompt_line(input, out, question)? else {
            break;
        };
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(e) => {
                log::debug!("attempt {attempt}/{attempts} rejected: {e}");
                writeln!(out, "{} {}", "->".red(), e.to_string().red())?;
                last_err = e;
            }
        }
    }

    Err(last_err)
}

/// Yes/no question; empty or unrecognised answers take the default.
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
    default_yes: bool,
) -> Result<bool, VlsmError> {
    let indicator = if default_yes { "[Y/n]" } else { "[y/N]" };
    let answer = prompt_line(input, out, &format!("{question} {indicator}"))?;

    let choice = answer
        .as_deref()
        .and_then(|a| a.chars().next())
        .map(|c| c.to_ascii_uppercase());
    Ok(match choice {
        Some('Y') => true,
        Some('N') => false,
        _ => default_yes,
    })
}
