//! Interactive acquisition of the table dimension.
//!
//! The retry loop is a plain loop guarded by a parse result: prompt, read
//! one line, parse as a base-10 integer, and on failure report and prompt
//! again. Any syntactically valid integer is accepted, including zero and
//! negatives; range policy lives in the table layer, which renders those
//! as the degenerate empty table.
//!
//! The loop is generic over its reader and writer so it can be driven by
//! in-memory buffers in tests.

use std::io::{BufRead, Write};

use crate::error::MultabError;
use crate::Result;

/// Prompt written (without a newline) before each read.
pub const PROMPT: &str = "Enter the desired number of rows for the multiplication table: ";

/// Message written after each failed parse.
pub const INVALID_INPUT_MSG: &str = "Invalid number. Please try again.";

/// Parse a table dimension from a line of text.
///
/// Surrounding whitespace is tolerated; the remainder must be a base-10
/// integer literal with an optional leading sign. No range check.
pub fn parse_dimension(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| MultabError::InvalidNumber {
            input: text.trim().to_string(),
        })
}

/// Prompt on `output` and read lines from `input` until one parses as an
/// integer, reporting [`INVALID_INPUT_MSG`] after each failure.
///
/// Returns [`MultabError::InputClosed`] if `input` reaches end of stream
/// before a valid number arrives, so a non-interactive caller gets a clean
/// error instead of a busy loop.
pub fn prompt_dimension<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<i64> {
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(MultabError::InputClosed);
        }

        match parse_dimension(&line) {
            Ok(dimension) => return Ok(dimension),
            Err(_) => writeln!(output, "{}", INVALID_INPUT_MSG)?,
        }
    }
}
