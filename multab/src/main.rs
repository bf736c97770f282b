//! # multab
//!
//! A CLI tool that prints an n-by-n multiplication table to the console.
//!
//! ## Overview
//!
//! multab is built on top of multablib. With no arguments it prompts on
//! standard input for the number of rows, retrying until a syntactically
//! valid integer is entered, then prints the table. Zero and negative
//! dimensions are accepted and produce the degenerate empty table.
//!
//! ## Usage
//!
//! ```bash
//! # Prompt interactively for the dimension
//! multab
//!
//! # Print a 12x12 table without prompting
//! multab 12
//!
//! # Structured output instead of formatted text
//! multab 12 --output json
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use console::Style;
use multablib::{prompt_dimension, write_table, RenderOptions, Table};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("multab")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Prints an n-by-n multiplication table")
        .arg(
            Arg::new("rows")
                .allow_negative_numbers(true)
                .value_parser(clap::value_parser!(i64))
                .help("Number of rows; prompts on standard input when omitted"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Resolve the dimension: from the positional argument when given,
/// otherwise from the interactive prompt loop on stdin.
fn resolve_dimension(matches: &ArgMatches) -> anyhow::Result<i64> {
    if let Some(rows) = matches.get_one::<i64>("rows") {
        return Ok(*rows);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_dimension(&mut stdin.lock(), &mut stdout.lock())
        .context("could not read the number of rows")
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let dimension = resolve_dimension(matches)?;
    let table = Table::new(dimension);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match matches.get_one::<String>("output").map(String::as_str) {
        Some("json") => writeln!(out, "{}", serde_json::to_string_pretty(&table)?)?,
        _ => write_table(&mut out, &table, &RenderOptions::default())?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let error_style = Style::new().red().bold();
            eprintln!("{} {e:#}", error_style.apply_to("Error:"));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_parses_rows() {
        let matches = build_command().get_matches_from(["multab", "7"]);
        assert_eq!(matches.get_one::<i64>("rows"), Some(&7));
    }

    #[test]
    fn test_command_rows_optional() {
        let matches = build_command().get_matches_from(["multab"]);
        assert_eq!(matches.get_one::<i64>("rows"), None);
        assert_eq!(
            matches.get_one::<String>("output").map(String::as_str),
            Some("table")
        );
    }

    #[test]
    fn test_command_rejects_non_integer_rows() {
        let result = build_command().try_get_matches_from(["multab", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_accepts_negative_rows() {
        let matches = build_command().get_matches_from(["multab", "-3"]);
        assert_eq!(matches.get_one::<i64>("rows"), Some(&-3));
    }
}
