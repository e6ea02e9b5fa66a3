// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `xargs` work-alike.
//!
//! Items are read from input, split on a delimiter byte or on whitespace,
//! and appended to a command that is run once per batch.

use std::fs::File;
use std::io::{self, BufRead};
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Stdio};

use crate::errors::CommandError;
use crate::observability::messages::commands::{CommandFailed, CommandStarted};
use crate::observability::messages::StructuredLog;

const DEFAULT_COMMAND: &str = "echo";

/// How input is split into items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Byte(u8),
    /// Runs of blanks and newlines.
    Whitespace,
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Byte(b'\n')
    }
}

impl Delimiter {
    /// Parse a delimiter given on the command line.
    ///
    /// Accepts a single byte or one of the escapes `\n`, `\t`, `\0` and
    /// `\\`.
    pub fn parse(text: &str) -> Result<Self, CommandError> {
        let byte = match text {
            "\\n" => b'\n',
            "\\t" => b'\t',
            "\\0" => 0,
            "\\\\" => b'\\',
            _ if text.len() == 1 => text.as_bytes()[0],
            _ => return Err(CommandError::InvalidDelimiter(text.to_string())),
        };
        Ok(Delimiter::Byte(byte))
    }
}

#[derive(Debug, Clone, Default)]
pub struct XxargsOptions {
    pub delimiter: Delimiter,
    /// Items per command line. `None` (or zero) puts every item in one
    /// batch.
    pub max_args: Option<usize>,
    /// Give the command `/dev/tty` as stdin instead of `/dev/null`.
    pub open_tty: bool,
    /// Print each command line on stderr before running it.
    pub verbose: bool,
    /// Command and initial arguments. Empty means `echo`.
    pub command: Vec<String>,
}

/// Split `input` into items.
///
/// With a byte delimiter, empty items between delimiters are kept but a
/// trailing delimiter does not create one.
pub fn read_items<R: BufRead>(input: R, delimiter: Delimiter) -> io::Result<Vec<String>> {
    items(input, delimiter).collect()
}

fn items<'r, R: BufRead + 'r>(
    input: R,
    delimiter: Delimiter,
) -> Box<dyn Iterator<Item = io::Result<String>> + 'r> {
    let lossy = |bytes: Vec<u8>| String::from_utf8_lossy(&bytes).into_owned();
    match delimiter {
        Delimiter::Byte(byte) => Box::new(input.split(byte).map(move |chunk| chunk.map(lossy))),
        Delimiter::Whitespace => Box::new(input.split(b'\n').flat_map(move |line| {
            let words: Vec<io::Result<String>> = match line {
                Ok(line) => lossy(line)
                    .split_whitespace()
                    .map(|word| Ok(word.to_string()))
                    .collect(),
                Err(e) => vec![Err(e)],
            };
            words
        })),
    }
}

/// Run the command over every item read from `input`.
///
/// Returns the exit code: 0, or the first non-zero child exit, which
/// stops processing. Empty input runs the command once without items.
pub fn run<R: BufRead>(options: &XxargsOptions, input: R) -> Result<i32, CommandError> {
    let max_args = options.max_args.filter(|&max| max > 0);
    let mut batch = Vec::new();
    let mut ran = false;

    for item in items(input, options.delimiter) {
        batch.push(item?);
        if max_args.is_some_and(|max| batch.len() >= max) {
            let code = execute(options, &batch)?;
            if code != 0 {
                return Ok(code);
            }
            ran = true;
            batch.clear();
        }
    }

    if batch.is_empty() && ran {
        return Ok(0);
    }
    execute(options, &batch)
}

fn execute(options: &XxargsOptions, items: &[String]) -> Result<i32, CommandError> {
    let (program, args) = match options.command.split_first() {
        Some((program, args)) => (program.as_str(), args),
        None => (DEFAULT_COMMAND, &[][..]),
    };

    if options.verbose {
        let line: Vec<&str> = std::iter::once(program)
            .chain(args.iter().chain(items).map(String::as_str))
            .collect();
        eprintln!("{}", line.join(" "));
    }

    let stdin = File::open(if options.open_tty { "/dev/tty" } else { "/dev/null" })?;
    let arg_count = args.len() + items.len();
    let span = CommandStarted { program, arg_count }.span("xxargs");
    let _guard = span.enter();
    CommandStarted { program, arg_count }.log();

    let status = Command::new(program)
        .args(args)
        .args(items)
        .stdin(Stdio::from(stdin))
        .status()
        .map_err(|source| CommandError::Spawn {
            program: program.to_string(),
            source,
        })?;

    // Shell convention for children killed by a signal.
    let code = status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1);
    if code != 0 {
        CommandFailed {
            program,
            exit_code: code,
        }
        .log();
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;

    /// Options for a command that appends one line per invocation to `log`.
    fn recorder(log: &Path) -> XxargsOptions {
        XxargsOptions {
            command: vec![
                "sh".into(),
                "-c".into(),
                r#"echo "$*" >> "$LOG_FILE""#.replace("$LOG_FILE", &log.display().to_string()),
                "sh".into(),
            ],
            ..XxargsOptions::default()
        }
    }

    fn invocations(log: &Path) -> Vec<String> {
        std::fs::read_to_string(log)
            .unwrap_or_default()
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn delimiter_parsing() {
        assert_eq!(Delimiter::parse(",").unwrap(), Delimiter::Byte(b','));
        assert_eq!(Delimiter::parse("\\0").unwrap(), Delimiter::Byte(0));
        assert_eq!(Delimiter::parse("\\n").unwrap(), Delimiter::Byte(b'\n'));
        assert_eq!(Delimiter::parse("\\t").unwrap(), Delimiter::Byte(b'\t'));
        assert!(matches!(
            Delimiter::parse("::"),
            Err(CommandError::InvalidDelimiter(_))
        ));
        assert!(Delimiter::parse("").is_err());
    }

    #[test]
    fn items_by_delimiter() {
        let read = |text: &str, delimiter| read_items(Cursor::new(text.to_string()), delimiter).unwrap();

        assert_eq!(read("a\nb c\n", Delimiter::default()), vec!["a", "b c"]);
        assert_eq!(read("a\n\nb", Delimiter::default()), vec!["a", "", "b"]);
        assert_eq!(read("x\0y\0", Delimiter::Byte(0)), vec!["x", "y"]);
        assert_eq!(
            read("  one two\n\tthree  \n", Delimiter::Whitespace),
            vec!["one", "two", "three"]
        );
        assert!(read("", Delimiter::default()).is_empty());
    }

    #[test]
    fn batches_of_max_args() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        let options = XxargsOptions {
            max_args: Some(2),
            ..recorder(&log)
        };

        let code = run(&options, Cursor::new("1\n2\n3\n4\n5\n")).unwrap();
        assert_eq!(code, 0);
        assert_eq!(invocations(&log), vec!["1 2", "3 4", "5"]);
    }

    #[test]
    fn single_batch_without_limit() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");

        run(&recorder(&log), Cursor::new("a b\nc\n")).unwrap();
        assert_eq!(invocations(&log), vec!["a b c"]);
    }

    #[test]
    fn empty_input_runs_once() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");

        run(&recorder(&log), Cursor::new("")).unwrap();
        assert_eq!(invocations(&log), vec![""]);
    }

    #[test]
    fn exact_multiple_does_not_run_an_empty_batch() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("calls.log");
        let options = XxargsOptions {
            max_args: Some(2),
            ..recorder(&log)
        };

        run(&options, Cursor::new("1\n2\n3\n4\n")).unwrap();
        assert_eq!(invocations(&log), vec!["1 2", "3 4"]);
    }

    #[test]
    fn failure_stops_processing() {
        let options = XxargsOptions {
            command: vec!["sh".into(), "-c".into(), "exit 3".into()],
            max_args: Some(1),
            ..XxargsOptions::default()
        };
        assert_eq!(run(&options, Cursor::new("a\nb\n")).unwrap(), 3);
    }

    #[test]
    fn missing_program() {
        let options = XxargsOptions {
            command: vec!["/no/such/program".into()],
            ..XxargsOptions::default()
        };
        let err = run(&options, Cursor::new("a\n")).unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }
}
