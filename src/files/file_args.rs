// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `@file` argument expansion.
//!
//! An argument `@path` naming an existing file is replaced by the words in
//! that file. Words follow shell quoting rules and `#` starts a comment. A
//! lone `@` reads the file named by the next argument. Arguments whose file
//! does not exist are passed through untouched.

use std::path::Path;

use super::whole::read_file;
use crate::errors::FileError;
use crate::observability::messages::files::ArgFileExpanded;
use crate::observability::messages::StructuredLog;

/// Default prefix marking an argument file.
pub const ARG_FILE_PREFIX: char = '@';

fn split_file(path: &Path) -> Result<Vec<String>, FileError> {
    let text = read_file(path)?;
    let words = shlex::split(&text).ok_or_else(|| FileError::ArgFileSyntax(path.to_path_buf()))?;
    ArgFileExpanded {
        path,
        arg_count: words.len(),
    }
    .log();
    Ok(words)
}

/// Expand `@file` arguments.
///
/// ```
/// use std::io::Write;
/// use toolbelt::files::file_args;
///
/// let mut file = tempfile::NamedTempFile::new().unwrap();
/// writeln!(file, "this \"is a\" file\none").unwrap();
/// let arg = format!("@{}", file.path().display());
///
/// let args = file_args(vec![arg, "blah".into()]).unwrap();
/// assert_eq!(args, vec!["this", "is a", "file", "one", "blah"]);
/// ```
pub fn file_args<I, S>(args: I) -> Result<Vec<String>, FileError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    file_args_with_prefix(args, ARG_FILE_PREFIX)
}

/// Expand argument files marked with `prefix`.
pub fn file_args_with_prefix<I, S>(args: I, prefix: char) -> Result<Vec<String>, FileError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    let mut out = Vec::with_capacity(args.len());
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];
        if let Some(rest) = arg.strip_prefix(prefix) {
            let (name, consumed) = if rest.is_empty() {
                (args.get(i + 1).map(String::as_str), 2)
            } else {
                (Some(rest), 1)
            };
            if let Some(name) = name {
                let path = Path::new(name);
                if path.is_file() {
                    out.extend(split_file(path)?);
                    i += consumed;
                    continue;
                }
            }
        }
        out.push(arg.clone());
        i += 1;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::files::whole::{write_file, WriteOptions};

    fn arg_file(dir: &Path, name: &str, text: &str) -> String {
        let path = dir.join(name);
        write_file(&path, text, &WriteOptions::default()).unwrap();
        path.display().to_string()
    }

    #[test]
    fn untouched_without_prefix() {
        let args = file_args(["prog", "-v", "x"]).unwrap();
        assert_eq!(args, vec!["prog", "-v", "x"]);
    }

    #[test]
    fn expands_inline_and_separate_forms() {
        let dir = tempfile::tempdir().unwrap();
        let a = arg_file(dir.path(), "a.args", "--name 'two words'\n");
        let b = arg_file(dir.path(), "b.args", "-x\n-y\n");

        let args = file_args(vec![
            "prog".to_string(),
            format!("@{a}"),
            "@".to_string(),
            b,
            "tail".to_string(),
        ])
        .unwrap();
        assert_eq!(args, vec!["prog", "--name", "two words", "-x", "-y", "tail"]);
    }

    #[test]
    fn comments_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let a = arg_file(dir.path(), "c.args", "# leading comment\n--flag\n# another\nvalue\n");
        let args = file_args([format!("@{a}")]).unwrap();
        assert_eq!(args, vec!["--flag", "value"]);
    }

    #[test]
    fn missing_files_pass_through() {
        let args = file_args(["@/definitely/not/here", "@"]).unwrap();
        assert_eq!(args, vec!["@/definitely/not/here", "@"]);
    }

    #[test]
    fn unbalanced_quotes_fail() {
        let dir = tempfile::tempdir().unwrap();
        let a = arg_file(dir.path(), "bad.args", "\"unterminated\n");
        let err = file_args([format!("@{a}")]).unwrap_err();
        assert!(matches!(err, FileError::ArgFileSyntax(_)));
    }

    #[test]
    fn custom_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let a = arg_file(dir.path(), "p.args", "one two");
        let args = file_args_with_prefix([format!("+{a}"), format!("@{a}")], '+').unwrap();
        assert_eq!(args, vec!["one".to_string(), "two".into(), format!("@{a}")]);
    }
}
