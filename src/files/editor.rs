// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Launching the user's text editor.

use std::env;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use super::whole::read_file;
use crate::errors::FileError;
use crate::observability::messages::files::EditorLaunched;
use crate::observability::messages::StructuredLog;

#[cfg(windows)]
const DEFAULT_EDITOR: &str = "notepad";
#[cfg(not(windows))]
const DEFAULT_EDITOR: &str = "vi";

/// The editor command from `VISUAL`, then `EDITOR`, then the platform
/// default.
pub fn get_editor() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

fn edit_with(editor: &str, path: &Path, check: bool) -> Result<i32, FileError> {
    let words = shlex::split(editor).unwrap_or_else(|| vec![editor.to_string()]);
    let (program, args) = words.split_first().ok_or(FileError::NoEditor)?;

    EditorLaunched { editor, path }.log();
    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .map_err(|e| FileError::io(path, e))?;

    // Killed by a signal reports no code.
    let code = status.code().unwrap_or(-1);
    if check && code != 0 {
        return Err(FileError::EditorFailed {
            editor: editor.to_string(),
            code,
        });
    }
    Ok(code)
}

/// Open `path` in the editor and wait for it to exit.
///
/// Returns the editor's exit code. With `check` a non-zero exit is an
/// error.
pub fn edit<P: AsRef<Path>>(path: P, check: bool) -> Result<i32, FileError> {
    edit_with(&get_editor(), path.as_ref(), check)
}

/// Edit `text` through a temporary file and return the result.
pub fn edit_str(text: &str, check: bool) -> Result<String, FileError> {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .map_err(|e| FileError::io(env::temp_dir(), e))?;
    file.write_all(text.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| FileError::io(file.path(), e))?;

    edit_with(&get_editor(), file.path(), check)?;
    read_file(file.path())
}
