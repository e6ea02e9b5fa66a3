// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! PID files.

use std::fs;
use std::path::Path;

use crate::errors::ProcessError;
use crate::observability::messages::process::PidFileWritten;
use crate::observability::messages::StructuredLog;

/// Save the current process id to `path` as `"<pid>\n"`.
pub fn write_pidfile<P: AsRef<Path>>(path: P) -> Result<(), ProcessError> {
    let path = path.as_ref();
    let pid = std::process::id();
    fs::write(path, format!("{pid}\n")).map_err(|source| ProcessError::PidFile {
        path: path.to_path_buf(),
        source,
    })?;
    PidFileWritten { path, pid }.log();
    Ok(())
}

/// Read back a process id written by [`write_pidfile`].
pub fn read_pidfile<P: AsRef<Path>>(path: P) -> Result<u32, ProcessError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ProcessError::PidFile {
        path: path.to_path_buf(),
        source,
    })?;
    text.trim()
        .parse()
        .map_err(|_| ProcessError::InvalidPidFile(path.to_path_buf()))
}
