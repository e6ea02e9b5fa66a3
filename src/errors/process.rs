// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for the Unix process helpers.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("fork failed: {0}")]
    Fork(#[source] std::io::Error),

    #[error("setsid failed: {0}")]
    Setsid(#[source] std::io::Error),

    #[error("pipe failed: {0}")]
    Pipe(#[source] std::io::Error),

    /// Duplicating or redirecting a file descriptor failed.
    #[error("cannot redirect file descriptor {fd}: {source}")]
    Redirect {
        fd: i32,
        #[source]
        source: std::io::Error,
    },

    /// `denull_io` without a matching `null_io`.
    #[error("standard I/O is not redirected")]
    NotRedirected,

    #[error("PID file {} error: {source}", .path.display())]
    PidFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PID file {} does not contain a process id", .0.display())]
    InvalidPidFile(PathBuf),

    #[error("cannot install signal handler: {0}")]
    Signal(#[source] std::io::Error),
}
