// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for the bundled command line tools.

use std::path::PathBuf;
use thiserror::Error;

use super::FileError;

#[derive(Error, Debug)]
pub enum CommandError {
    /// The child process could not be started.
    #[error("cannot run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    File(#[from] FileError),

    /// A required environment variable is not set.
    #[error("No {0} found")]
    MissingEnv(&'static str),

    /// The package directory named by the repository does not exist.
    #[error("{}: directory not found", .0.display())]
    MissingDirectory(PathBuf),

    /// Delimiters must be a single byte.
    #[error("Invalid delimiter '{0}': must be a single byte character")]
    InvalidDelimiter(String),
}
