// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the bundled command line tools.
//!
//! This module contains message types for logging events related to:
//! * Command execution in `xxargs`
//! * GitHub output and version file handling in `github-meta`

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Child command about to run.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use toolbelt::observability::messages::commands::CommandStarted;
///
/// let msg = CommandStarted {
///     program: "echo",
///     arg_count: 3,
/// };
/// assert_eq!(msg.to_string(), "Running 'echo' with 3 arguments");
/// ```
pub struct CommandStarted<'a> {
    pub program: &'a str,
    pub arg_count: usize,
}

impl Display for CommandStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Running '{}' with {} arguments",
            self.program, self.arg_count
        )
    }
}

impl StructuredLog for CommandStarted<'_> {
    fn log(&self) {
        tracing::info!(
            program = self.program,
            arg_count = self.arg_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            program = self.program,
            arg_count = self.arg_count,
        )
    }
}

/// Child command exited unsuccessfully.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct CommandFailed<'a> {
    pub program: &'a str,
    pub exit_code: i32,
}

impl Display for CommandFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Command '{}' exited with status {}",
            self.program, self.exit_code
        )
    }
}

impl StructuredLog for CommandFailed<'_> {
    fn log(&self) {
        tracing::error!(
            program = self.program,
            exit_code = self.exit_code,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            program = self.program,
            exit_code = self.exit_code,
        )
    }
}

/// Step outputs appended to `GITHUB_OUTPUT`.
///
/// # Log Level
/// `info!` - Important operational event
pub struct GithubOutputWritten<'a> {
    pub path: &'a Path,
    pub entries: usize,
}

impl Display for GithubOutputWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Appended {} outputs to {}",
            self.entries,
            self.path.display()
        )
    }
}

impl StructuredLog for GithubOutputWritten<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            entries = self.entries,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            path = %self.path.display(),
            entries = self.entries,
        )
    }
}

/// Version file left untouched.
///
/// # Log Level
/// `warn!` - The release may carry a stale version
pub struct VersionFileSkipped<'a> {
    pub path: &'a Path,
    pub reason: &'a str,
}

impl Display for VersionFileSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Not writing {}: {}", self.path.display(), self.reason)
    }
}

impl StructuredLog for VersionFileSkipped<'_> {
    fn log(&self) {
        tracing::warn!(
            path = %self.path.display(),
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "span_name",
            name = name,
            path = %self.path.display(),
            reason = self.reason,
        )
    }
}

/// Version file rewritten.
///
/// # Log Level
/// `info!` - Important operational event
pub struct VersionFileWritten<'a> {
    pub path: &'a Path,
    pub version: &'a str,
}

impl Display for VersionFileWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Updated {} to version '{}'",
            self.path.display(),
            self.version
        )
    }
}

impl StructuredLog for VersionFileWritten<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            version = self.version,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            path = %self.path.display(),
            version = self.version,
        )
    }
}
