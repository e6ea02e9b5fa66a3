// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for process and stdio plumbing.
//!
//! This module contains message types for logging events related to:
//! * Daemonization and PID files
//! * Child process reaping
//! * Redirection of standard I/O to `/dev/null` and syslog

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Process detached into the background.
///
/// # Log Level
/// `info!` - Important operational event
pub struct Daemonized {
    pub pid: u32,
}

impl Display for Daemonized {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Running in the background as pid {}", self.pid)
    }
}

impl StructuredLog for Daemonized {
    fn log(&self) {
        tracing::info!(pid = self.pid, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(tracing::Level::INFO, "span_name", name = name, pid = self.pid)
    }
}

/// PID file written.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PidFileWritten<'a> {
    pub path: &'a Path,
    pub pid: u32,
}

impl Display for PidFileWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Wrote pid {} to {}", self.pid, self.path.display())
    }
}

impl StructuredLog for PidFileWritten<'_> {
    fn log(&self) {
        tracing::info!(
            path = %self.path.display(),
            pid = self.pid,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            path = %self.path.display(),
            pid = self.pid,
        )
    }
}

/// Finished children collected.
///
/// # Log Level
/// `debug!` - Routine housekeeping
pub struct ChildrenReaped {
    pub count: usize,
}

impl Display for ChildrenReaped {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Reaped {} child processes", self.count)
    }
}

impl StructuredLog for ChildrenReaped {
    fn log(&self) {
        tracing::debug!(count = self.count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(tracing::Level::DEBUG, "span_name", name = name, count = self.count)
    }
}

/// Standard I/O redirected to `/dev/null`.
///
/// # Log Level
/// `debug!` - Routine housekeeping
pub struct StdioNulled {
    pub depth: usize,
    pub keep_stderr: bool,
}

impl Display for StdioNulled {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Standard I/O redirected to /dev/null (depth {}, stderr {})",
            self.depth,
            if self.keep_stderr { "kept" } else { "redirected" }
        )
    }
}

impl StructuredLog for StdioNulled {
    fn log(&self) {
        tracing::debug!(depth = self.depth, keep_stderr = self.keep_stderr, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            depth = self.depth,
            keep_stderr = self.keep_stderr,
        )
    }
}

/// One level of `/dev/null` redirection undone.
///
/// # Log Level
/// `debug!` - Routine housekeeping
pub struct StdioRestored {
    pub depth: usize,
}

impl Display for StdioRestored {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.depth == 0 {
            write!(f, "Standard I/O restored")
        } else {
            write!(f, "Standard I/O still redirected (depth {})", self.depth)
        }
    }
}

impl StructuredLog for StdioRestored {
    fn log(&self) {
        tracing::debug!(depth = self.depth, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(tracing::Level::DEBUG, "span_name", name = name, depth = self.depth)
    }
}

/// A descriptor now feeds a syslog logger child.
///
/// # Log Level
/// `info!` - Important operational event
pub struct SyslogRedirected<'a> {
    pub fd: i32,
    pub tag: &'a str,
    pub logger_pid: i32,
}

impl Display for SyslogRedirected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "File descriptor {} redirected to syslog as '{}' (logger pid {})",
            self.fd, self.tag, self.logger_pid
        )
    }
}

impl StructuredLog for SyslogRedirected<'_> {
    fn log(&self) {
        tracing::info!(
            fd = self.fd,
            tag = self.tag,
            logger_pid = self.logger_pid,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            fd = self.fd,
            tag = self.tag,
            logger_pid = self.logger_pid,
        )
    }
}
