// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for consistent, human-readable
//! output and [`StructuredLog`] to emit the same event with structured
//! fields at its documented level.
//!
//! # Organization
//!
//! * `cli` - Declarative parser construction and handler dispatch
//! * `commands` - Bundled command line tools
//! * `files` - Argument files, data files and the editor
//! * `process` - Process and stdio plumbing
//! * `version` - Version string resolution
//!
//! # Usage Pattern
//!
//! ```rust
//! use toolbelt::observability::messages::StructuredLog;
//! use toolbelt::observability::messages::process::PidFileWritten;
//! use std::path::Path;
//!
//! let msg = PidFileWritten {
//!     path: Path::new("/run/toolbelt.pid"),
//!     pid: 4242,
//! };
//!
//! tracing::info!("{}", msg);
//! msg.log();
//! ```

use std::fmt::Display;
use tracing::Span;

pub mod cli;
pub mod commands;
pub mod files;
pub mod process;
pub mod version;

/// A log message that knows its level and structured fields.
pub trait StructuredLog: Display {
    /// Emit the event at the message's level.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
