// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for file helpers.
//!
//! This module contains message types for logging events related to:
//! * `@file` argument expansion
//! * Data file loading and saving
//! * Launching the external editor

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Argument file expanded in place.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct ArgFileExpanded<'a> {
    pub path: &'a Path,
    pub arg_count: usize,
}

impl Display for ArgFileExpanded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Expanded {} arguments from {}",
            self.arg_count,
            self.path.display()
        )
    }
}

impl StructuredLog for ArgFileExpanded<'_> {
    fn log(&self) {
        tracing::debug!(
            path = %self.path.display(),
            arg_count = self.arg_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            path = %self.path.display(),
            arg_count = self.arg_count,
        )
    }
}

/// Data file loaded or saved.
///
/// # Log Level
/// `debug!` - Diagnostic detail
///
/// # Example
/// ```
/// use toolbelt::observability::messages::files::DataFileAccessed;
/// use std::path::Path;
///
/// let msg = DataFileAccessed {
///     path: Path::new("settings.yaml"),
///     format: "yaml",
///     saved: false,
/// };
/// assert_eq!(msg.to_string(), "Loaded yaml data from settings.yaml");
/// ```
pub struct DataFileAccessed<'a> {
    pub path: &'a Path,
    pub format: &'a str,
    pub saved: bool,
}

impl Display for DataFileAccessed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        if self.saved {
            write!(f, "Saved {} data to {}", self.format, self.path.display())
        } else {
            write!(f, "Loaded {} data from {}", self.format, self.path.display())
        }
    }
}

impl StructuredLog for DataFileAccessed<'_> {
    fn log(&self) {
        tracing::debug!(
            path = %self.path.display(),
            format = self.format,
            saved = self.saved,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            path = %self.path.display(),
            format = self.format,
            saved = self.saved,
        )
    }
}

/// External editor started on a file.
///
/// # Log Level
/// `info!` - Important operational event
pub struct EditorLaunched<'a> {
    pub editor: &'a str,
    pub path: &'a Path,
}

impl Display for EditorLaunched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Editing {} with '{}'", self.path.display(), self.editor)
    }
}

impl StructuredLog for EditorLaunched<'_> {
    fn log(&self) {
        tracing::info!(
            editor = self.editor,
            path = %self.path.display(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            editor = self.editor,
            path = %self.path.display(),
        )
    }
}
