// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for version string resolution.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Version taken from the GitHub tag being built.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use toolbelt::observability::messages::version::VersionFromTag;
///
/// let msg = VersionFromTag { tag: "v1.2.0" };
/// assert_eq!(msg.to_string(), "Using release tag 'v1.2.0' as version");
/// ```
pub struct VersionFromTag<'a> {
    pub tag: &'a str,
}

impl Display for VersionFromTag<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Using release tag '{}' as version", self.tag)
    }
}

impl StructuredLog for VersionFromTag<'_> {
    fn log(&self) {
        tracing::info!(tag = self.tag, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(tracing::Level::INFO, "span_name", name = name, tag = self.tag)
    }
}

/// `git describe` could not produce a version.
///
/// # Log Level
/// `warn!` - Degraded behavior, a fallback version is used
pub struct GitDescribeFailed<'a> {
    pub dir: &'a Path,
    pub reason: &'a str,
}

impl Display for GitDescribeFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "git describe failed in {}: {}. Unknown module version",
            self.dir.display(),
            self.reason
        )
    }
}

impl StructuredLog for GitDescribeFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            dir = %self.dir.display(),
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::WARN,
            "span_name",
            name = name,
            dir = %self.dir.display(),
            reason = self.reason,
        )
    }
}

/// Final version string chosen.
///
/// # Log Level
/// `debug!` - Diagnostic detail
pub struct VersionResolved<'a> {
    pub version: &'a str,
    pub source: &'a str,
}

impl Display for VersionResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Resolved version '{}' from {}", self.version, self.source)
    }
}

impl StructuredLog for VersionResolved<'_> {
    fn log(&self) {
        tracing::debug!(version = self.version, source = self.source, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            version = self.version,
            source = self.source,
        )
    }
}
