// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for declarative parser construction and dispatch.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Parser built from a declarative spec.
///
/// # Log Level
/// `debug!` - Diagnostic detail
///
/// # Example
/// ```
/// use toolbelt::observability::messages::cli::ParserBuilt;
///
/// let msg = ParserBuilt {
///     prog: "myprogram",
///     arg_count: 4,
///     subcommand_count: 1,
/// };
/// assert_eq!(
///     msg.to_string(),
///     "Built parser 'myprogram' with 4 arguments and 1 sub-commands"
/// );
/// ```
pub struct ParserBuilt<'a> {
    pub prog: &'a str,
    pub arg_count: usize,
    pub subcommand_count: usize,
}

impl Display for ParserBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Built parser '{}' with {} arguments and {} sub-commands",
            self.prog, self.arg_count, self.subcommand_count
        )
    }
}

impl StructuredLog for ParserBuilt<'_> {
    fn log(&self) {
        tracing::debug!(
            prog = self.prog,
            arg_count = self.arg_count,
            subcommand_count = self.subcommand_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::DEBUG,
            "span_name",
            name = name,
            prog = self.prog,
            arg_count = self.arg_count,
            subcommand_count = self.subcommand_count,
        )
    }
}

/// Handler selected from the parse result.
///
/// # Log Level
/// `info!` - Important operational event
pub struct HandlerDispatched<'a> {
    pub handler: &'a str,
}

impl Display for HandlerDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Dispatching to handler '{}'", self.handler)
    }
}

impl StructuredLog for HandlerDispatched<'_> {
    fn log(&self) {
        tracing::info!(handler = self.handler, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            handler = self.handler,
        )
    }
}
