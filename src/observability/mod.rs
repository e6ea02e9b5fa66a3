// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout toolbelt. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep field names consistent between the text and the structured output
//!
//! # Architecture
//!
//! Messages are organized by area:
//! * `messages::cli` - Declarative parser construction and dispatch
//! * `messages::commands` - `xxargs` and `github-meta` tool events
//! * `messages::files` - Argument files, data files and the editor
//! * `messages::process` - Daemonization, PID files and stdio redirection
//! * `messages::version` - `git describe` version resolution
//!
//! # Usage
//!
//! ```rust
//! use toolbelt::observability::messages::StructuredLog;
//! use toolbelt::observability::messages::commands::CommandFailed;
//!
//! let msg = CommandFailed {
//!     program: "echo",
//!     exit_code: 1,
//! };
//!
//! msg.log();
//! ```

pub mod messages;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "TOOLBELT_LOG";

/// Default filter when `TOOLBELT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the global `fmt` subscriber writing to stderr.
///
/// The filter is read from `TOOLBELT_LOG` (for example `toolbelt=debug`),
/// falling back to `warn`. Calling this more than once is harmless; later
/// calls leave the first subscriber in place.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
