// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for building and running declarative argument parsers.

use thiserror::Error;

use super::{FileError, ValueError};

#[derive(Error, Debug)]
pub enum CliConfigError {
    /// An argument was declared without any flag or name.
    #[error("Argument declared without flags")]
    EmptyFlags,

    /// A flag that is neither `-x`, `--name` nor a positional name.
    #[error("Invalid flag '{0}'")]
    InvalidFlag(String),

    /// A flag or sub-command name declared twice at the same level.
    #[error("Conflicting name '{0}'")]
    DuplicateName(String),

    /// Mixing option flags and positional names in one argument.
    #[error("Argument '{0}' mixes positional names and option flags")]
    MixedFlags(String),

    /// Something other than a plain argument inside an exclusive group.
    #[error("Only arguments may appear in a mutually exclusive group, found {0}")]
    InvalidNesting(&'static str),

    /// A second sub-command declaration at the same level.
    #[error("Cannot have multiple sub-command declarations at the same level")]
    DuplicateSubcommands,

    /// `nargs: 0` on an argument that stores values.
    #[error("Argument '{0}' must consume at least one value")]
    InvalidNargs(String),

    /// A positional declared after one that may consume a variable number
    /// of values.
    #[error("Positional '{0}' cannot follow an optional or variable-length positional")]
    PositionalOrder(String),

    /// A sub-command without a name.
    #[error("Sub-command declared without a name")]
    UnnamedSubcommand,

    /// A version action without version text.
    #[error("Version argument '{0}' has no version text")]
    MissingVersion(String),

    /// `store_const` without a `const` value.
    #[error("Argument '{0}' uses store_const without a const value")]
    MissingConst(String),

    /// No handler registered under the name stored in the namespace.
    #[error("No handler registered for '{0}'")]
    UnknownHandler(String),

    /// Parsing failed, or help/version output was requested.
    #[error(transparent)]
    Clap(#[from] clap::Error),

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error(transparent)]
    File(#[from] FileError),

    /// A dispatched handler failed.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}
