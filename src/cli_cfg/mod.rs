// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Command line parsers built from declarative specs.
//!
//! A [`ParserSpec`] lists arguments, help groups, mutually exclusive groups
//! and sub-commands as data. [`CliParser::build`] turns it into a clap
//! command and [`CliParser::parse_from`] produces a
//! [`Namespace`](crate::data::Namespace) keyed by each argument's `dest`.
//! A [`Dispatcher`] then runs the handler named by the chosen sub-command.

mod builder;
mod dispatch;
mod parse;
mod spec;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub use builder::CliParser;
pub use dispatch::{Dispatcher, Handler};
pub use spec::{
    Action, ArgSpec, Entry, ExclusiveSpec, GroupSpec, Nargs, ParserSpec, SubcommandSpec,
    SubcommandsSpec, ValueType,
};
