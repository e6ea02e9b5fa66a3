// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::cli_cfg::consts::{DEFAULT_CALLABLE_DEST, DEFAULT_FROMFILE_PREFIX};
use crate::errors::CliConfigError;
use crate::files::load_data;
use crate::text::OneOrMany;

/// Declarative description of a command line parser.
///
/// Parser specs are plain data, so they can live in YAML, JSON or TOML
/// files next to the program that uses them.
///
/// # Example
/// ```yaml
/// prog: myprogram
/// description: Does things
/// entries:
///   - kind: arg
///     flags: [-V, --version]
///     action: version
///     version: "%(prog)s 1.0"
///   - kind: arg
///     flags: --timeout
///     type: int
///     hint: SECONDS
///   - kind: group
///     title: modes
///     description: parser mode
///     entries:
///       - kind: exclusive
///         required: true
///         entries:
///           - { kind: arg, flags: --send, dest: mode, action: store_const, const: send }
///           - { kind: arg, flags: --recv, dest: mode, action: store_const, const: recv }
///   - kind: subcommands
///     dest: function
///     callable_dest: func
///     commands:
///       - names: [list, ls, ll]
///         help: list command
///         callable: list
///         args:
///           - { kind: arg, flags: [-l, --long], action: store_true }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ParserSpec {
    /// Program name shown in usage. Defaults to the running executable.
    #[serde(default)]
    pub prog: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub epilog: Option<String>,
    /// `None` disables `@file` expansion.
    #[serde(default = "default_fromfile_prefix")]
    pub fromfile_prefix: Option<char>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Default for ParserSpec {
    fn default() -> Self {
        Self {
            prog: None,
            description: None,
            epilog: None,
            fromfile_prefix: default_fromfile_prefix(),
            entries: Vec::new(),
        }
    }
}

impl ParserSpec {
    /// Load a parser spec from a YAML, JSON or TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CliConfigError> {
        Ok(load_data(path)?)
    }
}

fn default_fromfile_prefix() -> Option<char> {
    Some(DEFAULT_FROMFILE_PREFIX)
}

fn default_callable_dest() -> String {
    DEFAULT_CALLABLE_DEST.to_string()
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items,
    })
}

/// One item of a parser declaration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    Arg(ArgSpec),
    /// Arguments listed under their own heading in help.
    Group(GroupSpec),
    /// Arguments of which at most one may be given.
    Exclusive(ExclusiveSpec),
    Subcommands(SubcommandsSpec),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct GroupSpec {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ExclusiveSpec {
    /// One of the arguments must be given.
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubcommandsSpec {
    /// Namespace entry receiving the chosen sub-command name.
    #[serde(default)]
    pub dest: Option<String>,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Namespace entry receiving the chosen sub-command's `callable`.
    #[serde(default = "default_callable_dest")]
    pub callable_dest: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub commands: Vec<SubcommandSpec>,
}

impl Default for SubcommandsSpec {
    fn default() -> Self {
        Self {
            dest: None,
            help: None,
            title: None,
            callable_dest: default_callable_dest(),
            required: false,
            commands: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SubcommandSpec {
    /// The sub-command name followed by its aliases.
    #[serde(deserialize_with = "one_or_many")]
    pub names: Vec<String>,
    #[serde(default)]
    pub help: Option<String>,
    /// Handler name stored when this sub-command is chosen.
    #[serde(default)]
    pub callable: Option<String>,
    #[serde(default)]
    pub args: Vec<Entry>,
}

/// A single option or positional argument.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ArgSpec {
    /// `-x` / `--name` flags for options, or a single positional name.
    #[serde(deserialize_with = "one_or_many")]
    pub flags: Vec<String>,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub action: Action,
    #[serde(default)]
    pub dest: Option<String>,
    #[serde(default, rename = "const")]
    pub const_value: Option<Value>,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default, rename = "type")]
    pub value_type: ValueType,
    #[serde(default)]
    pub nargs: Option<Nargs>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub choices: Vec<String>,
    #[serde(default)]
    pub metavar: Option<String>,
    /// Placeholder shown for the value when there is no `metavar`.
    #[serde(default)]
    pub hint: Option<String>,
    /// Text printed by a `version` action.
    #[serde(default)]
    pub version: Option<String>,
}

impl ArgSpec {
    pub fn is_positional(&self) -> bool {
        self.flags.first().is_some_and(|flag| !flag.starts_with('-'))
    }

    /// Namespace entry this argument writes to.
    ///
    /// Explicit `dest`, else the first long flag, else the first short flag,
    /// else the positional name. Dashes become underscores.
    pub fn dest(&self) -> String {
        if let Some(dest) = &self.dest {
            return dest.clone();
        }
        let name = self
            .flags
            .iter()
            .find_map(|flag| flag.strip_prefix("--"))
            .or_else(|| self.flags.iter().find_map(|flag| flag.strip_prefix('-')))
            .or_else(|| self.flags.first().map(String::as_str))
            .unwrap_or_default();
        name.replace('-', "_")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    #[default]
    Store,
    StoreConst,
    StoreTrue,
    StoreFalse,
    Append,
    Count,
    Version,
}

impl Action {
    /// Whether the argument is followed by values on the command line.
    pub fn takes_values(self) -> bool {
        matches!(self, Action::Store | Action::Append)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    Str,
    Int,
    Float,
    Bool,
}

/// How many values an argument consumes.
///
/// Written as a number or as one of `?`, `*` and `+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "NargsRepr", into = "NargsRepr")]
pub enum Nargs {
    Exactly(usize),
    Optional,
    ZeroOrMore,
    OneOrMore,
}

impl Nargs {
    /// Values are collected into a list rather than stored as one value.
    pub fn is_list(self) -> bool {
        !matches!(self, Nargs::Optional)
    }
}

#[derive(Deserialize, Serialize)]
#[serde(untagged)]
enum NargsRepr {
    Count(usize),
    Symbol(String),
}

impl TryFrom<NargsRepr> for Nargs {
    type Error = String;

    fn try_from(repr: NargsRepr) -> Result<Self, Self::Error> {
        match repr {
            NargsRepr::Count(n) => Ok(Nargs::Exactly(n)),
            NargsRepr::Symbol(symbol) => match symbol.as_str() {
                "?" => Ok(Nargs::Optional),
                "*" => Ok(Nargs::ZeroOrMore),
                "+" => Ok(Nargs::OneOrMore),
                other => other
                    .parse()
                    .map(Nargs::Exactly)
                    .map_err(|_| format!("invalid nargs '{other}': expected a number, '?', '*' or '+'")),
            },
        }
    }
}

impl From<Nargs> for NargsRepr {
    fn from(nargs: Nargs) -> Self {
        match nargs {
            Nargs::Exactly(n) => NargsRepr::Count(n),
            Nargs::Optional => NargsRepr::Symbol("?".into()),
            Nargs::ZeroOrMore => NargsRepr::Symbol("*".into()),
            Nargs::OneOrMore => NargsRepr::Symbol("+".into()),
        }
    }
}
