// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Turns a [`ParserSpec`] into a `clap::Command`.
//!
//! Every declared argument gets a unique clap id, so several arguments may
//! share one namespace `dest`. The mapping from clap ids back to namespace
//! entries is kept in [`Level`] and used when parsing.

use clap::{Arg, ArgAction, ArgGroup, Command};
use serde_json::Value;
use std::collections::HashSet;

use super::consts::PROG_PLACEHOLDER;
use super::parse::{check_value, convert};
use super::spec::{Action, ArgSpec, Entry, Nargs, ParserSpec, SubcommandsSpec, ValueType};
use crate::errors::{CliConfigError, ValueError};
use crate::observability::messages::cli::ParserBuilt;
use crate::observability::messages::StructuredLog;
use crate::text::strtr;

/// How one declared argument lands in the namespace.
#[derive(Debug, Clone)]
pub(crate) struct Binding {
    pub id: String,
    pub dest: String,
    pub action: Action,
    pub const_value: Option<Value>,
    pub default: Option<Value>,
    pub value_type: ValueType,
    pub nargs: Option<Nargs>,
    pub positional: bool,
}

impl Binding {
    /// Value the namespace holds when the argument is not given.
    pub fn default_value(&self) -> Result<Value, ValueError> {
        match (&self.default, self.action) {
            (Some(Value::String(text)), Action::Store) if self.value_type != ValueType::Str => {
                convert(text, self.value_type)
            }
            (Some(value), _) => Ok(value.clone()),
            (None, Action::StoreTrue) => Ok(Value::Bool(false)),
            (None, Action::StoreFalse) => Ok(Value::Bool(true)),
            (None, _) if self.positional && self.nargs == Some(Nargs::ZeroOrMore) => {
                Ok(Value::Array(Vec::new()))
            }
            (None, _) => Ok(Value::Null),
        }
    }
}

/// Bindings of one command and its sub-commands.
#[derive(Debug, Clone, Default)]
pub(crate) struct Level {
    pub bindings: Vec<Binding>,
    pub subcommands: Option<SubcommandsBinding>,
}

#[derive(Debug, Clone)]
pub(crate) struct SubcommandsBinding {
    pub dest: Option<String>,
    pub callable_dest: String,
    pub commands: Vec<SubcommandBinding>,
}

#[derive(Debug, Clone)]
pub(crate) struct SubcommandBinding {
    pub name: String,
    pub callable: Option<String>,
    pub level: Level,
}

/// A parser built from a declarative [`ParserSpec`].
///
/// ```
/// use toolbelt::cli_cfg::{ArgSpec, CliParser, Entry, ParserSpec};
///
/// let spec = ParserSpec {
///     prog: Some("greet".into()),
///     entries: vec![Entry::Arg(ArgSpec {
///         flags: vec!["--name".into()],
///         ..ArgSpec::default()
///     })],
///     ..ParserSpec::default()
/// };
/// let parser = CliParser::build(&spec).unwrap();
///
/// let ns = parser.parse_from(["--name", "world"]).unwrap();
/// assert_eq!(ns.get_str("name"), Some("world"));
/// ```
#[derive(Debug, Clone)]
pub struct CliParser {
    pub(crate) command: Command,
    pub(crate) level: Level,
    pub(crate) prog: String,
    pub(crate) fromfile_prefix: Option<char>,
}

impl CliParser {
    pub fn build(spec: &ParserSpec) -> Result<Self, CliConfigError> {
        let prog = spec.prog.clone().unwrap_or_else(default_prog);
        let mut builder = Builder {
            prog: &prog,
            next_id: 0,
            arg_count: 0,
            subcommand_count: 0,
        };

        let (mut command, level) = builder.command(&prog, &spec.entries)?;
        if let Some(description) = &spec.description {
            command = command.about(description.clone());
        }
        if let Some(epilog) = &spec.epilog {
            let after = match command.get_after_help() {
                Some(notes) => format!("{notes}\n\n{epilog}"),
                None => epilog.clone(),
            };
            command = command.after_help(after);
        }

        ParserBuilt {
            prog: &prog,
            arg_count: builder.arg_count,
            subcommand_count: builder.subcommand_count,
        }
        .log();

        Ok(Self {
            command,
            level,
            prog,
            fromfile_prefix: spec.fromfile_prefix,
        })
    }

    pub fn prog(&self) -> &str {
        &self.prog
    }

    /// The underlying clap command.
    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn render_help(&self) -> String {
        self.command.clone().render_help().to_string()
    }
}

fn default_prog() -> String {
    std::env::args_os()
        .next()
        .as_ref()
        .and_then(|arg0| std::path::Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// Version text as clap prints it: clap puts the program name first.
fn version_text(text: &str, prog: &str) -> String {
    let rest = text
        .strip_prefix(PROG_PLACEHOLDER)
        .map(str::trim_start)
        .unwrap_or(text);
    strtr(rest, &[(PROG_PLACEHOLDER, prog)])
}

/// What may still follow the positionals declared so far.
///
/// Only required positionals may follow a variable-length one, and only
/// one of them. Nothing required may follow an optional positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    Open,
    Optional,
    Variadic,
    Closed,
}

/// Arguments, groups and sub-commands collected for one command.
struct LevelState<'s> {
    args: Vec<Arg>,
    /// Option spellings taken so far, including the built-in help flags.
    used_flags: HashSet<String>,
    groups: Vec<ArgGroup>,
    notes: Vec<String>,
    version: Option<String>,
    tail: Tail,
    subcommands: Option<(&'s SubcommandsSpec, Vec<Command>, SubcommandsBinding)>,
    level: Level,
}

impl Default for LevelState<'_> {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            used_flags: ["-h", "--help"].into_iter().map(String::from).collect(),
            groups: Vec::new(),
            notes: Vec::new(),
            version: None,
            tail: Tail::Open,
            subcommands: None,
            level: Level::default(),
        }
    }
}

struct Builder<'p> {
    prog: &'p str,
    next_id: usize,
    arg_count: usize,
    subcommand_count: usize,
}

impl Builder<'_> {
    fn command(&mut self, name: &str, entries: &[Entry]) -> Result<(Command, Level), CliConfigError> {
        let mut state = LevelState::default();
        self.entries(&mut state, entries, None)?;

        let mut command = Command::new(name.to_string())
            .args(state.args)
            .groups(state.groups)
            .infer_long_args(true)
            .disable_version_flag(true);

        if let Some(version) = state.version {
            command = command.version(version);
        }
        if !state.notes.is_empty() {
            command = command.after_help(state.notes.join("\n\n"));
        }

        let mut level = state.level;
        if let Some((spec, commands, binding)) = state.subcommands {
            command = command
                .subcommands(commands)
                .subcommand_required(spec.required);
            if let Some(heading) = spec.title.as_ref().or(spec.help.as_ref()) {
                command = command.subcommand_help_heading(heading.clone());
            }
            if let Some(dest) = &spec.dest {
                command = command.subcommand_value_name(dest.to_uppercase());
            }
            level.subcommands = Some(binding);
        }

        Ok((command, level))
    }

    fn entries<'s>(
        &mut self,
        state: &mut LevelState<'s>,
        entries: &'s [Entry],
        heading: Option<&str>,
    ) -> Result<(), CliConfigError> {
        for entry in entries {
            match entry {
                Entry::Arg(spec) => {
                    self.arg(state, spec, heading)?;
                }
                Entry::Group(group) => {
                    let title = group.title.as_deref().or(heading);
                    if let Some(description) = &group.description {
                        state.notes.push(match title {
                            Some(title) => format!("{title}:\n  {description}"),
                            None => description.clone(),
                        });
                    }
                    self.entries(state, &group.entries, title)?;
                }
                Entry::Exclusive(exclusive) => {
                    let mut ids = Vec::with_capacity(exclusive.entries.len());
                    for member in &exclusive.entries {
                        match member {
                            Entry::Arg(spec) => ids.push(self.arg(state, spec, heading)?),
                            Entry::Group(_) => return Err(CliConfigError::InvalidNesting("group")),
                            Entry::Exclusive(_) => {
                                return Err(CliConfigError::InvalidNesting("exclusive group"))
                            }
                            Entry::Subcommands(_) => {
                                return Err(CliConfigError::InvalidNesting("sub-commands"))
                            }
                        }
                    }
                    let group_id = format!("exclusive group {}", state.groups.len());
                    state.groups.push(
                        ArgGroup::new(group_id)
                            .args(ids)
                            .multiple(false)
                            .required(exclusive.required),
                    );
                }
                Entry::Subcommands(spec) => {
                    if state.subcommands.is_some() {
                        return Err(CliConfigError::DuplicateSubcommands);
                    }
                    state.subcommands = Some(self.subcommands(spec)?);
                }
            }
        }
        Ok(())
    }

    fn subcommands<'s>(
        &mut self,
        spec: &'s SubcommandsSpec,
    ) -> Result<(&'s SubcommandsSpec, Vec<Command>, SubcommandsBinding), CliConfigError> {
        let mut commands = Vec::with_capacity(spec.commands.len());
        let mut bindings = Vec::with_capacity(spec.commands.len());
        let mut used_names = HashSet::new();

        for sub in &spec.commands {
            let (name, aliases) = sub
                .names
                .split_first()
                .ok_or(CliConfigError::UnnamedSubcommand)?;
            if let Some(taken) = sub.names.iter().find(|n| !used_names.insert(n.as_str())) {
                return Err(CliConfigError::DuplicateName(taken.clone()));
            }
            let (mut command, level) = self.command(name, &sub.args)?;
            command = command.visible_aliases(aliases.to_vec());
            if let Some(help) = &sub.help {
                command = command.about(help.clone());
            }
            self.subcommand_count += 1;

            commands.push(command);
            bindings.push(SubcommandBinding {
                name: name.clone(),
                callable: sub.callable.clone(),
                level,
            });
        }

        let binding = SubcommandsBinding {
            dest: spec.dest.clone(),
            callable_dest: spec.callable_dest.clone(),
            commands: bindings,
        };
        Ok((spec, commands, binding))
    }

    /// Add one argument and return its clap id.
    fn arg(
        &mut self,
        state: &mut LevelState<'_>,
        spec: &ArgSpec,
        heading: Option<&str>,
    ) -> Result<String, CliConfigError> {
        let first = spec.flags.first().ok_or(CliConfigError::EmptyFlags)?;
        let dest = spec.dest();
        let positional = spec.is_positional();
        if spec.flags.iter().any(|flag| flag.starts_with('-') == positional) {
            return Err(CliConfigError::MixedFlags(dest));
        }

        let id = format!("{dest}.{}", self.next_id);
        self.next_id += 1;
        let mut arg = Arg::new(id.clone());

        if positional {
            if spec.flags.len() > 1 {
                return Err(CliConfigError::InvalidFlag(spec.flags[1].clone()));
            }
            if !spec.action.takes_values() {
                return Err(CliConfigError::InvalidFlag(first.clone()));
            }
            let optional = spec.default.is_some()
                || matches!(spec.nargs, Some(Nargs::Optional | Nargs::ZeroOrMore));
            let variadic = !matches!(
                spec.nargs,
                None | Some(Nargs::Exactly(1) | Nargs::Optional)
            );
            state.tail = match (state.tail, optional, variadic) {
                (Tail::Closed, _, _) | (Tail::Optional, false, _) => {
                    return Err(CliConfigError::PositionalOrder(dest));
                }
                (Tail::Variadic, false, false) => Tail::Closed,
                (Tail::Variadic, _, _) => return Err(CliConfigError::PositionalOrder(dest)),
                (_, true, true) => Tail::Closed,
                (_, false, true) => Tail::Variadic,
                (_, true, false) => Tail::Optional,
                (Tail::Open, false, false) => Tail::Open,
            };
            arg = arg.required(!optional);
        } else {
            if let Some(taken) = spec.flags.iter().find(|f| !state.used_flags.insert(f.to_string())) {
                return Err(CliConfigError::DuplicateName(taken.clone()));
            }
            // Repeated options replace their earlier value. Positionals do
            // not override themselves, so values split by an option are a
            // usage error instead of being dropped.
            arg = flags(arg, &spec.flags)?
                .required(spec.required)
                .overrides_with(id.clone());
        }

        if let Some(help) = &spec.help {
            arg = arg.help(help.clone());
        }
        if let Some(heading) = heading {
            arg = arg.help_heading(heading.to_string());
        }

        arg = match spec.action {
            Action::Store | Action::Append => valued(arg, spec, &dest, positional)?,
            Action::StoreConst => {
                if spec.const_value.is_none() {
                    return Err(CliConfigError::MissingConst(dest));
                }
                arg.action(ArgAction::SetTrue)
            }
            Action::StoreTrue | Action::StoreFalse => arg.action(ArgAction::SetTrue),
            Action::Count => arg.action(ArgAction::Count),
            Action::Version => {
                let text = spec
                    .version
                    .as_deref()
                    .ok_or_else(|| CliConfigError::MissingVersion(dest.clone()))?;
                state.version = Some(version_text(text, self.prog));
                arg.action(ArgAction::Version)
            }
        };

        state.args.push(arg);
        state.level.bindings.push(Binding {
            id: id.clone(),
            dest,
            action: spec.action,
            const_value: spec.const_value.clone(),
            default: spec.default.clone(),
            value_type: spec.value_type,
            nargs: spec.nargs,
            positional,
        });
        self.arg_count += 1;
        Ok(id)
    }
}

/// Apply `-x` and `--name` flags. The first of each kind is the primary
/// spelling; the rest become visible aliases.
fn flags(mut arg: Arg, flags: &[String]) -> Result<Arg, CliConfigError> {
    let mut has_long = false;
    let mut has_short = false;

    for flag in flags {
        if let Some(long) = flag.strip_prefix("--") {
            if long.is_empty() || long.starts_with('-') {
                return Err(CliConfigError::InvalidFlag(flag.clone()));
            }
            arg = if has_long {
                arg.visible_alias(long.to_string())
            } else {
                arg.long(long.to_string())
            };
            has_long = true;
            continue;
        }

        let mut chars = flag.chars().skip(1);
        let short = match (chars.next(), chars.next()) {
            (Some(short), None) if short != '-' => short,
            _ => return Err(CliConfigError::InvalidFlag(flag.clone())),
        };
        arg = if has_short {
            arg.visible_short_alias(short)
        } else {
            arg.short(short)
        };
        has_short = true;
    }
    Ok(arg)
}

fn valued(arg: Arg, spec: &ArgSpec, dest: &str, positional: bool) -> Result<Arg, CliConfigError> {
    let action = if spec.action == Action::Append {
        ArgAction::Append
    } else {
        ArgAction::Set
    };
    let arg = match spec.nargs {
        None => arg.num_args(1),
        Some(Nargs::Exactly(0)) => return Err(CliConfigError::InvalidNargs(dest.to_string())),
        Some(Nargs::Exactly(n)) => arg.num_args(n),
        Some(Nargs::Optional) if positional => arg.num_args(1),
        Some(Nargs::Optional) => arg.num_args(0..=1),
        Some(Nargs::ZeroOrMore) => arg.num_args(0..),
        Some(Nargs::OneOrMore) => arg.num_args(1..),
    };

    let value_name = spec
        .metavar
        .clone()
        .or_else(|| spec.hint.clone())
        .or_else(|| (!spec.choices.is_empty()).then(|| format!("{{{}}}", spec.choices.join(","))))
        .unwrap_or_else(|| dest.to_uppercase());

    let value_type = spec.value_type;
    let choices = spec.choices.clone();
    Ok(arg
        .action(action)
        .value_name(value_name)
        .value_parser(move |raw: &str| check_value(raw, value_type, &choices)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli_cfg::spec::{ExclusiveSpec, GroupSpec, SubcommandSpec};

    fn arg(flags: &[&str]) -> ArgSpec {
        ArgSpec {
            flags: flags.iter().map(|f| f.to_string()).collect(),
            ..ArgSpec::default()
        }
    }

    fn spec(entries: Vec<Entry>) -> ParserSpec {
        ParserSpec {
            prog: Some("prog".into()),
            entries,
            ..ParserSpec::default()
        }
    }

    #[test]
    fn invalid_declarations_are_rejected() {
        struct TestCase {
            name: &'static str,
            entries: Vec<Entry>,
            check: fn(&CliConfigError) -> bool,
        }

        let test_cases = vec![
            TestCase {
                name: "no flags",
                entries: vec![Entry::Arg(arg(&[]))],
                check: |e| matches!(e, CliConfigError::EmptyFlags),
            },
            TestCase {
                name: "mixed flags",
                entries: vec![Entry::Arg(arg(&["name", "--name"]))],
                check: |e| matches!(e, CliConfigError::MixedFlags(_)),
            },
            TestCase {
                name: "long single dash",
                entries: vec![Entry::Arg(arg(&["-long"]))],
                check: |e| matches!(e, CliConfigError::InvalidFlag(f) if f == "-long"),
            },
            TestCase {
                name: "store_const without const",
                entries: vec![Entry::Arg(ArgSpec {
                    action: Action::StoreConst,
                    ..arg(&["--fast"])
                })],
                check: |e| matches!(e, CliConfigError::MissingConst(d) if d == "fast"),
            },
            TestCase {
                name: "version without text",
                entries: vec![Entry::Arg(ArgSpec {
                    action: Action::Version,
                    ..arg(&["-V"])
                })],
                check: |e| matches!(e, CliConfigError::MissingVersion(_)),
            },
            TestCase {
                name: "group inside exclusive",
                entries: vec![Entry::Exclusive(ExclusiveSpec {
                    required: false,
                    entries: vec![Entry::Group(GroupSpec::default())],
                })],
                check: |e| matches!(e, CliConfigError::InvalidNesting("group")),
            },
            TestCase {
                name: "two sub-command declarations",
                entries: vec![
                    Entry::Subcommands(SubcommandsSpec::default()),
                    Entry::Subcommands(SubcommandsSpec::default()),
                ],
                check: |e| matches!(e, CliConfigError::DuplicateSubcommands),
            },
            TestCase {
                name: "unnamed sub-command",
                entries: vec![Entry::Subcommands(SubcommandsSpec {
                    commands: vec![SubcommandSpec::default()],
                    ..SubcommandsSpec::default()
                })],
                check: |e| matches!(e, CliConfigError::UnnamedSubcommand),
            },
            TestCase {
                name: "positional after variable-length positional",
                entries: vec![
                    Entry::Arg(ArgSpec {
                        nargs: Some(Nargs::ZeroOrMore),
                        ..arg(&["files"])
                    }),
                    Entry::Arg(arg(&["target"])),
                ],
                check: |e| matches!(e, CliConfigError::PositionalOrder(d) if d == "target"),
            },
            TestCase {
                name: "help flag taken",
                entries: vec![Entry::Arg(arg(&["-h", "--host"]))],
                check: |e| matches!(e, CliConfigError::DuplicateName(f) if f == "-h"),
            },
            TestCase {
                name: "same sub-command twice",
                entries: vec![Entry::Subcommands(SubcommandsSpec {
                    commands: vec![
                        SubcommandSpec {
                            names: vec!["list".into(), "ls".into()],
                            ..SubcommandSpec::default()
                        },
                        SubcommandSpec {
                            names: vec!["ls".into()],
                            ..SubcommandSpec::default()
                        },
                    ],
                    ..SubcommandsSpec::default()
                })],
                check: |e| matches!(e, CliConfigError::DuplicateName(n) if n == "ls"),
            },
            TestCase {
                name: "zero values",
                entries: vec![Entry::Arg(ArgSpec {
                    nargs: Some(Nargs::Exactly(0)),
                    ..arg(&["--none"])
                })],
                check: |e| matches!(e, CliConfigError::InvalidNargs(_)),
            },
        ];

        for case in test_cases {
            let err = CliParser::build(&spec(case.entries)).unwrap_err();
            assert!((case.check)(&err), "{}: unexpected error {err:?}", case.name);
        }
    }

    #[test]
    fn aliases_and_headings_show_in_help() {
        let parser = CliParser::build(&spec(vec![Entry::Group(GroupSpec {
            title: Some("network".into()),
            description: Some("connection settings".into()),
            entries: vec![Entry::Arg(ArgSpec {
                help: Some("Remote host".into()),
                ..arg(&["-H", "--host", "--server"])
            })],
        })]))
        .unwrap();

        let help = parser.render_help();
        assert!(help.contains("network:"), "{help}");
        assert!(help.contains("connection settings"), "{help}");
        assert!(help.contains("--host <HOST>"), "{help}");
        assert!(help.contains("server"), "{help}");
        assert!(help.contains("Remote host"), "{help}");
    }

    #[test]
    fn version_placeholder() {
        assert_eq!(version_text("%(prog)s 1.2.3", "tool"), "1.2.3");
        assert_eq!(version_text("1.2.3 (%(prog)s)", "tool"), "1.2.3 (tool)");
    }

    #[test]
    fn default_values() {
        let binding = Binding {
            id: "n.0".into(),
            dest: "n".into(),
            action: Action::Store,
            const_value: None,
            default: Some(Value::String("7".into())),
            value_type: ValueType::Int,
            nargs: None,
            positional: false,
        };
        assert_eq!(binding.default_value().unwrap(), Value::from(7));

        let flag = Binding {
            action: Action::StoreFalse,
            default: None,
            ..binding.clone()
        };
        assert_eq!(flag.default_value().unwrap(), Value::Bool(true));

        let rest = Binding {
            default: None,
            nargs: Some(Nargs::ZeroOrMore),
            positional: true,
            ..binding
        };
        assert_eq!(rest.default_value().unwrap(), Value::Array(vec![]));
    }
}
