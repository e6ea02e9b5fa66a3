// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use clap::parser::ValueSource;
use clap::ArgMatches;
use serde_json::{Number, Value};

use super::builder::{Binding, CliParser, Level};
use super::spec::{Action, Nargs, ValueType};
use crate::data::Namespace;
use crate::errors::{CliConfigError, ValueError};
use crate::files::file_args_with_prefix;
use crate::text::boolval;

/// Convert command line text into a typed value.
pub(crate) fn convert(raw: &str, value_type: ValueType) -> Result<Value, ValueError> {
    match value_type {
        ValueType::Str => Ok(Value::String(raw.to_string())),
        ValueType::Int => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| ValueError::InvalidInt(raw.to_string())),
        ValueType::Float => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| ValueError::InvalidFloat(raw.to_string())),
        ValueType::Bool => boolval(raw).map(Value::Bool),
    }
}

/// Value check run by clap while parsing, so bad input is reported as a
/// usage error against the offending argument.
pub(crate) fn check_value(
    raw: &str,
    value_type: ValueType,
    choices: &[String],
) -> Result<String, ValueError> {
    if !choices.is_empty() && !choices.iter().any(|choice| choice == raw) {
        return Err(ValueError::InvalidChoice {
            value: raw.to_string(),
            choices: choices.to_vec(),
        });
    }
    convert(raw, value_type)?;
    Ok(raw.to_string())
}

impl CliParser {
    /// Parse `args` into a [`Namespace`].
    ///
    /// `args` does not include the program name. Arguments naming files with
    /// the configured prefix are expanded first.
    ///
    /// Every declared `dest` is present in the result, holding its default
    /// when not given. Values are applied in command line order, so when
    /// several arguments share a `dest` the last one given wins.
    pub fn parse_from<I, S>(&self, args: I) -> Result<Namespace, CliConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let args = match self.fromfile_prefix {
            Some(prefix) => file_args_with_prefix(args, prefix)?,
            None => args,
        };

        let matches = self
            .command
            .clone()
            .try_get_matches_from(std::iter::once(self.prog.clone()).chain(args))?;

        let mut ns = Namespace::new();
        collect(&self.level, &matches, &mut ns)?;
        Ok(ns)
    }
}

fn collect(level: &Level, matches: &ArgMatches, ns: &mut Namespace) -> Result<(), CliConfigError> {
    // The first declared default for a shared dest wins.
    for binding in &level.bindings {
        if binding.action != Action::Version && !ns.contains(&binding.dest) {
            ns.set(binding.dest.clone(), binding.default_value()?);
        }
    }

    let mut given: Vec<(usize, &Binding)> = level
        .bindings
        .iter()
        .filter(|binding| matches.value_source(&binding.id) == Some(ValueSource::CommandLine))
        .map(|binding| (last_index(matches, &binding.id), binding))
        .collect();
    given.sort_by_key(|(index, _)| *index);

    for (_, binding) in given {
        let value = explicit_value(binding, matches, ns)?;
        ns.set(binding.dest.clone(), value);
    }

    let Some(subcommands) = &level.subcommands else {
        return Ok(());
    };
    if let Some(dest) = &subcommands.dest {
        ns.set(dest.clone(), Value::Null);
    }
    let Some((name, sub_matches)) = matches.subcommand() else {
        return Ok(());
    };
    if let Some(dest) = &subcommands.dest {
        ns.set(dest.clone(), name);
    }

    if let Some(command) = subcommands.commands.iter().find(|c| c.name == name) {
        // Sub-command values, defaults included, replace the parent's.
        let mut sub_ns = Namespace::new();
        collect(&command.level, sub_matches, &mut sub_ns)?;
        ns.update(sub_ns);
        if let Some(callable) = &command.callable {
            ns.set(subcommands.callable_dest.clone(), callable.clone());
        }
    }
    Ok(())
}

fn last_index(matches: &ArgMatches, id: &str) -> usize {
    matches
        .indices_of(id)
        .and_then(|indices| indices.last())
        .unwrap_or(0)
}

fn values_of(binding: &Binding, raw: impl Iterator<Item = String>) -> Result<Value, ValueError> {
    let values = raw
        .map(|text| convert(&text, binding.value_type))
        .collect::<Result<Vec<_>, _>>()?;

    if binding.nargs.is_some_and(Nargs::is_list) {
        return Ok(Value::Array(values));
    }
    // An option with an optional value given bare gets the const.
    Ok(values
        .into_iter()
        .next()
        .or_else(|| binding.const_value.clone())
        .unwrap_or(Value::Null))
}

fn explicit_value(
    binding: &Binding,
    matches: &ArgMatches,
    ns: &Namespace,
) -> Result<Value, ValueError> {
    match binding.action {
        Action::StoreConst => Ok(binding.const_value.clone().unwrap_or(Value::Null)),
        Action::StoreTrue => Ok(Value::Bool(true)),
        Action::StoreFalse => Ok(Value::Bool(false)),
        Action::Count => {
            let base = ns.get_i64(&binding.dest).unwrap_or(0);
            Ok(Value::from(base + i64::from(matches.get_count(&binding.id))))
        }
        Action::Store => {
            let raw = matches
                .get_many::<String>(&binding.id)
                .into_iter()
                .flatten()
                .cloned();
            values_of(binding, raw)
        }
        Action::Append => {
            let mut items = match ns.get(&binding.dest) {
                Some(Value::Array(items)) => items.clone(),
                _ => Vec::new(),
            };
            for occurrence in matches
                .get_occurrences::<String>(&binding.id)
                .into_iter()
                .flatten()
            {
                items.push(values_of(binding, occurrence.cloned())?);
            }
            Ok(Value::Array(items))
        }
        Action::Version => Ok(Value::Null),
    }
}
