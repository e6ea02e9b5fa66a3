// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use super::consts::DEFAULT_CALLABLE_DEST;
use crate::data::Namespace;
use crate::errors::CliConfigError;
use crate::observability::messages::cli::HandlerDispatched;
use crate::observability::messages::StructuredLog;

/// A sub-command handler. Returns the process exit code.
pub type Handler = Box<dyn Fn(&Namespace) -> anyhow::Result<i32>>;

/// Calls the handler a sub-command selected.
///
/// Sub-command declarations name their handler with `callable`; parsing
/// stores that name in the namespace and [`Dispatcher::dispatch`] looks it
/// up here.
pub struct Dispatcher {
    callable_dest: String,
    handlers: HashMap<String, Handler>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::with_callable_dest(DEFAULT_CALLABLE_DEST)
    }

    /// Look handler names up under `callable_dest` instead of `function`.
    pub fn with_callable_dest(callable_dest: impl Into<String>) -> Self {
        Self {
            callable_dest: callable_dest.into(),
            handlers: HashMap::new(),
        }
    }

    pub fn register<F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&Namespace) -> anyhow::Result<i32> + 'static,
    {
        self.handlers.insert(name.into(), Box::new(handler));
        self
    }

    /// Run the handler named in `ns`.
    ///
    /// `Ok(None)` when no sub-command with a handler was chosen.
    pub fn dispatch(&self, ns: &Namespace) -> Result<Option<i32>, CliConfigError> {
        let Some(name) = ns.get_str(&self.callable_dest) else {
            return Ok(None);
        };
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| CliConfigError::UnknownHandler(name.to_string()))?;

        let span = HandlerDispatched { handler: name }.span("dispatch");
        let _guard = span.enter();
        HandlerDispatched { handler: name }.log();
        Ok(Some(handler(ns)?))
    }
}
