// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for the JSON-like tree helpers.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// An operation that walks containers was handed a scalar.
    #[error("Only objects or arrays allowed, got {0}")]
    NotAContainer(&'static str),

    /// A value that cannot be used as a key after flipping.
    #[error("Cannot flip key '{key}': value of type {kind} is not a string or integer")]
    UnflippableValue { key: String, kind: &'static str },
}
