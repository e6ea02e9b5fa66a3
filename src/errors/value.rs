// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for converting text into typed values.

use thiserror::Error;

/// A string could not be converted into the requested value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// Not one of the recognized boolean spellings.
    #[error("Invalid boolean string: {0}")]
    InvalidBool(String),

    /// Not a valid integer.
    #[error("Invalid integer: {0}")]
    InvalidInt(String),

    /// Not a valid floating point number.
    #[error("Invalid number: {0}")]
    InvalidFloat(String),

    /// Value outside the accepted set of choices.
    #[error("Invalid choice: '{value}' (choose from {})", .choices.join(", "))]
    InvalidChoice { value: String, choices: Vec<String> },

    /// IPv4 prefix length above 32.
    #[error("Invalid network prefix length: {0} (must be 0-32)")]
    InvalidPrefix(u8),
}
