// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! PHP-array style helpers over JSON-like trees.
//!
//! All helpers work on [`serde_json::Value`] / [`serde_json::Map`]. Maps keep
//! insertion order, so results list keys the way they were first seen.

pub mod keys;
pub mod merge;
pub mod namespace;
pub mod walk;

pub use keys::{change_key_case, flip, KeyCase};
pub use merge::{merge_recursive, merge_values};
pub use namespace::Namespace;
pub use walk::{add_uniq, sort_structure, transform, traverse};

use serde_json::Value;

/// Short type name used in error messages.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
