// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};

use super::kind_of;
use crate::errors::DataError;

/// Call `callback` on every leaf of a tree of objects and arrays, depth first.
///
/// A scalar root is itself a leaf.
///
/// ```
/// use serde_json::json;
/// use toolbelt::data::traverse;
///
/// let mut seen = Vec::new();
/// traverse(&json!(["one", {"uno": 1}, [3, 4]]), &mut |v| seen.push(v.clone()));
/// assert_eq!(seen, vec![json!("one"), json!(1), json!(3), json!(4)]);
/// ```
pub fn traverse<F>(data: &Value, callback: &mut F)
where
    F: FnMut(&Value),
{
    match data {
        Value::Object(map) => {
            for value in map.values() {
                traverse(value, callback);
            }
        }
        Value::Array(items) => {
            for item in items {
                traverse(item, callback);
            }
        }
        leaf => callback(leaf),
    }
}

fn transform_leaves<F>(data: &mut Value, callback: &mut F)
where
    F: FnMut(&Value) -> Value,
{
    match data {
        Value::Object(map) => {
            for value in map.values_mut() {
                transform_leaves(value, callback);
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                transform_leaves(item, callback);
            }
        }
        leaf => {
            let replacement = callback(leaf);
            if replacement != *leaf {
                *leaf = replacement;
            }
        }
    }
}

/// Replace every leaf in place with the result of `callback`.
///
/// The root must be an object or an array.
pub fn transform<F>(data: &mut Value, mut callback: F) -> Result<(), DataError>
where
    F: FnMut(&Value) -> Value,
{
    if !(data.is_object() || data.is_array()) {
        return Err(DataError::NotAContainer(kind_of(data)));
    }
    transform_leaves(data, &mut callback);
    Ok(())
}

/// Return a copy with every object's keys sorted; arrays keep their order.
pub fn sort_structure(data: &Value) -> Value {
    match data {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_structure(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_structure).collect()),
        leaf => leaf.clone(),
    }
}

/// Append `value` unless the list already contains it.
///
/// Returns whether the list was modified.
pub fn add_uniq<T: PartialEq>(list: &mut Vec<T>, value: T) -> bool {
    if list.contains(&value) {
        return false;
    }
    list.push(value);
    true
}
