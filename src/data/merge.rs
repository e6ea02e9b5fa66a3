// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};

/// Merge `incoming` into `existing`, like PHP's `array_merge_recursive`.
///
/// * object + object: merged key by key, recursively
/// * array + array: concatenated, `existing` elements first
/// * anything else: `incoming` replaces `existing`
pub fn merge_values(existing: &mut Value, incoming: Value) {
    match (existing, incoming) {
        (Value::Object(target), Value::Object(source)) => merge_into(target, source),
        (Value::Array(target), Value::Array(source)) => target.extend(source),
        (slot, incoming) => *slot = incoming,
    }
}

fn merge_into(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match target.get_mut(&key) {
            Some(existing) => merge_values(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

/// Merge one or more maps recursively, left to right.
///
/// Keys keep the position where they were first seen.
///
/// ```
/// use serde_json::json;
/// use toolbelt::data::merge_recursive;
///
/// let a1 = json!({"color": {"favorite": "red"}, "five": 5});
/// let a2 = json!({"diez": 10, "color": {"favorite": "green", "hated": "blue"}});
/// let merged = merge_recursive([a1.as_object().unwrap(), a2.as_object().unwrap()]);
/// assert_eq!(
///     serde_json::to_string(&merged).unwrap(),
///     r#"{"color":{"favorite":"green","hated":"blue"},"five":5,"diez":10}"#
/// );
/// ```
pub fn merge_recursive<'a, I>(maps: I) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a Map<String, Value>>,
{
    let mut merged = Map::new();
    for map in maps {
        merge_into(&mut merged, map.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_objects_merge() {
        let a = json!({"db": {"host": "localhost", "port": 5432}});
        let b = json!({"db": {"port": 6543, "user": "app"}});
        let merged = merge_recursive([a.as_object().unwrap(), b.as_object().unwrap()]);
        assert_eq!(
            Value::Object(merged),
            json!({"db": {"host": "localhost", "port": 6543, "user": "app"}})
        );
    }

    #[test]
    fn arrays_concatenate_in_order() {
        let a = json!({"tags": ["a", "b"]});
        let b = json!({"tags": ["c"]});
        let c = json!({"tags": ["d"]});
        let merged = merge_recursive([
            a.as_object().unwrap(),
            b.as_object().unwrap(),
            c.as_object().unwrap(),
        ]);
        assert_eq!(merged["tags"], json!(["a", "b", "c", "d"]));
    }

    #[test]
    fn mismatched_types_replace() {
        let mut existing = json!({"x": {"deep": true}});
        merge_values(&mut existing, json!({"x": 3}));
        assert_eq!(existing, json!({"x": 3}));

        let mut scalar = json!(1);
        merge_values(&mut scalar, json!([1]));
        assert_eq!(scalar, json!([1]));
    }

    #[test]
    fn inputs_are_not_modified() {
        let a = json!({"list": [1]});
        let b = json!({"list": [2]});
        let _ = merge_recursive([a.as_object().unwrap(), b.as_object().unwrap()]);
        assert_eq!(a, json!({"list": [1]}));
        assert_eq!(b, json!({"list": [2]}));
    }

    #[test]
    fn empty_input() {
        let merged = merge_recursive(std::iter::empty());
        assert!(merged.is_empty());
    }
}
