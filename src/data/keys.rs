// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{Map, Value};

use super::kind_of;
use crate::errors::DataError;

/// Target case for [`change_key_case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCase {
    #[default]
    Lower,
    Upper,
}

fn is_integer_key(key: &str) -> bool {
    key.parse::<i64>().is_ok()
}

/// Return a copy of `map` with every key lower- or upper-cased.
///
/// Keys that are integers are left as they are.
///
/// ```
/// use serde_json::json;
/// use toolbelt::data::{change_key_case, KeyCase};
///
/// let map = json!({"one": 1, "Two": 2, "792": "none"});
/// let upper = change_key_case(map.as_object().unwrap(), KeyCase::Upper);
/// assert_eq!(serde_json::Value::Object(upper), json!({"ONE": 1, "TWO": 2, "792": "none"}));
/// ```
pub fn change_key_case(map: &Map<String, Value>, case: KeyCase) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| {
            let key = if is_integer_key(key) {
                key.clone()
            } else {
                match case {
                    KeyCase::Lower => key.to_lowercase(),
                    KeyCase::Upper => key.to_uppercase(),
                }
            };
            (key, value.clone())
        })
        .collect()
}

/// Exchange keys with their values.
///
/// Values must be strings or integers. When a value occurs more than once
/// the latest key wins. Keys that look like integers become integer values.
pub fn flip(map: &Map<String, Value>) -> Result<Map<String, Value>, DataError> {
    let mut flipped = Map::new();

    for (key, value) in map {
        let new_key = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
            other => {
                return Err(DataError::UnflippableValue {
                    key: key.clone(),
                    kind: kind_of(other),
                })
            }
        };
        let new_value = match key.parse::<i64>() {
            Ok(n) => Value::from(n),
            Err(_) => Value::String(key.clone()),
        };
        flipped.insert(new_key, new_value);
    }

    Ok(flipped)
}
