// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// A bare-bones set of named values, kept sorted by name.
///
/// Used as the result of declarative argument parsing.
///
/// ```
/// use toolbelt::data::Namespace;
///
/// let mut ns = Namespace::from_pairs([("b", 2), ("a", 1)]);
/// assert_eq!(ns.to_string(), "Namespace(a=1, b=2)");
/// ns.set("a", 5);
/// assert_eq!(ns.get_i64("a"), Some(5));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(BTreeMap<String, Value>);

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Copy every value from `other`, replacing values already present.
    pub fn update(&mut self, other: Namespace) {
        self.0.extend(other.0);
    }

    /// The value as a string slice, when it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    /// True when the name is absent or bound to null.
    pub fn is_null(&self, name: &str) -> bool {
        self.get(name).map_or(true, Value::is_null)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Namespace(")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_is_sorted() {
        let ns = Namespace::from_pairs([("mode", json!("send")), ("function", Value::Null)]);
        assert_eq!(ns.to_string(), r#"Namespace(function=null, mode="send")"#);
    }

    #[test]
    fn equality_compares_contents() {
        let a = Namespace::from_pairs([("a", 1), ("b", 2)]);
        let mut b = Namespace::new();
        b.set("b", 2);
        b.set("a", 1);
        assert_eq!(a, b);
        b.set("a", 5);
        assert_ne!(a, b);
    }

    #[test]
    fn typed_getters() {
        let ns = Namespace::from_pairs([
            ("name", json!("x")),
            ("flag", json!(true)),
            ("count", json!(3)),
            ("none", Value::Null),
        ]);
        assert_eq!(ns.get_str("name"), Some("x"));
        assert_eq!(ns.get_bool("flag"), Some(true));
        assert_eq!(ns.get_i64("count"), Some(3));
        assert!(ns.is_null("none"));
        assert!(ns.is_null("missing"));
        assert!(!ns.is_null("name"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let ns = Namespace::from_pairs([("b", 2), ("a", 1)]);
        assert_eq!(serde_json::to_string(&ns).unwrap(), r#"{"a":1,"b":2}"#);
    }
}
