// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// ```
/// use toolbelt::text::ws_norm;
///
/// assert_eq!(ws_norm("  Neque    porro    quisquam  "), "Neque porro quisquam");
/// assert_eq!(ws_norm("      "), "");
/// ```
pub fn ws_norm(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// How a string is cut into list items by [`force_list`].
#[derive(Debug, Clone)]
pub enum Separator {
    /// Runs of non-word characters.
    Whitespace,
    /// A comma with any non-word characters around it.
    Commas,
    /// A caller supplied pattern.
    Pattern(Regex),
}

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("invalid whitespace separator regex"));
static COMMAS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W*,\W*").expect("invalid comma separator regex"));

impl Separator {
    fn regex(&self) -> &Regex {
        match self {
            Separator::Whitespace => &*WHITESPACE_RE,
            Separator::Commas => &*COMMAS_RE,
            Separator::Pattern(re) => re,
        }
    }

    fn split(&self, text: &str) -> Vec<String> {
        self.regex().split(text).map(str::to_string).collect()
    }
}

/// A configuration value that may be written as one string or as a list.
///
/// ```
/// use toolbelt::text::{force_list, OneOrMany, Separator};
///
/// let one: OneOrMany = serde_json::from_str(r#""a, b""#).unwrap();
/// assert_eq!(force_list(one, &Separator::Commas), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(value: Vec<String>) -> Self {
        OneOrMany::Many(value)
    }
}

/// Make sure a string-or-list value is a list.
///
/// Lists pass through unchanged; strings are split with `sep`.
pub fn force_list(value: impl Into<OneOrMany>, sep: &Separator) -> Vec<String> {
    match value.into() {
        OneOrMany::One(text) => sep.split(&text),
        OneOrMany::Many(items) => items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_norm_keeps_single_spaces() {
        let text = "Neque porro quisquam est qui dolorem ipsum quia dolor sit amet, consectetur, adipisci velit...";
        assert_eq!(ws_norm(text), text);
    }

    #[test]
    fn ws_norm_collapses_tabs_and_newlines() {
        assert_eq!(ws_norm("\tone\n\n two  "), "one two");
    }

    #[test]
    fn force_list_splits_on_whitespace() {
        assert_eq!(
            force_list("this must be a list", &Separator::Whitespace),
            vec!["this", "must", "be", "a", "list"]
        );
    }

    #[test]
    fn force_list_passes_lists_through() {
        let items = vec!["one".to_string(), "two".to_string()];
        assert_eq!(force_list(items.clone(), &Separator::Whitespace), items);
    }

    #[test]
    fn force_list_splits_on_commas() {
        assert_eq!(
            force_list("this must, be a list", &Separator::Commas),
            vec!["this must", "be a list"]
        );
        assert_eq!(
            force_list("this must be a list", &Separator::Commas),
            vec!["this must be a list"]
        );
        assert_eq!(
            force_list("this , must be, a list", &Separator::Commas),
            vec!["this", "must be", "a list"]
        );
    }

    #[test]
    fn builtin_separators_are_shared() {
        assert!(std::ptr::eq(Separator::Commas.regex(), Separator::Commas.regex()));
        assert_eq!(
            force_list("a,b", &Separator::Commas),
            force_list("a , b", &Separator::Commas)
        );
    }

    #[test]
    fn force_list_custom_pattern() {
        let sep = Separator::Pattern(Regex::new(":").unwrap());
        assert_eq!(force_list("/bin:/usr/bin", &sep), vec!["/bin", "/usr/bin"]);
    }

    #[test]
    fn one_or_many_deserializes_both_shapes() {
        let many: OneOrMany = serde_yaml::from_str("[a, b]").unwrap();
        assert_eq!(many, OneOrMany::Many(vec!["a".into(), "b".into()]));
        let one: OneOrMany = serde_yaml::from_str("a b").unwrap();
        assert_eq!(one, OneOrMany::One("a b".into()));
    }
}
