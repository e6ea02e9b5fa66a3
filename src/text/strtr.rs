// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Replace substrings according to `pairs`, like PHP's `strtr`.
///
/// The input is scanned once from left to right. At each position the
/// longest matching key is replaced (the earliest pair wins a tie) and the
/// scan resumes after the matched text, so replacements are never rescanned.
/// Empty keys never match.
///
/// # Example
/// ```
/// use toolbelt::text::strtr;
///
/// let out = strtr("one two three", &[("one", "1"), ("two", "2"), ("three", "3")]);
/// assert_eq!(out, "1 2 3");
/// ```
pub fn strtr<K, V>(input: &str, pairs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while !rest.is_empty() {
        let mut best: Option<(&str, &str)> = None;
        for (from, to) in pairs {
            let from = from.as_ref();
            if from.is_empty() || !rest.starts_with(from) {
                continue;
            }
            if best.map_or(true, |(b, _)| from.len() > b.len()) {
                best = Some((from, to.as_ref()));
            }
        }

        match best {
            Some((from, to)) => {
                out.push_str(to);
                rest = &rest[from.len()..];
            }
            None => {
                // rest is non-empty so there is always a next char
                let ch = rest.chars().next().unwrap_or_default();
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_words() {
        let pairs = [("one", "1"), ("two", "2"), ("three", "3")];
        assert_eq!(strtr("one two three", &pairs), "1 2 3");
    }

    #[test]
    fn longest_key_wins() {
        let pairs = [("Hi", "Hello"), ("Hi all", "Hello everyone")];
        assert_eq!(strtr("Hi all, Hi you", &pairs), "Hello everyone, Hello you");
    }

    #[test]
    fn replacements_are_not_rescanned() {
        let pairs = [("a", "b"), ("b", "a")];
        assert_eq!(strtr("abba", &pairs), "baab");
    }

    #[test]
    fn empty_keys_are_ignored() {
        let pairs = [("", "x"), ("c", "d")];
        assert_eq!(strtr("abc", &pairs), "abd");
    }

    #[test]
    fn multibyte_input_is_preserved() {
        let pairs = [("ñ", "n")];
        assert_eq!(strtr("año → año", &pairs), "ano → ano");
    }

    #[test]
    fn owned_pairs() {
        let pairs = vec![("%(prog)s".to_string(), "tool".to_string())];
        assert_eq!(strtr("%(prog)s 1.0", &pairs), "tool 1.0");
    }
}
