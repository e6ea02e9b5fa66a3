// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::ValueError;

const YES: &[&str] = &["true", "1", "yes", "y", "on", "enable", "enabled"];
const NO: &[&str] = &["false", "0", "no", "n", "off", "disable", "disabled"];

/// Convert a bool-like string into a `bool`.
///
/// Matching is case-insensitive and ignores surrounding whitespace. Any
/// other string made only of digits is true when it is non-zero.
///
/// ```
/// use toolbelt::text::boolval;
///
/// assert_eq!(boolval("true"), Ok(true));
/// assert_eq!(boolval("n"), Ok(false));
/// assert!(boolval("maybe").is_err());
/// ```
pub fn boolval(value: &str) -> Result<bool, ValueError> {
    let val = value.trim().to_lowercase();

    if YES.contains(&val.as_str()) {
        return Ok(true);
    }
    if NO.contains(&val.as_str()) {
        return Ok(false);
    }
    if !val.is_empty() && val.chars().all(|c| c.is_ascii_digit()) {
        return Ok(val.chars().any(|c| c != '0'));
    }

    Err(ValueError::InvalidBool(value.to_string()))
}
