// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// (length in seconds, singular, plural)
const UNITS: [(u64, &str, &str); 4] = [
    (DAY, "day", "days"),
    (HOUR, "hour", "hours"),
    (MINUTE, "minute", "minutes"),
    (1, "second", "seconds"),
];

/// Format an integer with comma thousands separators.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn segment(count: u64, one: &str, many: &str) -> String {
    if count == 1 {
        format!("one {one}")
    } else {
        format!("{} {many}", group_thousands(count))
    }
}

/// Describe a number of seconds in words.
///
/// Components that are zero are left out. With `rough`, only the largest
/// unit is kept and anything under a minute becomes "a few seconds".
///
/// ```
/// use toolbelt::timefmt::time_interval;
///
/// assert_eq!(time_interval(244, false), "4 minutes, 4 seconds");
/// assert_eq!(time_interval(244, true), "4 minutes");
/// assert_eq!(time_interval(0, false), "zero seconds");
/// ```
pub fn time_interval(secs: u64, rough: bool) -> String {
    if secs == 0 {
        return "zero seconds".to_string();
    }
    if rough && secs < MINUTE {
        return "a few seconds".to_string();
    }

    let mut parts = Vec::new();
    let mut remaining = secs;
    for (length, one, many) in UNITS {
        let count = remaining / length;
        remaining %= length;
        if count == 0 {
            continue;
        }
        parts.push(segment(count, one, many));
        if rough {
            break;
        }
    }

    parts.join(", ")
}
