// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;
use std::io::{self, Write};

/// `strftime` layout used for every timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Format a Unix time in the given time zone.
///
/// Returns `None` when `secs` is out of range for `chrono`.
///
/// ```
/// use chrono::Utc;
/// use toolbelt::timefmt::timestamp_in;
///
/// assert_eq!(timestamp_in(0, &Utc).as_deref(), Some("1970-01-01 00:00:00 +0000"));
/// ```
pub fn timestamp_in<Tz>(secs: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    tz.timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

fn format_local(dt: DateTime<Local>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Format a Unix time (or the current time) in local time.
///
/// Returns `None` when `secs` is out of range for `chrono`.
pub fn timestamp(secs: Option<i64>) -> Option<String> {
    match secs {
        Some(secs) => Utc
            .timestamp_opt(secs, 0)
            .single()
            .map(|utc| format_local(utc.with_timezone(&Local))),
        None => Some(format_local(Local::now())),
    }
}

/// Write `msg` prefixed with the current timestamp.
pub fn ts_print<W: Write>(msg: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "[{}]:{}", format_local(Local::now()), msg)
}
