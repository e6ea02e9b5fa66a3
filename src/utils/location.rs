// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Source locations of the calling code.

use std::panic::Location;

/// File and line of the caller.
///
/// ```
/// let (file, line) = toolbelt::utils::src();
/// println!("called from {file}:{line}");
/// ```
#[track_caller]
pub fn src() -> (&'static str, u32) {
    let caller = Location::caller();
    (caller.file(), caller.line())
}

/// Full location (file, line and column) of the caller.
#[track_caller]
pub fn myself() -> &'static Location<'static> {
    Location::caller()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_calling_line() {
        let expected = line!() + 1;
        let (file, line) = src();
        assert_eq!(line, expected);
        assert_eq!(file, file!());
    }

    #[test]
    fn location_includes_column() {
        let here = myself();
        assert_eq!(here.file(), file!());
        assert_eq!(here.line(), line!() - 2);
        assert!(here.column() > 1);
    }
}
