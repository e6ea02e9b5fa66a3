// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use humansize::{format_size, FormatSizeOptions, BINARY, DECIMAL};

/// Format a byte count for humans with one decimal place.
///
/// `binary` selects multiples of 1024 (KiB, MiB, GiB...); otherwise
/// multiples of 1000 (kB, MB, GB...) are used. Sizes below one kilo stay
/// in bytes (`500.0 B`).
///
/// ```
/// use toolbelt::text::humansz;
///
/// assert_eq!(humansz(10_000_000_000, true), "9.3 GiB");
/// ```
pub fn humansz(bytes: u64, binary: bool) -> String {
    let base = if binary { BINARY } else { DECIMAL };
    let options = FormatSizeOptions::from(base)
        .decimal_places(1)
        .decimal_zeroes(1);
    format_size(bytes, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_multiples() {
        assert_eq!(humansz(10_000_000_000, true), "9.3 GiB");
        assert_eq!(humansz(1536, true), "1.5 KiB");
    }

    #[test]
    fn below_one_kilo_stays_in_bytes() {
        assert_eq!(humansz(500, true), "500.0 B");
        assert_eq!(humansz(999, false), "999.0 B");
        assert_eq!(humansz(0, true), "0.0 B");
    }

    #[test]
    fn decimal_multiples() {
        assert_eq!(humansz(10_000_000_000, false), "10.0 GB");
        assert_eq!(humansz(2_500_000, false), "2.5 MB");
    }
}
