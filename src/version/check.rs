// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use regex::Regex;
use std::sync::LazyLock;

/// PEP 440 public and local version identifiers, in the permissive form
/// Python packaging tools accept (`v` prefix, `-`/`_`/`.` separators,
/// alternate spellings such as `alpha`, `preview` or `rev`).
static PEP440: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^\s*
        v?
        (?:[0-9]+!)?                                  # epoch
        [0-9]+(?:\.[0-9]+)*                           # release
        (?P<pre>
            [-_.]?
            (?:alpha|a|beta|b|preview|pre|c|rc)
            [-_.]?
            [0-9]*
        )?
        (?:
            -[0-9]+                                   # implicit post
            |
            [-_.]?(?:post|rev|r)[-_.]?[0-9]*
        )?
        (?P<dev>
            [-_.]?dev[-_.]?[0-9]*
        )?
        (?:\+[a-z0-9]+(?:[-_.][a-z0-9]+)*)?           # local
        \s*$",
    )
    .expect("invalid PEP 440 regex")
});

/// Outcome of [`check_version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionCheck {
    pub valid: bool,
    /// Unknown (`None`) for invalid versions.
    pub prerelease: Option<bool>,
}

/// Check that `tag` is a PEP 440 version and whether it is a pre-release.
///
/// Alpha, beta, release candidate and development versions are
/// pre-releases. A leading `v` is accepted. `git describe` output for a
/// commit past a tag (`1.2.0-3-gdeadbee`) is not a valid version.
///
/// ```
/// use toolbelt::version::check_version;
///
/// assert_eq!(check_version("1.0rc1").prerelease, Some(true));
/// assert_eq!(check_version("1.0.0").prerelease, Some(false));
///
/// let bad = check_version("invalid-version");
/// assert!(!bad.valid);
/// assert_eq!(bad.prerelease, None);
/// ```
pub fn check_version(tag: &str) -> VersionCheck {
    match PEP440.captures(tag) {
        Some(caps) => VersionCheck {
            valid: true,
            prerelease: Some(caps.name("pre").is_some() || caps.name("dev").is_some()),
        },
        None => VersionCheck {
            valid: false,
            prerelease: None,
        },
    }
}
