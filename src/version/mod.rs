// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Version strings derived from git.
//!
//! [`VERSION`] is captured by the build script. The same lookup order is
//! available at run time through [`gitver`] and [`describe_version`]:
//!
//! 1. the tag name, when `GITHUB_REF_TYPE=tag` (a GitHub Actions tag build)
//! 2. `git describe`
//! 3. `git describe --always`, wrapped as `$git:<hash>$`
//! 4. `$unknown$`

pub mod check;
pub mod git;

pub use check::{check_version, VersionCheck};
pub use git::{describe_version, gitver};

/// Version of this crate as reported by `git describe` when it was built.
pub const VERSION: &str = env!("TOOLBELT_GIT_VERSION");

/// Disables the release check in [`setup_version`].
pub const NO_VCHECK_ENV: &str = "NO_VCHECK";

/// [`VERSION`] when it is a valid PEP 440 version, else `None`.
///
/// Always `None` when `NO_VCHECK` is set.
pub fn setup_version() -> Option<&'static str> {
    if std::env::var_os(NO_VCHECK_ENV).is_some() {
        return None;
    }
    release_version(VERSION)
}

fn release_version(version: &str) -> Option<&str> {
    check_version(version).valid.then_some(version)
}
