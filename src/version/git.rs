// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::Path;
use std::process::{Command, Stdio};

use crate::observability::messages::version::{GitDescribeFailed, VersionFromTag, VersionResolved};
use crate::observability::messages::StructuredLog;

/// Run git in `dir` and return its trimmed standard output.
///
/// On failure the error holds git's message, or the reason it could not be
/// started.
pub(crate) fn git(dir: &Path, args: &[&str]) -> Result<String, String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| format!("cannot run git: {e}"))?;

    if !output.status.success() {
        let message = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(if message.is_empty() {
            format!("git exited with {}", output.status)
        } else {
            message
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// The tag being built, when `GITHUB_REF_TYPE` says this is a tag build.
pub(crate) fn tag_name<F>(var: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if var("GITHUB_REF_TYPE").as_deref() != Some("tag") {
        return None;
    }
    var("GITHUB_REF_NAME").filter(|name| !name.is_empty())
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn described(dir: &Path) -> Option<String> {
    match git(dir, &["describe"]) {
        Ok(version) => {
            VersionResolved {
                version: &version,
                source: "git describe",
            }
            .log();
            Some(version)
        }
        Err(reason) => {
            GitDescribeFailed {
                dir,
                reason: &reason,
            }
            .log();
            None
        }
    }
}

/// Version from the GitHub tag or `git describe` in `dir`.
///
/// `dir` defaults to the current directory. Returns `None`, after logging a
/// warning, when git cannot describe the tree.
pub fn gitver(dir: Option<&Path>) -> Option<String> {
    if let Some(tag) = tag_name(env_var) {
        VersionFromTag { tag: &tag }.log();
        return Some(tag);
    }
    described(dir.unwrap_or_else(|| Path::new(".")))
}

/// Like [`gitver`], but always produces something.
///
/// Falls back to the abbreviated commit (`$git:<hash>$`) for untagged
/// histories and to `$unknown$` outside a repository.
pub fn describe_version(dir: Option<&Path>) -> String {
    let dir = dir.unwrap_or_else(|| Path::new("."));
    if let Some(version) = gitver(Some(dir)) {
        return version;
    }
    fallback_version(dir)
}

pub(crate) fn fallback_version(dir: &Path) -> String {
    let version = match git(dir, &["describe", "--always"]) {
        Ok(hash) => format!("$git:{hash}$"),
        Err(_) => "$unknown$".to_string(),
    };
    VersionResolved {
        version: &version,
        source: "fallback",
    }
    .log();
    version
}
