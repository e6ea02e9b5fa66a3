// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::process::Command;

const VERSION_ENV: &str = "TOOLBELT_GIT_VERSION";

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string())
}

fn describe() -> String {
    if std::env::var("GITHUB_REF_TYPE").as_deref() == Ok("tag") {
        if let Ok(name) = std::env::var("GITHUB_REF_NAME") {
            if !name.is_empty() {
                return name;
            }
        }
    }
    if let Some(version) = git(&["describe"]) {
        return version;
    }
    match git(&["describe", "--always"]) {
        Some(hash) => format!("$git:{hash}$"),
        None => "$unknown$".to_string(),
    }
}

fn main() {
    println!("cargo:rustc-env={VERSION_ENV}={}", describe());
    println!("cargo:rerun-if-env-changed=GITHUB_REF_TYPE");
    println!("cargo:rerun-if-env-changed=GITHUB_REF_NAME");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");
}
