// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Release metadata for GitHub Actions workflows.
//!
//! Works out the package name, version and pre-release status of the
//! repository being built and publishes them as step outputs through the
//! `GITHUB_OUTPUT` file. Optionally rewrites the package's `version.py`.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::CommandError;
use crate::files::{write_file, WriteMode, WriteOptions};
use crate::observability::messages::commands::{
    GithubOutputWritten, VersionFileSkipped, VersionFileWritten,
};
use crate::observability::messages::StructuredLog;
use crate::version::check_version;
use crate::version::git::{fallback_version, git, tag_name};

const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
const OUTPUT_ENV: &str = "GITHUB_OUTPUT";
const VERSION_FILE_ENV: &str = "VERSION_FILE";
const WRITE_VERSION_ENV: &str = "WRITE_VERSION";

/// Environment snapshot the metadata is computed from.
pub type Env = HashMap<String, String>;

/// Apply `KEY=VALUE` and bare `KEY` (meaning `true`) overrides.
pub fn apply_overrides<S: AsRef<str>>(env: &mut Env, args: &[S]) {
    for arg in args {
        let arg = arg.as_ref();
        match arg.split_once('=') {
            Some((key, value)) => env.insert(key.to_string(), value.to_string()),
            None => env.insert(arg.to_string(), "true".to_string()),
        };
    }
}

/// Escape a value for a `GITHUB_OUTPUT` line.
pub fn sanitize(text: &str) -> String {
    text.replace('%', "%25")
        .replace('\n', "%0A")
        .replace('\r', "%0D")
}

/// Everything `github-meta` works out.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaOutput {
    /// Step outputs in the order they are written.
    pub outputs: Vec<(String, String)>,
    pub package: String,
    pub version: String,
    /// The version is a valid release number.
    pub valid: bool,
}

impl MetaOutput {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.outputs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Contents for the package's `version.py`.
    pub fn version_text(&self) -> String {
        let setup = if self.valid {
            format!("'{}'", self.version)
        } else {
            "None".to_string()
        };
        format!("VERSION = \"{}\"\nSETUP_VERSION = {setup}\n", self.version)
    }

    /// Output lines, already sanitized.
    pub fn output_lines(&self) -> Vec<String> {
        self.outputs
            .iter()
            .map(|(key, value)| format!("{key}={}", sanitize(value)))
            .collect()
    }
}

/// Work out the release metadata for the repository checked out in
/// `workdir`.
pub fn collect(env: &Env, workdir: &Path) -> Result<MetaOutput, CommandError> {
    let repository = env
        .get(REPOSITORY_ENV)
        .ok_or(CommandError::MissingEnv(REPOSITORY_ENV))?;
    let package = repository
        .rsplit('/')
        .next()
        .unwrap_or(repository)
        .to_string();
    let package_dir = workdir.join(&package);
    if !package_dir.is_dir() {
        return Err(CommandError::MissingDirectory(package_dir));
    }

    let mut outputs = vec![("PYPKG".to_string(), package.clone())];
    let (version, id, valid) = match tag_name(|name| env.get(name).cloned()) {
        Some(tag) => {
            let check = check_version(&tag);
            let prerelease = check.prerelease.unwrap_or(true);
            outputs.push(("PRERELEASE".into(), prerelease.to_string()));
            let body = git(workdir, &["show", "-s", "--format=%B", &tag, "--"]).unwrap_or_default();
            outputs.push(("RELTEXT".into(), body));
            let id = if check.valid { tag.clone() } else { "pre".to_string() };
            (tag, id, check.valid)
        }
        None => {
            let version = git(workdir, &["describe"]).unwrap_or_else(|_| fallback_version(workdir));
            outputs.push(("PRERELEASE".into(), "true".into()));
            let valid = check_version(&version).valid;
            (version, "snapshot".to_string(), valid)
        }
    };
    outputs.push(("PKGID".into(), id));
    outputs.push(("PKGVER".into(), version.clone()));

    Ok(MetaOutput {
        outputs,
        package,
        version,
        valid,
    })
}

fn update_version_file(meta: &MetaOutput, env: &Env, workdir: &Path) -> Result<(), CommandError> {
    let path: PathBuf = match env.get(VERSION_FILE_ENV) {
        Some(file) => workdir.join(file),
        None => workdir.join(&meta.package).join("version.py"),
    };

    if !path.is_file() {
        VersionFileSkipped {
            path: &path,
            reason: "file does not exist",
        }
        .log();
        return Ok(());
    }
    match env.get(WRITE_VERSION_ENV).map(String::as_str) {
        Some("1") => {
            write_file(&path, meta.version_text(), &WriteOptions::default())?;
            VersionFileWritten {
                path: &path,
                version: &meta.version,
            }
            .log();
        }
        Some(_) => VersionFileSkipped {
            path: &path,
            reason: "WRITE_VERSION is not set to \"1\"",
        }
        .log(),
        None => VersionFileSkipped {
            path: &path,
            reason: "set WRITE_VERSION to \"1\" to update it",
        }
        .log(),
    }
    Ok(())
}

/// Compute the metadata, update the version file and publish the outputs.
///
/// The outputs and the `version.py` text are always printed to `out`.
pub fn run<W: Write>(env: &Env, workdir: &Path, out: &mut W) -> Result<i32, CommandError> {
    let meta = collect(env, workdir)?;

    writeln!(out, "+++ version.py")?;
    writeln!(out, "==============================")?;
    write!(out, "{}", meta.version_text())?;
    writeln!(out, "==============================")?;
    update_version_file(&meta, env, workdir)?;

    let lines = meta.output_lines();
    for line in &lines {
        writeln!(out, "{line}")?;
    }

    if let Some(output) = env.get(OUTPUT_ENV).filter(|path| !path.is_empty()) {
        let path = workdir.join(output);
        let mut text = lines.join("\n");
        text.push('\n');
        let append = WriteOptions {
            mode: WriteMode::Append,
            ..WriteOptions::default()
        };
        write_file(&path, text, &append)?;
        GithubOutputWritten {
            path: &path,
            entries: lines.len(),
        }
        .log();
    }
    Ok(0)
}
