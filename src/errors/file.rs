// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for whole-file and data-file helpers.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    /// Opening, reading or writing the file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid TOML in {}: {source}", .path.display())]
    TomlRead {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Cannot encode {} as TOML: {source}", .path.display())]
    TomlWrite {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },

    /// The file extension does not name a known data format.
    #[error("Unknown data format for {}", .0.display())]
    UnknownFormat(PathBuf),

    /// An argument file has unbalanced quotes or a dangling escape.
    #[error("Cannot split arguments in {}", .0.display())]
    ArgFileSyntax(PathBuf),

    /// The external editor exited unsuccessfully.
    #[error("Editor '{editor}' exited with status {code}")]
    EditorFailed { editor: String, code: i32 },

    /// No editor configured and no platform default.
    #[error("No editor available")]
    NoEditor,
}

impl FileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FileError::Io {
            path: path.into(),
            source,
        }
    }
}
