// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Load and save serde values as JSON, YAML or TOML files.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::Path;

use super::whole::{read_file, write_file, WriteOptions};
use crate::errors::FileError;
use crate::observability::messages::files::DataFileAccessed;
use crate::observability::messages::StructuredLog;

/// Supported data file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
    Toml,
}

impl DataFormat {
    /// Pick the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            "toml" => Some(DataFormat::Toml),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Yaml => "yaml",
            DataFormat::Toml => "toml",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn loaded(path: &Path, format: DataFormat) {
    DataFileAccessed {
        path,
        format: format.name(),
        saved: false,
    }
    .log();
}

fn saved(path: &Path, format: DataFormat) {
    DataFileAccessed {
        path,
        format: format.name(),
        saved: true,
    }
    .log();
}

/// Load a JSON document.
pub fn load_json<T, P>(path: P) -> Result<T, FileError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = read_file(path)?;
    let data = serde_json::from_str(&text).map_err(|source| FileError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    loaded(path, DataFormat::Json);
    Ok(data)
}

/// Save a value as JSON, indented when `pretty` is set.
pub fn save_json<T, P>(path: P, data: &T, pretty: bool) -> Result<(), FileError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let encoded = if pretty {
        serde_json::to_string_pretty(data)
    } else {
        serde_json::to_string(data)
    }
    .map_err(|source| FileError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    write_file(path, encoded, &WriteOptions::default())?;
    saved(path, DataFormat::Json);
    Ok(())
}

/// Load a YAML document.
pub fn load_yaml<T, P>(path: P) -> Result<T, FileError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = read_file(path)?;
    let data = serde_yaml::from_str(&text).map_err(|source| FileError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    loaded(path, DataFormat::Yaml);
    Ok(data)
}

/// Save a value as YAML.
pub fn save_yaml<T, P>(path: P, data: &T) -> Result<(), FileError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let encoded = serde_yaml::to_string(data).map_err(|source| FileError::Yaml {
        path: path.to_path_buf(),
        source,
    })?;
    write_file(path, encoded, &WriteOptions::default())?;
    saved(path, DataFormat::Yaml);
    Ok(())
}

/// Load a TOML document.
pub fn load_toml<T, P>(path: P) -> Result<T, FileError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = read_file(path)?;
    let data = toml::from_str(&text).map_err(|source| FileError::TomlRead {
        path: path.to_path_buf(),
        source,
    })?;
    loaded(path, DataFormat::Toml);
    Ok(data)
}

/// Save a value as TOML. The top level must be a table.
pub fn save_toml<T, P>(path: P, data: &T) -> Result<(), FileError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let encoded = toml::to_string_pretty(data).map_err(|source| FileError::TomlWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_file(path, encoded, &WriteOptions::default())?;
    saved(path, DataFormat::Toml);
    Ok(())
}

/// Load a data file in the format named by its extension.
pub fn load_data<T, P>(path: P) -> Result<T, FileError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match DataFormat::from_path(path) {
        Some(DataFormat::Json) => load_json(path),
        Some(DataFormat::Yaml) => load_yaml(path),
        Some(DataFormat::Toml) => load_toml(path),
        None => Err(FileError::UnknownFormat(path.to_path_buf())),
    }
}

/// Save a data file in the format named by its extension.
///
/// JSON is written indented.
pub fn save_data<T, P>(path: P, data: &T) -> Result<(), FileError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match DataFormat::from_path(path) {
        Some(DataFormat::Json) => save_json(path, data, true),
        Some(DataFormat::Yaml) => save_yaml(path, data),
        Some(DataFormat::Toml) => save_toml(path, data),
        None => Err(FileError::UnknownFormat(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::{json, Value};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Settings {
        name: String,
        retries: u32,
        tags: Vec<String>,
    }

    fn sample() -> Settings {
        Settings {
            name: "backup".into(),
            retries: 3,
            tags: vec!["nightly".into(), "offsite".into()],
        }
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(DataFormat::from_path("a.json"), Some(DataFormat::Json));
        assert_eq!(DataFormat::from_path("a.YML"), Some(DataFormat::Yaml));
        assert_eq!(DataFormat::from_path("dir/a.toml"), Some(DataFormat::Toml));
        assert_eq!(DataFormat::from_path("a.txt"), None);
        assert_eq!(DataFormat::from_path("Makefile"), None);
    }

    #[test]
    fn each_format_stores_a_struct() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["s.json", "s.yaml", "s.toml"] {
            let path = dir.path().join(name);
            save_data(&path, &sample()).unwrap();
            let back: Settings = load_data(&path).unwrap();
            assert_eq!(back, sample(), "{name}");
        }
    }

    #[test]
    fn compact_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v.json");
        save_json(&path, &json!({"b": 1, "a": [true]}), false).unwrap();
        assert_eq!(read_file(&path).unwrap(), r#"{"b":1,"a":[true]}"#);
    }

    #[test]
    fn yaml_into_json_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v.yaml");
        write_file(&path, "color:\n  favorite: red\nfive: 5\n", &WriteOptions::default()).unwrap();
        let value: Value = load_yaml(&path).unwrap();
        assert_eq!(value, json!({"color": {"favorite": "red"}, "five": 5}));
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        write_file(&path, "{not json", &WriteOptions::default()).unwrap();
        let err = load_json::<Value, _>(&path).unwrap_err();
        assert!(matches!(err, FileError::Json { .. }));
    }

    #[test]
    fn unknown_extension() {
        let err = load_data::<Value, _>("settings.ini").unwrap_err();
        assert!(matches!(err, FileError::UnknownFormat(_)));
    }
}
