// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs::{self, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use crate::errors::FileError;

/// Read a whole file into a string.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, FileError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| FileError::io(path, e))
}

/// How [`write_file`] opens the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Create or empty the file before writing.
    #[default]
    Replace,
    /// Write at the end of the file.
    Append,
    /// Keep the current contents and write over them at `offset`.
    Update,
}

/// Options for [`write_file`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    pub mode: WriteMode,
    /// Position to start writing at (ignored when appending).
    pub offset: u64,
    /// Cut the file off right after the written data.
    pub truncate: bool,
}

/// Write `data` to a file as a whole.
///
/// ```
/// use toolbelt::files::{read_file, write_file, WriteOptions};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("note.txt");
/// write_file(&path, "this is a file", &WriteOptions::default()).unwrap();
/// assert_eq!(read_file(&path).unwrap(), "this is a file");
/// ```
pub fn write_file<P, D>(path: P, data: D, options: &WriteOptions) -> Result<(), FileError>
where
    P: AsRef<Path>,
    D: AsRef<[u8]>,
{
    let path = path.as_ref();
    let io_err = |e: std::io::Error| FileError::io(path, e);

    let mut open = OpenOptions::new();
    open.create(true);
    match options.mode {
        WriteMode::Replace => open.write(true).truncate(true),
        WriteMode::Append => open.append(true),
        WriteMode::Update => open.write(true),
    };
    let mut file = open.open(path).map_err(io_err)?;

    if options.offset > 0 && options.mode != WriteMode::Append {
        file.seek(SeekFrom::Start(options.offset)).map_err(io_err)?;
    }
    file.write_all(data.as_ref()).map_err(io_err)?;

    if options.truncate {
        let end = file.stream_position().map_err(io_err)?;
        file.set_len(end).map_err(io_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        write_file(&path, "first version", &WriteOptions::default()).unwrap();
        write_file(&path, "second", &WriteOptions::default()).unwrap();
        assert_eq!(read_file(&path).unwrap(), "second");
    }

    #[test]
    fn append_adds_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let append = WriteOptions {
            mode: WriteMode::Append,
            ..Default::default()
        };
        write_file(&path, "one\n", &append).unwrap();
        write_file(&path, "two\n", &append).unwrap();
        assert_eq!(read_file(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn update_at_offset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        write_file(&path, "hello world", &WriteOptions::default()).unwrap();

        let update = WriteOptions {
            mode: WriteMode::Update,
            offset: 6,
            truncate: false,
        };
        write_file(&path, "WORLD", &update).unwrap();
        assert_eq!(read_file(&path).unwrap(), "hello WORLD");

        let cut = WriteOptions {
            truncate: true,
            ..update
        };
        write_file(&path, b"you", &cut).unwrap();
        assert_eq!(read_file(&path).unwrap(), "hello you");
    }

    #[test]
    fn missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let err = read_file(&path).unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }
}
