// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Unix file type predicates.
//!
//! Each predicate answers false when the path is missing or cannot be
//! examined.

use std::fs::{self, FileType, Metadata};
use std::io;
use std::os::unix::fs::FileTypeExt;
use std::path::Path;

fn check<P, F>(path: P, stat: fn(&Path) -> io::Result<Metadata>, test: F) -> bool
where
    P: AsRef<Path>,
    F: Fn(&FileType) -> bool,
{
    stat(path.as_ref())
        .map(|meta| test(&meta.file_type()))
        .unwrap_or(false)
}

/// Block special device.
pub fn is_block<P: AsRef<Path>>(path: P) -> bool {
    check(path, |p| fs::metadata(p), FileTypeExt::is_block_device)
}

/// Character special device.
pub fn is_char<P: AsRef<Path>>(path: P) -> bool {
    check(path, |p| fs::metadata(p), FileTypeExt::is_char_device)
}

/// Named pipe.
pub fn is_fifo<P: AsRef<Path>>(path: P) -> bool {
    check(path, |p| fs::metadata(p), FileTypeExt::is_fifo)
}

/// Symbolic link. The link itself is examined, not its target.
pub fn is_link<P: AsRef<Path>>(path: P) -> bool {
    check(path, |p| fs::symlink_metadata(p), FileType::is_symlink)
}

/// UNIX domain socket.
pub fn is_sock<P: AsRef<Path>>(path: P) -> bool {
    check(path, |p| fs::metadata(p), FileTypeExt::is_socket)
}
