// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! File helpers: whole-file I/O, data files, argument files and editors.

pub mod editor;
pub mod file_args;
pub mod ftype;
pub mod structured;
pub mod whole;

pub use editor::{edit, edit_str, get_editor};
pub use file_args::{file_args, file_args_with_prefix, ARG_FILE_PREFIX};
pub use ftype::{is_block, is_char, is_fifo, is_link, is_sock};
pub use structured::{
    load_data, load_json, load_toml, load_yaml, save_data, save_json, save_toml, save_yaml,
    DataFormat,
};
pub use whole::{read_file, write_file, WriteMode, WriteOptions};
