// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod cli;
mod command;
mod data;
mod file;
mod process;
mod value;

pub use cli::CliConfigError;
pub use command::CommandError;
pub use data::DataError;
pub use file::FileError;
pub use process::ProcessError;
pub use value::ValueError;
