// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Command line tools shipped in the `toolbelt` binary.

pub mod github_meta;
pub mod xxargs;

pub use github_meta::{apply_overrides, sanitize, MetaOutput};
pub use xxargs::{Delimiter, XxargsOptions};
