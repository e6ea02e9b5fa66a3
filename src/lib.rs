// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod cli_cfg;    // declarative argument parsers
pub mod commands;   // xxargs and github-meta
pub mod data;       // nested maps, keys and namespaces
pub mod errors;     // error handling
pub mod files;      // whole files, data files, @file args, editor
pub mod net;        // IPv4 netmasks
pub mod observability;
pub mod process;    // daemons, pid files, stdio plumbing
pub mod text;       // string helpers
pub mod timefmt;    // timestamps and intervals
pub mod utils;      // caller location
pub mod version;    // git describe versions
