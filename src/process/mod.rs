// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Unix process plumbing.
//!
//! Helpers for detaching into the background, PID files, reaping children
//! and redirecting standard I/O to `/dev/null` or syslog. Everything here
//! works on raw file descriptors 0, 1 and 2, so it affects the whole process
//! and not just Rust's `std::io` handles.

pub mod daemon;
pub mod null_io;
pub mod pidfile;
pub mod reaper;
pub mod syslog_io;
pub mod unbuffered;

pub use daemon::daemonize;
pub use null_io::{close_io, denull_io, null_io};
pub use pidfile::{read_pidfile, write_pidfile};
pub use reaper::{install_child_reaper, reap_children};
pub use syslog_io::syslog_io;
pub use unbuffered::{unbuffered_stderr, unbuffered_stdout, Unbuffered};

use std::io;
use std::os::fd::RawFd;

use crate::errors::ProcessError;

pub(crate) const STDIN: RawFd = 0;
pub(crate) const STDOUT: RawFd = 1;
pub(crate) const STDERR: RawFd = 2;

/// Point `target` at whatever `source` refers to.
pub(crate) fn redirect(source: RawFd, target: RawFd) -> Result<(), ProcessError> {
    if unsafe { libc::dup2(source, target) } == -1 {
        return Err(ProcessError::Redirect {
            fd: target,
            source: io::Error::last_os_error(),
        });
    }
    Ok(())
}
