// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io;

use crate::errors::ProcessError;
use crate::observability::messages::process::Daemonized;
use crate::observability::messages::StructuredLog;

fn fork_and_exit_parent() -> Result<(), ProcessError> {
    match unsafe { libc::fork() } {
        -1 => Err(ProcessError::Fork(io::Error::last_os_error())),
        0 => Ok(()),
        _ => std::process::exit(0),
    }
}

/// Detach the current process into the background.
///
/// Forks, starts a new session and forks again so the survivor is neither a
/// session leader nor attached to the calling terminal. The intermediate
/// parents exit with status 0 and only the grandchild returns.
///
/// Call this before starting any threads.
pub fn daemonize() -> Result<(), ProcessError> {
    fork_and_exit_parent()?;
    if unsafe { libc::setsid() } == -1 {
        return Err(ProcessError::Setsid(io::Error::last_os_error()));
    }
    fork_and_exit_parent()?;

    Daemonized {
        pid: std::process::id(),
    }
    .log();
    Ok(())
}
