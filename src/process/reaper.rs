// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reaping of finished child processes.
//!
//! Both functions wait on *any* child. Do not mix them with code that waits
//! on specific children (such as `std::process::Child::wait`), since the
//! exit status may already be gone.

use std::io;

use crate::errors::ProcessError;
use crate::observability::messages::process::ChildrenReaped;
use crate::observability::messages::StructuredLog;

fn reap_all() -> usize {
    let mut count = 0;
    loop {
        let mut status = 0;
        let pid = unsafe { libc::waitpid(-1, &mut status, libc::WNOHANG) };
        if pid <= 0 {
            return count;
        }
        count += 1;
    }
}

/// Collect every child that has already exited, without blocking.
///
/// Returns how many were reaped.
pub fn reap_children() -> usize {
    let count = reap_all();
    if count > 0 {
        ChildrenReaped { count }.log();
    }
    count
}

// Runs in signal context: no allocation and no logging.
extern "C" fn on_sigchld(_signal: libc::c_int) {
    reap_all();
}

/// Install a `SIGCHLD` handler that reaps children as they exit, so none
/// are left as zombies.
pub fn install_child_reaper() -> Result<(), ProcessError> {
    let handler = on_sigchld as extern "C" fn(libc::c_int);
    let previous = unsafe { libc::signal(libc::SIGCHLD, handler as libc::sighandler_t) };
    if previous == libc::SIG_ERR {
        return Err(ProcessError::Signal(io::Error::last_os_error()));
    }
    Ok(())
}
