// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Redirecting standard I/O to `/dev/null`.
//!
//! [`null_io`] saves duplicates of the current descriptors before
//! redirecting, so [`denull_io`] can put them back. Calls nest: only the
//! outermost [`denull_io`] restores anything.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd, RawFd};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{redirect, STDERR, STDIN, STDOUT};
use crate::errors::ProcessError;
use crate::observability::messages::process::{StdioNulled, StdioRestored};
use crate::observability::messages::StructuredLog;

struct Saved {
    stdin: OwnedFd,
    stdout: OwnedFd,
    stderr: Option<OwnedFd>,
    depth: usize,
}

static SAVED: Mutex<Option<Saved>> = Mutex::new(None);

fn saved() -> MutexGuard<'static, Option<Saved>> {
    SAVED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn dup(fd: RawFd) -> Result<OwnedFd, ProcessError> {
    let copy = unsafe { libc::dup(fd) };
    if copy == -1 {
        return Err(ProcessError::Redirect {
            fd,
            source: io::Error::last_os_error(),
        });
    }
    Ok(unsafe { OwnedFd::from_raw_fd(copy) })
}

fn open_null() -> Result<OwnedFd, ProcessError> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .open("/dev/null")
        .map(OwnedFd::from)
        .map_err(|source| ProcessError::Redirect { fd: -1, source })
}

fn flush_std() {
    // Pending output belongs to the old destination; a failed flush is not
    // worth aborting the redirection for.
    io::stdout().flush().ok();
    io::stderr().flush().ok();
}

fn point_at_null(keep_stderr: bool) -> Result<(), ProcessError> {
    let null = open_null()?;
    flush_std();
    redirect(null.as_raw_fd(), STDIN)?;
    redirect(null.as_raw_fd(), STDOUT)?;
    if !keep_stderr {
        redirect(null.as_raw_fd(), STDERR)?;
    }
    Ok(())
}

/// Redirect stdin and stdout, and stderr unless `keep_stderr`, to
/// `/dev/null`.
///
/// The original descriptors are kept for [`denull_io`]. A nested call only
/// bumps the nesting depth; `keep_stderr` from the outermost call applies.
pub fn null_io(keep_stderr: bool) -> Result<(), ProcessError> {
    let mut guard = saved();

    if let Some(saved) = guard.as_mut() {
        saved.depth += 1;
        StdioNulled {
            depth: saved.depth,
            keep_stderr: saved.stderr.is_none(),
        }
        .log();
        return Ok(());
    }

    let state = Saved {
        stdin: dup(STDIN)?,
        stdout: dup(STDOUT)?,
        stderr: if keep_stderr { None } else { Some(dup(STDERR)?) },
        depth: 1,
    };
    point_at_null(keep_stderr)?;
    *guard = Some(state);

    StdioNulled {
        depth: 1,
        keep_stderr,
    }
    .log();
    Ok(())
}

/// Undo one level of [`null_io`].
///
/// The saved descriptors are restored, and then closed, when the outermost
/// level is undone.
pub fn denull_io() -> Result<(), ProcessError> {
    let mut guard = saved();
    let state = guard.as_mut().ok_or(ProcessError::NotRedirected)?;

    state.depth -= 1;
    if state.depth > 0 {
        StdioRestored { depth: state.depth }.log();
        return Ok(());
    }

    if let Some(state) = guard.take() {
        flush_std();
        redirect(state.stdin.as_raw_fd(), STDIN)?;
        redirect(state.stdout.as_raw_fd(), STDOUT)?;
        if let Some(stderr) = &state.stderr {
            redirect(stderr.as_raw_fd(), STDERR)?;
        }
    }
    StdioRestored { depth: 0 }.log();
    Ok(())
}

/// Redirect standard I/O to `/dev/null` for good.
///
/// Any descriptors saved by [`null_io`] are closed, after which
/// [`denull_io`] has nothing to restore.
pub fn close_io(keep_stderr: bool) -> Result<(), ProcessError> {
    let mut guard = saved();
    point_at_null(keep_stderr)?;
    guard.take();
    Ok(())
}
