// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sending stdout and stderr to syslog.

use std::ffi::CString;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::os::fd::{FromRawFd, RawFd};

use super::{redirect, STDERR, STDIN, STDOUT};
use crate::errors::ProcessError;
use crate::observability::messages::process::SyslogRedirected;
use crate::observability::messages::StructuredLog;

/// Text sent to syslog for one line of output, or `None` for blank lines.
fn syslog_line(tag: &str, line: &str) -> Option<String> {
    let line = line.trim_end();
    if line.is_empty() {
        return None;
    }
    Some(format!("{tag}: {line}").replace('\0', ""))
}

fn logger(read_fd: RawFd, tag: &str) -> ! {
    unsafe {
        libc::close(STDIN);
        libc::close(STDOUT);
        libc::close(STDERR);
    }
    let input = BufReader::new(unsafe { File::from_raw_fd(read_fd) });
    for line in input.lines() {
        let Ok(line) = line else { break };
        let Some(text) = syslog_line(tag, &line) else { continue };
        if let Ok(text) = CString::new(text) {
            unsafe { libc::syslog(libc::LOG_INFO, b"%s\0".as_ptr().cast(), text.as_ptr()) };
        }
    }
    unsafe { libc::_exit(0) }
}

fn pipe_to_syslog(target: RawFd, tag: &str) -> Result<(), ProcessError> {
    let mut fds: [libc::c_int; 2] = [-1; 2];
    if unsafe { libc::pipe(fds.as_mut_ptr()) } == -1 {
        return Err(ProcessError::Pipe(io::Error::last_os_error()));
    }
    let [read_fd, write_fd] = fds;

    let pid = unsafe { libc::fork() };
    match pid {
        -1 => {
            let source = io::Error::last_os_error();
            unsafe {
                libc::close(read_fd);
                libc::close(write_fd);
            }
            Err(ProcessError::Fork(source))
        }
        0 => {
            unsafe { libc::close(write_fd) };
            logger(read_fd, tag)
        }
        _ => {
            unsafe { libc::close(read_fd) };
            let result = redirect(write_fd, target);
            unsafe { libc::close(write_fd) };
            result?;
            SyslogRedirected {
                fd: target,
                tag,
                logger_pid: pid,
            }
            .log();
            Ok(())
        }
    }
}

/// Send everything written to stdout and stderr to syslog.
///
/// A logger child is forked for each stream. Non-empty lines are logged as
/// `<tag>(out): line` and `<tag>(err): line`.
pub fn syslog_io(tag: &str) -> Result<(), ProcessError> {
    io::stdout().flush().ok();
    io::stderr().flush().ok();
    pipe_to_syslog(STDOUT, &format!("{tag}(out)"))?;
    pipe_to_syslog(STDERR, &format!("{tag}(err)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_tagged_and_trimmed() {
        assert_eq!(
            syslog_line("app(out)", "hello world  \n").as_deref(),
            Some("app(out): hello world")
        );
        assert_eq!(syslog_line("app(err)", "   \t"), None);
        assert_eq!(
            syslog_line("app(err)", "nul\0byte").as_deref(),
            Some("app(err): nulbyte")
        );
    }
}
