// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! `reap_children` waits on any child, so it gets a test binary of its own.

use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use toolbelt::process::reap_children;

#[test]
fn finished_children_are_reaped() {
    let child = Command::new("true")
        .stdin(Stdio::null())
        .spawn()
        .expect("spawn true");
    // Leave the exit status for the reaper.
    drop(child);

    let deadline = Instant::now() + Duration::from_secs(10);
    let mut reaped = 0;
    while reaped == 0 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(20));
        reaped += reap_children();
    }
    assert_eq!(reaped, 1);
    assert_eq!(reap_children(), 0);
}
