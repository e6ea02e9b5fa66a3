// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Human readable time intervals and timestamps.

pub mod interval;
pub mod stamp;

pub use interval::time_interval;
pub use stamp::{timestamp, timestamp_in, ts_print, TIMESTAMP_FORMAT};
