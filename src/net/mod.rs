// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Network address helpers.

pub mod netmask;

pub use netmask::cidr_to_netmask;
