// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::net::Ipv4Addr;

use crate::errors::ValueError;

/// Convert a CIDR prefix length into a dotted IPv4 netmask.
///
/// ```
/// use toolbelt::net::cidr_to_netmask;
///
/// assert_eq!(cidr_to_netmask(20).unwrap().to_string(), "255.255.240.0");
/// ```
pub fn cidr_to_netmask(prefix: u8) -> Result<Ipv4Addr, ValueError> {
    if prefix > 32 {
        return Err(ValueError::InvalidPrefix(prefix));
    }
    let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
    Ok(Ipv4Addr::from(mask))
}
