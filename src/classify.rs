//! Address safety classification.
//!
//! Decides whether an IP address may be dialled at all. Everything in the
//! reserved tables is unsafe, as is any IPv6 address that smuggles a reserved
//! IPv4 address inside an IPv4-mapped (`::ffff:a.b.c.d`) or IPv4-compatible
//! (`::a.b.c.d`) encoding. Ranged notation covering more than one host is
//! rejected outright: a caller cannot be connecting to "a range".
//!
//! These functions are pure and touch no shared mutable state; the reserved
//! tables are read-only statics.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use ipnet::IpNet;

use crate::ranges::{IPV4_RESERVED, IPV6_RESERVED};

/// Returns `true` if `ip` must not be used as a connection target.
pub fn is_unsafe(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_unsafe_v4(v4),
        IpAddr::V6(v6) => is_unsafe_v6(v6),
    }
}

/// Returns `true` if `net` must not be used as a connection target.
///
/// A network spanning more than one host is unconditionally unsafe, whatever
/// addresses it contains. A degenerate /32 or /128 is classified by its
/// single address.
pub fn is_unsafe_net(net: &IpNet) -> bool {
    if net.prefix_len() < net.max_prefix_len() {
        return true;
    }
    is_unsafe(net.addr())
}

fn is_unsafe_v4(ip: Ipv4Addr) -> bool {
    IPV4_RESERVED.iter().any(|net| net.contains(&ip))
}

fn is_unsafe_v6(ip: Ipv6Addr) -> bool {
    if IPV6_RESERVED.iter().any(|net| net.contains(&ip)) {
        return true;
    }
    match embedded_ipv4(ip) {
        Some(v4) => is_unsafe_v4(v4),
        None => false,
    }
}

/// Extracts the IPv4 address embedded in an IPv4-mapped or IPv4-compatible
/// IPv6 address.
///
/// The compatible form (`::a.b.c.d`) is deprecated but still parses and
/// routes, so it is treated exactly like the mapped form. `::` and `::1`
/// land here too; their embedded forms fall inside 0.0.0.0/8, which keeps
/// them unsafe.
fn embedded_ipv4(ip: Ipv6Addr) -> Option<Ipv4Addr> {
    if let Some(mapped) = ip.to_ipv4_mapped() {
        return Some(mapped);
    }
    let segments = ip.segments();
    if segments[..6] == [0, 0, 0, 0, 0, 0] {
        return Some(Ipv4Addr::new(
            (segments[6] >> 8) as u8,
            segments[6] as u8,
            (segments[7] >> 8) as u8,
            segments[7] as u8,
        ));
    }
    None
}
