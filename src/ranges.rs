//! Reserved address block tables.
//!
//! Both tables follow the IANA special-purpose registries (see
//! <https://en.wikipedia.org/wiki/Reserved_IP_addresses>). They are parsed
//! once on first use and are immutable afterwards.

use std::sync::LazyLock;

use ipnet::{Ipv4Net, Ipv6Net};

fn parse_table<T: std::str::FromStr>(blocks: &[&str]) -> Vec<T>
where
    T::Err: std::fmt::Debug,
{
    blocks
        .iter()
        .map(|block| block.parse().expect("reserved block table entry"))
        .collect()
}

/// IPv4 blocks that must never be dialled.
pub(crate) static IPV4_RESERVED: LazyLock<Vec<Ipv4Net>> = LazyLock::new(|| {
    parse_table(&[
        "0.0.0.0/8",          // Current network (only valid as source address)
        "10.0.0.0/8",         // Private network
        "100.64.0.0/10",      // Shared address space (carrier-grade NAT)
        "127.0.0.0/8",        // Loopback
        "169.254.0.0/16",     // Link-local
        "172.16.0.0/12",      // Private network
        "192.0.0.0/24",       // IETF protocol assignments
        "192.0.2.0/24",       // TEST-NET-1, documentation and examples
        "192.88.99.0/24",     // IPv6 to IPv4 relay (includes 2002::/16)
        "192.168.0.0/16",     // Private network
        "198.18.0.0/15",      // Network benchmark tests
        "198.51.100.0/24",    // TEST-NET-2, documentation and examples
        "203.0.113.0/24",     // TEST-NET-3, documentation and examples
        "224.0.0.0/4",        // IP multicast (former class D)
        "240.0.0.0/4",        // Reserved (former class E)
        "255.255.255.255/32", // Broadcast
    ])
});

/// IPv6 blocks that must never be dialled.
///
/// IPv4-mapped and IPv4-compatible addresses are not listed here; the
/// classifier extracts the embedded IPv4 address and checks it against
/// [`IPV4_RESERVED`] instead.
pub(crate) static IPV6_RESERVED: LazyLock<Vec<Ipv6Net>> = LazyLock::new(|| {
    parse_table(&[
        "::1/128",      // Loopback
        "64:ff9b::/96", // IPv4/IPv6 translation (RFC 6052)
        "100::/64",     // Discard prefix (RFC 6666)
        "2001::/32",    // Teredo tunneling
        "2001:10::/28", // Deprecated (previously ORCHID)
        "2001:20::/28", // ORCHIDv2
        "2001:db8::/32",// Documentation and example source code
        "2002::/16",    // 6to4
        "fc00::/7",     // Unique local address
        "fe80::/10",    // Link-local
        "ff00::/8",     // Multicast
    ])
});
