//! Per-attempt host pinning.
//!
//! The engine must connect to the exact address it just validated. Dialling
//! by hostname would hand resolution back to the transport and reopen the
//! resolve-vs-connect race (DNS rebinding); dialling the raw IP would break
//! certificate validation (no Subject Alternative Name for the IP) and SNI
//! routing on virtual-hosted servers.
//!
//! [`PinnedHost`] closes the gap with reqwest's resolver override: the
//! request still targets the logical hostname, so the Host header, SNI and
//! certificate checks all see the right name, but every connection for that
//! hostname is dialled at the pre-validated socket address. The override
//! lives inside a single-use [`Client`] owned by one attempt and dropped on
//! every exit path, so concurrent fetches can never observe each other's
//! pin.

use std::net::{IpAddr, SocketAddr};

use reqwest::redirect::Policy as RedirectPolicy;
use reqwest::Client;

use crate::error::FetchError;

/// A logical hostname pinned to one pre-validated address for the lifetime
/// of a single fetch attempt.
#[derive(Debug)]
pub(crate) struct PinnedHost {
    host: String,
    addr: SocketAddr,
}

impl PinnedHost {
    pub(crate) fn new(host: &str, ip: IpAddr, port: u16) -> Self {
        Self {
            host: host.to_string(),
            addr: SocketAddr::new(ip, port),
        }
    }

    /// Builds the single-attempt client carrying this pin.
    ///
    /// Redirects are disabled: the transport must never follow a hop on its
    /// own, or the per-hop validation pipeline would be bypassed.
    pub(crate) fn client(&self) -> Result<Client, FetchError> {
        Client::builder()
            .redirect(RedirectPolicy::none())
            .resolve(&self.host, self.addr)
            .build()
            .map_err(FetchError::Client)
    }
}

/// Client for URLs whose host is already an IP literal. The connection
/// target is explicit, so no resolver override is needed; redirects stay
/// disabled for the same reason as in [`PinnedHost::client`].
pub(crate) fn literal_client() -> Result<Client, FetchError> {
    Client::builder()
        .redirect(RedirectPolicy::none())
        .build()
        .map_err(FetchError::Client)
}
