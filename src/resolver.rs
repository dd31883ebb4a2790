//! Hostname resolution.
//!
//! Resolution is a pluggable capability so callers can pin DNS results,
//! point at an internal resolver, or stub lookups in tests. The default
//! implementation asks the system DNS through hickory.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::warn;

use crate::config::DNS_TIMEOUT_SECS;

/// Maps a hostname to its candidate IP addresses.
///
/// Implementations return an empty vector when the lookup yields nothing
/// (including on lookup failure) rather than an error; the fetch engine
/// turns an empty result into
/// [`FetchError::UnresolvedHostname`](crate::FetchError::UnresolvedHostname).
pub trait Resolver: Send + Sync {
    /// Resolves `host` to every known A/AAAA address.
    fn resolve<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Vec<IpAddr>>;
}

/// Plain functions and closures act as resolvers, which is the convenient
/// form for pinning: `|_host: &str| vec![addr]`.
impl<F> Resolver for F
where
    F: Fn(&str) -> Vec<IpAddr> + Send + Sync,
{
    fn resolve<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Vec<IpAddr>> {
        Box::pin(async move { self(host) })
    }
}

/// System DNS resolver backed by [`TokioAsyncResolver`].
pub struct DnsResolver {
    inner: TokioAsyncResolver,
}

impl DnsResolver {
    /// Builds a resolver with the default upstream configuration and
    /// timeouts tuned to fail fast rather than hang a fetch attempt.
    pub fn new() -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
        opts.attempts = 2;
        // ndots = 0 prevents search-domain appending; a caller-supplied
        // hostname must resolve as given or not at all.
        opts.ndots = 0;

        Self {
            inner: TokioAsyncResolver::tokio(ResolverConfig::default(), opts),
        }
    }

    /// Shared default instance used by
    /// [`FetchOptions::default`](crate::FetchOptions::default).
    pub(crate) fn shared() -> Arc<Self> {
        static SHARED: std::sync::LazyLock<Arc<DnsResolver>> =
            std::sync::LazyLock::new(|| Arc::new(DnsResolver::new()));
        Arc::clone(&SHARED)
    }
}

impl Default for DnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver for DnsResolver {
    fn resolve<'a>(&'a self, host: &'a str) -> BoxFuture<'a, Vec<IpAddr>> {
        Box::pin(async move {
            match self.inner.lookup_ip(host).await {
                Ok(lookup) => lookup.iter().collect(),
                Err(e) => {
                    warn!("DNS lookup for {host} failed: {e}");
                    Vec::new()
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[tokio::test]
    async fn closures_are_resolvers() {
        let pinned = |_host: &str| vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))];
        let addrs = pinned.resolve("example.com").await;
        assert_eq!(addrs, vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))]);
    }

    #[tokio::test]
    async fn empty_results_are_not_errors() {
        let none = |_host: &str| Vec::new();
        assert!(none.resolve("nxdomain.invalid").await.is_empty());
    }
}
