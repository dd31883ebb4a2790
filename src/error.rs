//! Error types for the fetch pipeline.
//!
//! Every failure mode is a distinct variant so callers can react to security
//! events (e.g. [`FetchError::PrivateAddress`]) differently from plain
//! network failures.

use thiserror::Error;

/// Errors surfaced by [`fetch`](crate::fetch) and the per-verb helpers.
///
/// None of these are retried internally; each one is returned to the caller
/// as soon as it occurs.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL scheme is not in the configured allow-list.
    ///
    /// Raised for the initial request and for every redirect hop.
    #[error("URI scheme '{scheme}' not in whitelist: {allowed:?}")]
    InvalidScheme {
        scheme: String,
        allowed: Vec<String>,
    },

    /// The resolver returned zero addresses for the hostname.
    #[error("could not resolve hostname '{host}'")]
    UnresolvedHostname { host: String },

    /// Every resolved address was reserved, private, or otherwise unsafe.
    #[error("hostname '{host}' has no public ip addresses")]
    PrivateAddress { host: String },

    /// The redirect chain exceeded `max_redirects` hops.
    #[error("got {max} redirects fetching {url}")]
    TooManyRedirects { url: String, max: usize },

    /// A header name or value contained a carriage-return or line-feed.
    #[error("header '{name}' contains a line break")]
    HeaderInjection { name: String },

    /// The URL could not be parsed, on the initial request or in a
    /// redirect `Location`.
    #[error("invalid URL '{url}': {reason}")]
    MalformedUrl { url: String, reason: String },

    /// The response declared a `Content-Length` above the configured
    /// `max_response_size`.
    #[error("response of {length} bytes exceeds the {limit} byte limit")]
    ResponseTooLarge { length: u64, limit: u64 },

    /// The per-attempt HTTP client or the outgoing request could not be
    /// constructed.
    #[error("failed to build HTTP client or request: {0}")]
    Client(#[source] reqwest::Error),

    /// A transport-level failure (connect, TLS handshake, send, read),
    /// passed through from the HTTP client with attempt context attached.
    #[error("request to '{host}' failed on hop {hop}: {source}")]
    Transport {
        hop: usize,
        host: String,
        #[source]
        source: reqwest::Error,
    },
}
