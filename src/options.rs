//! Fetch configuration.

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::{DEFAULT_MAX_REDIRECTS, DEFAULT_SCHEME_WHITELIST};
use crate::resolver::{DnsResolver, Resolver};

/// Pre-send mutation hook, invoked with the fully built request just before
/// it is dispatched.
pub type RequestHook = Arc<dyn Fn(&mut reqwest::Request) + Send + Sync>;

/// Options for a fetch call.
///
/// The defaults match the engine's security posture: only `http`/`https`,
/// system DNS, ten redirects, no size ceiling and no unsafe addresses.
///
/// ```
/// use ssrf_guard::FetchOptions;
///
/// let options = FetchOptions {
///     max_redirects: 3,
///     headers: vec![("X-Request-Id".into(), "abc-123".into())],
///     ..FetchOptions::default()
/// };
/// assert!(options.scheme_whitelist.contains("https"));
/// ```
#[derive(Clone)]
pub struct FetchOptions {
    /// Schemes accepted for the initial URL and every redirect hop.
    /// Matched case-sensitively against the parsed (lowercased) scheme.
    pub scheme_whitelist: HashSet<String>,

    /// Hostname resolution capability. Swap it to pin DNS results or to use
    /// an internal resolver.
    pub resolver: Arc<dyn Resolver>,

    /// Maximum redirect hops; the engine makes at most `max_redirects + 1`
    /// attempts.
    pub max_redirects: usize,

    /// Extra request headers, sent verbatim on every hop. Names are treated
    /// case-insensitively by the transport.
    pub headers: Vec<(String, String)>,

    /// Query parameters merged into the URL. A supplied parameter replaces
    /// an existing query parameter of the same name.
    pub params: Vec<(String, String)>,

    /// Optional request body, sent on every hop.
    pub body: Option<Vec<u8>>,

    /// Optional ceiling on the response's declared `Content-Length`.
    /// Responses that do not declare a length are not affected; the body is
    /// streamed, so consumption stays under the caller's control.
    pub max_response_size: Option<u64>,

    /// Optional pre-send mutation hook.
    pub request_hook: Option<RequestHook>,

    /// Addresses exempted from the unsafe-address filter. Empty by default;
    /// intended for development fetches against local services and for
    /// loopback-bound test servers. The filter stays live for every address
    /// not listed here, and every other pipeline stage still runs.
    pub allowed_unsafe: Vec<std::net::IpAddr>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            scheme_whitelist: DEFAULT_SCHEME_WHITELIST
                .iter()
                .map(|s| s.to_string())
                .collect(),
            resolver: DnsResolver::shared(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
            headers: Vec::new(),
            params: Vec::new(),
            body: None,
            max_response_size: None,
            request_hook: None,
            allowed_unsafe: Vec::new(),
        }
    }
}

impl std::fmt::Debug for FetchOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchOptions")
            .field("scheme_whitelist", &self.scheme_whitelist)
            .field("max_redirects", &self.max_redirects)
            .field("headers", &self.headers)
            .field("params", &self.params)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .field("max_response_size", &self.max_response_size)
            .field("has_request_hook", &self.request_hook.is_some())
            .field("allowed_unsafe", &self.allowed_unsafe)
            .finish()
    }
}
