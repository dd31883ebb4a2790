// Compile-time defaults. Runtime knobs live on `FetchOptions`.

/// Schemes permitted when the caller does not supply a whitelist.
pub const DEFAULT_SCHEME_WHITELIST: &[&str] = &["http", "https"];

/// Maximum redirect hops followed by default.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// DNS query timeout in seconds for the default resolver.
pub const DNS_TIMEOUT_SECS: u64 = 10;
