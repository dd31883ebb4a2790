//! ssrf_guard: SSRF-safe outbound HTTP fetching
//!
//! This library fetches caller-supplied URLs while guaranteeing the
//! underlying connection never reaches a private, loopback, link-local or
//! otherwise reserved address — including through DNS rebinding or
//! redirect-based bypasses.
//!
//! Every attempt (the initial request and each redirect hop) runs the same
//! pipeline: validate the scheme and headers, resolve the hostname fresh,
//! discard unsafe addresses, pick one survivor at random, and connect to
//! that exact address while TLS certificate validation, SNI and the Host
//! header all use the logical hostname. The transport never re-resolves and
//! never auto-follows a redirect.
//!
//! # Example
//!
//! ```no_run
//! use ssrf_guard::{get, FetchError, FetchOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = FetchOptions::default();
//! match get("https://example.com/resource", &options).await {
//!     Ok(response) => println!("{}", response.status()),
//!     Err(FetchError::PrivateAddress { host }) => {
//!         // Worth alerting on: someone pointed us at an internal address.
//!         eprintln!("blocked fetch to {host}");
//!     }
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call it from within an async context.

#![warn(missing_docs)]

mod classify;
mod config;
mod engine;
mod error;
mod options;
mod pin;
mod ranges;
mod redirect;
mod resolver;
mod validate;

pub use classify::{is_unsafe, is_unsafe_net};
pub use error::FetchError;
pub use options::{FetchOptions, RequestHook};
pub use resolver::{DnsResolver, Resolver};

pub use reqwest::{Method, Response};

/// Fetches `url` with an arbitrary HTTP method, following redirects safely.
///
/// Each redirect hop is re-validated exactly like the initial request. The
/// returned [`Response`] is the first non-redirect response; its body has
/// not been consumed.
///
/// # Errors
///
/// Returns a [`FetchError`] naming the failed pipeline stage; transport
/// failures are passed through wrapped with hop context. See [`FetchError`]
/// for the full list.
pub async fn fetch(
    method: Method,
    url: &str,
    options: &FetchOptions,
) -> Result<Response, FetchError> {
    engine::fetch(method, url, options).await
}

/// Fetches `url` with `GET`. See [`fetch`].
pub async fn get(url: &str, options: &FetchOptions) -> Result<Response, FetchError> {
    fetch(Method::GET, url, options).await
}

/// Fetches `url` with `POST`. See [`fetch`].
pub async fn post(url: &str, options: &FetchOptions) -> Result<Response, FetchError> {
    fetch(Method::POST, url, options).await
}

/// Fetches `url` with `PUT`. See [`fetch`].
pub async fn put(url: &str, options: &FetchOptions) -> Result<Response, FetchError> {
    fetch(Method::PUT, url, options).await
}

/// Fetches `url` with `DELETE`. See [`fetch`].
pub async fn delete(url: &str, options: &FetchOptions) -> Result<Response, FetchError> {
    fetch(Method::DELETE, url, options).await
}
