//! The redirect-following loop.
//!
//! The loop is an explicit state machine: each hop runs a full attempt
//! (validate → resolve → filter → connect) and produces a discriminated
//! [`Hop`] result, so redirects are ordinary data flow rather than
//! control-flow exceptions. Every hop — including hop zero — goes through
//! the identical pipeline; there is no trusted hop.
//!
//! The loop is generic over the attempt function, which keeps its hop
//! accounting and `Location` resolution testable without a network.

use std::future::Future;

use url::Url;

use crate::error::FetchError;

/// Outcome of a single fetch attempt.
pub(crate) enum Hop<R> {
    /// A non-redirect response; the loop terminates.
    Final(R),
    /// A redirection carrying its `Location` value, absolute or relative.
    Redirect(String),
}

/// Drives `attempt` until a final response, a failure, or hop exhaustion.
///
/// Consumes at most `max_redirects + 1` attempts. Errors from any hop
/// propagate immediately; nothing is swallowed or retried.
pub(crate) async fn follow<R, F, Fut>(
    start: Url,
    max_redirects: usize,
    mut attempt: F,
) -> Result<R, FetchError>
where
    F: FnMut(Url, usize) -> Fut,
    Fut: Future<Output = Result<Hop<R>, FetchError>>,
{
    let original = start.to_string();
    let mut current = start;

    for hop in 0..=max_redirects {
        match attempt(current.clone(), hop).await? {
            Hop::Final(response) => return Ok(response),
            Hop::Redirect(location) => {
                let next = next_url(&current, &location)?;
                log::debug!("hop {hop}: {current} redirected to {next}");
                current = next;
            }
        }
    }

    Err(FetchError::TooManyRedirects {
        url: original,
        max: max_redirects,
    })
}

/// Resolves a `Location` value against the current URL.
///
/// Tries an absolute parse first and falls back to joining against the
/// current URL, which covers relative paths and protocol-relative forms.
fn next_url(current: &Url, location: &str) -> Result<Url, FetchError> {
    Url::parse(location)
        .or_else(|_| current.join(location))
        .map_err(|e| FetchError::MalformedUrl {
            url: location.to_string(),
            reason: e.to_string(),
        })
}
