//! Per-attempt request validation.
//!
//! Runs before any DNS resolution or network I/O, once for the initial
//! request and once again for every redirect hop.

use std::collections::HashSet;

use crate::error::FetchError;

/// Checks the scheme against the allow-list and rejects headers carrying
/// line breaks.
///
/// Scheme membership is case-sensitive; `url::Url` already lowercases the
/// scheme during parsing, so the default whitelist matches any input casing
/// of `http`/`https`.
///
/// The CR/LF check guards against request-splitting and header injection
/// independently of whatever the transport itself rejects.
pub(crate) fn validate_request(
    scheme: &str,
    allowed: &HashSet<String>,
    headers: &[(String, String)],
) -> Result<(), FetchError> {
    if !allowed.contains(scheme) {
        let mut whitelist: Vec<String> = allowed.iter().cloned().collect();
        whitelist.sort();
        return Err(FetchError::InvalidScheme {
            scheme: scheme.to_string(),
            allowed: whitelist,
        });
    }

    for (name, value) in headers {
        if has_line_break(name) || has_line_break(value) {
            return Err(FetchError::HeaderInjection { name: name.clone() });
        }
    }

    Ok(())
}

fn has_line_break(s: &str) -> bool {
    s.contains('\r') || s.contains('\n')
}
