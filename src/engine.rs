//! The fetch engine: one validated attempt per hop.
//!
//! An attempt runs the full safety pipeline in order: scheme and header
//! validation, fresh hostname resolution, unsafe-address filtering, random
//! selection among the surviving addresses, and a connection pinned to the
//! selected address while TLS and the Host header keep the logical hostname.
//! Resolution happens anew on every hop; the address that was validated is
//! the address that is dialled, with nothing in between.

use std::net::IpAddr;

use rand::seq::IndexedRandom;
use reqwest::{Client, Method, Response};
use url::{Host, Url};

use crate::classify;
use crate::error::FetchError;
use crate::options::FetchOptions;
use crate::pin::{literal_client, PinnedHost};
use crate::redirect::{self, Hop};
use crate::validate::validate_request;

/// Fetches `url`, following redirects up to `options.max_redirects` hops.
pub(crate) async fn fetch(
    method: Method,
    url: &str,
    options: &FetchOptions,
) -> Result<Response, FetchError> {
    let start = Url::parse(url).map_err(|e| FetchError::MalformedUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    redirect::follow(start, options.max_redirects, |current, hop| {
        attempt(current, &method, options, hop)
    })
    .await
}

/// Runs a single validated attempt and reports whether the response is
/// final or a redirect.
async fn attempt(
    mut url: Url,
    method: &Method,
    options: &FetchOptions,
    hop: usize,
) -> Result<Hop<Response>, FetchError> {
    validate_request(url.scheme(), &options.scheme_whitelist, &options.headers)?;

    let host = url.host().ok_or_else(|| FetchError::MalformedUrl {
        url: url.to_string(),
        reason: "URL has no host".to_string(),
    })?;
    let port = url
        .port_or_known_default()
        .ok_or_else(|| FetchError::MalformedUrl {
            url: url.to_string(),
            reason: format!("no known port for scheme '{}'", url.scheme()),
        })?;

    let (client, host_label) = match host {
        Host::Domain(domain) => {
            let domain = domain.to_string();
            let candidates = options.resolver.resolve(&domain).await;
            if candidates.is_empty() {
                return Err(FetchError::UnresolvedHostname { host: domain });
            }

            let safe = filter_safe(candidates, &options.allowed_unsafe);
            let Some(&ip) = safe.choose(&mut rand::rng()) else {
                return Err(FetchError::PrivateAddress { host: domain });
            };
            log::debug!("hop {hop}: {domain} pinned to {ip}:{port}");

            (PinnedHost::new(&domain, ip, port).client()?, domain)
        }
        // An IP-literal host is its own single candidate: no DNS round trip
        // to race against, and the connection target is already explicit.
        Host::Ipv4(v4) => (
            literal_host_client(IpAddr::V4(v4), options)?,
            v4.to_string(),
        ),
        Host::Ipv6(v6) => (
            literal_host_client(IpAddr::V6(v6), options)?,
            v6.to_string(),
        ),
    };

    if !options.params.is_empty() {
        merge_params(&mut url, &options.params);
    }

    let mut builder = client.request(method.clone(), url.clone());
    for (name, value) in &options.headers {
        builder = builder.header(name, value);
    }
    if let Some(body) = &options.body {
        builder = builder.body(body.clone());
    }
    let mut request = builder.build().map_err(FetchError::Client)?;

    if let Some(hook) = &options.request_hook {
        hook(&mut request);
    }

    let response = client
        .execute(request)
        .await
        .map_err(|e| FetchError::Transport {
            hop,
            host: host_label.clone(),
            source: e,
        })?;

    if response.status().is_redirection() {
        match response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|v| v.to_str().ok())
        {
            Some(location) => return Ok(Hop::Redirect(location.to_string())),
            None => log::warn!(
                "redirect status {} from {host_label} without a Location header; treating as final",
                response.status()
            ),
        }
    }

    if let Some(limit) = options.max_response_size {
        if let Some(length) = response.content_length() {
            if length > limit {
                return Err(FetchError::ResponseTooLarge { length, limit });
            }
        }
    }

    Ok(Hop::Final(response))
}

/// Drops every resolved address the classifier marks unsafe, except those
/// the caller explicitly allow-listed.
fn filter_safe(candidates: Vec<IpAddr>, allowed_unsafe: &[IpAddr]) -> Vec<IpAddr> {
    candidates
        .into_iter()
        .filter(|ip| {
            if classify::is_unsafe(*ip) {
                if allowed_unsafe.contains(ip) {
                    log::warn!("keeping unsafe address {ip}: explicitly allow-listed");
                    return true;
                }
                log::debug!("discarding unsafe address {ip}");
                return false;
            }
            true
        })
        .collect()
}

fn literal_host_client(ip: IpAddr, options: &FetchOptions) -> Result<Client, FetchError> {
    if classify::is_unsafe(ip) {
        if !options.allowed_unsafe.contains(&ip) {
            return Err(FetchError::PrivateAddress {
                host: ip.to_string(),
            });
        }
        log::warn!("keeping unsafe address {ip}: explicitly allow-listed");
    }
    literal_client()
}

/// Merges caller-supplied query parameters into the URL.
///
/// A supplied parameter replaces every existing query parameter with the
/// same name; other existing parameters keep their position.
fn merge_params(url: &mut Url, params: &[(String, String)]) {
    let merged: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .filter(|(k, _)| !params.iter().any(|(pk, _)| pk == k))
        .chain(params.iter().cloned())
        .collect();

    url.query_pairs_mut()
        .clear()
        .extend_pairs(merged.iter().map(|(k, v)| (k.as_str(), v.as_str())));
}
