// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Base URL safety checks.
//!
//! A configured Jira base URL must never let the plugin send requests to
//! loopback, private-network or cloud-metadata endpoints. Checks run in a
//! fixed order and stop at the first failure:
//!
//! 1. non-empty
//! 2. no control characters (checked on the raw string, before parsing)
//! 3. parses as an absolute URL
//! 4. `https` scheme (`http` only for a localhost host)
//! 5. host is not localhost or a loopback literal
//! 6. host is not a known cloud-metadata name
//! 7. literal or resolved addresses are not private

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, ToSocketAddrs};

use jr_protocol::ErrorCode;
use thiserror::Error;
use url::{Host, Url};

use crate::address::{is_metadata_ip, is_private_ip};

/// Cloud provider metadata hostnames.
pub const METADATA_HOSTS: &[&str] = &[
    "metadata.google.internal",
    "metadata.goog",
    "metadata",
    "instance-data",
    "instance-data.ec2.internal",
];

/// Reasons a base URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    #[error("base URL is required")]
    Required,

    #[error("invalid URL: contains control characters")]
    ControlCharacter,

    #[error("invalid URL: {0}")]
    Malformed(String),

    #[error("invalid URL: missing scheme\n  hint: use an https:// URL, e.g. https://company.atlassian.net")]
    MissingScheme,

    #[error("URL scheme '{0}' is not allowed: HTTPS is required for non-localhost URLs\n  hint: use an https:// URL")]
    InsecureScheme(String),

    #[error("localhost URLs are not allowed: loopback targets are private")]
    Localhost,

    #[error("cloud metadata host '{0}' is not allowed")]
    MetadataHost(String),

    #[error("cloud metadata address {0} is not allowed: private network target")]
    MetadataAddress(IpAddr),

    #[error("URL resolves to private address {0}")]
    PrivateAddress(IpAddr),
}

impl UrlError {
    /// Validation code reported for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            UrlError::Required => ErrorCode::Required,
            _ => ErrorCode::Format,
        }
    }
}

/// Hostname resolution used to classify non-literal hosts.
pub trait Resolver {
    /// Returns every address `host` resolves to.
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// Resolves through the operating system's resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl Resolver for SystemResolver {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        Ok((host, 0).to_socket_addrs()?.map(|addr| addr.ip()).collect())
    }
}

impl<T: Resolver + ?Sized> Resolver for &T {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        (**self).lookup(host)
    }
}

/// Checks that `raw` is safe to use as the Jira base URL and returns it parsed.
pub fn validate_base_url(raw: &str, resolver: &impl Resolver) -> Result<Url, UrlError> {
    let result = check(raw, resolver);
    if let Err(e) = &result {
        tracing::warn!(url = %redacted(raw).escape_debug(), error = %e, "rejected base URL");
    }
    result
}

/// `raw` with any userinfo in its authority replaced by `***`.
fn redacted(raw: &str) -> String {
    let Some(scheme_end) = raw.find("://") else {
        return raw.to_string();
    };
    let authority_start = scheme_end + 3;
    let rest = &raw[authority_start..];
    let authority_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    match rest[..authority_len].rfind('@') {
        Some(at) => format!(
            "{}***{}",
            &raw[..authority_start],
            &raw[authority_start + at..]
        ),
        None => raw.to_string(),
    }
}

fn check(raw: &str, resolver: &impl Resolver) -> Result<Url, UrlError> {
    if raw.is_empty() {
        return Err(UrlError::Required);
    }
    if raw.bytes().any(|b| b < 0x20 || b == 0x7f) {
        return Err(UrlError::ControlCharacter);
    }

    let url = Url::parse(raw).map_err(|e| match e {
        url::ParseError::RelativeUrlWithoutBase => UrlError::MissingScheme,
        other => UrlError::Malformed(other.to_string()),
    })?;

    let host = url
        .host()
        .ok_or_else(|| UrlError::Malformed("missing host".to_string()))
        .map(|h| h.to_owned());

    match url.scheme() {
        "https" => {}
        "http" if host.as_ref().is_ok_and(is_localhost) => {}
        other => return Err(UrlError::InsecureScheme(other.to_string())),
    }

    let host = host?;
    if is_localhost(&host) {
        return Err(UrlError::Localhost);
    }

    match host {
        Host::Domain(name) => {
            let name = name.trim_end_matches('.').to_ascii_lowercase();
            if METADATA_HOSTS.contains(&name.as_str()) {
                return Err(UrlError::MetadataHost(name));
            }
            match resolver.lookup(&name) {
                Ok(addrs) => addrs.into_iter().try_for_each(check_ip)?,
                Err(e) => {
                    tracing::debug!(host = %name, error = %e, "DNS lookup failed, skipping");
                }
            }
        }
        Host::Ipv4(v4) => check_ip(IpAddr::V4(v4))?,
        Host::Ipv6(v6) => check_ip(IpAddr::V6(v6))?,
    }

    Ok(url)
}

fn check_ip(ip: IpAddr) -> Result<(), UrlError> {
    if is_metadata_ip(ip) {
        Err(UrlError::MetadataAddress(ip))
    } else if is_private_ip(ip) {
        Err(UrlError::PrivateAddress(ip))
    } else {
        Ok(())
    }
}

fn is_localhost(host: &Host<String>) -> bool {
    match host {
        Host::Domain(name) => name.trim_end_matches('.').eq_ignore_ascii_case("localhost"),
        Host::Ipv4(v4) => *v4 == Ipv4Addr::LOCALHOST,
        Host::Ipv6(v6) => *v6 == Ipv6Addr::LOCALHOST,
    }
}

#[cfg(test)]
#[path = "urlguard_tests.rs"]
mod tests;
