// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    missing_base_url = { Error::MissingBaseUrl, "base URL is required" },
    missing_credentials = { Error::MissingCredentials, "username and token are required" },
    unsafe_url = { Error::UnsafeUrl(UrlError::Localhost), "localhost" },
    connect = { Error::Connect(TrackerError::new("refused")), "refused" },
)]
fn client_errors_name_the_client(err: Error, expected: &str) {
    let msg = err.to_string();
    assert!(msg.starts_with("failed to create Jira client: "), "{msg}");
    assert!(msg.contains(expected), "{msg}");
}

#[test]
fn invalid_pattern_names_the_pattern() {
    let source = regex::Regex::new("[unclosed").unwrap_err();
    let err = Error::InvalidPattern {
        pattern: "[unclosed".into(),
        source,
    };
    assert!(err.to_string().contains("'[unclosed'"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn tracker_error_keeps_action_and_cause() {
    let err = Error::Tracker {
        action: "Create version 'v1'".into(),
        source: TrackerError::new("HTTP 500"),
    };
    assert_eq!(err.to_string(), "Create version 'v1' failed: HTTP 500");
}

#[test]
fn error_from_url_error() {
    let err: Error = UrlError::Required.into();
    assert!(matches!(err, Error::UnsafeUrl(UrlError::Required)));
}
