// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for jr-core operations.

use thiserror::Error;

use crate::tracker::TrackerError;
use crate::urlguard::UrlError;

/// All possible errors that can occur in jr-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue pattern '{pattern}': {source}\n  hint: issue_pattern must be a valid regular expression, e.g. [A-Z][A-Z0-9]+-\\d+")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to create Jira client: base URL is required\n  hint: set base_url to your Jira site, e.g. https://company.atlassian.net")]
    MissingBaseUrl,

    #[error("failed to create Jira client: {0}")]
    UnsafeUrl(#[from] UrlError),

    #[error("failed to create Jira client: username and token are required\n  hint: set username/token in config or JIRA_USERNAME/JIRA_TOKEN in the environment")]
    MissingCredentials,

    #[error("failed to create Jira client: {0}")]
    Connect(#[source] TrackerError),

    #[error("{action} failed: {source}")]
    Tracker {
        action: String,
        #[source]
        source: TrackerError,
    },
}

/// A specialized Result type for jr-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
