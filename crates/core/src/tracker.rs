// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Seam between release planning and a concrete Jira client.
//!
//! The plugin never talks HTTP itself. A [`Connector`] turns validated
//! connection parameters into a [`Tracker`], which performs one Jira
//! operation per call.

use std::fmt;

use thiserror::Error;
use url::Url;

/// Opaque failure reported by a tracker or connector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TrackerError(pub String);

impl TrackerError {
    pub fn new(message: impl Into<String>) -> Self {
        TrackerError(message.into())
    }
}

/// Validated parameters for opening a Jira connection.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    /// Base URL that passed the safety checks.
    pub base_url: Url,
    pub username: String,
    pub token: String,
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("base_url", &self.base_url.as_str())
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Jira operations needed to publish a release.
pub trait Tracker {
    /// Creates `name` in the project, reusing an existing version of that name.
    fn create_version(
        &mut self,
        project_key: &str,
        name: &str,
        description: &str,
    ) -> Result<(), TrackerError>;

    /// Marks version `name` as released.
    fn release_version(&mut self, project_key: &str, name: &str) -> Result<(), TrackerError>;

    /// Adds `version` to the fix versions of `issue_key`.
    fn associate_issue(&mut self, issue_key: &str, version: &str) -> Result<(), TrackerError>;

    /// Applies the workflow transition named `transition` to `issue_key`.
    fn transition_issue(&mut self, issue_key: &str, transition: &str)
        -> Result<(), TrackerError>;

    fn add_comment(&mut self, issue_key: &str, body: &str) -> Result<(), TrackerError>;
}

/// Opens tracker sessions.
pub trait Connector {
    type Tracker: Tracker;

    fn connect(&self, params: ConnectionParams) -> Result<Self::Tracker, TrackerError>;
}

/// Connector for hosts that only validate and preview.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disconnected;

/// Tracker that can never be constructed.
#[derive(Debug)]
pub enum NoTracker {}

impl Connector for Disconnected {
    type Tracker = NoTracker;

    fn connect(&self, params: ConnectionParams) -> Result<NoTracker, TrackerError> {
        Err(TrackerError(format!(
            "no Jira connector configured for {}",
            params.base_url
        )))
    }
}

impl Tracker for NoTracker {
    fn create_version(&mut self, _: &str, _: &str, _: &str) -> Result<(), TrackerError> {
        match *self {}
    }

    fn release_version(&mut self, _: &str, _: &str) -> Result<(), TrackerError> {
        match *self {}
    }

    fn associate_issue(&mut self, _: &str, _: &str) -> Result<(), TrackerError> {
        match *self {}
    }

    fn transition_issue(&mut self, _: &str, _: &str) -> Result<(), TrackerError> {
        match *self {}
    }

    fn add_comment(&mut self, _: &str, _: &str) -> Result<(), TrackerError> {
        match *self {}
    }
}

#[cfg(test)]
#[path = "tracker_tests.rs"]
mod tests;
