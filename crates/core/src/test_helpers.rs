// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for jr-core module tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::io;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

use crate::tracker::{ConnectionParams, Connector, Tracker, TrackerError};
use crate::urlguard::Resolver;

/// Resolver answering from a fixed table; unknown hosts fail to resolve.
#[derive(Debug, Default)]
pub struct StaticResolver(HashMap<String, Vec<IpAddr>>);

impl StaticResolver {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        let mut table: HashMap<String, Vec<IpAddr>> = HashMap::new();
        for (host, ip) in entries {
            table
                .entry(host.to_string())
                .or_default()
                .push(ip.parse().unwrap());
        }
        StaticResolver(table)
    }

    /// Resolver for which every lookup fails.
    pub fn offline() -> Self {
        StaticResolver::default()
    }
}

impl Resolver for StaticResolver {
    fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        self.0
            .get(host)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such host"))
    }
}

/// Builds an in-memory environment from key/value pairs.
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Tracker that records each call as `"<operation> <arg> <arg>..."`.
#[derive(Debug, Clone, Default)]
pub struct RecordingTracker {
    pub calls: Arc<Mutex<Vec<String>>>,
    /// Operation name that fails instead of being recorded.
    pub fail_on: Option<&'static str>,
}

impl RecordingTracker {
    pub fn failing_on(operation: &'static str) -> Self {
        RecordingTracker {
            fail_on: Some(operation),
            ..RecordingTracker::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&mut self, operation: &'static str, args: &[&str]) -> Result<(), TrackerError> {
        if self.fail_on == Some(operation) {
            return Err(TrackerError::new(format!("{operation} rejected by server")));
        }
        let mut call = operation.to_string();
        for arg in args {
            call.push(' ');
            call.push_str(arg);
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl Tracker for RecordingTracker {
    fn create_version(
        &mut self,
        project_key: &str,
        name: &str,
        description: &str,
    ) -> Result<(), TrackerError> {
        self.record("create_version", &[project_key, name, description])
    }

    fn release_version(&mut self, project_key: &str, name: &str) -> Result<(), TrackerError> {
        self.record("release_version", &[project_key, name])
    }

    fn associate_issue(&mut self, issue_key: &str, version: &str) -> Result<(), TrackerError> {
        self.record("associate_issue", &[issue_key, version])
    }

    fn transition_issue(
        &mut self,
        issue_key: &str,
        transition: &str,
    ) -> Result<(), TrackerError> {
        self.record("transition_issue", &[issue_key, transition])
    }

    fn add_comment(&mut self, issue_key: &str, body: &str) -> Result<(), TrackerError> {
        self.record("add_comment", &[issue_key, body])
    }
}

/// Connector handing out clones of one recording tracker.
#[derive(Debug, Clone, Default)]
pub struct RecordingConnector {
    pub tracker: RecordingTracker,
    pub params: Arc<Mutex<Option<ConnectionParams>>>,
}

impl RecordingConnector {
    pub fn new(tracker: RecordingTracker) -> Self {
        RecordingConnector {
            tracker,
            params: Arc::default(),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.tracker.calls()
    }

    pub fn params(&self) -> Option<ConnectionParams> {
        self.params.lock().unwrap().clone()
    }
}

impl Connector for RecordingConnector {
    type Tracker = RecordingTracker;

    fn connect(&self, params: ConnectionParams) -> Result<RecordingTracker, TrackerError> {
        *self.params.lock().unwrap() = Some(params);
        Ok(self.tracker.clone())
    }
}
