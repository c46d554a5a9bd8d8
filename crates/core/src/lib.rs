// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jr-core: Core of the Jira release plugin
//!
//! This crate decides which Jira actions a release should trigger and guards
//! the configured Jira base URL against requests to internal endpoints. It
//! normalizes and validates plugin configuration, extracts issue keys from
//! categorized commits, plans release actions and dispatches release hooks.

pub mod address;
pub mod comment;
pub mod config;
pub mod env;
pub mod error;
pub mod issues;
pub mod plan;
pub mod plugin;
pub mod tracker;
pub mod urlguard;
pub mod validate;

#[cfg(test)]
mod test_helpers;

pub use address::is_private_ip;
pub use comment::render_comment;
pub use config::Config;
pub use env::{Credentials, EnvLookup, ProcessEnv};
pub use error::{Error, Result};
pub use issues::{extract_issue_keys, IssuePattern, DEFAULT_ISSUE_PATTERN};
pub use plan::{plan_release, PlannedAction, ReleasePlan};
pub use plugin::JiraPlugin;
pub use tracker::{ConnectionParams, Connector, Disconnected, Tracker, TrackerError};
pub use urlguard::{validate_base_url, Resolver, SystemResolver, UrlError};
pub use validate::validate_config;
