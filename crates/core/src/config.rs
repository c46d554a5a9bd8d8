// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plugin configuration normalized from the raw JSON map.
//!
//! Each field is read only when its JSON value has the expected type;
//! anything else (missing, `null`, numbers for strings, strings for flags)
//! falls back to the field's default. Normalization never fails.

use serde_json::{Map, Value};

/// Raw configuration keys as documented for users.
pub mod keys {
    pub const BASE_URL: &str = "base_url";
    pub const USERNAME: &str = "username";
    pub const TOKEN: &str = "token";
    pub const PROJECT_KEY: &str = "project_key";
    pub const VERSION_NAME: &str = "version_name";
    pub const VERSION_DESCRIPTION: &str = "version_description";
    pub const CREATE_VERSION: &str = "create_version";
    pub const RELEASE_VERSION: &str = "release_version";
    pub const ASSOCIATE_ISSUES: &str = "associate_issues";
    pub const TRANSITION_ISSUES: &str = "transition_issues";
    pub const TRANSITION_NAME: &str = "transition_name";
    pub const ADD_COMMENT: &str = "add_comment";
    pub const COMMENT_TEMPLATE: &str = "comment_template";
    pub const ISSUE_PATTERN: &str = "issue_pattern";
}

/// Normalized plugin configuration for a single release event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub username: String,
    pub token: String,
    pub project_key: String,
    /// Jira version name; the release version is used when empty.
    pub version_name: String,
    pub version_description: String,
    pub create_version: bool,
    pub release_version: bool,
    pub associate_issues: bool,
    pub transition_issues: bool,
    /// Workflow transition applied to issues, used verbatim.
    pub transition_name: String,
    pub add_comment: bool,
    pub comment_template: String,
    /// Issue-key regex; the default pattern is used when empty.
    pub issue_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::new(),
            username: String::new(),
            token: String::new(),
            project_key: String::new(),
            version_name: String::new(),
            version_description: String::new(),
            create_version: true,
            release_version: true,
            associate_issues: true,
            transition_issues: false,
            transition_name: String::new(),
            add_comment: false,
            comment_template: String::new(),
            issue_pattern: String::new(),
        }
    }
}

impl Config {
    /// Builds a configuration from the raw map, defaulting mistyped fields.
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        let defaults = Config::default();
        Config {
            base_url: string_field(raw, keys::BASE_URL),
            username: string_field(raw, keys::USERNAME),
            token: string_field(raw, keys::TOKEN),
            project_key: string_field(raw, keys::PROJECT_KEY),
            version_name: string_field(raw, keys::VERSION_NAME),
            version_description: string_field(raw, keys::VERSION_DESCRIPTION),
            create_version: bool_field(raw, keys::CREATE_VERSION, defaults.create_version),
            release_version: bool_field(raw, keys::RELEASE_VERSION, defaults.release_version),
            associate_issues: bool_field(raw, keys::ASSOCIATE_ISSUES, defaults.associate_issues),
            transition_issues: bool_field(
                raw,
                keys::TRANSITION_ISSUES,
                defaults.transition_issues,
            ),
            transition_name: string_field(raw, keys::TRANSITION_NAME),
            add_comment: bool_field(raw, keys::ADD_COMMENT, defaults.add_comment),
            comment_template: string_field(raw, keys::COMMENT_TEMPLATE),
            issue_pattern: string_field(raw, keys::ISSUE_PATTERN),
        }
    }

    /// Jira version name for a release, falling back to `release_version`.
    pub fn version_name_for<'a>(&'a self, release_version: &'a str) -> &'a str {
        if self.version_name.is_empty() {
            release_version
        } else {
            &self.version_name
        }
    }
}

fn string_field(raw: &Map<String, Value>, key: &str) -> String {
    match raw.get(key) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn bool_field(raw: &Map<String, Value>, key: &str, default: bool) -> bool {
    raw.get(key).and_then(Value::as_bool).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
