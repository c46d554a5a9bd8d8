// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration validation.
//!
//! Every check runs, and all failures are reported together, each scoped to
//! the configuration field it concerns.

use jr_protocol::{ValidateResponse, ValidationError};
use serde_json::{Map, Value};

use crate::config::{keys, Config};
use crate::env::{resolve, EnvLookup, TOKEN_VARS, USERNAME_VARS};
use crate::issues::IssuePattern;
use crate::urlguard::{validate_base_url, Resolver};

/// Validates a raw plugin configuration.
pub fn validate_config(
    raw: &Map<String, Value>,
    env: &impl EnvLookup,
    resolver: &impl Resolver,
) -> ValidateResponse {
    let config = Config::from_raw(raw);
    let mut errors = Vec::new();

    if let Err(e) = validate_base_url(&config.base_url, resolver) {
        errors.push(ValidationError::new(keys::BASE_URL, e.code(), e.to_string()));
    }

    if config.project_key.is_empty() {
        errors.push(ValidationError::required(
            keys::PROJECT_KEY,
            "Jira project key is required",
        ));
    }

    let token = resolve(&config.token, &TOKEN_VARS, env);
    let username = resolve(&config.username, &USERNAME_VARS, env);
    if token.is_none() || username.is_none() {
        errors.push(ValidationError::required(
            keys::TOKEN,
            "Jira API token is required (set token or JIRA_TOKEN/JIRA_API_TOKEN)",
        ));
        errors.push(ValidationError::required(
            keys::USERNAME,
            "Jira username is required (set username or JIRA_USERNAME/JIRA_EMAIL)",
        ));
    }

    if !config.issue_pattern.is_empty() {
        if let Err(e) = IssuePattern::compile(&config.issue_pattern) {
            errors.push(ValidationError::format(keys::ISSUE_PATTERN, e.to_string()));
        }
    }

    if config.transition_issues && config.transition_name.is_empty() {
        errors.push(ValidationError::required(
            keys::TRANSITION_NAME,
            "transition name is required when transition_issues is enabled",
        ));
    }

    if config.add_comment && config.comment_template.is_empty() {
        errors.push(ValidationError::required(
            keys::COMMENT_TEMPLATE,
            "comment template is required when add_comment is enabled",
        ));
    }

    tracing::debug!(errors = errors.len(), "validated configuration");
    ValidateResponse::from_errors(errors)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
