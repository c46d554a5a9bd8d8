// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook dispatch for the Jira release plugin.
//!
//! [`JiraPlugin`] routes each release hook to extraction, planning and (when
//! not previewing) a [`Tracker`](crate::tracker::Tracker) session. Failures
//! never escape as Rust errors; they become unsuccessful responses.

use jr_protocol::{
    ExecuteRequest, ExecuteResponse, Hook, PluginInfo, ReleaseContext, ValidateResponse,
};
use serde_json::{Map, Value};

use crate::config::Config;
use crate::env::{Credentials, EnvLookup, ProcessEnv};
use crate::error::{Error, Result};
use crate::issues::extract_issue_keys;
use crate::plan::{plan_release, ReleasePlan};
use crate::tracker::{ConnectionParams, Connector, Disconnected};
use crate::urlguard::{validate_base_url, Resolver, SystemResolver};
use crate::validate::validate_config;

pub const PLUGIN_NAME: &str = "jira";
pub const PLUGIN_VERSION: &str = "2.0.0";
pub const PLUGIN_DESCRIPTION: &str =
    "Integrate with Jira for version management and issue tracking";
pub const PLUGIN_AUTHOR: &str = "Relicta Team";

/// Hooks the plugin acts on.
pub const HOOKS: [Hook; 4] = [
    Hook::PostPlan,
    Hook::PostPublish,
    Hook::OnSuccess,
    Hook::OnError,
];

/// JSON schema of the accepted configuration.
pub const CONFIG_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "base_url": {"type": "string", "description": "Jira base URL (e.g., https://company.atlassian.net)"},
    "username": {"type": "string", "description": "Jira username/email (or use JIRA_USERNAME/JIRA_EMAIL env)"},
    "token": {"type": "string", "description": "Jira API token (or use JIRA_TOKEN/JIRA_API_TOKEN env)"},
    "project_key": {"type": "string", "description": "Jira project key (e.g., PROJ)"},
    "version_name": {"type": "string", "description": "Version name (defaults to release version)"},
    "version_description": {"type": "string", "description": "Version description"},
    "create_version": {"type": "boolean", "description": "Create version in Jira", "default": true},
    "release_version": {"type": "boolean", "description": "Mark version as released", "default": true},
    "associate_issues": {"type": "boolean", "description": "Associate issues with version", "default": true},
    "transition_issues": {"type": "boolean", "description": "Transition issues to a new status", "default": false},
    "transition_name": {"type": "string", "description": "Transition name (e.g., Done, Released)"},
    "add_comment": {"type": "boolean", "description": "Add release comment to issues", "default": false},
    "comment_template": {"type": "string", "description": "Comment template ({version}, {tag}, {release_url}, {repository})"},
    "issue_pattern": {"type": "string", "description": "Regex pattern for issue keys", "default": "[A-Z][A-Z0-9]+-\\d+"}
  },
  "required": ["base_url", "project_key"]
}"#;

/// The Jira release plugin.
///
/// Credentials, DNS and the Jira client are injected so hosts and tests can
/// replace them.
#[derive(Debug, Clone, Default)]
pub struct JiraPlugin<C = Disconnected, E = ProcessEnv, R = SystemResolver> {
    connector: C,
    env: E,
    resolver: R,
}

impl JiraPlugin {
    /// Plugin using the process environment and system DNS, without a client.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C, E, R> JiraPlugin<C, E, R> {
    /// Replaces the Jira connector (builder pattern).
    pub fn with_connector<C2>(self, connector: C2) -> JiraPlugin<C2, E, R> {
        JiraPlugin {
            connector,
            env: self.env,
            resolver: self.resolver,
        }
    }

    /// Replaces the credential environment (builder pattern).
    pub fn with_env<E2>(self, env: E2) -> JiraPlugin<C, E2, R> {
        JiraPlugin {
            connector: self.connector,
            env,
            resolver: self.resolver,
        }
    }

    /// Replaces the DNS resolver (builder pattern).
    pub fn with_resolver<R2>(self, resolver: R2) -> JiraPlugin<C, E, R2> {
        JiraPlugin {
            connector: self.connector,
            env: self.env,
            resolver,
        }
    }

    pub fn info(&self) -> PluginInfo {
        PluginInfo {
            name: PLUGIN_NAME.to_string(),
            version: PLUGIN_VERSION.to_string(),
            description: PLUGIN_DESCRIPTION.to_string(),
            author: PLUGIN_AUTHOR.to_string(),
            hooks: HOOKS.to_vec(),
            config_schema: CONFIG_SCHEMA.to_string(),
        }
    }
}

impl<C: Connector, E: EnvLookup, R: Resolver> JiraPlugin<C, E, R> {
    /// Validates a raw configuration against this plugin's environment.
    pub fn validate(&self, raw: &Map<String, Value>) -> ValidateResponse {
        validate_config(raw, &self.env, &self.resolver)
    }

    /// Runs the plugin for one hook.
    pub fn execute(&self, req: &ExecuteRequest) -> ExecuteResponse {
        let config = Config::from_raw(&req.config);
        tracing::info!(hook = %req.hook, dry_run = req.dry_run, "executing hook");

        match req.hook {
            Hook::PostPlan => self.post_plan(&config, &req.context),
            Hook::PostPublish => self.post_publish(&config, &req.context, req.dry_run),
            Hook::OnSuccess => {
                ExecuteResponse::ok("Release successful - Jira integration complete")
            }
            Hook::OnError => ExecuteResponse::ok("Release failed - no Jira actions taken"),
            other => ExecuteResponse::ok(format!("Hook {other} not handled")),
        }
    }

    fn post_plan(&self, config: &Config, ctx: &ReleaseContext) -> ExecuteResponse {
        let keys = match extract_issue_keys(config, ctx.changes.as_ref()) {
            Ok(keys) => keys,
            Err(e) => return failure(e),
        };

        let message = if keys.is_empty() {
            "No Jira issues found in commits".to_string()
        } else {
            format!("Found {} Jira issue(s): {}", keys.len(), keys.join(", "))
        };
        ExecuteResponse::ok(message)
            .with_output("issues_found", keys.len())
            .with_output("issues", keys)
    }

    fn post_publish(
        &self,
        config: &Config,
        ctx: &ReleaseContext,
        dry_run: bool,
    ) -> ExecuteResponse {
        let plan = match plan_release(config, ctx) {
            Ok(plan) => plan,
            Err(e) => return failure(e),
        };

        if dry_run {
            if !config.base_url.is_empty() {
                if let Err(e) = validate_base_url(&config.base_url, &self.resolver) {
                    return ExecuteResponse::failed(format!("invalid base URL: {e}"));
                }
            }
            return with_plan_outputs(ExecuteResponse::ok(plan.summary()), config, &plan);
        }

        match self.commit(config, &plan) {
            Ok(()) => {
                let message = format!("Completed: {}", plan.descriptions().join(", "));
                tracing::info!(actions = plan.actions.len(), "published release to Jira");
                with_plan_outputs(ExecuteResponse::ok(message), config, &plan)
            }
            Err(e) => failure(e),
        }
    }

    fn commit(&self, config: &Config, plan: &ReleasePlan) -> Result<()> {
        let params = self.connection_params(config)?;
        let mut tracker = self.connector.connect(params).map_err(Error::Connect)?;
        plan.apply(&config.project_key, &mut tracker)
    }

    fn connection_params(&self, config: &Config) -> Result<ConnectionParams> {
        if config.base_url.is_empty() {
            return Err(Error::MissingBaseUrl);
        }
        let base_url = validate_base_url(&config.base_url, &self.resolver)?;
        let creds = Credentials::resolve(config, &self.env).ok_or(Error::MissingCredentials)?;
        Ok(ConnectionParams {
            base_url,
            username: creds.username,
            token: creds.token,
        })
    }
}

fn failure(err: Error) -> ExecuteResponse {
    tracing::warn!(error = %err, "hook failed");
    ExecuteResponse::failed(err.to_string())
}

fn with_plan_outputs(
    resp: ExecuteResponse,
    config: &Config,
    plan: &ReleasePlan,
) -> ExecuteResponse {
    resp.with_output("version_name", plan.version_name.as_str())
        .with_output("project_key", config.project_key.as_str())
        .with_output("issues", plan.issues.clone())
        .with_output("actions", plan.descriptions())
}

#[cfg(test)]
#[path = "plugin_tests.rs"]
mod tests;
