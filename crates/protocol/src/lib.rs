// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared wire types for the Jira release plugin.
//!
//! This crate defines the messages exchanged between the release pipeline host
//! and the plugin core: hooks, the release context with its categorized change
//! set, execute requests/responses and validation results. Every type
//! serializes to JSON so the host adapter can forward it unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Error returned by `FromStr` impls for protocol types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Invalid hook name.
    InvalidHook(String),
    /// Invalid change category name.
    InvalidCategory(String),
    /// Invalid validation error code.
    InvalidErrorCode(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidHook(s) => write!(f, "invalid hook: '{}'", s),
            ParseError::InvalidCategory(s) => write!(f, "invalid change category: '{}'", s),
            ParseError::InvalidErrorCode(s) => write!(f, "invalid error code: '{}'", s),
        }
    }
}

impl std::error::Error for ParseError {}

// ============================================================================
// Hooks
// ============================================================================

/// Point in the release pipeline at which the plugin is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hook {
    PreInit,
    PostInit,
    PrePlan,
    PostPlan,
    PreVersion,
    PostVersion,
    PreNotes,
    PostNotes,
    PreApprove,
    PostApprove,
    PrePublish,
    PostPublish,
    OnSuccess,
    OnError,
}

impl Hook {
    /// Returns the hook name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Hook::PreInit => "pre_init",
            Hook::PostInit => "post_init",
            Hook::PrePlan => "pre_plan",
            Hook::PostPlan => "post_plan",
            Hook::PreVersion => "pre_version",
            Hook::PostVersion => "post_version",
            Hook::PreNotes => "pre_notes",
            Hook::PostNotes => "post_notes",
            Hook::PreApprove => "pre_approve",
            Hook::PostApprove => "post_approve",
            Hook::PrePublish => "pre_publish",
            Hook::PostPublish => "post_publish",
            Hook::OnSuccess => "on_success",
            Hook::OnError => "on_error",
        }
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Hook {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, ParseError> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "pre_init" => Ok(Hook::PreInit),
            "post_init" => Ok(Hook::PostInit),
            "pre_plan" => Ok(Hook::PrePlan),
            "post_plan" => Ok(Hook::PostPlan),
            "pre_version" => Ok(Hook::PreVersion),
            "post_version" => Ok(Hook::PostVersion),
            "pre_notes" => Ok(Hook::PreNotes),
            "post_notes" => Ok(Hook::PostNotes),
            "pre_approve" => Ok(Hook::PreApprove),
            "post_approve" => Ok(Hook::PostApprove),
            "pre_publish" => Ok(Hook::PrePublish),
            "post_publish" => Ok(Hook::PostPublish),
            "on_success" => Ok(Hook::OnSuccess),
            "on_error" => Ok(Hook::OnError),
            _ => Err(ParseError::InvalidHook(s.to_string())),
        }
    }
}

// ============================================================================
// Release context
// ============================================================================

/// Conventional-commit category a change was sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCategory {
    Feature,
    Fix,
    Breaking,
    Performance,
    Refactor,
    Docs,
    Other,
}

impl ChangeCategory {
    /// All categories in scan order.
    pub const ALL: [ChangeCategory; 7] = [
        ChangeCategory::Feature,
        ChangeCategory::Fix,
        ChangeCategory::Breaking,
        ChangeCategory::Performance,
        ChangeCategory::Refactor,
        ChangeCategory::Docs,
        ChangeCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeCategory::Feature => "feature",
            ChangeCategory::Fix => "fix",
            ChangeCategory::Breaking => "breaking",
            ChangeCategory::Performance => "performance",
            ChangeCategory::Refactor => "refactor",
            ChangeCategory::Docs => "docs",
            ChangeCategory::Other => "other",
        }
    }
}

impl fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChangeCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, ParseError> {
        match s.to_lowercase().as_str() {
            "feature" | "feat" => Ok(ChangeCategory::Feature),
            "fix" => Ok(ChangeCategory::Fix),
            "breaking" => Ok(ChangeCategory::Breaking),
            "performance" | "perf" => Ok(ChangeCategory::Performance),
            "refactor" => Ok(ChangeCategory::Refactor),
            "docs" => Ok(ChangeCategory::Docs),
            "other" => Ok(ChangeCategory::Other),
            _ => Err(ParseError::InvalidCategory(s.to_string())),
        }
    }
}

/// A single parsed conventional commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionalCommit {
    /// Subject line of the commit.
    pub description: String,
    /// Commit body, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Issue references the upstream parser already recognized.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

impl ConventionalCommit {
    /// Commit with only a subject line.
    pub fn new(description: impl Into<String>) -> Self {
        ConventionalCommit {
            description: description.into(),
            body: None,
            issues: Vec::new(),
        }
    }

    /// Sets the commit body (builder pattern).
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the explicit issue references (builder pattern).
    pub fn with_issues<I, S>(mut self, issues: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.issues = issues.into_iter().map(Into::into).collect();
        self
    }
}

/// Commits of a release grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedChanges {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<ConventionalCommit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixes: Vec<ConventionalCommit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breaking: Vec<ConventionalCommit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub performance: Vec<ConventionalCommit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refactor: Vec<ConventionalCommit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docs: Vec<ConventionalCommit>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub other: Vec<ConventionalCommit>,
}

impl CategorizedChanges {
    /// Commits recorded under `category`.
    pub fn commits(&self, category: ChangeCategory) -> &[ConventionalCommit] {
        match category {
            ChangeCategory::Feature => &self.features,
            ChangeCategory::Fix => &self.fixes,
            ChangeCategory::Breaking => &self.breaking,
            ChangeCategory::Performance => &self.performance,
            ChangeCategory::Refactor => &self.refactor,
            ChangeCategory::Docs => &self.docs,
            ChangeCategory::Other => &self.other,
        }
    }

    /// Mutable access to the commits recorded under `category`.
    pub fn commits_mut(&mut self, category: ChangeCategory) -> &mut Vec<ConventionalCommit> {
        match category {
            ChangeCategory::Feature => &mut self.features,
            ChangeCategory::Fix => &mut self.fixes,
            ChangeCategory::Breaking => &mut self.breaking,
            ChangeCategory::Performance => &mut self.performance,
            ChangeCategory::Refactor => &mut self.refactor,
            ChangeCategory::Docs => &mut self.docs,
            ChangeCategory::Other => &mut self.other,
        }
    }

    /// Adds a commit to `category` (builder pattern).
    pub fn with_commit(mut self, category: ChangeCategory, commit: ConventionalCommit) -> Self {
        self.commits_mut(category).push(commit);
        self
    }

    /// Iterates every commit in category order, then commit order.
    pub fn iter(&self) -> impl Iterator<Item = (ChangeCategory, &ConventionalCommit)> {
        ChangeCategory::ALL
            .into_iter()
            .flat_map(move |category| self.commits(category).iter().map(move |c| (category, c)))
    }

    /// Total number of commits across all categories.
    pub fn len(&self) -> usize {
        ChangeCategory::ALL
            .iter()
            .map(|category| self.commits(*category).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Information about the release being processed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseContext {
    /// Version identifier of the release (e.g., "1.2.0").
    #[serde(default)]
    pub version: String,
    /// Git tag created for the release (e.g., "v1.2.0").
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub repository_name: String,
    #[serde(default)]
    pub repository_url: String,
    /// Categorized commits, if the host computed them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<CategorizedChanges>,
}

// ============================================================================
// Requests and responses
// ============================================================================

/// Request to run the plugin for a hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    pub hook: Hook,
    /// Raw plugin configuration as written by the user.
    #[serde(default)]
    pub config: Map<String, Value>,
    #[serde(default)]
    pub context: ReleaseContext,
    /// Preview mode: compute what would happen without calling Jira.
    #[serde(default)]
    pub dry_run: bool,
}

/// Outcome of an execute request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Terminal error for unsuccessful outcomes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub outputs: Map<String, Value>,
}

impl ExecuteResponse {
    /// Successful outcome with a human-readable message.
    pub fn ok(message: impl Into<String>) -> Self {
        ExecuteResponse {
            success: true,
            message: message.into(),
            error: None,
            outputs: Map::new(),
        }
    }

    /// Unsuccessful outcome carrying a single terminal error.
    pub fn failed(error: impl Into<String>) -> Self {
        ExecuteResponse {
            success: false,
            message: String::new(),
            error: Some(error.into()),
            outputs: Map::new(),
        }
    }

    /// Adds a structured output (builder pattern).
    pub fn with_output(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.outputs.insert(key.to_string(), value.into());
        self
    }

    /// Reads a string list output such as `issues` or `actions`.
    pub fn output_strings(&self, key: &str) -> Option<Vec<String>> {
        let items = self.outputs.get(key)?.as_array()?;
        items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect()
    }
}

/// Machine-readable code of a field validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The field is missing or empty.
    Required,
    /// The field is present but malformed or unsafe.
    Format,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::Format => "format",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, ParseError> {
        match s {
            "required" => Ok(ErrorCode::Required),
            "format" => Ok(ErrorCode::Format),
            _ => Err(ParseError::InvalidErrorCode(s.to_string())),
        }
    }
}

/// A validation failure scoped to one configuration field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub code: ErrorCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            code,
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, ErrorCode::Required, message)
    }

    pub fn format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, ErrorCode::Format, message)
    }
}

/// Result of validating a plugin configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

impl ValidateResponse {
    /// Builds a response that is valid iff `errors` is empty.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        ValidateResponse {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Names of the fields that failed, in report order.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    /// The first error reported for `field`, if any.
    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Static description of the plugin for the host registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    /// Hooks the plugin acts on.
    pub hooks: Vec<Hook>,
    /// JSON schema of the accepted configuration.
    pub config_schema: String,
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
