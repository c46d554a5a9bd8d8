// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Release action planning.
//!
//! A [`ReleasePlan`] lists, in a fixed order, the Jira actions a release
//! would perform. Previews report its summary; commits apply it to a
//! [`Tracker`].

use std::fmt;

use jr_protocol::ReleaseContext;

use crate::comment::render_comment;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::issues::extract_issue_keys;
use crate::tracker::{Tracker, TrackerError};

/// Prefix of the preview summary.
pub const SUMMARY_PREFIX: &str = "Would perform: ";

/// A single Jira action of a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedAction {
    CreateVersion { name: String, description: String },
    ReleaseVersion { name: String },
    AssociateIssues { count: usize, version: String },
    TransitionIssues { count: usize, transition: String },
    /// `body` is the rendered comment template.
    AddComment { count: usize, body: String },
}

impl fmt::Display for PlannedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannedAction::CreateVersion { name, .. } => write!(f, "Create version '{name}'"),
            PlannedAction::ReleaseVersion { name } => {
                write!(f, "Mark version '{name}' as released")
            }
            PlannedAction::AssociateIssues { count, version } => {
                write!(f, "Associate {count} issues with version '{version}'")
            }
            PlannedAction::TransitionIssues { count, transition } => {
                write!(f, "Transition {count} issues to '{transition}'")
            }
            PlannedAction::AddComment { count, .. } => write!(f, "Add comment to {count} issues"),
        }
    }
}

/// Ordered actions for one release, with the issues they touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub version_name: String,
    pub issues: Vec<String>,
    pub actions: Vec<PlannedAction>,
}

impl ReleasePlan {
    /// Human-readable action descriptions, in order.
    pub fn descriptions(&self) -> Vec<String> {
        self.actions.iter().map(ToString::to_string).collect()
    }

    /// `"Would perform: "` followed by the comma-separated descriptions.
    pub fn summary(&self) -> String {
        format!("{SUMMARY_PREFIX}{}", self.descriptions().join(", "))
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Performs every action in order, stopping at the first tracker failure.
    pub fn apply<T: Tracker + ?Sized>(&self, project_key: &str, tracker: &mut T) -> Result<()> {
        for action in &self.actions {
            tracing::info!(%action, project_key, "applying Jira action");
            self.apply_one(action, project_key, tracker)
                .map_err(|source| {
                    tracing::warn!(%action, error = %source, "Jira action failed");
                    Error::Tracker {
                        action: action.to_string(),
                        source,
                    }
                })?;
        }
        Ok(())
    }

    fn apply_one<T: Tracker + ?Sized>(
        &self,
        action: &PlannedAction,
        project_key: &str,
        tracker: &mut T,
    ) -> std::result::Result<(), TrackerError> {
        match action {
            PlannedAction::CreateVersion { name, description } => {
                tracker.create_version(project_key, name, description)
            }
            PlannedAction::ReleaseVersion { name } => tracker.release_version(project_key, name),
            PlannedAction::AssociateIssues { version, .. } => self
                .issues
                .iter()
                .try_for_each(|key| tracker.associate_issue(key, version)),
            PlannedAction::TransitionIssues { transition, .. } => self
                .issues
                .iter()
                .try_for_each(|key| tracker.transition_issue(key, transition)),
            PlannedAction::AddComment { body, .. } => self
                .issues
                .iter()
                .try_for_each(|key| tracker.add_comment(key, body)),
        }
    }
}

/// Plans the Jira actions for a release.
///
/// Version actions depend only on their flags; issue actions also need at
/// least one extracted key. `release_version` does not imply `create_version`.
pub fn plan_release(config: &Config, ctx: &ReleaseContext) -> Result<ReleasePlan> {
    let issues = extract_issue_keys(config, ctx.changes.as_ref())?;
    let version_name = config.version_name_for(&ctx.version).to_string();
    let count = issues.len();

    let mut actions = Vec::new();
    if config.create_version {
        actions.push(PlannedAction::CreateVersion {
            name: version_name.clone(),
            description: config.version_description.clone(),
        });
    }
    if config.release_version {
        actions.push(PlannedAction::ReleaseVersion {
            name: version_name.clone(),
        });
    }
    if config.associate_issues && count > 0 {
        actions.push(PlannedAction::AssociateIssues {
            count,
            version: version_name.clone(),
        });
    }
    if config.transition_issues && count > 0 {
        actions.push(PlannedAction::TransitionIssues {
            count,
            transition: config.transition_name.clone(),
        });
    }
    if config.add_comment && count > 0 {
        actions.push(PlannedAction::AddComment {
            count,
            body: render_comment(&config.comment_template, ctx),
        });
    }

    tracing::debug!(
        version = %version_name,
        issues = count,
        actions = actions.len(),
        "planned release"
    );
    Ok(ReleasePlan {
        version_name,
        issues,
        actions,
    })
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
