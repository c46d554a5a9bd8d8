// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Jira issue-key extraction from categorized commits.

use std::collections::HashSet;

use jr_protocol::CategorizedChanges;
use regex::Regex;

use crate::config::Config;
use crate::error::{Error, Result};

/// Pattern used when no `issue_pattern` is configured.
pub const DEFAULT_ISSUE_PATTERN: &str = r"[A-Z][A-Z0-9]+-\d+";

/// A compiled issue-key pattern.
///
/// Compiling is separate from scanning so an invalid pattern is reported once,
/// distinctly from commit text that simply contains no keys.
#[derive(Debug, Clone)]
pub struct IssuePattern {
    scan: Regex,
    whole: Regex,
}

impl IssuePattern {
    /// Compiles `pattern`, or [`DEFAULT_ISSUE_PATTERN`] when it is empty.
    pub fn compile(pattern: &str) -> Result<Self> {
        let pattern = if pattern.is_empty() {
            DEFAULT_ISSUE_PATTERN
        } else {
            pattern
        };
        let invalid = |source: regex::Error| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        };
        let scan = Regex::new(pattern).map_err(invalid)?;
        // `(?x)` plus newline closes a trailing verbose-mode comment and is
        // otherwise ignored; the flag is scoped to the group.
        let whole = Regex::new(&format!("^(?:{pattern}(?x)\n)$")).map_err(invalid)?;
        Ok(IssuePattern { scan, whole })
    }

    pub fn as_str(&self) -> &str {
        self.scan.as_str()
    }

    /// All non-overlapping matches in `text`, left to right.
    pub fn find_all<'a, 't: 'a>(&'a self, text: &'t str) -> impl Iterator<Item = &'t str> + 'a {
        self.scan.find_iter(text).map(|m| m.as_str())
    }

    /// Returns `true` if the whole of `candidate` is an issue key.
    pub fn matches_whole(&self, candidate: &str) -> bool {
        self.whole.is_match(candidate)
    }

    /// Collects upper-cased, deduplicated keys in first-seen order.
    ///
    /// Each commit contributes matches from its description, then its body,
    /// then those explicit `issues` entries that are keys in their own right.
    pub fn extract(&self, changes: &CategorizedChanges) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        for (_, commit) in changes.iter() {
            let from_text = self
                .find_all(&commit.description)
                .chain(commit.body.iter().flat_map(|body| self.find_all(body)));
            let explicit = commit
                .issues
                .iter()
                .map(String::as_str)
                .filter(|issue| self.matches_whole(issue));
            for key in from_text.chain(explicit) {
                let key = key.to_uppercase();
                if seen.insert(key.clone()) {
                    keys.push(key);
                }
            }
        }
        keys
    }
}

/// Extracts the issue keys referenced by a release's changes.
///
/// Absent changes yield no keys; an invalid configured pattern is an error.
pub fn extract_issue_keys(
    config: &Config,
    changes: Option<&CategorizedChanges>,
) -> Result<Vec<String>> {
    let pattern = IssuePattern::compile(&config.issue_pattern)?;
    let keys = changes.map(|c| pattern.extract(c)).unwrap_or_default();
    tracing::debug!(pattern = pattern.as_str(), count = keys.len(), "extracted issue keys");
    Ok(keys)
}

#[cfg(test)]
#[path = "issues_tests.rs"]
mod tests;
