// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! Credentials may come from the plugin configuration or from the process
//! environment. The variable name constants are generated by `build.rs` and
//! live in the [`vars`] submodule. Lookups go through [`EnvLookup`] so callers
//! and tests can supply their own environment.

use std::collections::HashMap;
use std::fmt;

use crate::config::Config;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Environment variables consulted for the API token, in order.
pub const TOKEN_VARS: [&str; 2] = [vars::JIRA_TOKEN, vars::JIRA_API_TOKEN];

/// Environment variables consulted for the username, in order.
pub const USERNAME_VARS: [&str; 2] = [vars::JIRA_USERNAME, vars::JIRA_EMAIL];

/// Source of environment-style key/value lookups.
pub trait EnvLookup {
    /// Returns the value of `name`, if set.
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Returns the first non-empty value among `configured` and then `names`.
pub fn resolve(configured: &str, names: &[&str], env: &impl EnvLookup) -> Option<String> {
    if !configured.is_empty() {
        return Some(configured.to_string());
    }
    names
        .iter()
        .filter_map(|name| env.get(name))
        .find(|value| !value.is_empty())
}

/// Username and API token used to authenticate against Jira.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl Credentials {
    /// Resolves both credentials; `None` unless both are found.
    pub fn resolve(config: &Config, env: &impl EnvLookup) -> Option<Self> {
        let token = resolve(&config.token, &TOKEN_VARS, env);
        let username = resolve(&config.username, &USERNAME_VARS, env);
        match (username, token) {
            (Some(username), Some(token)) => Some(Credentials { username, token }),
            _ => None,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
