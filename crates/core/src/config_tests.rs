// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use serde_json::json;

use super::*;
use yare::parameterized;

fn raw(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[test]
fn empty_map_uses_defaults() {
    let cfg = Config::from_raw(&Map::new());
    assert_eq!(cfg, Config::default());
    assert!(cfg.create_version);
    assert!(cfg.release_version);
    assert!(cfg.associate_issues);
    assert!(!cfg.transition_issues);
    assert!(!cfg.add_comment);
    assert_eq!(cfg.base_url, "");
}

#[test]
fn reads_every_field() {
    let cfg = Config::from_raw(&raw(json!({
        "base_url": "https://company.atlassian.net",
        "username": "dev@example.com",
        "token": "t",
        "project_key": "PROJ",
        "version_name": "v1.0.0",
        "version_description": "First release",
        "create_version": false,
        "release_version": false,
        "associate_issues": false,
        "transition_issues": true,
        "transition_name": "Done",
        "add_comment": true,
        "comment_template": "Released in {version}",
        "issue_pattern": "PROJ-\\d+"
    })));

    assert_eq!(cfg.base_url, "https://company.atlassian.net");
    assert_eq!(cfg.username, "dev@example.com");
    assert_eq!(cfg.token, "t");
    assert_eq!(cfg.project_key, "PROJ");
    assert_eq!(cfg.version_name, "v1.0.0");
    assert_eq!(cfg.version_description, "First release");
    assert!(!cfg.create_version);
    assert!(!cfg.release_version);
    assert!(!cfg.associate_issues);
    assert!(cfg.transition_issues);
    assert_eq!(cfg.transition_name, "Done");
    assert!(cfg.add_comment);
    assert_eq!(cfg.comment_template, "Released in {version}");
    assert_eq!(cfg.issue_pattern, "PROJ-\\d+");
}

#[parameterized(
    string_flag = { json!("false") },
    number_flag = { json!(0) },
    null_flag = { json!(null) },
    array_flag = { json!([false]) },
)]
fn mistyped_flag_falls_back_to_default(value: Value) {
    let cfg = Config::from_raw(&raw(json!({
        "create_version": value.clone(),
        "add_comment": value,
    })));
    assert!(cfg.create_version);
    assert!(!cfg.add_comment);
}

#[parameterized(
    number = { json!(42) },
    boolean = { json!(true) },
    null = { json!(null) },
    object = { json!({ "key": "PROJ" }) },
)]
fn mistyped_string_is_empty(value: Value) {
    let cfg = Config::from_raw(&raw(json!({ "project_key": value })));
    assert_eq!(cfg.project_key, "");
}

#[test]
fn strings_are_not_trimmed() {
    let cfg = Config::from_raw(&raw(json!({ "transition_name": "  In Review " })));
    assert_eq!(cfg.transition_name, "  In Review ");
}

#[parameterized(
    configured = { "v2.0", "2.0.0", "v2.0" },
    fallback = { "", "2.0.0", "2.0.0" },
)]
fn version_name_for_release(configured: &str, release: &str, expected: &str) {
    let cfg = Config {
        version_name: configured.to_string(),
        ..Config::default()
    };
    assert_eq!(cfg.version_name_for(release), expected);
}
