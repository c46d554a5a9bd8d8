// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = std::env::var("OUT_DIR")?;
    let path = std::path::Path::new(&out_dir).join("env_vars.rs");
    let mut f = std::fs::File::create(path)?;

    // Credential sources, in lookup order per credential.
    let vars = [
        ("JIRA_TOKEN", "JIRA_TOKEN"),
        ("JIRA_API_TOKEN", "JIRA_API_TOKEN"),
        ("JIRA_USERNAME", "JIRA_USERNAME"),
        ("JIRA_EMAIL", "JIRA_EMAIL"),
    ];

    for (const_name, env_name) in &vars {
        writeln!(f, "pub const {const_name}: &str = \"{env_name}\";")?;
    }

    println!("cargo:rerun-if-changed=build.rs");
    Ok(())
}
