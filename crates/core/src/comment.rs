// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Release comment templates.
//!
//! Supported placeholders: `{version}`, `{tag}`, `{release_url}` and
//! `{repository}`. Unknown placeholders are kept verbatim.

use jr_protocol::ReleaseContext;

/// Expands the placeholders of `template` with values from `ctx`.
///
/// Expansion is a single pass, so substituted values are never re-expanded.
pub fn render_comment(template: &str, ctx: &ReleaseContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let expansion = tail
            .find('}')
            .and_then(|close| Some((close, placeholder(&tail[1..close], ctx)?)));
        match expansion {
            Some((close, value)) => {
                out.push_str(value);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn placeholder<'a>(name: &str, ctx: &'a ReleaseContext) -> Option<&'a str> {
    match name {
        "version" => Some(ctx.version.as_str()),
        "tag" => Some(ctx.tag_name.as_str()),
        "release_url" => Some(ctx.repository_url.as_str()),
        "repository" => Some(ctx.repository_name.as_str()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
