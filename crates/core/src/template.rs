// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template token substitution
//!
//! Two placeholder styles are used by the workflow:
//!
//! - `@KEY@` in the base experiment configuration (`config.base.emc.dyn`)
//! - `{{ key }}` in post-processing namelists
//!
//! Both are single-pass: substituted values are never rescanned, and tokens
//! with no value are left exactly as written.

use regex::Regex;
use serde_yaml::Mapping;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::settings::get_string;

// Regex pattern for {{ key }} tokens, inner whitespace optional
#[allow(clippy::expect_used)]
static BRACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("constant regex pattern is valid")
});

/// Ordered set of `@KEY@` substitutions
///
/// Keys are stored without the surrounding `@`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    values: HashMap<String, String>,
    order: Vec<String>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a token value
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        if !self.values.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.values.insert(key, value.to_string());
    }

    /// Builder form of [`TokenMap::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Token names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// Replace every `@KEY@` whose key is in `tokens`
///
/// Unknown tokens are left as-is; no error is reported for them. The closing
/// `@` of an unknown token may open the next one, so `x@foo@KEY@` still
/// renders `KEY`.
pub fn render_tokens(template: &str, tokens: &TokenMap) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('@') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('@') else {
            rest = &rest[open..];
            break;
        };
        match tokens.get(&after[..close]) {
            Some(value) => {
                rendered.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                rendered.push('@');
                rendered.push_str(&after[..close]);
                rest = &after[close..];
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

/// Replace every `{{ key }}` with the string form of `settings[key]`
///
/// Keys that are absent, or whose values are sequences or mappings, are
/// left as-is.
pub fn render_braces(template: &str, settings: &Mapping) -> String {
    BRACE_PATTERN
        .replace_all(template, |caps: &regex::Captures| {
            get_string(settings, &caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .to_string()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
