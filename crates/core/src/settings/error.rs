// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating settings
///
/// Every variant is fatal: settings are validated once at startup and never
/// retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse YAML in {}: {source}", .path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{} must contain a mapping at the top level", .path.display())]
    NotAMapping { path: PathBuf },
    #[error("include entries must be mappings (entry {index})")]
    InvalidInclude { index: usize },
    #[error(
        "the following settings must be specified in either the case file or as an argument: {}",
        .keys.join(", ")
    )]
    MissingMandatory { keys: Vec<&'static str> },
    #[error("{key} must be one of {allowed:?}, got '{value}'")]
    NotAllowed {
        key: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    #[error("icsdir must be specified in either the case file or as an argument when running an S2S app ({app})")]
    IcsdirRequired { app: String },
    #[error("{key} must be a date in YYYYMMDDHH form, got '{value}'")]
    InvalidDate { key: String, value: String },
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: String, value: String },
    #[error("missing required setting: {0}")]
    MissingSetting(String),
    #[error("invalid setting {key}: {message}")]
    Invalid { key: String, message: String },
}
