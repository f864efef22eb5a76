// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Experiment and job settings
//!
//! Settings arrive as layered YAML mappings, are merged in a fixed
//! precedence order, validated, and then converted into typed structs.

mod builder;
mod error;
mod host;
mod layer;
mod validate;

pub use builder::{
    default_settings, environment_defaults, ExperimentSettings, SettingsBuilder, HOMEGFS_ENV,
};
pub use error::ConfigError;
pub use host::HostInfo;
pub use layer::{
    flatten_includes, get_string, load_with_includes, load_yaml_file, merge_into, parse_yaml,
    scalar_to_string,
};
pub use validate::{validate_settings, App, Mode, StartMode, MANDATORY_SETTINGS};
