// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! YAML settings layers
//!
//! A layer is a flat YAML mapping. Layers are merged key by key, later
//! layers replacing earlier values wholesale (no deep merge).

use super::ConfigError;
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Load a YAML file whose top level must be a mapping
pub fn load_yaml_file(path: &Path) -> Result<Mapping, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_yaml(&content, path)
}

/// Parse YAML content, attributing errors to `origin`
pub fn parse_yaml(content: &str, origin: &Path) -> Result<Mapping, ConfigError> {
    let value: Value = serde_yaml::from_str(content).map_err(|source| ConfigError::Yaml {
        path: origin.to_path_buf(),
        source,
    })?;
    match value {
        Value::Mapping(map) => Ok(map),
        // An empty document is an empty layer
        Value::Null => Ok(Mapping::new()),
        _ => Err(ConfigError::NotAMapping {
            path: origin.to_path_buf(),
        }),
    }
}

/// Load a settings file and move its `include` entries to the top level
pub fn load_with_includes(path: &Path) -> Result<Mapping, ConfigError> {
    flatten_includes(load_yaml_file(path)?)
}

/// Remove the top-level `include` list and merge each entry into the top level
///
/// Entries are applied in order, so later entries win over earlier ones and
/// over the file's own keys. Only one level is flattened.
pub fn flatten_includes(mut settings: Mapping) -> Result<Mapping, ConfigError> {
    let Some(includes) = settings.remove("include") else {
        return Ok(settings);
    };

    let entries = match includes {
        Value::Sequence(entries) => entries,
        Value::Null => Vec::new(),
        _ => return Err(ConfigError::InvalidInclude { index: 0 }),
    };

    for (index, entry) in entries.into_iter().enumerate() {
        match entry {
            Value::Mapping(map) => merge_into(&mut settings, map),
            _ => return Err(ConfigError::InvalidInclude { index }),
        }
    }

    Ok(settings)
}

/// Merge `overrides` into `base`, replacing values for keys present in both
pub fn merge_into(base: &mut Mapping, overrides: Mapping) {
    for (key, value) in overrides {
        base.insert(key, value);
    }
}

/// String form of a scalar YAML value
///
/// Returns `None` for sequences and mappings. Null renders as an empty
/// string.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Look up a scalar setting by key and return its string form
pub fn get_string(settings: &Mapping, key: &str) -> Option<String> {
    settings.get(key).and_then(scalar_to_string)
}

#[cfg(test)]
#[path = "layer_tests.rs"]
mod tests;
