// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Machine-specific settings

use super::ConfigError;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Paths, accounts and queues of the machine an experiment runs on
///
/// Any value not provided renders as an empty string in the base
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostInfo {
    pub machine: String,
    pub base_git: String,
    pub dmpdir: String,
    pub nwprod: String,
    pub comroot: String,
    pub homedir: String,
    pub stmp: String,
    pub ptmp: String,
    pub noscrub: String,
    pub account: String,
    pub queue: String,
    pub queue_service: String,
    pub partition_batch: String,
    pub chgrp_rstprod: String,
    pub chgrp_cmd: String,
    pub hpssarch: String,
    pub localarch: String,
    pub atardir: String,
}

impl HostInfo {
    /// Build from a YAML mapping, coercing scalar values to strings
    pub fn from_mapping(map: &Mapping) -> Result<Self, ConfigError> {
        // Host files often write flags as YES/NO or bare numbers
        let coerced: Mapping = map
            .iter()
            .map(|(k, v)| {
                let v = match v {
                    Value::Number(_) | Value::Bool(_) => {
                        Value::String(super::scalar_to_string(v).unwrap_or_default())
                    }
                    Value::Null => Value::String(String::new()),
                    other => other.clone(),
                };
                (k.clone(), v)
            })
            .collect();

        serde_yaml::from_value(Value::Mapping(coerced)).map_err(|e| ConfigError::Invalid {
            key: "host".to_string(),
            message: e.to_string(),
        })
    }

    /// Machine name as written into the base configuration
    pub fn machine_upper(&self) -> String {
        self.machine.to_uppercase()
    }
}
