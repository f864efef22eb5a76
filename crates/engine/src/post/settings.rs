// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed view of post and prdgen job settings

use gw_core::settings::{get_string, scalar_to_string};
use gw_core::ConfigError;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Value that switches on `send_com` and `send_dbn`
pub const ENABLED: &str = "YES";

/// Data Broadcast Network alert settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbnSettings {
    pub enabled: bool,
    /// Command that sends one alert, invoked as `<alert> <signal> <file>`
    pub alert: String,
    /// `(signal, file)` pairs in file order
    pub signals: Vec<(String, String)>,
}

impl DbnSettings {
    pub fn from_mapping(settings: &Mapping) -> Result<Self, ConfigError> {
        let enabled = is_enabled(settings, "send_dbn");

        let signals: Vec<(String, String)> = match settings.get("dbn_signals") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Mapping(map)) => map
                .iter()
                .map(|(signal, file)| {
                    match (scalar_to_string(signal), scalar_to_string(file)) {
                        (Some(signal), Some(file)) => Ok((signal, file)),
                        _ => Err(invalid("dbn_signals", "signals and files must be scalars")),
                    }
                })
                .collect::<Result<_, ConfigError>>()?,
            Some(_) => return Err(invalid("dbn_signals", "must be a mapping of signal to file")),
        };

        let alert = if enabled && !signals.is_empty() {
            required(settings, "dbn_alert")?
        } else {
            get_string(settings, "dbn_alert").unwrap_or_default()
        };

        Ok(Self {
            enabled,
            alert,
            signals,
        })
    }

    /// Shell command for one alert
    pub fn command(&self, signal: &str, file: &str) -> String {
        format!("{} {} {}", self.alert, signal, file)
    }
}

/// Settings for one post-processing job
#[derive(Debug, Clone)]
pub struct PostSettings {
    pub work_dir: PathBuf,
    /// Namelist template; relative paths are resolved in `work_dir`
    pub tmpl_file: PathBuf,
    pub cdate: String,
    pub fhr: String,
    pub atm_file: PathBuf,
    pub sfc_file: PathBuf,
    pub flat_file: PathBuf,
    pub grib_table: PathBuf,
    pub mp_file: PathBuf,
    pub post_exe: PathBuf,
    pub is_ens: bool,
    /// Relative paths are resolved in `work_dir`
    pub trigger_file: PathBuf,
    pub sleep_interval: Duration,
    pub sleep_max: Duration,
    pub mpi_run: String,
    pub grib_idx_exe: String,
    pub exe_log_file: String,
    pub send_com: bool,
    pub grib_out: Option<PathBuf>,
    pub grib_idx_out: Option<PathBuf>,
    pub dbn: DbnSettings,
    /// All settings, used for namelist `{{ key }}` lookup
    pub raw: Mapping,
}

impl PostSettings {
    /// Read job settings from a merged mapping (`include` already flattened)
    pub fn from_mapping(raw: Mapping) -> Result<Self, ConfigError> {
        let send_com = is_enabled(&raw, "send_com");
        let (grib_out, grib_idx_out) = if send_com {
            (
                Some(required_path(&raw, "grib_out")?),
                Some(required_path(&raw, "grib_idx_out")?),
            )
        } else {
            (optional_path(&raw, "grib_out"), optional_path(&raw, "grib_idx_out"))
        };

        Ok(Self {
            work_dir: required_path(&raw, "work_dir")?,
            tmpl_file: required_path(&raw, "tmpl_file")?,
            cdate: required(&raw, "cdate")?,
            fhr: required(&raw, "fhr")?,
            atm_file: required_path(&raw, "atm_file")?,
            sfc_file: required_path(&raw, "sfc_file")?,
            flat_file: required_path(&raw, "flat_file")?,
            grib_table: required_path(&raw, "grib_table")?,
            mp_file: required_path(&raw, "mp_file")?,
            post_exe: required_path(&raw, "post_exe")?,
            is_ens: flag(&raw, "is_ens")?,
            trigger_file: required_path(&raw, "trigger_file")?,
            sleep_interval: interval(&raw, "sleep_interval")?,
            sleep_max: seconds(&raw, "sleep_max")?,
            mpi_run: required(&raw, "mpi_run")?,
            grib_idx_exe: required(&raw, "grib_idx_exe")?,
            exe_log_file: required(&raw, "exe_log_file")?,
            send_com,
            grib_out,
            grib_idx_out,
            dbn: DbnSettings::from_mapping(&raw)?,
            raw,
        })
    }

    /// Resolve `path` the way the job sees it from inside `work_dir`
    pub fn in_work_dir(&self, path: &Path) -> PathBuf {
        self.work_dir.join(path)
    }
}

/// Settings for one product-generation job
#[derive(Debug, Clone)]
pub struct PrdgenSettings {
    pub send_com: bool,
    pub dbn: DbnSettings,
    pub raw: Mapping,
}

impl PrdgenSettings {
    pub fn from_mapping(raw: Mapping) -> Result<Self, ConfigError> {
        Ok(Self {
            send_com: is_enabled(&raw, "send_com"),
            dbn: DbnSettings::from_mapping(&raw)?,
            raw,
        })
    }
}

fn is_enabled(settings: &Mapping, key: &str) -> bool {
    get_string(settings, key).is_some_and(|value| value == ENABLED)
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        message: message.to_string(),
    }
}

fn required(settings: &Mapping, key: &str) -> Result<String, ConfigError> {
    get_string(settings, key)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::MissingSetting(key.to_string()))
}

fn required_path(settings: &Mapping, key: &str) -> Result<PathBuf, ConfigError> {
    required(settings, key).map(PathBuf::from)
}

fn optional_path(settings: &Mapping, key: &str) -> Option<PathBuf> {
    get_string(settings, key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn flag(settings: &Mapping, key: &str) -> Result<bool, ConfigError> {
    match settings.get(key) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(value) => match scalar_to_string(value).as_deref() {
            Some("true" | "True" | "YES" | "yes") => Ok(true),
            Some("false" | "False" | "NO" | "no") => Ok(false),
            _ => Err(invalid(key, "must be true or false")),
        },
    }
}

fn interval(settings: &Mapping, key: &str) -> Result<Duration, ConfigError> {
    let value = seconds(settings, key)?;
    if value.is_zero() {
        return Err(invalid(key, "must be greater than zero"));
    }
    Ok(value)
}

fn seconds(settings: &Mapping, key: &str) -> Result<Duration, ConfigError> {
    let text = required(settings, key)?;
    text.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidNumber {
            key: key.to_string(),
            value: text,
        })
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
