// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation of merged experiment settings
//!
//! Checks run in a fixed order and the first failure is returned:
//! mandatory keys, `mode`, `start`, `app`, then app-implied requirements.

use super::{get_string, ConfigError};
use serde_yaml::Mapping;
use std::fmt;
use std::str::FromStr;

/// Keys that must be present after all layers are merged
pub const MANDATORY_SETTINGS: &[&str] = &["mode", "idate", "edate"];

/// Experiment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Cycled,
    ForecastOnly,
}

impl Mode {
    pub const ALLOWED: &'static [&'static str] = &["cycled", "forecast-only"];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Cycled => "cycled",
            Mode::ForecastOnly => "forecast-only",
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cycled" => Ok(Mode::Cycled),
            "forecast-only" => Ok(Mode::ForecastOnly),
            _ => Err(not_allowed("mode", s, Self::ALLOWED)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model start type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    Cold,
    Warm,
}

impl StartMode {
    pub const ALLOWED: &'static [&'static str] = &["cold", "warm"];

    /// Fortran logical literal written to the base configuration
    pub fn warm_start_flag(self) -> &'static str {
        match self {
            StartMode::Warm => ".true.",
            StartMode::Cold => ".false.",
        }
    }
}

impl FromStr for StartMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cold" => Ok(StartMode::Cold),
            "warm" => Ok(StartMode::Warm),
            _ => Err(not_allowed("start", s, Self::ALLOWED)),
        }
    }
}

/// UFS application
///
/// `A` adds aerosols, `W` adds waves; the `S2S` family couples ocean and ice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum App {
    Atm,
    AtmA,
    AtmW,
    AtmAW,
    S2s,
    S2sA,
    S2sW,
    S2sAW,
}

impl App {
    pub const ALLOWED: &'static [&'static str] = &[
        "ATM", "ATMA", "ATMW", "ATMAW", "S2S", "S2SA", "S2SW", "S2SAW",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            App::Atm => "ATM",
            App::AtmA => "ATMA",
            App::AtmW => "ATMW",
            App::AtmAW => "ATMAW",
            App::S2s => "S2S",
            App::S2sA => "S2SA",
            App::S2sW => "S2SW",
            App::S2sAW => "S2SAW",
        }
    }

    /// Coupled apps need initial conditions for every component
    pub fn requires_icsdir(self) -> bool {
        matches!(self, App::S2s | App::S2sA | App::S2sW | App::S2sAW)
    }
}

impl FromStr for App {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ATM" => Ok(App::Atm),
            "ATMA" => Ok(App::AtmA),
            "ATMW" => Ok(App::AtmW),
            "ATMAW" => Ok(App::AtmAW),
            "S2S" => Ok(App::S2s),
            "S2SA" => Ok(App::S2sA),
            "S2SW" => Ok(App::S2sW),
            "S2SAW" => Ok(App::S2sAW),
            _ => Err(not_allowed("app", s, Self::ALLOWED)),
        }
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn not_allowed(key: &'static str, value: &str, allowed: &'static [&'static str]) -> ConfigError {
    ConfigError::NotAllowed {
        key,
        value: value.to_string(),
        allowed,
    }
}

/// Validate a merged settings mapping
pub fn validate_settings(settings: &Mapping) -> Result<(), ConfigError> {
    if !MANDATORY_SETTINGS
        .iter()
        .all(|key| settings.contains_key(*key))
    {
        return Err(ConfigError::MissingMandatory {
            keys: MANDATORY_SETTINGS.to_vec(),
        });
    }

    let mode = required(settings, "mode")?;
    mode.parse::<Mode>()?;

    let start = required(settings, "start")?;
    start.parse::<StartMode>()?;

    let app_name = required(settings, "app")?;
    let app: App = app_name.parse()?;

    let has_icsdir = get_string(settings, "icsdir").is_some_and(|dir| !dir.is_empty());
    if app.requires_icsdir() && !has_icsdir {
        return Err(ConfigError::IcsdirRequired { app: app_name });
    }

    Ok(())
}

fn required(settings: &Mapping, key: &str) -> Result<String, ConfigError> {
    get_string(settings, key).ok_or_else(|| ConfigError::MissingSetting(key.to_string()))
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
