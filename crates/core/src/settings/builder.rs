// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Layered construction of experiment settings
//!
//! Sources are merged in a fixed precedence order regardless of the order
//! the builder methods are called in:
//!
//! defaults < user file < case file < explicit arguments

use super::{
    get_string, load_yaml_file, merge_into, scalar_to_string, validate_settings, App,
    ConfigError, HostInfo, Mode, StartMode,
};
use crate::cycle::{format_cycle, parse_cycle};
use chrono::NaiveDateTime;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Environment variable naming the workflow installation root
pub const HOMEGFS_ENV: &str = "HOMEgfs";

/// Built-in defaults for an installation rooted at `homegfs`
///
/// `comrot` and `expdir` default to `home`.
pub fn default_settings(homegfs: &Path, home: &Path) -> Mapping {
    let mut defaults = Mapping::new();
    let mut set = |key: &str, value: Value| {
        defaults.insert(Value::from(key), value);
    };
    set("pslot", Value::from("test"));
    set("resdet", Value::from(384));
    set("app", Value::from("ATM"));
    set("cdump", Value::from("gdas"));
    set("gfs_cyc", Value::from(1));
    set("start", Value::from("cold"));
    set("resens", Value::from(192));
    set("nens", Value::from(20));
    set("homegfs", path_value(homegfs));
    set("comrot", path_value(home));
    set("expdir", path_value(home));
    defaults
}

/// Defaults resolved from the environment (`$HOMEgfs`, `$HOME`)
///
/// Falls back to the current directory when either is unavailable.
pub fn environment_defaults() -> Mapping {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let homegfs = std::env::var_os(HOMEGFS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| cwd.clone());
    let home = dirs::home_dir().unwrap_or(cwd);
    default_settings(&homegfs, &home)
}

fn path_value(path: &Path) -> Value {
    Value::from(path.display().to_string())
}

/// Builder that merges settings layers and validates the result
#[derive(Debug, Clone, Default)]
pub struct SettingsBuilder {
    defaults: Mapping,
    user: Option<Mapping>,
    case: Option<Mapping>,
    overrides: Mapping,
    host: Option<Mapping>,
}

impl SettingsBuilder {
    /// Start from the given defaults layer
    pub fn new(defaults: Mapping) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Start from the environment-derived defaults
    pub fn from_environment() -> Self {
        Self::new(environment_defaults())
    }

    /// Set the user layer (typically user paths and host values)
    pub fn user(mut self, layer: Mapping) -> Self {
        self.user = Some(layer);
        self
    }

    pub fn user_file(self, path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading user file");
        Ok(self.user(load_yaml_file(path)?))
    }

    /// Set the case layer (experiment definition)
    pub fn case(mut self, layer: Mapping) -> Self {
        self.case = Some(layer);
        self
    }

    pub fn case_file(self, path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading case file");
        Ok(self.case(load_yaml_file(path)?))
    }

    /// Set an explicit argument, overriding every file layer
    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.overrides.insert(Value::from(key), value.into());
        self
    }

    /// Set an explicit argument only when one was given
    pub fn set_opt(self, key: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Use a dedicated host file instead of the `host` settings entry
    pub fn host_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading host file");
        self.host = Some(load_yaml_file(path)?);
        Ok(self)
    }

    /// All layers merged in precedence order
    pub fn merged(&self) -> Mapping {
        let mut merged = self.defaults.clone();
        for layer in [&self.user, &self.case].into_iter().flatten() {
            merge_into(&mut merged, layer.clone());
        }
        merge_into(&mut merged, self.overrides.clone());
        merged
    }

    /// Merge, validate and convert to typed settings
    pub fn build(self) -> Result<ExperimentSettings, ConfigError> {
        let mut raw = self.merged();
        validate_settings(&raw)?;

        let mode: Mode = string(&raw, "mode")?.parse()?;
        let start: StartMode = string(&raw, "start")?.parse()?;
        let app: App = string(&raw, "app")?.parse()?;
        let idate = date(&raw, "idate")?;
        let edate = date(&raw, "edate")?;

        let homegfs = PathBuf::from(string(&raw, "homegfs")?);
        let configdir = match get_string(&raw, "configdir").filter(|s| !s.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => homegfs.join("parm").join("config"),
        };
        let icsdir = get_string(&raw, "icsdir")
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let host = match (&self.host, raw.get("host")) {
            (Some(file), _) => HostInfo::from_mapping(file)?,
            (None, Some(Value::Mapping(map))) => HostInfo::from_mapping(map)?,
            (None, Some(Value::Null) | None) => HostInfo::default(),
            (None, Some(_)) => {
                return Err(ConfigError::Invalid {
                    key: "host".to_string(),
                    message: "must be a mapping".to_string(),
                })
            }
        };

        let case_settings = match raw.get("settings") {
            Some(Value::Mapping(map)) => Some(map.clone()),
            Some(Value::Null) | None => None,
            Some(_) => {
                return Err(ConfigError::Invalid {
                    key: "settings".to_string(),
                    message: "must be a mapping".to_string(),
                })
            }
        };

        let warm_start = start.warm_start_flag();
        raw.insert(Value::from("warm_start"), Value::from(warm_start));

        let settings = ExperimentSettings {
            pslot: string(&raw, "pslot")?,
            mode,
            app,
            start,
            idate,
            edate,
            resdet: number(&raw, "resdet")?,
            resens: number(&raw, "resens")?,
            nens: number(&raw, "nens")?,
            cdump: string(&raw, "cdump")?,
            gfs_cyc: number(&raw, "gfs_cyc")?,
            homegfs,
            configdir,
            comrot: PathBuf::from(string(&raw, "comrot")?),
            expdir: PathBuf::from(string(&raw, "expdir")?),
            icsdir,
            case_settings,
            host,
            warm_start,
            raw,
        };

        tracing::debug!(
            pslot = %settings.pslot,
            mode = %settings.mode,
            app = %settings.app,
            idate = %format_cycle(&settings.idate),
            "settings validated"
        );

        Ok(settings)
    }
}

fn string(settings: &Mapping, key: &str) -> Result<String, ConfigError> {
    get_string(settings, key).ok_or_else(|| ConfigError::MissingSetting(key.to_string()))
}

fn date(settings: &Mapping, key: &str) -> Result<NaiveDateTime, ConfigError> {
    let text = string(settings, key)?;
    parse_cycle(&text).map_err(|_| ConfigError::InvalidDate {
        key: key.to_string(),
        value: text,
    })
}

fn number(settings: &Mapping, key: &str) -> Result<u32, ConfigError> {
    let value = settings
        .get(key)
        .ok_or_else(|| ConfigError::MissingSetting(key.to_string()))?;
    let invalid = || ConfigError::InvalidNumber {
        key: key.to_string(),
        value: scalar_to_string(value).unwrap_or_else(|| format!("{:?}", value)),
    };
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(invalid),
        Value::String(s) => s.trim().parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Validated experiment settings
#[derive(Debug, Clone)]
pub struct ExperimentSettings {
    /// Experiment name
    pub pslot: String,
    pub mode: Mode,
    pub app: App,
    pub start: StartMode,
    /// First cycle
    pub idate: NaiveDateTime,
    /// Last cycle
    pub edate: NaiveDateTime,
    /// Deterministic resolution (C-number)
    pub resdet: u32,
    /// Ensemble resolution (C-number)
    pub resens: u32,
    /// Number of ensemble members
    pub nens: u32,
    pub cdump: String,
    pub gfs_cyc: u32,
    /// Workflow installation root
    pub homegfs: PathBuf,
    /// Directory holding the `config.*` templates
    pub configdir: PathBuf,
    /// COMROT root (without pslot)
    pub comrot: PathBuf,
    /// EXPDIR root (without pslot)
    pub expdir: PathBuf,
    /// Initial conditions archive
    pub icsdir: Option<PathBuf>,
    /// Variables to export from `config.case`
    pub case_settings: Option<Mapping>,
    pub host: HostInfo,
    /// `.true.` or `.false.`
    pub warm_start: &'static str,
    /// Merged mapping, including `warm_start`
    pub raw: Mapping,
}

impl ExperimentSettings {
    /// `<comrot>/<pslot>`
    pub fn comrot_dir(&self) -> PathBuf {
        self.comrot.join(&self.pslot)
    }

    /// `<expdir>/<pslot>`
    pub fn expdir_dir(&self) -> PathBuf {
        self.expdir.join(&self.pslot)
    }

    /// First cycle as `YYYYMMDDHH`
    pub fn idate_str(&self) -> String {
        format_cycle(&self.idate)
    }

    pub fn edate_str(&self) -> String {
        format_cycle(&self.edate)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
