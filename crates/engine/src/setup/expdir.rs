// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! EXPDIR population: config files, `config.case` and `config.base`

use crate::error::SetupError;
use gw_core::settings::scalar_to_string;
use gw_core::{render_tokens, ExperimentSettings, Mode, TokenMap};
use serde_yaml::Mapping;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Template the base config is rendered from
pub const BASE_TEMPLATE: &str = "config.base.emc.dyn";
pub const BASE_CONFIG: &str = "config.base";
pub const CASE_CONFIG: &str = "config.case";

/// Copy every `config.*` file from `configdir` into `<expdir>/<pslot>`
///
/// Writes `config.case` afterwards when the case defines `settings`.
/// Returns the files copied, sorted by name.
pub fn fill_expdir(settings: &ExperimentSettings) -> Result<Vec<PathBuf>, SetupError> {
    let expdir = settings.expdir_dir();
    let configdir = &settings.configdir;

    let mut configs: Vec<PathBuf> = fs::read_dir(configdir)
        .map_err(SetupError::io(configdir))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_config_file(path))
        .collect();
    if configs.is_empty() {
        return Err(SetupError::NoConfigFiles(configdir.clone()));
    }
    configs.sort();

    let mut copied = Vec::with_capacity(configs.len());
    for config in &configs {
        let Some(name) = config.file_name() else {
            continue;
        };
        let dest = expdir.join(name);
        fs::copy(config, &dest).map_err(SetupError::io(config))?;
        copied.push(dest);
    }
    tracing::info!(count = copied.len(), expdir = %expdir.display(), "copied config files");

    if let Some(case_settings) = &settings.case_settings {
        write_case_config(&expdir.join(CASE_CONFIG), case_settings)?;
    }

    Ok(copied)
}

fn is_config_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("config."))
}

/// Write a bash script exporting each case setting, in file order
pub fn write_case_config(path: &Path, case_settings: &Mapping) -> Result<(), SetupError> {
    let name = path.display();
    let mut script = format!(
        "#! /usr/bin/env bash\n\
         \n\
         #\n\
         # Auto-generated by gw setup-expt\n\
         #\n\
         \n\
         echo \"BEGIN: {name}\"\n\
         \n\
         #\n\
         # Settings in this file will overwrite defaults in other config files\n\
         #\n\
         \n"
    );
    for (key, value) in case_settings {
        let (Some(key), Some(value)) = (scalar_to_string(key), scalar_to_string(value)) else {
            tracing::warn!(?key, "skipping non-scalar case setting");
            continue;
        };
        let _ = writeln!(script, "export {key}=\"{value}\"");
    }
    let _ = write!(script, "\necho \"END: {name}\"\n\n");

    fs::write(path, script).map_err(SetupError::io(path))?;
    tracing::info!(path = %path.display(), count = case_settings.len(), "wrote case config");
    Ok(())
}

/// `@KEY@` values substituted into the base config
pub fn base_config_tokens(settings: &ExperimentSettings) -> TokenMap {
    let host = &settings.host;
    let icsdir = settings
        .icsdir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();

    let mut tokens = TokenMap::new()
        .with("MACHINE", host.machine_upper())
        .with("PSLOT", &settings.pslot)
        .with("SDATE", settings.idate_str())
        .with("EDATE", settings.edate_str())
        .with("CASECTL", format!("C{}", settings.resdet))
        .with("HOMEgfs", settings.homegfs.display())
        .with("BASE_GIT", &host.base_git)
        .with("DMPDIR", &host.dmpdir)
        .with("NWPROD", &host.nwprod)
        .with("COMROOT", &host.comroot)
        .with("HOMEDIR", &host.homedir)
        .with("EXPDIR", settings.expdir.display())
        .with("ROTDIR", settings.comrot.display())
        .with("ICSDIR", icsdir)
        .with("STMP", &host.stmp)
        .with("PTMP", &host.ptmp)
        .with("NOSCRUB", &host.noscrub)
        .with("ACCOUNT", &host.account)
        .with("QUEUE", &host.queue)
        .with("QUEUE_SERVICE", &host.queue_service)
        .with("PARTITION_BATCH", &host.partition_batch)
        .with("EXP_WARM_START", settings.warm_start)
        .with("MODE", settings.mode)
        .with("CHGRP_RSTPROD", &host.chgrp_rstprod)
        .with("CHGRP_CMD", &host.chgrp_cmd)
        .with("HPSSARCH", &host.hpssarch)
        .with("LOCALARCH", &host.localarch)
        .with("ATARDIR", &host.atardir)
        .with("gfs_cyc", settings.gfs_cyc)
        .with("APP", settings.app);

    if settings.mode == Mode::Cycled {
        tokens.insert("CASEENS", format!("C{}", settings.resens));
        tokens.insert("NMEM_ENKF", settings.nens);
    }

    tokens
}

/// Render `config.base.emc.dyn` into `config.base` in `<expdir>/<pslot>`
///
/// Any existing `config.base` is replaced. Returns the written path.
pub fn edit_base_config(settings: &ExperimentSettings) -> Result<PathBuf, SetupError> {
    let expdir = settings.expdir_dir();
    let template_path = expdir.join(BASE_TEMPLATE);
    let output = expdir.join(BASE_CONFIG);

    if output.exists() {
        fs::remove_file(&output).map_err(SetupError::io(&output))?;
    }

    let template = fs::read_to_string(&template_path).map_err(SetupError::io(&template_path))?;
    let tokens = base_config_tokens(settings);
    fs::write(&output, render_tokens(&template, &tokens)).map_err(SetupError::io(&output))?;

    tracing::info!(path = %output.display(), tokens = tokens.len(), "edited base config");
    Ok(output)
}

#[cfg(test)]
#[path = "expdir_tests.rs"]
mod tests;
