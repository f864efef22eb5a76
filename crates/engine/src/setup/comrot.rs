// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! COMROT population: initial-condition links

use crate::error::SetupError;
use gw_core::{ExperimentSettings, Mode};
use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

/// Bias-correction and radiance diagnostic files linked beside the control
/// restart
pub const AUXILIARY_FILES: &[&str] = &["abias", "abias_pc", "abias_air", "radstat"];

/// Link initial conditions from `icsdir` into `<comrot>/<pslot>`
///
/// Only cycled experiments with an `icsdir` link anything. Link sources are
/// not checked for existence. Returns the links created.
pub fn fill_comrot(settings: &ExperimentSettings) -> Result<Vec<PathBuf>, SetupError> {
    match (settings.mode, &settings.icsdir) {
        (Mode::Cycled, Some(icsdir)) => link_initial_conditions(settings, icsdir),
        (Mode::Cycled, None) => {
            tracing::info!("no icsdir given, nothing to link");
            Ok(Vec::new())
        }
        (Mode::ForecastOnly, _) => Ok(Vec::new()),
    }
}

fn link_initial_conditions(
    settings: &ExperimentSettings,
    icsdir: &Path,
) -> Result<Vec<PathBuf>, SetupError> {
    let cycle = settings.idate_str();
    let (ymd, hh) = cycle.split_at(8);
    let comrot = settings.comrot_dir();
    let source = icsdir.join(&cycle);
    let cdump = &settings.cdump;
    let mut links = Vec::new();

    let enkf_dir = comrot.join(format!("enkf{cdump}.{ymd}")).join(hh);
    for member in 1..=settings.nens {
        let mem = format!("mem{member:03}");
        let mem_dir = enkf_dir.join(&mem);
        fs::create_dir_all(&mem_dir).map_err(SetupError::io(&mem_dir))?;
        links.push(make_link(
            &source.join(format!("C{}", settings.resens)).join(&mem).join("RESTART"),
            &mem_dir.join("RESTART"),
        )?);
    }

    let det_dir = comrot.join(format!("{cdump}.{ymd}")).join(hh);
    fs::create_dir_all(&det_dir).map_err(SetupError::io(&det_dir))?;
    links.push(make_link(
        &source
            .join(format!("C{}", settings.resdet))
            .join("control")
            .join("RESTART"),
        &det_dir.join("RESTART"),
    )?);

    for name in AUXILIARY_FILES {
        let file = format!("{cdump}.t{hh}z.{name}");
        links.push(make_link(&source.join(&file), &det_dir.join(&file))?);
    }

    tracing::info!(
        count = links.len(),
        members = settings.nens,
        comrot = %comrot.display(),
        "linked initial conditions"
    );
    Ok(links)
}

fn make_link(target: &Path, link: &Path) -> Result<PathBuf, SetupError> {
    tracing::debug!(link = %link.display(), target = %target.display(), "linking");
    symlink(target, link).map_err(|source| SetupError::Link {
        link: link.to_path_buf(),
        target: target.to_path_buf(),
        source,
    })?;
    Ok(link.to_path_buf())
}

#[cfg(test)]
#[path = "comrot_tests.rs"]
mod tests;
