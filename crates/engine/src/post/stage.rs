// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Namelist rendering and work directory staging

use super::PostSettings;
use crate::error::PostError;
use gw_core::{render_braces, substitute_time, verification_time};
use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

/// Namelist file name UPP reads
pub const NAMELIST: &str = "itag";

/// Render the namelist template for the job's verification time
///
/// `{{ key }}` tokens are filled from the job settings first, then strftime
/// codes are replaced with `cdate + fhr`.
pub fn make_namelist(settings: &PostSettings) -> Result<String, PostError> {
    let tmpl_path = settings.in_work_dir(&settings.tmpl_file);
    let template = fs::read_to_string(&tmpl_path).map_err(PostError::io(&tmpl_path))?;

    let rendered = render_braces(&template, &settings.raw);
    let when = verification_time(&settings.cdate, &settings.fhr)?;
    Ok(substitute_time(&rendered, &when))
}

/// Links created in `work_dir`, as `(name, target)` pairs
pub fn staged_links(settings: &PostSettings) -> Vec<(PathBuf, &Path)> {
    let grib_table_name = settings
        .grib_table
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.grib_table.clone());

    vec![
        (PathBuf::from("postxconfig-NT.txt"), settings.flat_file.as_path()),
        (grib_table_name, settings.grib_table.as_path()),
        (PathBuf::from("eta_micro_lookup.dat"), settings.mp_file.as_path()),
        (PathBuf::from("atm_file"), settings.atm_file.as_path()),
        (PathBuf::from("sfc_file"), settings.sfc_file.as_path()),
        (PathBuf::from("upp.x"), settings.post_exe.as_path()),
    ]
}

/// Create `work_dir`, write the namelist and link the job inputs
///
/// Link targets are stored as given, so relative targets resolve from
/// `work_dir`. The process working directory is not changed.
pub fn stage_post(settings: &PostSettings) -> Result<(), PostError> {
    let work_dir = &settings.work_dir;
    fs::create_dir_all(work_dir).map_err(PostError::io(work_dir))?;

    let namelist = make_namelist(settings)?;
    let namelist_path = work_dir.join(NAMELIST);
    fs::write(&namelist_path, namelist).map_err(PostError::io(&namelist_path))?;

    for (name, target) in staged_links(settings) {
        let link = work_dir.join(name);
        symlink(target, &link).map_err(PostError::io(&link))?;
        tracing::debug!(link = %link.display(), target = %target.display(), "linked");
    }

    if settings.is_ens {
        // TODO: substitute the ensemble perturbation type into postxconfig-NT.txt
        tracing::warn!("ensemble perturbation substitution is not implemented");
    }

    tracing::info!(work_dir = %work_dir.display(), "staged post inputs");
    Ok(())
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod tests;
