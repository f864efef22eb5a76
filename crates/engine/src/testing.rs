// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for engine tests

use crate::post::PostSettings;
use gw_core::settings::{default_settings, merge_into, parse_yaml};
use gw_core::{ExperimentSettings, SettingsBuilder};
use serde_yaml::Mapping;
use std::path::Path;

/// Parse an inline YAML mapping
pub(crate) fn yaml(content: &str) -> Mapping {
    parse_yaml(content, Path::new("inline.yaml")).unwrap()
}

/// Settings rooted in `root`, with COMROT and EXPDIR under it
pub(crate) fn experiment(root: &Path, case: &str) -> ExperimentSettings {
    SettingsBuilder::new(default_settings(&root.join("homegfs"), root))
        .case(yaml(case))
        .set("comrot", root.join("comrot").display().to_string())
        .set("expdir", root.join("expdir").display().to_string())
        .build()
        .unwrap()
}

/// Post job mapping with every input under `root`; `overrides` replace keys
pub(crate) fn post_mapping(root: &Path, overrides: &str) -> Mapping {
    let root = root.display();
    let mut settings = yaml(&format!(
        "work_dir: {root}/work
tmpl_file: {root}/itag.j2
cdate: 2021061512
fhr: '012'
atm_file: {root}/gfs.t12z.atmf012.nc
sfc_file: {root}/gfs.t12z.sfcf012.nc
flat_file: {root}/postxconfig-NT-GFS.txt
grib_table: {root}/params_grib2_tbl_new
mp_file: {root}/nam_micro_lookup.dat
post_exe: {root}/upp.x
trigger_file: {root}/gfs.t12z.logf012.txt
sleep_interval: 10
sleep_max: 60
mpi_run: srun -n 4
grib_idx_exe: grb2index
exe_log_file: upp.log
send_com: NO
send_dbn: NO
"
    ));
    merge_into(&mut settings, yaml(overrides));
    settings
}

pub(crate) fn post_settings(root: &Path, overrides: &str) -> PostSettings {
    PostSettings::from_mapping(post_mapping(root, overrides)).unwrap()
}
