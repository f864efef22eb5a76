// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gw post` specs
//!
//! UPP and the GRIB indexer are stood in for by shell one-liners, so each
//! job runs end to end against real files.

use crate::prelude::*;
use std::fs;

const NAMELIST_TEMPLATE: &str = "&model_inputs
 modelname='{{ model }}'
 datestr='%Y-%m-%d_%H:00:00'
/
";

/// Project with a namelist template, a trigger file and a settings file
/// built from `extra` on top of working defaults
///
/// `@ROOT@` in `extra` is replaced with the project directory.
fn job(extra: &str) -> Project {
    let project = Project::empty();
    project.file("itag.j2", NAMELIST_TEMPLATE);
    project.file("com/gfs.t12z.logf012.txt", "done\n");
    let root = project.path().display().to_string();
    let extra = extra.replace("@ROOT@", &root);
    project.file(
        "post.yaml",
        &format!(
            "work_dir: {root}/work
tmpl_file: {root}/itag.j2
model: GFS
cdate: 2021061512
fhr: '012'
atm_file: {root}/com/gfs.t12z.atmf012.nc
sfc_file: {root}/com/gfs.t12z.sfcf012.nc
flat_file: {root}/parm/postxconfig-NT-GFS.txt
grib_table: {root}/parm/params_grib2_tbl_new
mp_file: {root}/parm/nam_micro_lookup.dat
post_exe: {root}/exec/upp.x
trigger_file: {root}/com/gfs.t12z.logf012.txt
sleep_interval: 1
sleep_max: 5
mpi_run: echo mpi
grib_idx_exe: touch
exe_log_file: upp.log
send_com: NO
send_dbn: NO
{extra}"
        ),
    );
    project
}

fn post(project: &Project) -> Gw {
    project.gw().args(&["post", "post.yaml"])
}

#[test]
fn post_stages_and_runs_upp() {
    let project = job("");

    post(&project)
        .passes()
        .stdout_has("Running post using the following settings:")
        .stdout_has("mpi_run: echo mpi")
        .stdout_has("Post complete for 2021061512 f012");

    similar_asserts::assert_eq!(
        project.read("work/itag"),
        "&model_inputs
 modelname='GFS'
 datestr='2021-06-16_00:00:00'
/
"
    );
    assert_eq!(project.read("work/upp.log"), "mpi upp.x\n");
    assert!(project.path().join("work/pgifile").is_file());

    let work = project.path().join("work");
    assert_eq!(
        fs::read_link(work.join("postxconfig-NT.txt")).unwrap(),
        project.path().join("parm/postxconfig-NT-GFS.txt")
    );
    assert_eq!(
        fs::read_link(work.join("params_grib2_tbl_new")).unwrap(),
        project.path().join("parm/params_grib2_tbl_new")
    );
    assert_eq!(
        fs::read_link(work.join("upp.x")).unwrap(),
        project.path().join("exec/upp.x")
    );
    for name in ["eta_micro_lookup.dat", "atm_file", "sfc_file"] {
        assert!(work.join(name).is_symlink(), "{name} should be linked");
    }
}

#[test]
fn upp_sees_output_file_name() {
    let project = job("");
    let settings = project.read("post.yaml").replace(
        "mpi_run: echo mpi",
        "mpi_run: printenv PGBOUT > pgbout.txt; echo",
    );
    project.file("post.yaml", &settings);

    post(&project).passes();

    assert_eq!(project.read("work/pgbout.txt"), "pgbfile\n");
}

#[test]
fn analysis_uses_cycle_time() {
    let project = job("");
    let settings = project.read("post.yaml").replace("fhr: '012'", "fhr: anl");
    project.file("post.yaml", &settings);

    post(&project)
        .passes()
        .stdout_has("Post complete for 2021061512 fanl");

    assert!(project
        .read("work/itag")
        .contains("datestr='2021-06-15_12:00:00'"));
}

#[test]
fn send_com_copies_grib_output() {
    let project = job(
        "grib_out: @ROOT@/com/gfs.t12z.master.grb2f012
grib_idx_out: @ROOT@/com/gfs.t12z.master.grb2if012
",
    );
    let settings = project
        .read("post.yaml")
        .replace("mpi_run: echo mpi", "mpi_run: echo grib > pgbfile; echo")
        .replace("grib_idx_exe: touch", "grib_idx_exe: cp")
        .replace("send_com: NO", "send_com: YES");
    project.file("post.yaml", &settings);

    post(&project).passes();

    assert_eq!(project.read("com/gfs.t12z.master.grb2f012"), "grib\n");
    assert_eq!(project.read("com/gfs.t12z.master.grb2if012"), "grib\n");
}

#[test]
fn send_com_without_destination_fails() {
    let project = job("");
    let settings = project.read("post.yaml").replace("send_com: NO", "send_com: YES");
    project.file("post.yaml", &settings);

    post(&project)
        .fails()
        .stderr_has("missing required setting: grib_out");

    assert!(!project.path().join("work").exists());
}

#[test]
fn send_dbn_fires_each_signal() {
    let project = job(
        "dbn_alert: echo ALERT
dbn_signals:
  GFS_PGB2_0P25: com/gfs.t12z.pgrb2.0p25.f012
  GFS_PGB2_0P25_WIDX: com/gfs.t12z.pgrb2.0p25.f012.idx
",
    );
    let settings = project.read("post.yaml").replace("send_dbn: NO", "send_dbn: YES");
    project.file("post.yaml", &settings);

    let output = post(&project)
        .passes()
        .stdout_has("ALERT GFS_PGB2_0P25 com/gfs.t12z.pgrb2.0p25.f012\n")
        .stdout_has("ALERT GFS_PGB2_0P25_WIDX com/gfs.t12z.pgrb2.0p25.f012.idx\n");

    let first = output.stdout.find("ALERT GFS_PGB2_0P25 ").unwrap();
    let second = output.stdout.find("ALERT GFS_PGB2_0P25_WIDX").unwrap();
    assert!(first < second, "alerts should fire in file order");
}

#[test]
fn includes_override_top_level_settings() {
    let project = job(
        "include:
  - mpi_run: echo first
  - mpi_run: echo included
",
    );
    let settings = project.read("post.yaml").replace("mpi_run: echo mpi", "mpi_run: exit 9;");
    project.file("post.yaml", &settings);

    post(&project).passes().stdout_lacks("include:");

    assert_eq!(project.read("work/upp.log"), "included upp.x\n");
}

#[test]
fn missing_trigger_file_times_out() {
    let project = job("");
    fs::remove_file(project.path().join("com/gfs.t12z.logf012.txt")).unwrap();
    let settings = project.read("post.yaml").replace("sleep_max: 5", "sleep_max: 1");
    project.file("post.yaml", &settings);

    post(&project)
        .fails()
        .stderr_has("does not exist after waiting 1s")
        .stderr_has("Increase sleep_max");

    assert!(!project.path().join("work/upp.log").exists());
}

#[test]
fn zero_sleep_interval_fails_before_staging() {
    let project = job("");
    let settings = project
        .read("post.yaml")
        .replace("sleep_interval: 1", "sleep_interval: 0");
    project.file("post.yaml", &settings);

    post(&project)
        .fails()
        .stderr_has("invalid setting sleep_interval: must be greater than zero");

    assert!(!project.path().join("work").exists());
}

#[test]
fn failing_upp_stops_the_job() {
    let project = job("");
    let settings = project.read("post.yaml").replace("mpi_run: echo mpi", "mpi_run: exit 3;");
    project.file("post.yaml", &settings);

    post(&project)
        .fails()
        .stderr_has("exited with status 3")
        .stderr_has("Check exe_log_file")
        .stdout_lacks("Post complete");

    assert!(!project.path().join("work/pgifile").exists());
}

#[test]
fn staging_twice_fails_on_existing_links() {
    let project = job("");
    post(&project).passes();

    post(&project).fails().stderr_has("File exists");
}
