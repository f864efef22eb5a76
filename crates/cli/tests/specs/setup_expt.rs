// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gw setup-expt` specs
//!
//! Verify experiment bootstrap: validation, directory creation, links,
//! config copies and the rendered base config.

use crate::prelude::*;
use std::fs;

const FORECAST_ONLY: &str = "mode: forecast-only
idate: 2021061512
edate: 2021061600
app: ATMW
";

fn setup(project: &Project) -> Gw {
    let comrot = project.abs("comrot");
    let expdir = project.abs("expdir");
    project.gw().args(&[
        "setup-expt",
        "--case_file",
        "case.yaml",
        "--comrot",
        &comrot,
        "--expdir",
        &expdir,
    ])
}

#[test]
fn forecast_only_renders_base_config() {
    let project = Project::with_configs();
    project.file("case.yaml", FORECAST_ONLY);

    setup(&project)
        .passes()
        .stdout_has("COMROT: created")
        .stdout_has("EDITED:  ")
        .stdout_has("config.base as per user input.")
        .stdout_has("config.base.emc.dyn is for reference only.");

    similar_asserts::assert_eq!(
        project.read("expdir/test/config.base"),
        "export MACHINE=\"\"
export PSLOT=\"test\"
export SDATE=2021061512
export EDATE=2021061600
export CASE=\"C384\"
export EXP_WARM_START=\".false.\"
export MODE=\"forecast-only\"
export APP=ATMW
export UNKNOWN=@NOT_A_TOKEN@
"
    );
    assert_eq!(project.read("expdir/test/config.fcst"), "export FHMAX=120\n");
    assert!(project.path().join("comrot/test").is_dir());
}

#[test]
fn cycled_links_initial_conditions() {
    let project = Project::with_configs();
    let ics = project.abs("ics");
    project.file(
        "case.yaml",
        &format!("mode: cycled\nidate: 2021061512\nedate: 2021061600\nnens: 2\nicsdir: {ics}\n"),
    );

    setup(&project)
        .passes()
        .stdout_has("Linked 7 initial-condition files");

    let comrot = project.path().join("comrot/test");
    assert_eq!(
        fs::read_link(comrot.join("enkfgdas.20210615/12/mem002/RESTART")).unwrap(),
        project.path().join("ics/2021061512/C192/mem002/RESTART")
    );
    assert_eq!(
        fs::read_link(comrot.join("gdas.20210615/12/RESTART")).unwrap(),
        project.path().join("ics/2021061512/C384/control/RESTART")
    );
    assert!(comrot.join("gdas.20210615/12/gdas.t12z.radstat").is_symlink());
}

#[test]
fn declining_overwrite_keeps_prior_contents() {
    let project = Project::with_configs();
    project.file("case.yaml", FORECAST_ONLY);
    project.file("expdir/test/config.base", "hand edited\n");

    setup(&project)
        .stdin("n\n")
        .passes()
        .stdout_has("Do you wish to over-write")
        .stdout_has("EXPDIR: kept existing")
        .stdout_lacks("EDITED:");

    assert_eq!(project.read("expdir/test/config.base"), "hand edited\n");
    assert!(!project.path().join("expdir/test/config.fcst").exists());
}

#[test]
fn consenting_replaces_existing_directory() {
    let project = Project::with_configs();
    project.file("case.yaml", FORECAST_ONLY);
    project.file("expdir/test/stale.txt", "old\n");

    setup(&project)
        .stdin("YES\n")
        .passes()
        .stdout_has("EXPDIR: replaced");

    assert!(!project.path().join("expdir/test/stale.txt").exists());
    assert!(project.path().join("expdir/test/config.base").is_file());
}

#[test]
fn yes_flag_skips_questions() {
    let project = Project::with_configs();
    project.file("case.yaml", FORECAST_ONLY);
    project.file("comrot/test/old.txt", "old\n");
    project.file("expdir/test/old.txt", "old\n");

    setup(&project)
        .args(&["--yes"])
        .passes()
        .stdout_lacks("Do you wish to over-write")
        .stdout_has("COMROT: replaced")
        .stdout_has("EXPDIR: replaced");
}

#[test]
fn case_settings_become_config_case() {
    let project = Project::with_configs();
    project.file(
        "case.yaml",
        &format!("{FORECAST_ONLY}settings:\n  FHMAX_GFS: 120\n  DO_AERO: NO\n"),
    );

    setup(&project).passes();

    let script = project.read("expdir/test/config.case");
    let exports: Vec<&str> = script.lines().filter(|l| l.starts_with("export")).collect();
    similar_asserts::assert_eq!(
        exports,
        vec!["export FHMAX_GFS=\"120\"", "export DO_AERO=\"NO\""]
    );
}

#[test]
fn arguments_override_files() {
    let project = Project::with_configs();
    project.file("case.yaml", &format!("{FORECAST_ONLY}pslot: from_case\n"));
    project.file(
        "user.yaml",
        &format!(
            "comrot: {}\nexpdir: {}\nhost:\n  machine: hera\n",
            project.abs("user_comrot"),
            project.abs("user_expdir")
        ),
    );

    project
        .gw()
        .args(&[
            "setup-expt",
            "--case-file",
            "case.yaml",
            "--user-file",
            "user.yaml",
            "--pslot",
            "from_cli",
        ])
        .passes();

    let base = project.read("user_expdir/from_cli/config.base");
    assert!(base.contains("export PSLOT=\"from_cli\""));
    assert!(base.contains("export MACHINE=\"HERA\""));
    assert!(project.path().join("user_comrot/from_cli").is_dir());
}

#[test]
fn host_file_overrides_host_settings() {
    let project = Project::with_configs();
    project.file("case.yaml", &format!("{FORECAST_ONLY}host:\n  machine: hera\n"));
    project.file("host.yaml", "machine: orion\naccount: fv3-cpu\n");

    setup(&project).args(&["--host_file", "host.yaml"]).passes();

    assert!(project
        .read("expdir/test/config.base")
        .contains("export MACHINE=\"ORION\""));
}

#[test]
fn missing_mandatory_settings_fail() {
    let project = Project::with_configs();
    project.file("case.yaml", "mode: cycled\n");

    setup(&project)
        .fails()
        .stderr_has("mode, idate, edate")
        .stderr_has("Add mode, idate and edate to the case file");

    assert!(!project.path().join("expdir").exists());
}

#[test]
fn unknown_app_fails() {
    let project = Project::with_configs();
    project.file(
        "case.yaml",
        "mode: forecast-only\nidate: 2021061512\nedate: 2021061600\napp: ATAW\n",
    );

    setup(&project).fails().stderr_has("app must be one of");
}

#[test]
fn s2s_without_icsdir_fails() {
    let project = Project::with_configs();
    project.file(
        "case.yaml",
        "mode: forecast-only\nidate: 2021061512\nedate: 2021061600\napp: S2SW\n",
    );

    setup(&project)
        .fails()
        .stderr_has("icsdir must be specified")
        .stderr_has("Set icsdir");
}

#[test]
fn s2s_with_empty_icsdir_fails() {
    let project = Project::with_configs();
    project.file(
        "case.yaml",
        "mode: cycled\nidate: 2021061512\nedate: 2021061600\napp: S2S\nicsdir: ''\n",
    );

    setup(&project).fails().stderr_has("icsdir must be specified");

    assert!(!project.path().join("comrot").exists());
}

#[test]
fn empty_configdir_fails() {
    let project = Project::empty();
    project.file("case.yaml", FORECAST_ONLY);
    fs::create_dir_all(project.path().join("homegfs/parm/config")).unwrap();

    setup(&project)
        .fails()
        .stderr_has("no config files found in")
        .stderr_has("Set HOMEgfs");
}

#[test]
fn missing_configdir_reports_the_os_error() {
    let project = Project::empty();
    project.file("case.yaml", FORECAST_ONLY);

    setup(&project)
        .fails()
        .stderr_has("homegfs/parm/config: No such file or directory")
        .stderr_has("Check HOMEgfs");
}
