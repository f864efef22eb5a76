// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gw prdgen` specs

use crate::prelude::*;

fn prdgen(project: &Project) -> Gw {
    project.gw().args(&["prdgen", "prdgen.yaml"])
}

#[test]
fn prdgen_sends_alerts_from_current_directory() {
    let project = Project::empty();
    project.file(
        "prdgen.yaml",
        "send_dbn: YES
dbn_alert: sh -c 'echo \"$0 $1\" >> alerts.txt'
dbn_signals:
  GFS_PGB2_0P50: gfs.t12z.pgrb2.0p50.f012
  GFS_PGB2_1P00: gfs.t12z.pgrb2.1p00.f012
",
    );

    prdgen(&project)
        .passes()
        .stdout_has("Running prdgen using the following settings:");

    similar_asserts::assert_eq!(
        project.read("alerts.txt"),
        "GFS_PGB2_0P50 gfs.t12z.pgrb2.0p50.f012\nGFS_PGB2_1P00 gfs.t12z.pgrb2.1p00.f012\n"
    );
}

#[test]
fn disabled_dbn_sends_nothing() {
    let project = Project::empty();
    project.file(
        "prdgen.yaml",
        "send_dbn: NO
dbn_alert: echo ALERT
dbn_signals:
  GFS_PGB2_0P50: gfs.t12z.pgrb2.0p50.f012
",
    );

    prdgen(&project).passes().stdout_lacks("ALERT GFS_PGB2_0P50");
}

#[test]
fn send_com_is_skipped() {
    let project = Project::empty();
    project.file("prdgen.yaml", "send_com: YES\nsend_dbn: NO\n");

    prdgen(&project).passes();

    assert_eq!(
        std::fs::read_dir(project.path()).unwrap().count(),
        1,
        "prdgen should leave only its settings file"
    );
}

#[test]
fn enabled_dbn_needs_an_alert_command() {
    let project = Project::empty();
    project.file(
        "prdgen.yaml",
        "send_dbn: YES
dbn_signals:
  GFS_PGB2_0P50: gfs.t12z.pgrb2.0p50.f012
",
    );

    prdgen(&project)
        .fails()
        .stderr_has("missing required setting: dbn_alert");
}
