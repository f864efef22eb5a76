// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Top-level CLI specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    Project::empty()
        .gw()
        .args(&["--help"])
        .passes()
        .stdout_has("setup-expt")
        .stdout_has("post")
        .stdout_has("prdgen");
}

#[test]
fn setup_expt_help_shows_underscore_flags() {
    Project::empty()
        .gw()
        .args(&["setup-expt", "--help"])
        .passes()
        .stdout_has("--case_file")
        .stdout_has("--user_file")
        .stdout_has("--host_file")
        .stdout_has("--yes");
}

#[test]
fn missing_settings_file_is_reported() {
    Project::empty()
        .gw()
        .args(&["post", "nope.yaml"])
        .fails()
        .stderr_has("error: failed to read nope.yaml")
        .stderr_has("suggestions:");
}

#[test]
fn non_mapping_settings_file_is_reported() {
    let project = Project::empty();
    project.file("list.yaml", "- a\n- b\n");

    project
        .gw()
        .args(&["prdgen", "list.yaml"])
        .fails()
        .stderr_has("must contain a mapping at the top level");
}
