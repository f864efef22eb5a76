// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use gw_engine::{DirOutcome, SetupReport};
use serde_yaml::Mapping;
use std::path::Path;

/// Print a settings mapping as YAML under a heading
pub fn print_settings(heading: &str, settings: &Mapping) -> Result<(), serde_yaml::Error> {
    let yaml = serde_yaml::to_string(settings)?;
    println!("{}", heading);
    print!("{}", yaml);
    Ok(())
}

/// Print what setup did to each directory and the base config notice
pub fn print_setup_report(report: &SetupReport, comrot: &Path, expdir: &Path) {
    print_outcome("COMROT", comrot, report.comrot);
    print_outcome("EXPDIR", expdir, report.expdir);
    if !report.links.is_empty() {
        println!("Linked {} initial-condition files", report.links.len());
    }

    if let Some(base) = &report.base_config {
        println!();
        println!("EDITED:  {} as per user input.", base.display());
        println!("DEFAULT: {}.emc.dyn is for reference only.", base.display());
        println!("Please verify and delete the default file before proceeding.");
        println!();
    }
}

fn print_outcome(label: &str, dir: &Path, outcome: DirOutcome) {
    match outcome {
        DirOutcome::Created => println!("{}: created {}", label, dir.display()),
        DirOutcome::Replaced => println!("{}: replaced {}", label, dir.display()),
        DirOutcome::Kept => println!("{}: kept existing {}", label, dir.display()),
    }
}
