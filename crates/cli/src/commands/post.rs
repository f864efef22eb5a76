// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gw post` and `gw prdgen` - Run a post-processing or product job

use crate::output;
use anyhow::Result;
use clap::Args;
use gw_adapters::{SystemShell, TracedShellAdapter};
use gw_core::settings::load_with_includes;
use gw_engine::{PostRunner, PostSettings, PrdgenSettings};
use std::path::PathBuf;

#[derive(Args)]
pub struct JobArgs {
    /// Path to the YAML file containing the job settings
    pub settings_file: PathBuf,
}

fn runner() -> PostRunner<TracedShellAdapter<SystemShell>> {
    PostRunner::new(TracedShellAdapter::new(SystemShell::new()))
}

pub async fn post(args: JobArgs) -> Result<()> {
    let raw = load_with_includes(&args.settings_file)?;
    output::print_settings("Running post using the following settings:", &raw)?;

    let settings = PostSettings::from_mapping(raw)?;
    runner().run(&settings).await?;

    println!("Post complete for {} f{}", settings.cdate, settings.fhr);
    Ok(())
}

pub async fn prdgen(args: JobArgs) -> Result<()> {
    let raw = load_with_includes(&args.settings_file)?;
    output::print_settings("Running prdgen using the following settings:", &raw)?;

    let settings = PrdgenSettings::from_mapping(raw)?;
    let cwd = std::env::current_dir()?;
    runner().run_prdgen(&cwd, &settings).await?;
    Ok(())
}
