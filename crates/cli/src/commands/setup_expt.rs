// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gw setup-expt` - Create COMROT and EXPDIR for a new experiment

use crate::output;
use anyhow::Result;
use clap::Args;
use gw_adapters::{AssumeYes, PromptAdapter, StdinPrompt, TracedPromptAdapter};
use gw_core::{ExperimentSettings, SettingsBuilder};
use gw_engine::setup_experiment;
use std::path::PathBuf;

#[derive(Args)]
pub struct SetupExptArgs {
    /// YAML containing experiment settings
    #[arg(long = "case_file", alias = "case-file", value_name = "YAML")]
    pub case_file: PathBuf,

    /// YAML containing user paths
    #[arg(long = "user_file", alias = "user-file", value_name = "YAML")]
    pub user_file: Option<PathBuf>,

    /// YAML containing machine-specific values
    #[arg(long = "host_file", alias = "host-file", value_name = "YAML")]
    pub host_file: Option<PathBuf>,

    /// Parallel experiment name
    #[arg(long)]
    pub pslot: Option<String>,

    /// Full path to COMROT
    #[arg(long)]
    pub comrot: Option<PathBuf>,

    /// Full path to EXPDIR
    #[arg(long)]
    pub expdir: Option<PathBuf>,

    /// Over-write existing directories without asking
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl SetupExptArgs {
    /// Merge defaults, files and arguments into validated settings
    pub fn settings(&self) -> Result<ExperimentSettings> {
        let mut builder = SettingsBuilder::from_environment();
        if let Some(user_file) = &self.user_file {
            builder = builder.user_file(user_file)?;
        }
        builder = builder.case_file(&self.case_file)?;
        if let Some(host_file) = &self.host_file {
            builder = builder.host_file(host_file)?;
        }

        let settings = builder
            .set_opt("pslot", self.pslot.clone())
            .set_opt("comrot", self.comrot.as_ref().map(|p| p.display().to_string()))
            .set_opt("expdir", self.expdir.as_ref().map(|p| p.display().to_string()))
            .build()?;
        Ok(settings)
    }
}

pub async fn setup_expt(args: SetupExptArgs) -> Result<()> {
    let settings = args.settings()?;
    tracing::info!(
        pslot = %settings.pslot,
        mode = %settings.mode,
        app = %settings.app,
        idate = %settings.idate_str(),
        edate = %settings.edate_str(),
        "experiment settings validated"
    );

    if args.yes {
        run(&settings, TracedPromptAdapter::new(AssumeYes)).await
    } else {
        run(&settings, TracedPromptAdapter::new(StdinPrompt::new())).await
    }
}

async fn run<P: PromptAdapter>(settings: &ExperimentSettings, prompt: P) -> Result<()> {
    let report = setup_experiment(settings, &prompt).await?;
    output::print_setup_report(&report, &settings.comrot_dir(), &settings.expdir_dir());
    Ok(())
}
