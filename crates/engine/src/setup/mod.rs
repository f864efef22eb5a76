// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Experiment setup
//!
//! Bootstraps `<comrot>/<pslot>` and `<expdir>/<pslot>` for a validated
//! experiment. Both directories are queried before either is touched; a
//! directory the operator chose to keep is neither created nor filled.

mod bootstrap;
mod comrot;
mod expdir;

pub use bootstrap::{query_and_clean, DirOutcome};
pub use comrot::{fill_comrot, AUXILIARY_FILES};
pub use expdir::{
    base_config_tokens, edit_base_config, fill_expdir, write_case_config, BASE_CONFIG,
    BASE_TEMPLATE, CASE_CONFIG,
};

use crate::error::SetupError;
use gw_adapters::PromptAdapter;
use gw_core::ExperimentSettings;
use std::fs;
use std::path::PathBuf;
use tracing::Instrument;

/// Result of a setup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub comrot: DirOutcome,
    pub expdir: DirOutcome,
    /// Initial-condition links made in COMROT
    pub links: Vec<PathBuf>,
    /// Config files copied into EXPDIR
    pub configs: Vec<PathBuf>,
    /// The rendered `config.base`, when EXPDIR was filled
    pub base_config: Option<PathBuf>,
}

/// Create and fill the experiment directories
pub async fn setup_experiment<P: PromptAdapter>(
    settings: &ExperimentSettings,
    prompt: &P,
) -> Result<SetupReport, SetupError> {
    let span = tracing::info_span!("setup", pslot = %settings.pslot, mode = %settings.mode);
    run_setup(settings, prompt).instrument(span).await
}

async fn run_setup<P: PromptAdapter>(
    settings: &ExperimentSettings,
    prompt: &P,
) -> Result<SetupReport, SetupError> {
    let comrot_dir = settings.comrot_dir();
    let expdir_dir = settings.expdir_dir();

    let comrot = query_and_clean(&comrot_dir, prompt).await?;
    let expdir = query_and_clean(&expdir_dir, prompt).await?;

    let mut report = SetupReport {
        comrot,
        expdir,
        links: Vec::new(),
        configs: Vec::new(),
        base_config: None,
    };

    if comrot.should_fill() {
        fs::create_dir_all(&comrot_dir).map_err(SetupError::io(&comrot_dir))?;
        report.links = fill_comrot(settings)?;
    }

    if expdir.should_fill() {
        fs::create_dir_all(&expdir_dir).map_err(SetupError::io(&expdir_dir))?;
        report.configs = fill_expdir(settings)?;
        report.base_config = Some(edit_base_config(settings)?);
    }

    tracing::info!(?comrot, ?expdir, links = report.links.len(), "setup finished");
    Ok(report)
}

#[cfg(test)]
#[path = "setup_tests.rs"]
mod tests;
