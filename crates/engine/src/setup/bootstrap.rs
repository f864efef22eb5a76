// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Experiment directory bootstrap

use crate::error::SetupError;
use gw_adapters::PromptAdapter;
use std::fs;
use std::path::Path;

/// What happened to an experiment directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOutcome {
    /// The directory did not exist and will be created
    Created,
    /// The directory existed and was deleted after consent
    Replaced,
    /// The directory existed and the operator declined to overwrite it
    Kept,
}

impl DirOutcome {
    /// Whether the directory should be created and filled
    pub fn should_fill(self) -> bool {
        !matches!(self, DirOutcome::Kept)
    }
}

/// Ask before clearing an existing directory
///
/// A missing directory needs no question. An existing one is deleted
/// recursively only when the operator consents; otherwise it is left
/// untouched.
pub async fn query_and_clean<P: PromptAdapter>(
    dir: &Path,
    prompt: &P,
) -> Result<DirOutcome, SetupError> {
    if !dir.exists() {
        return Ok(DirOutcome::Created);
    }

    tracing::warn!(dir = %dir.display(), "directory already exists");
    let question = format!(
        "directory already exists in {}\nDo you wish to over-write",
        dir.display()
    );
    if !prompt.confirm(&question).await? {
        tracing::info!(dir = %dir.display(), "keeping existing directory");
        return Ok(DirOutcome::Kept);
    }

    fs::remove_dir_all(dir).map_err(SetupError::io(dir))?;
    tracing::info!(dir = %dir.display(), "removed existing directory");
    Ok(DirOutcome::Replaced)
}

#[cfg(test)]
#[path = "bootstrap_tests.rs"]
mod tests;
