// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for experiment setup and post-processing

use gw_adapters::{PromptError, ShellError};
use gw_core::{ConfigError, CycleError, WaitError};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while bootstrapping an experiment
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("prompt error: {0}")]
    Prompt(#[from] PromptError),
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to link {} -> {}: {source}", .link.display(), .target.display())]
    Link {
        link: PathBuf,
        target: PathBuf,
        source: io::Error,
    },
    #[error("no config files found in {}", .0.display())]
    NoConfigFiles(PathBuf),
}

impl SetupError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> SetupError + '_ {
        move |source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Errors that can occur while running post or product generation
#[derive(Debug, Error)]
pub enum PostError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid cycle time: {0}")]
    Cycle(#[from] CycleError),
    #[error(transparent)]
    Wait(#[from] WaitError),
    #[error("command error: {0}")]
    Shell(#[from] ShellError),
    #[error("{}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl PostError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> PostError + '_ {
        move |source| PostError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
