// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command adapter
//!
//! External executables (the MPI launcher, the GRIB indexer, the DBN alert
//! command) are configured as shell snippets and run through `sh -c`.

mod system;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use system::SystemShell;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeShellAdapter, ShellCall};

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from shell commands
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to start `{cmd}`: {message}")]
    SpawnFailed { cmd: String, message: String },
    #[error("`{cmd}` exited with status {}", exit_status(.code))]
    NonZeroExit { cmd: String, code: Option<i32> },
    #[error("working directory does not exist: {0}")]
    MissingCwd(String),
}

fn exit_status(code: &Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| c.to_string())
}

/// Adapter for running shell commands to completion
#[async_trait]
pub trait ShellAdapter: Clone + Send + Sync + 'static {
    /// Run `cmd` in `cwd` with extra environment variables
    ///
    /// Blocks until the command exits. A non-zero exit is an error.
    async fn run(&self, cwd: &Path, cmd: &str, env: &[(String, String)]) -> Result<(), ShellError>;
}
