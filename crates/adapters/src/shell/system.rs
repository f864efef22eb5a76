// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sh -c` shell adapter

use super::{ShellAdapter, ShellError};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Runs commands with the system `sh`, inheriting stdio
#[derive(Clone, Debug)]
pub struct SystemShell {
    shell: String,
}

impl SystemShell {
    pub fn new() -> Self {
        Self {
            shell: "sh".to_string(),
        }
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShellAdapter for SystemShell {
    async fn run(&self, cwd: &Path, cmd: &str, env: &[(String, String)]) -> Result<(), ShellError> {
        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(cmd)
            .current_dir(cwd)
            .envs(env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .status()
            .await
            .map_err(|e| ShellError::SpawnFailed {
                cmd: cmd.to_string(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(ShellError::NonZeroExit {
                cmd: cmd.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
