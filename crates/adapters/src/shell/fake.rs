// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake shell adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ShellAdapter, ShellError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCall {
    pub cwd: PathBuf,
    pub cmd: String,
    pub env: Vec<(String, String)>,
}

/// Fake shell adapter for testing
///
/// Records every command. Commands containing a configured failure pattern
/// exit with status 1.
#[derive(Clone, Default)]
pub struct FakeShellAdapter {
    calls: Arc<Mutex<Vec<ShellCall>>>,
    fail_patterns: Arc<Mutex<Vec<String>>>,
}

impl FakeShellAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make commands containing `pattern` fail
    pub fn fail_on(&self, pattern: impl Into<String>) {
        self.fail_patterns
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(pattern.into());
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ShellCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Get the recorded command strings
    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.cmd).collect()
    }
}

#[async_trait]
impl ShellAdapter for FakeShellAdapter {
    async fn run(&self, cwd: &Path, cmd: &str, env: &[(String, String)]) -> Result<(), ShellError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ShellCall {
                cwd: cwd.to_path_buf(),
                cmd: cmd.to_string(),
                env: env.to_vec(),
            });

        let fails = self
            .fail_patterns
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .any(|p| cmd.contains(p.as_str()));
        if fails {
            return Err(ShellError::NonZeroExit {
                cmd: cmd.to_string(),
                code: Some(1),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
