// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Waiting on upstream model output
//!
//! A trigger file signals that an upstream job has finished writing. The
//! wait checks for it a bounded number of times, sleeping a fixed interval
//! between checks:
//!
//! ```text
//! Waiting --file exists--> Ready
//! Waiting --missing------> Waiting (sleep interval)
//! Waiting --budget spent-> TimedOut
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WaitError {
    #[error("File {} does not exist after waiting {}s", .path.display(), .max.as_secs())]
    TimedOut { path: PathBuf, max: Duration },
    #[error("sleep interval must be greater than zero")]
    ZeroInterval,
}

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitState {
    Waiting,
    Ready,
    TimedOut,
}

/// Bounded wait for a trigger file
#[derive(Debug, Clone)]
pub struct TriggerWait {
    path: PathBuf,
    interval: Duration,
    max: Duration,
    max_checks: u64,
    checks: u64,
}

impl TriggerWait {
    /// Wait on `path`, checking every `interval` for at most `max`
    ///
    /// The file is checked `max / interval` times (at least once).
    pub fn new(
        path: impl Into<PathBuf>,
        interval: Duration,
        max: Duration,
    ) -> Result<Self, WaitError> {
        if interval.is_zero() {
            return Err(WaitError::ZeroInterval);
        }
        let max_checks = (max.as_millis() / interval.as_millis().max(1)).max(1) as u64;
        Ok(Self {
            path: path.into(),
            interval,
            max,
            max_checks,
            checks: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of checks performed so far
    pub fn checks(&self) -> u64 {
        self.checks
    }

    /// Perform one check and report the resulting state
    pub fn check(&mut self) -> WaitState {
        if self.checks >= self.max_checks {
            return WaitState::TimedOut;
        }
        self.checks += 1;
        if self.path.is_file() {
            WaitState::Ready
        } else {
            WaitState::Waiting
        }
    }

    /// Check until the file exists or the budget is spent
    pub async fn wait(mut self) -> Result<(), WaitError> {
        tracing::info!(
            path = %self.path.display(),
            interval_secs = self.interval.as_secs(),
            max_secs = self.max.as_secs(),
            "waiting for trigger file"
        );

        loop {
            match self.check() {
                WaitState::Ready => {
                    tracing::info!(checks = self.checks, "trigger file found");
                    return Ok(());
                }
                WaitState::TimedOut => {
                    tracing::error!(checks = self.checks, "trigger file never appeared");
                    return Err(WaitError::TimedOut {
                        path: self.path,
                        max: self.max,
                    });
                }
                WaitState::Waiting => {
                    tracing::debug!(checks = self.checks, "trigger file missing, sleeping");
                    tokio::time::sleep(self.interval).await;
                }
            }
        }
    }
}

/// Wait for `path` to exist, checking every `interval` for at most `max`
pub async fn wait_for_file(
    path: &Path,
    interval: Duration,
    max: Duration,
) -> Result<(), WaitError> {
    TriggerWait::new(path, interval, max)?.wait().await
}

#[cfg(test)]
#[path = "wait_tests.rs"]
mod tests;
