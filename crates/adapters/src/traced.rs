// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::prompt::{PromptAdapter, PromptError};
use crate::shell::{ShellAdapter, ShellError};
use async_trait::async_trait;
use std::path::Path;
use tracing::Instrument;

/// Wrapper that adds tracing to any ShellAdapter
#[derive(Clone)]
pub struct TracedShellAdapter<S> {
    inner: S,
}

impl<S> TracedShellAdapter<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: ShellAdapter> ShellAdapter for TracedShellAdapter<S> {
    async fn run(&self, cwd: &Path, cmd: &str, env: &[(String, String)]) -> Result<(), ShellError> {
        let span = tracing::info_span!("shell.run", cwd = %cwd.display());

        async move {
            tracing::info!(cmd, env_count = env.len(), "starting");

            // Precondition: cwd must exist
            if !cwd.is_dir() {
                tracing::error!("working directory does not exist");
                return Err(ShellError::MissingCwd(cwd.display().to_string()));
            }

            let start = std::time::Instant::now();
            let result = self.inner.run(cwd, cmd, env).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    "command completed"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "command failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that records operator answers
#[derive(Clone)]
pub struct TracedPromptAdapter<P> {
    inner: P,
}

impl<P> TracedPromptAdapter<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: PromptAdapter> PromptAdapter for TracedPromptAdapter<P> {
    async fn confirm(&self, question: &str) -> Result<bool, PromptError> {
        let result = self.inner.confirm(question).await;
        match &result {
            Ok(answer) => tracing::info!(question, consent = answer, "operator answered"),
            Err(e) => tracing::error!(question, error = %e, "prompt failed"),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
