// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator confirmation adapter

mod stdin;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use stdin::StdinPrompt;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakePrompt;

use async_trait::async_trait;
use thiserror::Error;

/// Answers that count as consent
pub const CONSENT_ANSWERS: &[&str] = &["y", "yes", "Y", "YES"];

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read answer: {0}")]
    Io(#[from] std::io::Error),
}

/// Adapter for yes/no questions to the operator
#[async_trait]
pub trait PromptAdapter: Clone + Send + Sync + 'static {
    /// Ask `question`; `Ok(true)` means the operator consented
    async fn confirm(&self, question: &str) -> Result<bool, PromptError>;
}

/// Whether a typed answer counts as consent
///
/// Anything other than the accepted spellings, including an empty line,
/// declines.
pub fn is_consent(answer: &str) -> bool {
    CONSENT_ANSWERS.contains(&answer.trim())
}

/// Consents to every question without asking
#[derive(Clone, Copy, Debug, Default)]
pub struct AssumeYes;

#[async_trait]
impl PromptAdapter for AssumeYes {
    async fn confirm(&self, question: &str) -> Result<bool, PromptError> {
        tracing::info!(question, "assuming yes");
        Ok(true)
    }
}
