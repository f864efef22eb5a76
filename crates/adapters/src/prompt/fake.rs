// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake prompt for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{is_consent, PromptAdapter, PromptError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Scripted prompt for testing
///
/// Answers are consumed in order; once they run out every question is
/// declined.
#[derive(Clone, Default)]
pub struct FakePrompt {
    answers: Arc<Mutex<VecDeque<String>>>,
    questions: Arc<Mutex<Vec<String>>>,
}

impl FakePrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompt that gives the typed answers in order
    pub fn answering<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompt = Self::default();
        prompt
            .answers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend(answers.into_iter().map(Into::into));
        prompt
    }

    /// Questions asked so far
    pub fn questions(&self) -> Vec<String> {
        self.questions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl PromptAdapter for FakePrompt {
    async fn confirm(&self, question: &str) -> Result<bool, PromptError> {
        self.questions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(question.to_string());

        let answer = self
            .answers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .unwrap_or_default();
        Ok(is_consent(&answer))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
