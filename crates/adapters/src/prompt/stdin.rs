// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal prompt

use super::{is_consent, PromptAdapter, PromptError};
use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Asks on stdout and reads one line from stdin
///
/// End of input declines.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PromptAdapter for StdinPrompt {
    async fn confirm(&self, question: &str) -> Result<bool, PromptError> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("{question} [y/N]: ").as_bytes())
            .await?;
        stdout.flush().await?;

        // Unbuffered so that a later prompt sees the next line of piped input
        let mut stdin = tokio::io::stdin();
        let mut line = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            if stdin.read(&mut byte).await? == 0 {
                if line.is_empty() {
                    return Ok(false);
                }
                break;
            }
            if byte[0] == b'\n' {
                break;
            }
            line.push(byte[0]);
        }

        Ok(is_consent(&String::from_utf8_lossy(&line)))
    }
}
