// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-friendly error display with context and suggestions.
//!
//! Fatal errors are printed as:
//! - What went wrong (message)
//! - Why it might have happened (context)
//! - How to fix it (suggestions)

use gw_adapters::ShellError;
use gw_core::{ConfigError, WaitError};
use gw_engine::{PostError, SetupError};
use std::fmt;

/// Error with context and recovery suggestions for user-friendly display.
#[derive(Debug)]
pub struct GwError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl GwError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Add context about why this error might have happened.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    /// Add a suggestion for how to fix this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Describe a command failure, adding hints for known error kinds
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        let mut gw = GwError::new(err.to_string());
        for cause in err.chain() {
            if let Some(config) = cause.downcast_ref::<ConfigError>() {
                gw = gw.config_hints(config);
            } else if let Some(setup) = cause.downcast_ref::<SetupError>() {
                gw = gw.setup_hints(setup);
            } else if let Some(post) = cause.downcast_ref::<PostError>() {
                gw = gw.post_hints(post);
            } else if let Some(shell) = cause.downcast_ref::<ShellError>() {
                gw = gw.shell_hints(shell);
            }
        }
        gw
    }

    fn config_hints(self, err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingMandatory { .. } => self
                .with_context("Settings are validated before any directory is touched")
                .with_suggestion("Add mode, idate and edate to the case file"),
            ConfigError::IcsdirRequired { .. } => self
                .with_context("Coupled S2S applications start from staged initial conditions")
                .with_suggestion("Set icsdir in the case file or the user file"),
            ConfigError::Read { .. } => {
                self.with_suggestion("Check that the file exists and is readable")
            }
            ConfigError::Yaml { .. } | ConfigError::NotAMapping { .. } => {
                self.with_suggestion("Settings files must hold a YAML mapping of key: value")
            }
            _ => self,
        }
    }

    fn setup_hints(self, err: &SetupError) -> Self {
        match err {
            SetupError::NoConfigFiles(_) => self
                .with_context("configdir defaults to $HOMEgfs/parm/config")
                .with_suggestion("Set HOMEgfs to the workflow installation")
                .with_suggestion("Or set configdir in the user or case file"),
            SetupError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                self.with_suggestion("Check HOMEgfs, or set configdir in the user or case file")
            }
            SetupError::Link { .. } => self
                .with_context("Links are never overwritten")
                .with_suggestion("Remove the experiment's COMROT directory and rerun"),
            _ => self,
        }
    }

    fn post_hints(self, err: &PostError) -> Self {
        match err {
            PostError::Wait(WaitError::TimedOut { .. }) => self
                .with_context("The upstream forecast job may still be running, or it failed")
                .with_suggestion("Increase sleep_max, or rerun once the trigger file exists"),
            PostError::Wait(WaitError::ZeroInterval) => {
                self.with_suggestion("Set sleep_interval to a positive number of seconds")
            }
            _ => self,
        }
    }

    fn shell_hints(self, err: &ShellError) -> Self {
        match err {
            ShellError::NonZeroExit { .. } => {
                self.with_suggestion("Check exe_log_file for the executable's output")
            }
            _ => self,
        }
    }
}

impl fmt::Display for GwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for GwError {}
