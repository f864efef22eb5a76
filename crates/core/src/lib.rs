// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gw-core: settings, templates and timing for the global workflow tools
//!
//! This crate provides:
//! - Layered YAML settings with validation into typed experiment settings
//! - `@KEY@` and `{{ key }}` template substitution
//! - Cycle time and forecast hour arithmetic
//! - Bounded waiting on trigger files

pub mod cycle;
pub mod settings;
pub mod template;
pub mod wait;

pub use cycle::{
    format_cycle, parse_cycle, substitute_time, verification_time, CycleError, ForecastHour,
};
pub use settings::{
    App, ConfigError, ExperimentSettings, HostInfo, Mode, SettingsBuilder, StartMode,
};
pub use template::{render_braces, render_tokens, TokenMap};
pub use wait::{wait_for_file, TriggerWait, WaitError, WaitState};
