// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Global workflow job engine: experiment setup, post and prdgen

mod error;
pub mod post;
pub mod setup;

#[cfg(test)]
mod testing;

pub use error::{PostError, SetupError};
pub use post::{PostRunner, PostSettings, PrdgenSettings};
pub use setup::{setup_experiment, DirOutcome, SetupReport};
