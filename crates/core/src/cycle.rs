// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cycle times and forecast hours
//!
//! Cycles are written as `YYYYMMDDHH` everywhere in the workflow: in case
//! files, directory names, and the generated base configuration.

use chrono::{NaiveDateTime, TimeDelta};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Format used for cycle times
pub const CYCLE_FORMAT: &str = "%Y%m%d%H";

// strftime codes substituted into rendered namelists
#[allow(clippy::expect_used)]
static STRFTIME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%[YmdHMSyj%]").expect("constant regex pattern is valid"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CycleError {
    #[error("invalid cycle '{0}': expected YYYYMMDDHH")]
    InvalidCycle(String),
    #[error("invalid forecast hour '{0}': expected 'anl' or an integer")]
    InvalidForecastHour(String),
}

/// Parse a `YYYYMMDDHH` cycle
pub fn parse_cycle(text: &str) -> Result<NaiveDateTime, CycleError> {
    let text = text.trim();
    if text.len() != 10 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CycleError::InvalidCycle(text.to_string()));
    }
    // chrono needs minutes to build a NaiveDateTime
    NaiveDateTime::parse_from_str(&format!("{text}00"), "%Y%m%d%H%M")
        .map_err(|_| CycleError::InvalidCycle(text.to_string()))
}

/// Format a timestamp as a `YYYYMMDDHH` cycle
pub fn format_cycle(when: &NaiveDateTime) -> String {
    when.format(CYCLE_FORMAT).to_string()
}

/// Forecast hour of a post-processing job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastHour {
    /// The analysis, valid at the cycle time itself
    Analysis,
    /// A forecast lead time in hours
    Lead(i64),
}

impl ForecastHour {
    /// Offset from the cycle time, `None` when out of range
    pub fn offset(self) -> Option<TimeDelta> {
        match self {
            ForecastHour::Analysis => Some(TimeDelta::zero()),
            ForecastHour::Lead(hours) => TimeDelta::try_hours(hours),
        }
    }
}

impl FromStr for ForecastHour {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "anl" {
            return Ok(ForecastHour::Analysis);
        }
        s.parse::<i64>()
            .map(ForecastHour::Lead)
            .map_err(|_| CycleError::InvalidForecastHour(s.to_string()))
    }
}

impl fmt::Display for ForecastHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastHour::Analysis => write!(f, "anl"),
            ForecastHour::Lead(hours) => write!(f, "{:03}", hours),
        }
    }
}

/// Time at which the product of `cdate` and `fhr` is valid
pub fn verification_time(cdate: &str, fhr: &str) -> Result<NaiveDateTime, CycleError> {
    let cycle = parse_cycle(cdate)?;
    let hour: ForecastHour = fhr.parse()?;
    hour
        .offset()
        .and_then(|offset| cycle.checked_add_signed(offset))
        .ok_or_else(|| CycleError::InvalidForecastHour(fhr.trim().to_string()))
}

/// Replace strftime codes in `text` with fields of `when`
///
/// Only the codes the namelist templates use are recognized; any other
/// `%` sequence is left untouched.
pub fn substitute_time(text: &str, when: &NaiveDateTime) -> String {
    STRFTIME_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let code = &caps[0];
            if code == "%%" {
                "%".to_string()
            } else {
                when.format(code).to_string()
            }
        })
        .to_string()
}

#[cfg(test)]
#[path = "cycle_tests.rs"]
mod tests;
