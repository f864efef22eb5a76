// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Post-processing and product generation jobs
//!
//! A post job runs in five steps: stage the work directory, wait for the
//! model's trigger file, run UPP and the GRIB indexer, copy the output to
//! COM, and send DBN alerts. Product generation only sends the alerts.

mod settings;
mod stage;

pub use settings::{DbnSettings, PostSettings, PrdgenSettings, ENABLED};
pub use stage::{make_namelist, stage_post, staged_links, NAMELIST};

use crate::error::PostError;
use gw_adapters::ShellAdapter;
use gw_core::{wait_for_file, ConfigError};
use std::fs;
use std::path::Path;
use tracing::Instrument;

/// GRIB2 output file UPP writes in the work directory
pub const PGBFILE: &str = "pgbfile";
/// Index of [`PGBFILE`]
pub const PGIFILE: &str = "pgifile";

/// Runs post and prdgen jobs through a shell adapter
#[derive(Clone)]
pub struct PostRunner<S> {
    shell: S,
}

impl<S: ShellAdapter> PostRunner<S> {
    pub fn new(shell: S) -> Self {
        Self { shell }
    }

    /// Run a full post job
    pub async fn run(&self, settings: &PostSettings) -> Result<(), PostError> {
        let span = tracing::info_span!("post", cdate = %settings.cdate, fhr = %settings.fhr);
        self.run_steps(settings).instrument(span).await
    }

    async fn run_steps(&self, settings: &PostSettings) -> Result<(), PostError> {
        stage_post(settings)?;
        wait_for_file(
            &settings.in_work_dir(&settings.trigger_file),
            settings.sleep_interval,
            settings.sleep_max,
        )
        .await?;
        self.execute(settings).await?;

        if settings.send_com {
            send_com(settings)?;
        }
        if settings.dbn.enabled {
            self.send_dbn(&settings.work_dir, &settings.dbn).await?;
        }
        Ok(())
    }

    /// Run UPP under MPI, then index its output
    ///
    /// Expects a staged work directory. Both commands append to
    /// `exe_log_file`.
    pub async fn execute(&self, settings: &PostSettings) -> Result<(), PostError> {
        let work_dir = &settings.work_dir;
        let namelist_path = work_dir.join(NAMELIST);
        let namelist =
            fs::read_to_string(&namelist_path).map_err(PostError::io(&namelist_path))?;
        tracing::info!(
            post_exe = %settings.post_exe.display(),
            exe_log_file = %settings.exe_log_file,
            "executing upp.x with namelist:\n{namelist}"
        );

        let env = [("PGBOUT".to_string(), PGBFILE.to_string())];
        let upp = format!("{} upp.x >> {}", settings.mpi_run, settings.exe_log_file);
        self.shell.run(work_dir, &upp, &env).await?;

        let index = format!(
            "{} {PGBFILE} {PGIFILE} >> {}",
            settings.grib_idx_exe, settings.exe_log_file
        );
        self.shell.run(work_dir, &index, &[]).await?;
        Ok(())
    }

    /// Fire one alert per configured signal, in order
    pub async fn send_dbn(&self, cwd: &Path, dbn: &DbnSettings) -> Result<(), PostError> {
        for (signal, file) in &dbn.signals {
            tracing::info!(signal, file, "sending DBN alert");
            self.shell.run(cwd, &dbn.command(signal, file), &[]).await?;
        }
        Ok(())
    }

    /// Run a product-generation job from `cwd`
    pub async fn run_prdgen(
        &self,
        cwd: &Path,
        settings: &PrdgenSettings,
    ) -> Result<(), PostError> {
        if settings.send_com {
            tracing::info!("send_com is not performed for prdgen, skipping");
        }
        if settings.dbn.enabled {
            self.send_dbn(cwd, &settings.dbn).await?;
        }
        Ok(())
    }
}

/// Copy the GRIB output and its index to their COM destinations
pub fn send_com(settings: &PostSettings) -> Result<(), PostError> {
    let work_dir = &settings.work_dir;
    let copies = [
        (PGBFILE, settings.grib_out.as_deref(), "grib_out"),
        (PGIFILE, settings.grib_idx_out.as_deref(), "grib_idx_out"),
    ];
    for (file, dest, key) in copies {
        let dest = dest.ok_or_else(|| ConfigError::MissingSetting(key.to_string()))?;
        let source = work_dir.join(file);
        let dest = settings.in_work_dir(dest);
        fs::copy(&source, &dest).map_err(PostError::io(&source))?;
        tracing::info!(from = %source.display(), to = %dest.display(), "copied to COM");
    }
    Ok(())
}

#[cfg(test)]
#[path = "post_tests.rs"]
mod tests;
