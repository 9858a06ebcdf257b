//! The whole run: merged grid, then grid + job script + submission for every tile

use std::fs;

use anyhow::{bail, Context, Result};
use log::info;

use crate::batch::outcome::SubmitOutcome;
use crate::batch::script::write_script;
use crate::batch::submit::BatchQueue;
use crate::config::{Config, SubmitPolicy};
use crate::grid::coords::{global_axes, tile_axes};
use crate::grid::write::{write_grid, LOCAL_GRID};
use crate::tile::tiling::{Tile, Tiling};
use crate::WorkingDirectory;

/// Per-run options that aren't part of the domain configuration
#[derive(Clone, Copy, Debug, Default)]
pub struct RunOptions {
    pub dry_run: bool,
    pub policy: SubmitPolicy,
}

/// Submission counts for a completed run, `tiles == submitted + failed + skipped`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub tiles: usize,
    pub submitted: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &SubmitOutcome) {
        self.tiles += 1;
        match outcome {
            SubmitOutcome::Submitted => self.submitted += 1,
            SubmitOutcome::Skipped => self.skipped += 1,
            SubmitOutcome::NonZeroExit(_) | SubmitOutcome::SpawnFailure(_) => self.failed += 1,
        }
    }
}

/// Write the merged grid, then stage and submit every tile in longitude-major order
///
/// Filesystem and grid-writing errors abort the run. Submission failures are counted and only
/// stop the run under [`SubmitPolicy::Abort`].
pub fn run(config: &Config, options: RunOptions) -> Result<RunSummary> {
    config.validate()?;
    let domain = &config.domain;
    let tiling = Tiling::new(domain);
    info!("Tiling domain into {} x {} tiles", tiling.lon_bins.len(), tiling.lat_bins.len());

    write_grid(&config.merged_grid, &global_axes(domain, &tiling))?;

    let wd = WorkingDirectory { path: config.output_dir.clone() };
    fs::create_dir_all(&wd.path)
        .with_context(|| format!("Can't create output directory {}", wd.path.display()))?;

    let queue = BatchQueue::new(&config.batch, options.dry_run);
    let mut summary = RunSummary::default();
    for tile in tiling.tiles() {
        let outcome = run_tile(config, &wd, &queue, &tile)?;
        summary.record(&outcome);
        if outcome.is_failure() && options.policy == SubmitPolicy::Abort {
            bail!(
                "Submission of {} {}, stopping (--on-submit-failure {})",
                tile.dir_name(),
                outcome,
                options.policy
            );
        }
    }

    info!(
        "{} tiles: {} submitted, {} failed, {} skipped",
        summary.tiles, summary.submitted, summary.failed, summary.skipped
    );
    Ok(summary)
}

/// Stage one tile directory and hand its job script to the batch queue
fn run_tile(
    config: &Config,
    wd: &WorkingDirectory,
    queue: &BatchQueue,
    tile: &Tile,
) -> Result<SubmitOutcome> {
    let tile_wd = WorkingDirectory { path: tile.dir(&wd.path) };
    info!("Creating tile {}", tile_wd.path.display());
    fs::create_dir_all(&tile_wd.path)
        .with_context(|| format!("Can't create tile directory {}", tile_wd.path.display()))?;

    write_grid(&tile_wd.path.join(LOCAL_GRID), &tile_axes(&config.domain, tile))?;
    let job = write_script(&tile_wd.path, &config.template_namelist, &config.sosie_exe)?;

    Ok(queue.submit(&job))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_outcomes() {
        let mut summary = RunSummary::default();
        summary.record(&SubmitOutcome::Submitted);
        summary.record(&SubmitOutcome::NonZeroExit(Some(3)));
        summary.record(&SubmitOutcome::SpawnFailure("gone".to_string()));
        summary.record(&SubmitOutcome::Skipped);
        assert_eq!(summary, RunSummary { tiles: 4, submitted: 1, failed: 2, skipped: 1 });
    }

    #[test]
    fn invalid_config_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.output_dir = dir.path().join("out");
        config.merged_grid = dir.path().join("merged.nc");
        config.domain.delta_lon = -1.;

        assert!(run(&config, RunOptions::default()).is_err());
        assert!(!config.merged_grid.exists());
        assert!(!config.output_dir.exists());
    }
}
