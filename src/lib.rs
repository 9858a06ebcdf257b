//! Split a lon/lat domain into tiles and queue one sosie interpolation job per tile
//!
//! Every tile gets its own directory under the output directory holding a padded coordinate grid,
//! a job script and (once the job runs) the sosie namelist. The batch queue does all the parallel
//! work; this crate only stages files and submits.

use std::path::PathBuf;

/// Run configuration and submission failure policy
pub mod config;
/// Coordinate axes and grid description files
pub mod grid;
/// Tiling of the domain
pub mod tile;
/// Job scripts and batch queue submission
pub mod batch;
/// Linear run over all tiles
pub mod pipeline;

/// A directory the run writes into
pub struct WorkingDirectory {
    pub path: PathBuf,
}
