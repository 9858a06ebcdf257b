//! Run configuration, constructed once at startup and passed into the pipeline

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

use crate::grid::arange::span_len;
use crate::grid::write::MERGED_GRID;

/// Upper bound on the number of values along any one axis
pub const MAX_AXIS_LEN: f64 = 10_000_000.;

/// What to do when the batch queue command doesn't accept a job
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum SubmitPolicy {
    /// Log a warning and move on to the next tile
    #[default]
    Continue,
    /// Stop the run at the first failed submission
    Abort,
}

impl fmt::Display for SubmitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubmitPolicy::Continue => write!(f, "continue"),
            SubmitPolicy::Abort => write!(f, "abort"),
        }
    }
}

/// Longitude/latitude domain, tiling step and sampling resolution (degrees)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Domain {
    pub lon_start: f64,
    pub lon_end: f64,
    pub lat_start: f64,
    pub lat_end: f64,
    pub delta_lon: f64,
    pub delta_lat: f64,
    pub resolution_lon: f64,
    pub resolution_lat: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Domain {
            lon_start: -80.,
            lon_end: 8.,
            lat_start: 27.,
            lat_end: 67.,
            delta_lon: 1.,
            delta_lat: 1.,
            resolution_lon: 1. / 60.,
            resolution_lat: 1. / 60.,
        }
    }
}

/// Fixed options handed to the batch queue command for every tile
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchOptions {
    pub program: PathBuf,
    pub name: String,
    pub queue: String,
    pub memory: String,
}

impl Default for BatchOptions {
    fn default() -> Self {
        BatchOptions {
            program: PathBuf::from("BatchFerme"),
            name: "SOSIE".to_string(),
            queue: "short".to_string(),
            memory: "8000m".to_string(),
        }
    }
}

/// Everything a run needs, defaults reproduce the NATL60 regridding setup
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Parent of every tile directory
    pub output_dir: PathBuf,
    /// sosie namelist copied into each tile directory by the job script
    pub template_namelist: PathBuf,
    /// sosie executable run by the job script
    pub sosie_exe: PathBuf,
    /// Full-domain grid file, relative paths resolve against the working directory
    pub merged_grid: PathBuf,
    pub domain: Domain,
    pub batch: BatchOptions,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from("/data/MSA_ETU/mballarotta/NATL60_Interpolation/OUTPUTS"),
            template_namelist: PathBuf::from("/data/MSA_ETU/mballarotta/NATL60_Interpolation/template.namelist"),
            sosie_exe: PathBuf::from("/home/mballarotta/Public/TOOLS/sosie/bin/sosie.x"),
            merged_grid: PathBuf::from(MERGED_GRID),
            domain: Domain::default(),
            batch: BatchOptions::default(),
        }
    }
}

impl Config {
    /// Read a JSON configuration file, missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Config> {
        info!("Reading configuration from {}", path.display());
        let json = fs::read_to_string(path)
            .with_context(|| format!("Can't read configuration at {}", path.display()))?;
        let config: Config = serde_json::from_str(&json)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Reject domains the range construction can't make sense of.
    ///
    /// Divisibility of the domain by the tile step is not checked: a remainder just produces a
    /// last bin that pokes out past the domain end.
    pub fn validate(&self) -> Result<()> {
        let d = &self.domain;
        let steps = [
            ("delta_lon", d.delta_lon),
            ("delta_lat", d.delta_lat),
            ("resolution_lon", d.resolution_lon),
            ("resolution_lat", d.resolution_lat),
        ];
        for (name, step) in steps {
            if !step.is_finite() || step <= 0. {
                bail!("{name} must be a finite positive number, got {step}");
            }
        }
        let bounds = [d.lon_start, d.lon_end, d.lat_start, d.lat_end];
        if bounds.iter().any(|b| !b.is_finite()) {
            bail!("Domain bounds must be finite: {bounds:?}");
        }
        if d.lon_start >= d.lon_end {
            bail!("Empty longitude range [{}, {})", d.lon_start, d.lon_end);
        }
        if d.lat_start >= d.lat_end {
            bail!("Empty latitude range [{}, {})", d.lat_start, d.lat_end);
        }

        // the merged grid axes are the longest ones written
        let axes = [
            ("longitude bins", span_len(d.lon_start, d.lon_end, d.delta_lon)),
            ("latitude bins", span_len(d.lat_start, d.lat_end, d.delta_lat)),
            (
                "longitude grid",
                span_len(
                    d.lon_start - d.resolution_lon,
                    d.lon_end + d.delta_lon + 2. * d.resolution_lon,
                    d.resolution_lon,
                ),
            ),
            (
                "latitude grid",
                span_len(
                    d.lat_start - d.resolution_lat,
                    d.lat_end + d.delta_lat + d.resolution_lat,
                    d.resolution_lat,
                ),
            ),
        ];
        for (name, len) in axes {
            if len.is_nan() || len > MAX_AXIS_LEN {
                bail!("{name} would hold {len} values, more than {MAX_AXIS_LEN}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn defaults_match_natl60_setup() {
        let config = Config::default();
        assert_eq!(config.domain.lon_start, -80.);
        assert_eq!(config.domain.lat_end, 67.);
        assert_eq!(config.domain.resolution_lat, 1. / 60.);
        assert_eq!(config.batch.program, PathBuf::from("BatchFerme"));
        assert_eq!(config.batch.memory, "8000m");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"output_dir": "/tmp/tiles", "domain": {{"lon_start": -2.0, "lon_end": 0.0}}}}"#).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("/tmp/tiles"));
        assert_eq!(config.domain.lon_start, -2.);
        assert_eq!(config.domain.lon_end, 0.);
        assert_eq!(config.domain.lat_start, 27.);
        assert_eq!(config.batch.queue, "short");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"outptu_dir": "/tmp/tiles"}}"#).unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn missing_file_names_path() {
        let err = Config::load(Path::new("/nonexistent/gridjobs.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/gridjobs.json"));
    }

    #[test]
    fn validate_rejects_bad_steps_and_ranges() {
        let mut config = Config::default();
        config.domain.resolution_lon = 0.;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.domain.delta_lat = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.domain.lat_end = config.domain.lat_start;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_oversized_axes() {
        let mut config = Config::default();
        config.domain.resolution_lon = 1e-300;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("longitude grid"));

        let mut config = Config::default();
        config.domain.delta_lat = 1e-300;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("latitude bins"));

        let mut config = Config::default();
        config.domain.resolution_lat = 1e-5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn policy_display_is_lowercase() {
        assert_eq!(SubmitPolicy::Continue.to_string(), "continue");
        assert_eq!(SubmitPolicy::Abort.to_string(), "abort");
        assert_eq!(SubmitPolicy::default(), SubmitPolicy::Continue);
    }
}
