use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use gridjobs::config::{Config, SubmitPolicy};
use gridjobs::pipeline::{self, RunOptions};

/// Write per-tile interpolation grids and submit one sosie job per tile
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration, fields left out keep the built-in NATL60 values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Parent directory for tile directories (overrides the configuration)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// What to do when the batch queue command fails
    #[arg(long, value_enum, default_value_t = SubmitPolicy::Continue)]
    on_submit_failure: SubmitPolicy,

    /// Write grids and job scripts without submitting anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    info!("terve! starting up :)");

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }

    let options = RunOptions { dry_run: args.dry_run, policy: args.on_submit_failure };
    pipeline::run(&config, options)?;
    Ok(())
}
