use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};

/// File name of the job script inside a tile directory
pub static SUBMIT_SCRIPT: &str = "submit.sh";

/// A JobPath is the path to a job script that's handed to the batch queue
///
/// The script only depends on its tile directory (it `cd`s there first), the sosie template
/// namelist and the sosie executable. Neither of the last two is checked here: a bad path only
/// shows up when the job runs.
#[derive(Clone, Debug, PartialEq)]
pub struct JobPath {
    pub path: PathBuf,
}

/// Rendering context for the job script
#[derive(Serialize)]
struct ScriptContext {
    tile_dir: String,
    template_namelist: String,
    sosie_exe: String,
}

/// Paths are written into the script verbatim, so they must be valid UTF-8
fn script_path(path: &Path) -> Result<String> {
    path.to_str()
        .map(str::to_string)
        .with_context(|| format!("Path {} is not valid UTF-8", path.display()))
}

/// Render the job script using TinyTemplate
fn render_script(tile_dir: &Path, template_namelist: &Path, sosie_exe: &Path) -> Result<String> {
    /// included job script template
    static SUBMIT: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/templates/submit.sh"));
    let mut tt = TinyTemplate::new();
    // paths go into a shell script, not HTML
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("submit", SUBMIT).context("Invalid job script template")?;

    let context = ScriptContext {
        tile_dir: script_path(tile_dir)?,
        template_namelist: script_path(template_namelist)?,
        sosie_exe: script_path(sosie_exe)?,
    };
    tt.render("submit", &context).context("Can't render job script")
}

/// Write `submit.sh` into the tile directory and make it executable
///
/// A failed permission change is logged and the job is still submitted.
pub fn write_script(tile_dir: &Path, template_namelist: &Path, sosie_exe: &Path) -> Result<JobPath> {
    let content = render_script(tile_dir, template_namelist, sosie_exe)?;
    let path = tile_dir.join(SUBMIT_SCRIPT);
    info!("Writing job script to {}", path.display());
    fs::write(&path, content).with_context(|| format!("Can't write job script {}", path.display()))?;
    mark_executable(&path);
    Ok(JobPath { path })
}

fn mark_executable(path: &Path) -> bool {
    match make_executable(path) {
        Ok(()) => true,
        Err(err) => {
            warn!("Can't make {} executable: {}", path.display(), err);
            false
        }
    }
}

/// Equivalent of `chmod +x`
#[cfg(unix)]
fn make_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o111);
    fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
