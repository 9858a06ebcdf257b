use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::grid::coords::GridAxes;

/// File name of the merged, full-domain grid
pub static MERGED_GRID: &str = "natl60_lonlat_regulargrid_merged.nc";
/// File name of the grid written inside every tile directory
pub static LOCAL_GRID: &str = "natl60_lonlat_regulargrid_local.nc";

/// Write a grid description file, replacing any file already at `path`
///
/// Layout (NetCDF-4):
///
/// | dimension | size          | variable | type |
/// | --------- | ------------- | -------- | ---- |
/// | y         | `lat.len()`   | lat(y)   | f64  |
/// | x         | `lon.len()`   | lon(x)   | f64  |
pub fn write_grid(path: &Path, axes: &GridAxes) -> Result<()> {
    info!("Writing {} x {} grid to {}", axes.lon.len(), axes.lat.len(), path.display());
    let mut file = netcdf::create_with(path, netcdf::Options::NETCDF4)
        .with_context(|| format!("Can't create grid file {}", path.display()))?;

    // dimension order matters to readers, y before x
    file.add_dimension("y", axes.lat.len())
        .with_context(|| format!("Can't add dimension y to {}", path.display()))?;
    file.add_dimension("x", axes.lon.len())
        .with_context(|| format!("Can't add dimension x to {}", path.display()))?;

    let mut lat = file.add_variable::<f64>("lat", &["y"])
        .with_context(|| format!("Can't add variable lat to {}", path.display()))?;
    lat.put_values(axes.lat.as_slice(), ..)
        .with_context(|| format!("Can't write lat values to {}", path.display()))?;

    let mut lon = file.add_variable::<f64>("lon", &["x"])
        .with_context(|| format!("Can't add variable lon to {}", path.display()))?;
    lon.put_values(axes.lon.as_slice(), ..)
        .with_context(|| format!("Can't write lon values to {}", path.display()))?;

    drop(file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn written_grid_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOCAL_GRID);
        let axes = GridAxes { lon: vec![-3., -2., -1.], lat: vec![26., 27., 28., 29.] };

        write_grid(&path, &axes).unwrap();

        let file = netcdf::open(&path).unwrap();
        assert_eq!(file.dimension("y").unwrap().len(), 4);
        assert_eq!(file.dimension("x").unwrap().len(), 3);
        let lat = file.variable("lat").unwrap().get_values::<f64, _>(..).unwrap();
        let lon = file.variable("lon").unwrap().get_values::<f64, _>(..).unwrap();
        assert_eq!(lat, axes.lat);
        assert_eq!(lon, axes.lon);
    }

    #[test]
    fn existing_file_is_replaced() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MERGED_GRID);
        write_grid(&path, &GridAxes { lon: vec![0.; 10], lat: vec![0.; 10] }).unwrap();
        write_grid(&path, &GridAxes { lon: vec![1., 2.], lat: vec![3.] }).unwrap();

        let file = netcdf::open(&path).unwrap();
        assert_eq!(file.dimension("x").unwrap().len(), 2);
        assert_eq!(file.dimension("y").unwrap().len(), 1);
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let axes = GridAxes { lon: vec![0.], lat: vec![0.] };
        let err = write_grid(Path::new("/nonexistent/dir/grid.nc"), &axes).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir/grid.nc"));
    }
}
