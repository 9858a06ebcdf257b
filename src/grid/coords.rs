use crate::config::Domain;
use crate::grid::arange::arange;
use crate::tile::tiling::{Tile, Tiling};

/// The two coordinate axes stored in a grid description file
#[derive(Clone, Debug, PartialEq)]
pub struct GridAxes {
    pub lon: Vec<f64>,
    pub lat: Vec<f64>,
}

/// Axes for the merged, full-domain grid.
///
/// Both axes start one resolution step before the first bin and run past the end of the last
/// bin. Longitude is padded by two resolution steps at the top, latitude by one; existing merged
/// grids were produced with that asymmetry so it is kept.
pub fn global_axes(domain: &Domain, tiling: &Tiling) -> GridAxes {
    let lon = match (tiling.lon_bins.first(), tiling.lon_bins.last()) {
        (Some(first), Some(last)) => arange(
            first - domain.resolution_lon,
            last + domain.delta_lon + 2. * domain.resolution_lon,
            domain.resolution_lon,
        ),
        _ => Vec::new(),
    };
    let lat = match (tiling.lat_bins.first(), tiling.lat_bins.last()) {
        (Some(first), Some(last)) => arange(
            first - domain.resolution_lat,
            last + domain.delta_lat + domain.resolution_lat,
            domain.resolution_lat,
        ),
        _ => Vec::new(),
    };
    GridAxes { lon, lat }
}

/// Axes for one tile, padded by a resolution step past every edge.
///
/// The lower longitude pad is the *latitude* resolution, matching the tiles already on disk.
pub fn tile_axes(domain: &Domain, tile: &Tile) -> GridAxes {
    let lon = arange(
        tile.lon_min - domain.resolution_lat,
        tile.lon_max + domain.resolution_lon,
        domain.resolution_lon,
    );
    let lat = arange(
        tile.lat_min - domain.resolution_lat,
        tile.lat_max + domain.resolution_lat,
        domain.resolution_lat,
    );
    GridAxes { lon, lat }
}
