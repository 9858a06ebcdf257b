use std::path::{Path, PathBuf};

use crate::config::Domain;
use crate::grid::arange::arange;
use crate::tile::name::repr;

/// One longitude/latitude cell of the tiling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl Tile {
    /// `domain_<lon_min>-<lon_max>_<lat_min>-<lat_max>`, see [`repr`] for the number format
    pub fn dir_name(&self) -> String {
        format!(
            "domain_{}-{}_{}-{}",
            repr(self.lon_min),
            repr(self.lon_max),
            repr(self.lat_min),
            repr(self.lat_max)
        )
    }

    pub fn dir(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.dir_name())
    }
}

/// Bin start coordinates along each axis
#[derive(Clone, Debug, PartialEq)]
pub struct Tiling {
    pub lon_bins: Vec<f64>,
    pub lat_bins: Vec<f64>,
    delta_lon: f64,
    delta_lat: f64,
}

impl Tiling {
    pub fn new(domain: &Domain) -> Tiling {
        Tiling {
            lon_bins: arange(domain.lon_start, domain.lon_end, domain.delta_lon),
            lat_bins: arange(domain.lat_start, domain.lat_end, domain.delta_lat),
            delta_lon: domain.delta_lon,
            delta_lat: domain.delta_lat,
        }
    }

    pub fn len(&self) -> usize {
        self.lon_bins.len() * self.lat_bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All tiles, every latitude bin of a longitude before moving to the next longitude
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.lon_bins.iter().flat_map(move |&lon_min| {
            self.lat_bins.iter().map(move |&lat_min| Tile {
                lon_min,
                lon_max: lon_min + self.delta_lon,
                lat_min,
                lat_max: lat_min + self.delta_lat,
            })
        })
    }
}
