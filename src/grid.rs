//! Coordinate arrays and the grid description files sosie reads them from

/// Half-open arithmetic ranges
pub mod arange;
/// Padded coordinate axes for the full domain and for each tile
pub mod coords;
/// Write lon/lat axes to a NetCDF grid description file
pub mod write;
