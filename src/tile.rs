//! Partition the domain into tiles, one sosie job each

/// Tile bounds and the longitude-major enumeration of the domain
pub mod tiling;
/// Stable float formatting for tile directory names
pub mod name;
