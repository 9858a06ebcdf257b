//! Render per-tile job scripts and hand them to the batch queue

/// Result of a single batch queue submission
pub mod outcome;
/// Render the sosie job script for a tile directory
pub mod script;
/// Run the batch queue command
pub mod submit;
