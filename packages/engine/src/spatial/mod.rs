//! Spatial storage and scheduling: the cell grid and its parallel partition

pub mod grid;
pub mod partition;
