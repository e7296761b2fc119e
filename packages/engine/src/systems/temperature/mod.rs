//! Temperature System - heat diffusion
//!
//! Every cell relaxes toward the plain average of its 8 neighbors,
//! scaled by its own thermal conductivity:
//!   new = cur + conductivity * (avg - cur)
//! Updates are written in place; out-of-range neighbors read as ambient.

mod diffusion;

pub use diffusion::{diffuse_cell, diffuse_task};
