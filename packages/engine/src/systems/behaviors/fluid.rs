//! FluidBehavior - liquids and gases
//!
//! Gases are liquids with negative gravity: they run the same three steps
//! toward the ceiling instead of the floor.

use super::common::{try_diagonals, try_fall, try_sideways};
use super::{Behavior, UpdateContext};

pub struct FluidBehavior;

impl FluidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FluidBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for FluidBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool {
        try_fall(ctx) || try_diagonals(ctx) || try_sideways(ctx)
    }
}
