//! PowderBehavior - sand, ash and other granular materials
//!
//! Falls straight, otherwise slides diagonally. Never spreads sideways,
//! so powders pile up instead of leveling out.

use super::common::{try_diagonals, try_fall};
use super::{Behavior, UpdateContext};

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PowderBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool {
        try_fall(ctx) || try_diagonals(ctx)
    }
}
