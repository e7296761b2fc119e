//! Behaviors - gravity movement per element type
//!
//! Powder: straight fall, then diagonal landing within `dispersion`.
//! Liquid / Gas: same, plus a sideways step into empty cells.
//! Solid / None: never move.
//!
//! Only the sign of `gravity` matters: +1 falls down, -1 rises.

mod common;
mod fluid;
mod powder;

pub use common::is_passable;
pub use fluid::FluidBehavior;
pub use powder::PowderBehavior;

use rand::rngs::SmallRng;

use crate::domain::elements::{ElementDefinition, ElementType};
use crate::spatial::grid::GridView;

/// Update context passed to behaviors
pub struct UpdateContext<'a, 'g> {
    pub view: &'a GridView<'g>,
    pub def: &'g ElementDefinition,
    pub x: i32,
    pub y: i32,
    pub rng: &'a mut SmallRng,
}

impl UpdateContext<'_, '_> {
    /// Vertical step of this element: +1 down, -1 up
    #[inline]
    pub fn dir(&self) -> i32 {
        i32::from(self.def.gravity.signum())
    }

    /// Swap the current cell with (tx, ty); the context follows the cell
    #[inline]
    pub fn move_to(&mut self, tx: i32, ty: i32) -> bool {
        if self.view.swap(self.x, self.y, tx, ty) {
            self.x = tx;
            self.y = ty;
            true
        } else {
            false
        }
    }
}

/// Behavior trait - each element type implements this.
/// Returns true if the cell moved.
pub trait Behavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool;
}

/// Behavior registry - dispatch by element type
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    fluid: FluidBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            fluid: FluidBehavior::new(),
        }
    }

    /// Dispatch update to the behavior of the element's type
    pub fn update(&self, ctx: &mut UpdateContext) -> bool {
        if !ctx.def.falls() {
            return false;
        }
        match ctx.def.element_type {
            ElementType::Powder => self.powder.update(ctx),
            ElementType::Liquid | ElementType::Gas => self.fluid.update(ctx),
            ElementType::Solid | ElementType::None => false,
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
