//! Shared movement helpers

use rand::Rng;

use super::UpdateContext;
use crate::domain::elements::{ElementType, EL_EMPTY};
use crate::spatial::grid::GridView;

/// Can an element of `mover` type and `density` enter (x, y)?
///
/// Empty is always passable. Liquids and gases also displace any
/// non-solid of strictly lower density; powders only non-solid,
/// non-powder ones. Out of range and unknown ids are walls.
#[inline]
pub fn is_passable(view: &GridView<'_>, x: i32, y: i32, mover: ElementType, density: f32) -> bool {
    if !view.in_bounds(x, y) {
        return false;
    }
    let id = view.id(x, y);
    if id == EL_EMPTY {
        return true;
    }
    let Some(target) = view.content().definition_of(id) else {
        return false;
    };
    match target.element_type {
        ElementType::Solid => false,
        ElementType::Powder if mover == ElementType::Powder => false,
        _ => target.density < density,
    }
}

#[inline]
fn passable_for(ctx: &UpdateContext, x: i32, y: i32) -> bool {
    is_passable(ctx.view, x, y, ctx.def.element_type, ctx.def.density)
}

/// Step 1: straight along gravity
#[inline]
pub(super) fn try_fall(ctx: &mut UpdateContext) -> bool {
    let (tx, ty) = (ctx.x, ctx.y + ctx.dir());
    passable_for(ctx, tx, ty) && ctx.move_to(tx, ty)
}

/// Step 2: diagonal landing at growing lateral distance (1..=dispersion)
pub(super) fn try_diagonals(ctx: &mut UpdateContext) -> bool {
    let ty = ctx.y + ctx.dir();
    for i in 0..i32::from(ctx.def.dispersion) {
        let left = ctx.x - 1 - i;
        let right = ctx.x + 1 + i;
        let left_ok = passable_for(ctx, left, ty);
        let right_ok = passable_for(ctx, right, ty);

        let moved = match (left_ok, right_ok) {
            (true, true) => {
                let (first, second) = if ctx.rng.gen::<bool>() {
                    (left, right)
                } else {
                    (right, left)
                };
                ctx.move_to(first, ty) || ctx.move_to(second, ty)
            }
            (true, false) => ctx.move_to(left, ty),
            (false, true) => ctx.move_to(right, ty),
            (false, false) => false,
        };
        if moved {
            return true;
        }
    }
    false
}

/// Step 3: sideways into an empty neighbor
pub(super) fn try_sideways(ctx: &mut UpdateContext) -> bool {
    let y = ctx.y;
    let left = ctx.x - 1;
    let right = ctx.x + 1;
    let left_ok = ctx.view.in_bounds(left, y) && ctx.view.is_empty(left, y);
    let right_ok = ctx.view.in_bounds(right, y) && ctx.view.is_empty(right, y);

    match (left_ok, right_ok) {
        (true, true) => {
            let (first, second) = if ctx.rng.gen::<bool>() {
                (left, right)
            } else {
                (right, left)
            };
            ctx.move_to(first, y) || ctx.move_to(second, y)
        }
        (true, false) => ctx.move_to(left, y),
        (false, true) => ctx.move_to(right, y),
        (false, false) => false,
    }
}
