use rand::Rng;

use crate::domain::elements::{ElementId, ElementType, EL_EMPTY};
use crate::spatial::grid::GridView;

use super::WorldCore;

/// Half-extent of the filled square brush (covers x-5..x+5)
const SQUARE_HALF: i32 = 5;

/// (cells, radius) of the scatter brush for a mobile element type
fn scatter_shape(element_type: ElementType) -> Option<(u32, i32)> {
    match element_type {
        ElementType::Liquid => Some((50, 5)),
        ElementType::Powder => Some((10, 5)),
        ElementType::Gas => Some((100, 10)),
        ElementType::Solid | ElementType::None => None,
    }
}

/// Write one brush cell. Spawned materials start at their nominal
/// temperature; erased cells fall back to the world's ambient temperature.
fn place<R: Rng + ?Sized>(
    view: &GridView<'_>,
    x: i32,
    y: i32,
    element: ElementId,
    rng: &mut R,
) -> bool {
    if element != EL_EMPTY {
        return view.set(x, y, element, true, rng);
    }
    if !view.set(x, y, EL_EMPTY, false, rng) {
        return false;
    }
    view.set_temperature(x, y, view.ambient());
    true
}

pub(super) fn spawn(world: &mut WorldCore, x: i32, y: i32, element: ElementId) -> u32 {
    let Some(def) = world.content.definition_of(element) else {
        log::debug!("spawn ignored: unknown element {}", element);
        return 0;
    };

    let view = world.grid.view();
    let rng = &mut world.rng;
    let mut placed = 0u32;

    match scatter_shape(def.element_type) {
        Some((count, radius)) => {
            for _ in 0..count {
                let px = x + rng.gen_range(-radius..=radius);
                let py = y + rng.gen_range(-radius..=radius);
                if place(&view, px, py, element, rng) {
                    placed += 1;
                }
            }
        }
        None => {
            for py in (y - SQUARE_HALF)..(y + SQUARE_HALF) {
                for px in (x - SQUARE_HALF)..(x + SQUARE_HALF) {
                    if place(&view, px, py, element, rng) {
                        placed += 1;
                    }
                }
            }
        }
    }

    placed
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.frame = 0;
}
