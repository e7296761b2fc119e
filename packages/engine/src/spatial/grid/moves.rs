use rand::Rng;

use super::*;

impl Grid {
    /// Place `element` at a cell, mark it touched and pick a palette color.
    /// Returns false for out-of-range positions and unknown elements.
    pub fn set<R: Rng + ?Sized>(
        &mut self,
        x: i32,
        y: i32,
        element: ElementId,
        use_definition_temperature: bool,
        rng: &mut R,
    ) -> bool {
        self.view().set(x, y, element, use_definition_temperature, rng)
    }

    /// Exchange the full state of two cells, honoring the touched flag
    pub fn swap(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        self.view().swap(x1, y1, x2, y2)
    }
}
