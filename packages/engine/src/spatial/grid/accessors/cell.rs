use super::super::*;

impl Grid {
    // === Element id ===
    #[inline]
    pub fn id(&self, x: i32, y: i32) -> ElementId {
        match self.checked_index(x, y) {
            Some(idx) => self.types[idx],
            None => EL_EMPTY,
        }
    }

    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.id(x, y) == EL_EMPTY
    }

    // === Temperature ===
    #[inline]
    pub fn temperature(&self, x: i32, y: i32) -> f32 {
        match self.checked_index(x, y) {
            Some(idx) => self.temperature[idx],
            None => self.ambient,
        }
    }

    /// Direct write; does not affect the touched flag
    #[inline]
    pub fn set_temperature(&mut self, x: i32, y: i32, value: f32) {
        self.view().set_temperature(x, y, value);
    }

    // === Color ===
    #[inline]
    pub fn color(&self, x: i32, y: i32) -> u32 {
        match self.checked_index(x, y) {
            Some(idx) => self.colors[idx],
            None => CLEAR_COLOR,
        }
    }

    /// Number of cells currently holding `id`
    pub fn count_of(&self, id: ElementId) -> usize {
        self.types.iter().filter(|&&t| t == id).count()
    }
}
