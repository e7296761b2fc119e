use super::super::*;

impl Grid {
    // === Raw buffers for JS interop and the render handoff ===
    pub fn types_ptr(&self) -> *const ElementId {
        self.types.as_ptr()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }

    pub fn temperature_ptr(&self) -> *const f32 {
        self.temperature.as_ptr()
    }

    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    pub fn temperatures(&self) -> &[f32] {
        &self.temperature
    }

    pub fn types(&self) -> &[ElementId] {
        &self.types
    }
}
