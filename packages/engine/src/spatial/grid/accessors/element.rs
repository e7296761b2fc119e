//! Element-derived reads: resolve the cell's id through the catalog.
//! Unknown ids and out-of-bounds cells read as inert.

use super::super::*;
use crate::domain::elements::{ElementDefinition, ElementType};

impl Grid {
    #[inline]
    pub fn definition(&self, x: i32, y: i32) -> Option<&ElementDefinition> {
        let idx = self.checked_index(x, y)?;
        self.content.definition_of(self.types[idx])
    }

    #[inline]
    pub fn element_type(&self, x: i32, y: i32) -> ElementType {
        self.definition(x, y).map_or(ElementType::None, |d| d.element_type)
    }

    #[inline]
    pub fn gravity(&self, x: i32, y: i32) -> i8 {
        self.definition(x, y).map_or(0, |d| d.gravity)
    }

    #[inline]
    pub fn density(&self, x: i32, y: i32) -> f32 {
        self.definition(x, y).map_or(0.0, |d| d.density)
    }

    #[inline]
    pub fn thermal_conductivity(&self, x: i32, y: i32) -> f32 {
        self.definition(x, y).map_or(0.0, |d| d.thermal_conductivity)
    }

    #[inline]
    pub fn dispersion(&self, x: i32, y: i32) -> u8 {
        self.definition(x, y).map_or(0, |d| d.dispersion)
    }

    #[inline]
    pub fn dissolvable(&self, x: i32, y: i32) -> bool {
        self.definition(x, y).map_or(false, |d| d.dissolvable)
    }

    /// Display name of the element at a position ("" when unknown or out of range)
    pub fn name(&self, x: i32, y: i32) -> &str {
        self.definition(x, y).map_or("", |d| d.name.as_str())
    }
}
