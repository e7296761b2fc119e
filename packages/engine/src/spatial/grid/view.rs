//! GridView - lock-free shared access to the grid arrays
//!
//! A `GridView` is handed (by copy) to every worker of a partitioned pass.
//! All accessors take `&self`; writes go straight to the underlying arrays.
//!
//! # Safety
//! The view provides interior mutability without runtime checks. It is only
//! sound because of the band/strip wave scheduling in
//! [`Partition`](crate::spatial::partition::Partition): tasks that run
//! concurrently are separated by a full band vertically and a full strip
//! horizontally, which is wider than the reach of any cell update, so no two
//! workers ever read or write the same cell at the same time.

use std::marker::PhantomData;
use std::ptr;

use rand::Rng;

use super::{Grid, CLEAR_COLOR};
use crate::domain::content::ContentRegistry;
use crate::domain::elements::{ElementDefinition, ElementId, ElementType, EL_EMPTY};

#[derive(Clone, Copy)]
pub struct GridView<'a> {
    width: i32,
    height: i32,
    ambient: f32,
    content: &'a ContentRegistry,
    types: *mut ElementId,
    temperature: *mut f32,
    colors: *mut u32,
    touched: *mut u8,
    _marker: PhantomData<&'a mut Grid>,
}

// SAFETY: concurrent users are spatially disjoint (see module docs).
unsafe impl Send for GridView<'_> {}
unsafe impl Sync for GridView<'_> {}

impl<'a> GridView<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        width: u32,
        height: u32,
        ambient: f32,
        content: &'a ContentRegistry,
        types: *mut ElementId,
        temperature: *mut f32,
        colors: *mut u32,
        touched: *mut u8,
    ) -> Self {
        debug_assert!(
            i32::try_from(u64::from(width) * u64::from(height)).is_ok(),
            "grid {}x{} exceeds the i32 coordinate range",
            width,
            height
        );
        Self {
            width: width as i32,
            height: height as i32,
            ambient,
            content,
            types,
            temperature,
            colors,
            touched,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn ambient(&self) -> f32 {
        self.ambient
    }

    #[inline]
    pub fn content(&self) -> &'a ContentRegistry {
        self.content
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    // === Raw cell access (idx must come from `index`) ===

    #[inline(always)]
    fn type_at(&self, idx: usize) -> ElementId {
        unsafe { *self.types.add(idx) }
    }

    #[inline(always)]
    fn touched_at(&self, idx: usize) -> bool {
        unsafe { *self.touched.add(idx) != 0 }
    }

    #[inline(always)]
    fn mark_touched(&self, idx: usize) {
        unsafe { *self.touched.add(idx) = 1 }
    }

    // === Reads ===

    #[inline]
    pub fn id(&self, x: i32, y: i32) -> ElementId {
        self.index(x, y).map_or(EL_EMPTY, |idx| self.type_at(idx))
    }

    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.id(x, y) == EL_EMPTY
    }

    #[inline]
    pub fn temperature(&self, x: i32, y: i32) -> f32 {
        self.index(x, y)
            .map_or(self.ambient, |idx| unsafe { *self.temperature.add(idx) })
    }

    #[inline]
    pub fn color(&self, x: i32, y: i32) -> u32 {
        self.index(x, y)
            .map_or(CLEAR_COLOR, |idx| unsafe { *self.colors.add(idx) })
    }

    /// Out-of-range reads as touched so nothing ever targets it
    #[inline]
    pub fn touched(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map_or(true, |idx| self.touched_at(idx))
    }

    #[inline]
    pub fn definition(&self, x: i32, y: i32) -> Option<&'a ElementDefinition> {
        let idx = self.index(x, y)?;
        self.content.definition_of(self.type_at(idx))
    }

    #[inline]
    pub fn element_type(&self, x: i32, y: i32) -> ElementType {
        self.definition(x, y).map_or(ElementType::None, |d| d.element_type)
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
    pub fn dissolvable(&self, x: i32, y: i32) -> bool {
        self.definition(x, y).map_or(false, |d| d.dissolvable)
    }

    // === Writes ===

    #[inline]
    pub fn set_temperature(&self, x: i32, y: i32, value: f32) {
        if let Some(idx) = self.index(x, y) {
            unsafe { *self.temperature.add(idx) = value }
        }
    }

    /// Write `element` into a cell, mark it touched and roll a palette color.
    /// Keeps the cell's temperature unless `use_definition_temperature`.
    pub fn set<R: Rng + ?Sized>(
        &self,
        x: i32,
        y: i32,
        element: ElementId,
        use_definition_temperature: bool,
        rng: &mut R,
    ) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        let Some(def) = self.content.definition_of(element) else {
            return false;
        };

        let color = match def.colors.len() {
            0 => CLEAR_COLOR,
            1 => def.colors[0],
            n => def.colors[rng.gen_range(0..n)],
        };

        unsafe {
            *self.types.add(idx) = element;
            *self.colors.add(idx) = color;
            if use_definition_temperature {
                *self.temperature.add(idx) = def.temperature;
            }
        }
        self.mark_touched(idx);
        true
    }

    /// Rule-driven write: like `set`, but the cell never ends up colder than
    /// the nominal temperature of `element`. Hotter cells keep their heat.
    pub fn transform<R: Rng + ?Sized>(
        &self,
        x: i32,
        y: i32,
        element: ElementId,
        rng: &mut R,
    ) -> bool {
        let before = self.temperature(x, y);
        if !self.set(x, y, element, false, rng) {
            return false;
        }
        if let Some(def) = self.content.definition_of(element) {
            if def.temperature > before {
                self.set_temperature(x, y, def.temperature);
            }
        }
        true
    }

    /// Exchange id, temperature and color of two cells.
    ///
    /// Same id on both sides is a successful no-op. Otherwise the move is
    /// refused when the destination already acted this tick and is occupied.
    /// Every destination that receives a non-empty element becomes touched,
    /// which is what stops a cell from moving twice (or sliding along a chain
    /// of swaps) within one tick.
    pub fn swap(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> bool {
        let (Some(a), Some(b)) = (self.index(x1, y1), self.index(x2, y2)) else {
            return false;
        };

        let id_a = self.type_at(a);
        let id_b = self.type_at(b);
        if id_a == id_b {
            return true;
        }
        if self.touched_at(b) && id_b != EL_EMPTY {
            return false;
        }

        // a != b here since the ids differ
        unsafe {
            ptr::swap(self.types.add(a), self.types.add(b));
            ptr::swap(self.temperature.add(a), self.temperature.add(b));
            ptr::swap(self.colors.add(a), self.colors.add(b));
        }

        if id_a != EL_EMPTY {
            self.mark_touched(b);
        }
        if id_b != EL_EMPTY {
            self.mark_touched(a);
        }
        true
    }
}
