//! Grid - Structure of Arrays (SoA) cell storage
//!
//! One contiguous array per cell field instead of `Vec<Cell>`:
//! types[], temperature[], colors[], touched[]
//!
//! Reads are bounds-safe and return neutral defaults out of range. Writes
//! (`set`, `swap`, `set_temperature`) all go through [`GridView`], the
//! same code path the parallel tick uses.

use std::sync::Arc;

use crate::domain::content::ContentRegistry;
use crate::domain::elements::{ElementId, AMBIENT_TEMPERATURE, EL_EMPTY};

mod accessors;
mod indexing;
mod moves;
mod view;

pub use view::GridView;

/// Color of a cleared cell (transparent)
pub const CLEAR_COLOR: u32 = 0x0000_0000;

/// SoA Grid - all cell data in separate arrays
pub struct Grid {
    width: u32,
    height: u32,
    size: usize,
    ambient: f32,
    content: Arc<ContentRegistry>,

    pub(crate) types: Vec<ElementId>,  // Element id (0 = empty)
    pub(crate) temperature: Vec<f32>,  // °C
    pub(crate) colors: Vec<u32>,       // ABGR packed color
    pub(crate) touched: Vec<u8>,       // 1 = moved or acted on this tick
}

impl Grid {
    pub fn new(width: u32, height: u32, content: Arc<ContentRegistry>) -> Self {
        Self::with_ambient(width, height, content, AMBIENT_TEMPERATURE)
    }

    pub fn with_ambient(width: u32, height: u32, content: Arc<ContentRegistry>, ambient: f32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            ambient,
            content,
            types: vec![EL_EMPTY; size],
            temperature: vec![ambient; size],
            colors: vec![CLEAR_COLOR; size],
            touched: vec![0; size],
        }
    }

    #[inline]
    pub fn content(&self) -> &ContentRegistry {
        &self.content
    }

    pub(crate) fn content_arc(&self) -> &Arc<ContentRegistry> {
        &self.content
    }

    /// Temperature of cleared cells and of every out-of-bounds read
    #[inline]
    pub fn ambient(&self) -> f32 {
        self.ambient
    }

    /// Reset every cell to empty / ambient / untouched / transparent
    pub fn clear(&mut self) {
        self.types.fill(EL_EMPTY);
        self.temperature.fill(self.ambient);
        self.colors.fill(CLEAR_COLOR);
        self.touched.fill(0);
    }

    /// Shared-access view used by writes and by the partitioned tick
    pub fn view(&mut self) -> GridView<'_> {
        GridView::new(
            self.width,
            self.height,
            self.ambient,
            &self.content,
            self.types.as_mut_ptr(),
            self.temperature.as_mut_ptr(),
            self.colors.as_mut_ptr(),
            self.touched.as_mut_ptr(),
        )
    }
}
