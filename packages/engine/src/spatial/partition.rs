//! Partition - band/strip decomposition for race-free parallel passes
//!
//! The grid is cut into horizontal bands, each band into vertical strips.
//! One task = one (band, strip) cell block, processed by one worker.
//!
//! A pass runs as four sequential waves:
//!   even bands x even strips, even bands x odd strips,
//!   odd bands  x even strips, odd bands  x odd strips
//! i.e. two sub-passes with complementary band parity, each split in two by
//! strip parity. Tasks of one wave are always a whole band (or strip) apart,
//! so as long as a band is taller than the vertical reach of a cell update
//! and a strip is wider than twice its horizontal reach, no two concurrent
//! workers can touch the same cell.

use std::ops::Range;

/// Vertical reach of one cell update (rules read +-1 row, gravity moves 1 row)
pub const VERTICAL_REACH: u32 = 1;

/// A rectangular block of cells owned by one worker during a wave
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub band: usize,
    pub strip: usize,
    pub rows: Range<i32>,
    pub cols: Range<i32>,
}

impl Task {
    /// Visit every cell: rows bottom to top, serpentine columns
    /// (even rows left-to-right, odd rows right-to-left).
    #[inline]
    pub fn for_each_cell<F: FnMut(i32, i32)>(&self, mut f: F) {
        for y in self.rows.clone().rev() {
            if y & 1 == 0 {
                for x in self.cols.clone() {
                    f(x, y);
                }
            } else {
                for x in self.cols.clone().rev() {
                    f(x, y);
                }
            }
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.cols.len()
    }
}

#[derive(Clone, Debug)]
pub struct Partition {
    bands: Vec<Range<i32>>,
    strips: Vec<Range<i32>>,
    waves: [Vec<Task>; 4],
}

impl Partition {
    /// Build a partition for a `width` x `height` grid.
    ///
    /// `horizontal_reach` is the farthest column offset a single cell update
    /// may read or write. The requested counts are clamped down so that
    /// bands are at least `2 * VERTICAL_REACH` rows and strips at least
    /// `2 * horizontal_reach` columns.
    pub fn new(width: u32, height: u32, bands: u32, strips: u32, horizontal_reach: u32) -> Self {
        let reach = horizontal_reach.max(1);
        let max_bands = (height / (2 * VERTICAL_REACH)).max(1);
        let max_strips = (width / (2 * reach)).max(1);
        let band_count = bands.clamp(1, max_bands);
        let strip_count = strips.clamp(1, max_strips);

        if band_count != bands || strip_count != strips {
            log::info!(
                "partition clamped from {}x{} to {}x{} (grid {}x{}, reach {})",
                bands,
                strips,
                band_count,
                strip_count,
                width,
                height,
                reach
            );
        }

        let bands = split(height, band_count);
        let strips = split(width, strip_count);
        let waves = build_waves(&bands, &strips);
        Self { bands, strips, waves }
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    pub fn strip_count(&self) -> usize {
        self.strips.len()
    }

    /// Waves in execution order; tasks within a wave may run concurrently
    pub fn waves(&self) -> &[Vec<Task>; 4] {
        &self.waves
    }
}

/// Split `0..len` into `parts` contiguous ranges whose sizes differ by at most one
fn split(len: u32, parts: u32) -> Vec<Range<i32>> {
    let parts = parts.max(1);
    let base = len / parts;
    let extra = len % parts;
    let mut out = Vec::with_capacity(parts as usize);
    let mut start = 0u32;
    for i in 0..parts {
        let size = base + u32::from(i < extra);
        out.push(start as i32..(start + size) as i32);
        start += size;
    }
    out
}

fn build_waves(bands: &[Range<i32>], strips: &[Range<i32>]) -> [Vec<Task>; 4] {
    let mut waves: [Vec<Task>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    for (band, rows) in bands.iter().enumerate() {
        for (strip, cols) in strips.iter().enumerate() {
            let wave = (band & 1) * 2 + (strip & 1);
            waves[wave].push(Task {
                band,
                strip,
                rows: rows.clone(),
                cols: cols.clone(),
            });
        }
    }
    waves
}
