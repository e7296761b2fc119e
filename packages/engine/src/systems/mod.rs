//! Systems - per-cell update logic run by the tick
//!
//! - temperature: heat diffusion pass
//! - reactions:   declarative transformation rules
//! - behaviors:   gravity movement, dispatched by element type

pub mod behaviors;
pub mod reactions;
pub mod temperature;

/// Counters collected by one partition task, reduced after every wave
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub cells_processed: u32,
    pub swaps: u32,
    pub rules_applied: u32,
}

impl TaskStats {
    #[inline]
    pub fn merged(self, other: TaskStats) -> TaskStats {
        TaskStats {
            cells_processed: self.cells_processed.saturating_add(other.cells_processed),
            swaps: self.swaps.saturating_add(other.swaps),
            rules_applied: self.rules_applied.saturating_add(other.rules_applied),
        }
    }
}

/// Moore neighborhood in scan order: NW, N, NE, W, E, SW, S, SE (y grows downward)
pub const NEIGHBORS_8: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];
