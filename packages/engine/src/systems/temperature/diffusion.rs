use crate::spatial::grid::GridView;
use crate::spatial::partition::Task;
use crate::systems::{TaskStats, NEIGHBORS_8};

/// Relax one cell toward its neighborhood average. Returns true if it changed.
#[inline]
pub fn diffuse_cell(view: &GridView<'_>, x: i32, y: i32) -> bool {
    let conductivity = view.thermal_conductivity(x, y);
    if conductivity <= 0.0 {
        return false;
    }

    let mut sum = 0.0f32;
    for (dx, dy) in NEIGHBORS_8 {
        sum += view.temperature(x + dx, y + dy);
    }
    let avg = sum * 0.125;
    let cur = view.temperature(x, y);
    let next = cur + conductivity * (avg - cur);
    if next == cur {
        return false;
    }
    view.set_temperature(x, y, next);
    true
}

/// Heat pass over one partition task
pub fn diffuse_task(view: GridView<'_>, task: &Task) -> TaskStats {
    let mut stats = TaskStats::default();
    task.for_each_cell(|x, y| {
        if diffuse_cell(&view, x, y) {
            stats.cells_processed += 1;
        }
    });
    stats
}
