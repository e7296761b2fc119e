use rand::rngs::SmallRng;

use crate::domain::elements::EL_EMPTY;
use crate::spatial::grid::GridView;
use crate::spatial::partition::Task;
use crate::systems::behaviors::{BehaviorRegistry, UpdateContext};
use crate::systems::reactions::apply_rules;
use crate::systems::TaskStats;

/// Rule + gravity pass over one partition task.
///
/// Touched, empty and unknown cells are skipped. A fired rule ends the
/// cell's turn; otherwise the behavior of its type may move it.
pub(super) fn update_task(
    view: GridView<'_>,
    task: &Task,
    rng: &mut SmallRng,
    behaviors: &BehaviorRegistry,
) -> TaskStats {
    let mut stats = TaskStats::default();
    let content = view.content();

    task.for_each_cell(|x, y| {
        if view.touched(x, y) {
            return;
        }
        let id = view.id(x, y);
        if id == EL_EMPTY {
            return;
        }
        let Some(def) = content.definition_of(id) else {
            return;
        };
        stats.cells_processed += 1;

        if apply_rules(&view, x, y, def, &mut *rng) {
            stats.rules_applied += 1;
            return;
        }

        let mut ctx = UpdateContext {
            view: &view,
            def,
            x,
            y,
            rng: &mut *rng,
        };
        if behaviors.update(&mut ctx) {
            stats.swaps += 1;
        }
    });

    stats
}
