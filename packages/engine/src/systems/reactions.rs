//! Reactions - declarative transformation rules
//!
//! Rules are evaluated in declaration order; the first one that fires ends
//! the cell's turn. Rule-driven writes keep each cell's current temperature
//! unless the product is nominally hotter: hot stone made from lava stays
//! hot, and wood that catches fire burns at fire temperature.

use rand::Rng;

use crate::domain::elements::{matches_target, ElementDefinition, Rule, EL_EMPTY};
use crate::spatial::grid::GridView;
use crate::systems::NEIGHBORS_8;

/// Try every rule of `def` on the cell at (x, y). Returns true if one fired.
pub fn apply_rules<R: Rng + ?Sized>(
    view: &GridView<'_>,
    x: i32,
    y: i32,
    def: &ElementDefinition,
    rng: &mut R,
) -> bool {
    def.rules
        .iter()
        .any(|rule| apply_rule(view, x, y, rule, rng))
}

fn apply_rule<R: Rng + ?Sized>(view: &GridView<'_>, x: i32, y: i32, rule: &Rule, rng: &mut R) -> bool {
    match *rule {
        Rule::Temperature { op, threshold, result } => {
            if !op.holds(view.temperature(x, y), threshold) {
                return false;
            }
            view.transform(x, y, result, rng)
        }
        Rule::Neighbor {
            element,
            neighbor_result,
            result,
        } => {
            let Some((nx, ny)) = find_neighbor(view, x, y, |nx, ny| {
                matches_target(element, view.id(nx, ny))
            }) else {
                return false;
            };
            view.transform(nx, ny, neighbor_result, rng);
            view.transform(x, y, result, rng);
            true
        }
        Rule::Dissolve { element, result } => {
            let Some((nx, ny)) = find_neighbor(view, x, y, |nx, ny| {
                view.dissolvable(nx, ny) && matches_target(element, view.id(nx, ny))
            }) else {
                return false;
            };
            view.transform(nx, ny, EL_EMPTY, rng);
            view.transform(x, y, result, rng);
            true
        }
    }
}

/// First untouched neighbor (NW, N, NE, W, E, SW, S, SE) accepted by `accept`.
/// Out-of-range positions read as touched and are never returned.
#[inline]
fn find_neighbor<F: Fn(i32, i32) -> bool>(
    view: &GridView<'_>,
    x: i32,
    y: i32,
    accept: F,
) -> Option<(i32, i32)> {
    NEIGHBORS_8
        .iter()
        .map(|&(dx, dy)| (x + dx, y + dy))
        .find(|&(nx, ny)| !view.touched(nx, ny) && accept(nx, ny))
}
