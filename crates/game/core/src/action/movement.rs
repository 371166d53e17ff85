//! Movement cost search for MOVE validation.
//!
//! Costs come from [`RulesOracle`]: entering a tile costs its terrain cost,
//! or the road cost when both tiles carry a road. The search never leaves the
//! hex disc of radius `unit.movement` around the unit, so it stays small.
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::env::RulesOracle;
use crate::hex::Coordinate;
use crate::state::{GameState, PlayerId, Unit};

/// Cheapest movement cost from `unit`'s tile to every tile it could path to.
///
/// Enemy units block; friendly units may be passed through but the caller
/// must still reject ending on them. The unit's own tile maps to 0.
pub fn movement_costs<R>(state: &GameState, rules: &R, unit: &Unit) -> BTreeMap<Coordinate, u32>
where
    R: RulesOracle + ?Sized,
{
    let origin = unit.coordinate;
    let occupants: BTreeMap<Coordinate, PlayerId> = state
        .units
        .values()
        .map(|other| (other.coordinate, other.player))
        .collect();

    let mut best = BTreeMap::from([(origin, 0u32)]);
    let mut frontier = BinaryHeap::from([Reverse((0u32, origin))]);

    while let Some(Reverse((cost, current))) = frontier.pop() {
        if best.get(&current).is_some_and(|&known| cost > known) {
            continue;
        }

        for next in current.neighbors() {
            if origin.distance(next) > unit.movement {
                continue;
            }
            let Some(tile) = state.tile(next) else {
                continue;
            };
            let Some(enter) = rules.movement_cost(tile.terrain) else {
                continue;
            };
            if occupants.get(&next).is_some_and(|&owner| owner != unit.player) {
                continue;
            }

            let step = if state.has_road(current) && state.has_road(next) {
                rules.road_movement_cost()
            } else {
                enter
            };
            let total = cost.saturating_add(step);
            if best.get(&next).is_none_or(|&known| total < known) {
                best.insert(next, total);
                frontier.push(Reverse((total, next)));
            }
        }
    }

    best
}

/// Cheapest movement cost from `unit`'s tile to `to`, if reachable.
pub fn path_cost<R>(state: &GameState, rules: &R, unit: &Unit, to: Coordinate) -> Option<u32>
where
    R: RulesOracle + ?Sized,
{
    movement_costs(state, rules, unit).get(&to).copied()
}
