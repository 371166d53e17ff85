//! Enumerate the actions a unit could take right now.
//!
//! Candidates are generated from the unit's surroundings and then filtered
//! through [`pre_validate`], so every returned action is one the validator
//! accepts against the same state.

use crate::action::movement::movement_costs;
use crate::action::{ActionKind, UnitAction, pre_validate};
use crate::env::GameEnv;
use crate::state::{GameState, ImprovementKind, UnitId};

/// Terrain actions tried on the unit's own and adjacent tiles.
const TERRAIN_ACTIONS: [ActionKind; 6] = [
    ActionKind::BuildRoad,
    ActionKind::Build(ImprovementKind::Farm),
    ActionKind::Build(ImprovementKind::Mine),
    ActionKind::Build(ImprovementKind::LumberHut),
    ActionKind::Harvest,
    ActionKind::ClearForest,
];

/// Get every concrete action `unit` can perform in `state`.
///
/// Order is stable: moves by destination, then attacks by defender id, then
/// terrain actions by tile. Unknown units yield an empty list.
pub fn available_actions(state: &GameState, env: &GameEnv<'_>, unit: &UnitId) -> Vec<UnitAction> {
    let Some(actor) = state.unit(unit) else {
        return Vec::new();
    };

    let moves = movement_costs(state, env.rules(), actor)
        .into_keys()
        .filter(|at| *at != actor.coordinate)
        .map(|at| UnitAction::new(unit.clone(), ActionKind::Move).at(at));

    let attacks = state
        .units
        .values()
        .filter(|other| other.is_enemy_of(actor.player))
        .filter(|other| actor.coordinate.distance(other.coordinate) <= actor.attack_range)
        .map(|other| {
            UnitAction::new(unit.clone(), ActionKind::Attack)
                .against(other.id.clone())
                .at(other.coordinate)
        });

    let terrain = actor.coordinate.within(1).flat_map(|at| {
        TERRAIN_ACTIONS
            .into_iter()
            .map(move |kind| UnitAction::new(unit.clone(), kind).at(at))
    });

    let mut terrain: Vec<_> = terrain.collect();
    terrain.sort_by_key(|action| action.target);

    moves
        .chain(attacks)
        .chain(terrain)
        .filter(|action| pre_validate(action, state, env).is_ok())
        .collect()
}
