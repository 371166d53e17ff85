//! Action validation - pre and post execution checks.
//!
//! ## Pre-validation
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. actor exists, is owned by the current player, is active
//! 2. actor's unit type is registered and has the required ability
//! 3. target resolves, is on the map, is in range, suits the terrain, is
//!    affordable
//! 4. enough movement remains
//! 5. ATTACK only: actor has not attacked, a live enemy stands on the target
//!
//! ## Post-validation
//!
//! Structural invariants of the successor state, see
//! [`GameState::check_invariants`].

use crate::action::movement::path_cost;
use crate::action::{
    ActionKind, ActionPlan, ActorFault, Rejection, TargetFault, UnitAction, ValidatedAction,
};
use crate::env::{GameEnv, UnitDefinition};
use crate::hex::Coordinate;
use crate::state::{
    GameState, ImprovementKind, ImprovementLayer, InvariantViolation, Terrain, Tile, Unit,
    UnitStatus,
};

/// Pre-validation: decides whether `action` is legal in `state`.
pub(super) fn pre_validate(
    action: &UnitAction,
    state: &GameState,
    env: &GameEnv<'_>,
) -> Result<ValidatedAction, Rejection> {
    let actor = validate_actor(action, state)?;
    let definition = env
        .units()
        .lookup(actor.kind)
        .map_err(|_| Rejection::UnknownUnitType(actor.kind))?;
    validate_capability(action.kind, actor, definition)?;

    let at = resolve_target(action, state)?;
    let tile = target_tile(state, at)?;
    let distance = actor.coordinate.distance(at);

    let mut plan = None;
    let movement_cost = match action.kind {
        ActionKind::Move => {
            let cost = validate_move(state, env, actor, tile, distance)?;
            plan = Some(ActionPlan::Move { to: at });
            cost
        }
        ActionKind::Attack => {
            if distance > actor.attack_range {
                return Err(Rejection::OutOfRange {
                    distance,
                    range: actor.attack_range,
                });
            }
            0
        }
        kind => {
            if distance > 1 {
                return Err(Rejection::OutOfRange { distance, range: 1 });
            }
            plan = Some(validate_terrain_action(kind, state, env, actor, tile)?);
            env.rules().terrain_action_cost()
        }
    };

    if actor.remaining_movement < movement_cost {
        return Err(Rejection::InsufficientMovement {
            required: movement_cost,
            remaining: actor.remaining_movement,
        });
    }

    let plan = match plan {
        Some(plan) => plan,
        None => validate_attack(action, state, actor, at)?,
    };

    Ok(ValidatedAction {
        kind: action.kind,
        actor: actor.clone(),
        plan,
        movement_cost,
    })
}

/// Post-validation: the successor state must satisfy every structural invariant.
pub(super) fn post_validate(state: &GameState) -> Result<(), InvariantViolation> {
    state.check_invariants()
}

// ============================================================================
// Actor and capability
// ============================================================================

fn validate_actor<'s>(action: &UnitAction, state: &'s GameState) -> Result<&'s Unit, Rejection> {
    let actor = state
        .unit(&action.actor)
        .ok_or_else(|| Rejection::invalid_actor(&action.actor, ActorFault::Unknown))?;

    let current = state.current_player().map(|player| player.id);
    if current != Some(actor.player) {
        return Err(Rejection::invalid_actor(
            &action.actor,
            ActorFault::NotCurrentPlayer {
                owner: actor.player,
                current,
            },
        ));
    }

    if actor.status != UnitStatus::Active || !actor.is_alive() {
        return Err(Rejection::invalid_actor(
            &action.actor,
            ActorFault::NotActive(actor.status),
        ));
    }

    Ok(actor)
}

fn validate_capability(
    kind: ActionKind,
    actor: &Unit,
    definition: &UnitDefinition,
) -> Result<(), Rejection> {
    if definition.can(kind.required_ability()) {
        Ok(())
    } else {
        Err(Rejection::UnsupportedAction {
            unit_kind: actor.kind,
            action: kind,
        })
    }
}

// ============================================================================
// Target resolution
// ============================================================================

/// Target coordinate of the request. ATTACK may name a unit instead.
fn resolve_target(action: &UnitAction, state: &GameState) -> Result<Coordinate, Rejection> {
    if let Some(at) = action.target {
        return Ok(at);
    }
    match (&action.kind, &action.target_unit) {
        (ActionKind::Attack, Some(unit)) => state
            .unit(unit)
            .map(|target| target.coordinate)
            .ok_or_else(|| Rejection::NoTarget {
                unit: Some(unit.clone()),
                at: None,
            }),
        _ => Err(Rejection::InvalidTarget(TargetFault::Missing)),
    }
}

fn target_tile(state: &GameState, at: Coordinate) -> Result<&Tile, Rejection> {
    if !state.map.is_within_bounds(at) {
        return Err(Rejection::InvalidTarget(TargetFault::OutOfBounds(at)));
    }
    state
        .tile(at)
        .ok_or(Rejection::InvalidTarget(TargetFault::NoTile(at)))
}

// ============================================================================
// Per-kind checks
// ============================================================================

/// Returns the movement the move costs.
fn validate_move(
    state: &GameState,
    env: &GameEnv<'_>,
    actor: &Unit,
    tile: &Tile,
    distance: u32,
) -> Result<u32, Rejection> {
    let at = tile.coordinate;
    if distance == 0 {
        return Err(Rejection::InvalidTarget(TargetFault::SameTile(at)));
    }
    if distance > actor.movement {
        return Err(Rejection::OutOfRange {
            distance,
            range: actor.movement,
        });
    }
    if env.rules().movement_cost(tile.terrain).is_none() {
        return Err(Rejection::InvalidTarget(TargetFault::Impassable(at)));
    }
    if state.unit_at(at).is_some() {
        return Err(Rejection::InvalidTarget(TargetFault::Occupied(at)));
    }
    path_cost(state, env.rules(), actor, at)
        .ok_or(Rejection::InvalidTarget(TargetFault::Unreachable(at)))
}

fn validate_attack(
    action: &UnitAction,
    state: &GameState,
    actor: &Unit,
    at: Coordinate,
) -> Result<ActionPlan, Rejection> {
    if actor.has_attacked {
        return Err(Rejection::AlreadyActed(actor.id.clone()));
    }

    let no_target = || Rejection::NoTarget {
        unit: action.target_unit.clone(),
        at: Some(at),
    };
    let defender = match &action.target_unit {
        Some(id) => state.unit(id),
        None => state.unit_at(at),
    }
    .filter(|defender| {
        defender.coordinate == at && defender.is_alive() && defender.is_enemy_of(actor.player)
    })
    .ok_or_else(no_target)?;

    Ok(ActionPlan::Attack {
        defender: defender.id.clone(),
        at,
        damage: actor.attack.saturating_sub(defender.defense),
    })
}

fn validate_terrain_action(
    kind: ActionKind,
    state: &GameState,
    env: &GameEnv<'_>,
    actor: &Unit,
    tile: &Tile,
) -> Result<ActionPlan, Rejection> {
    let at = tile.coordinate;
    let mismatch = || Rejection::TerrainMismatch {
        action: kind,
        terrain: tile.terrain,
        at,
    };

    match kind {
        ActionKind::Harvest => {
            let resource = tile.harvestable().ok_or_else(mismatch)?;
            Ok(ActionPlan::Harvest {
                at,
                resource,
                stars: env.rules().harvest_yield(resource),
            })
        }
        ActionKind::ClearForest => {
            if tile.terrain != Terrain::Forest {
                return Err(mismatch());
            }
            Ok(ActionPlan::ClearForest {
                at,
                stars: env.rules().clear_forest_yield(),
            })
        }
        ActionKind::BuildRoad | ActionKind::Build(_) => {
            let improvement = kind.improvement().ok_or_else(mismatch)?;
            let layer = improvement.layer();
            if !improvement.allows(tile.terrain)
                || (layer == ImprovementLayer::Structure && tile.has_city)
            {
                return Err(mismatch());
            }
            validate_build(improvement, state, env, actor, at)
        }
        ActionKind::Move | ActionKind::Attack => Err(mismatch()),
    }
}

/// Duplicate and affordability checks for BUILD and BUILD_ROAD.
fn validate_build(
    improvement: ImprovementKind,
    state: &GameState,
    env: &GameEnv<'_>,
    actor: &Unit,
    at: Coordinate,
) -> Result<ActionPlan, Rejection> {
    let existing = state
        .improvement_at(at, improvement.layer())
        .map(|existing| existing.kind);
    if existing == Some(improvement) {
        return Err(Rejection::InvalidTarget(TargetFault::AlreadyImproved {
            kind: improvement,
            at,
        }));
    }

    let cost = env.rules().improvement_cost(improvement);
    let available = state
        .player(actor.player)
        .map(|player| player.resources.stars)
        .unwrap_or(0);
    if available < cost {
        return Err(Rejection::InsufficientResources {
            required: cost,
            available,
        });
    }

    Ok(ActionPlan::Build {
        kind: improvement,
        at,
        stars: cost,
        supersedes: existing,
    })
}
