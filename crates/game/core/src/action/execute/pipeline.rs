//! Applies a validated action to a state.
//!
//! The engine hands this module a private clone of the caller's snapshot.
//! Arithmetic is checked; if a check fails the clone is dropped and nothing
//! the caller holds has changed.

use crate::action::{ActionOutcome, ActionPlan, ValidatedAction};
use crate::env::GameEnv;
use crate::hex::Coordinate;
use crate::state::{
    GameState, Improvement, ImprovementKind, InvariantViolation, PlayerId, Resource, Terrain,
    UnitId,
};

pub(super) fn apply(
    action: &ValidatedAction,
    state: &mut GameState,
    _env: &GameEnv<'_>,
) -> Result<ActionOutcome, InvariantViolation> {
    let actor = action.actor_id();
    spend_movement(state, actor, action.movement_cost)?;

    match &action.plan {
        ActionPlan::Build {
            kind,
            at,
            stars,
            supersedes,
        } => {
            debit_stars(state, action.actor.player, *stars)?;
            place_improvement(state, *kind, *at, action.actor.player);
            Ok(ActionOutcome::Built {
                kind: *kind,
                at: *at,
                stars_spent: *stars,
                superseded: *supersedes,
            })
        }
        ActionPlan::Harvest {
            at,
            resource,
            stars,
        } => {
            take_resource(state, *at, *resource)?;
            credit_stars(state, action.actor.player, *stars)?;
            Ok(ActionOutcome::Harvested {
                resource: *resource,
                at: *at,
                stars_gained: *stars,
            })
        }
        ActionPlan::ClearForest { at, stars } => {
            let tile = state
                .map
                .tiles
                .get_mut(at)
                .ok_or(InvariantViolation::TileMissing { coordinate: *at })?;
            tile.terrain = Terrain::Plains;
            credit_stars(state, action.actor.player, *stars)?;
            Ok(ActionOutcome::ForestCleared {
                at: *at,
                stars_gained: *stars,
            })
        }
        ActionPlan::Move { to } => {
            let unit = state
                .units
                .get_mut(actor)
                .ok_or_else(|| InvariantViolation::UnitMissing { unit: actor.clone() })?;
            let from = unit.coordinate;
            unit.coordinate = *to;
            let (player, vision) = (unit.player, unit.vision_radius);
            let revealed = reveal(state, player, *to, vision);
            Ok(ActionOutcome::Moved {
                from,
                to: *to,
                movement_spent: action.movement_cost,
                revealed,
            })
        }
        ActionPlan::Attack {
            defender, damage, ..
        } => {
            let target = state
                .units
                .get_mut(defender)
                .ok_or_else(|| InvariantViolation::UnitMissing {
                    unit: defender.clone(),
                })?;
            target.hp = target.hp.saturating_sub(*damage);
            let remaining_hp = target.hp;
            let defeated = remaining_hp == 0;
            if defeated {
                state.units.remove(defender);
            }

            let attacker = state
                .units
                .get_mut(actor)
                .ok_or_else(|| InvariantViolation::UnitMissing { unit: actor.clone() })?;
            attacker.has_attacked = true;

            Ok(ActionOutcome::Attacked {
                defender: defender.clone(),
                damage: *damage,
                remaining_hp,
                defeated,
            })
        }
    }
}

fn spend_movement(state: &mut GameState, actor: &UnitId, cost: u32) -> Result<(), InvariantViolation> {
    let unit = state
        .units
        .get_mut(actor)
        .ok_or_else(|| InvariantViolation::UnitMissing { unit: actor.clone() })?;
    let remaining = unit.remaining_movement;
    unit.remaining_movement =
        remaining
            .checked_sub(cost)
            .ok_or_else(|| InvariantViolation::MovementUnderflow {
                unit: actor.clone(),
                required: cost,
                remaining,
            })?;
    Ok(())
}

fn player_stars(state: &mut GameState, player: PlayerId) -> Result<&mut u32, InvariantViolation> {
    let index = state.player_index(player).ok_or(InvariantViolation::PlayerMissing {
        index: state.current_player_index,
    })?;
    state
        .players
        .get_mut(index)
        .map(|record| &mut record.resources.stars)
        .ok_or(InvariantViolation::PlayerMissing { index })
}

fn debit_stars(state: &mut GameState, player: PlayerId, amount: u32) -> Result<(), InvariantViolation> {
    let stars = player_stars(state, player)?;
    *stars = stars
        .checked_sub(amount)
        .ok_or(InvariantViolation::ResourceUnderflow {
            player,
            required: amount,
            available: *stars,
        })?;
    Ok(())
}

fn credit_stars(state: &mut GameState, player: PlayerId, amount: u32) -> Result<(), InvariantViolation> {
    let stars = player_stars(state, player)?;
    *stars = stars
        .checked_add(amount)
        .ok_or(InvariantViolation::ResourceOverflow { player })?;
    Ok(())
}

/// Appends the improvement, replacing whatever occupied the same layer.
fn place_improvement(state: &mut GameState, kind: ImprovementKind, at: Coordinate, player: PlayerId) {
    let layer = kind.layer();
    state
        .improvements
        .retain(|existing| !(existing.coordinate == at && existing.layer() == layer));
    state
        .improvements
        .push_back(Improvement::new(kind, at, player));
}

fn take_resource(state: &mut GameState, at: Coordinate, resource: Resource) -> Result<(), InvariantViolation> {
    let tile = state
        .map
        .tiles
        .get_mut(&at)
        .ok_or(InvariantViolation::TileMissing { coordinate: at })?;
    tile.resources.remove(resource.flag());
    Ok(())
}

/// Marks every tile within `radius` of `center` as explored by `player`.
/// Returns how many tiles were newly explored.
fn reveal(state: &mut GameState, player: PlayerId, center: Coordinate, radius: u32) -> usize {
    let mut revealed = 0;
    for at in center.within(radius) {
        if let Some(tile) = state.map.tiles.get_mut(&at)
            && tile.explored_by.insert(player).is_none()
        {
            revealed += 1;
        }
    }
    revealed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Env, GameRules, UnitKind, UnitOracle, UnitRegistry};
    use crate::state::{Faction, GameMap, Player};

    #[test]
    fn reveal_counts_only_new_tiles() {
        let mut state = GameState::new(GameMap::filled(5, 5, Terrain::Plains));
        let center = Coordinate::from_offset(2, 2);

        assert_eq!(reveal(&mut state, PlayerId(1), center, 1), 7);
        assert_eq!(reveal(&mut state, PlayerId(1), center, 1), 0);
        assert_eq!(reveal(&mut state, PlayerId(2), center, 0), 1);
        assert!(state.tile(center).unwrap().is_explored_by(PlayerId(2)));
    }

    #[test]
    fn building_a_different_structure_replaces_the_old_one() {
        let mut state = GameState::new(GameMap::filled(3, 3, Terrain::Plains));
        let at = Coordinate::ORIGIN;
        place_improvement(&mut state, ImprovementKind::Road, at, PlayerId(1));
        place_improvement(&mut state, ImprovementKind::Farm, at, PlayerId(1));
        place_improvement(&mut state, ImprovementKind::Mine, at, PlayerId(2));

        let kinds: Vec<_> = state.improvements_at(at).map(|i| i.kind).collect();
        assert_eq!(kinds, vec![ImprovementKind::Road, ImprovementKind::Mine]);
    }

    #[test]
    fn stale_plan_is_an_invariant_violation_not_a_negative_balance() {
        let registry = UnitRegistry::standard();
        let rules = GameRules::standard();
        let env = Env::new(&registry, &rules).into_game_env();

        let mut state = GameState::new(GameMap::filled(3, 3, Terrain::Plains));
        state
            .add_player(Player::new(PlayerId(1), Faction::Highland).with_stars(1))
            .unwrap();
        let worker = registry
            .lookup(UnitKind::Worker)
            .unwrap()
            .spawn("w", PlayerId(1), Coordinate::ORIGIN);
        state.add_unit(worker.clone()).unwrap();

        let plan = ValidatedAction {
            kind: crate::action::ActionKind::BuildRoad,
            actor: worker,
            plan: ActionPlan::Build {
                kind: ImprovementKind::Road,
                at: Coordinate::ORIGIN,
                stars: 2,
                supersedes: None,
            },
            movement_cost: 1,
        };

        assert_eq!(
            apply(&plan, &mut state, &env),
            Err(InvariantViolation::ResourceUnderflow {
                player: PlayerId(1),
                required: 2,
                available: 1,
            })
        );
    }
}
