use std::collections::{BTreeMap, BTreeSet};

use super::{GameState, ImprovementLayer, InvariantViolation};
use crate::hex::Coordinate;

impl GameState {
    /// Verifies every structural rule a snapshot must satisfy.
    ///
    /// Checked after each accepted action; a failure there means the executor
    /// produced a state it should never produce.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if !self.players.is_empty() && self.current_player().is_none() {
            return Err(InvariantViolation::PlayerMissing {
                index: self.current_player_index,
            });
        }

        let mut occupied: BTreeMap<Coordinate, &super::UnitId> = BTreeMap::new();
        for (key, unit) in &self.units {
            if *key != unit.id {
                return Err(InvariantViolation::UnitKeyMismatch {
                    unit: unit.id.clone(),
                    key: key.clone(),
                });
            }
            if !unit.is_alive() {
                return Err(InvariantViolation::DeadUnitPresent {
                    unit: unit.id.clone(),
                });
            }
            if self.player(unit.player).is_none() {
                return Err(InvariantViolation::OrphanedUnit {
                    unit: unit.id.clone(),
                    player: unit.player,
                });
            }
            if self.tile(unit.coordinate).is_none() {
                return Err(InvariantViolation::UnitOffMap {
                    unit: unit.id.clone(),
                    coordinate: unit.coordinate,
                });
            }
            if unit.hp > unit.max_hp {
                return Err(InvariantViolation::HpAboveMax {
                    unit: unit.id.clone(),
                    hp: unit.hp,
                    max_hp: unit.max_hp,
                });
            }
            if unit.remaining_movement > unit.movement {
                return Err(InvariantViolation::MovementAboveBudget {
                    unit: unit.id.clone(),
                    remaining: unit.remaining_movement,
                    movement: unit.movement,
                });
            }
            if let Some(first) = occupied.insert(unit.coordinate, &unit.id) {
                return Err(InvariantViolation::StackedUnits {
                    coordinate: unit.coordinate,
                    first: first.clone(),
                    second: unit.id.clone(),
                });
            }
        }

        let mut layers: BTreeSet<(Coordinate, bool)> = BTreeSet::new();
        for improvement in &self.improvements {
            if self.tile(improvement.coordinate).is_none() {
                return Err(InvariantViolation::ImprovementOffMap {
                    coordinate: improvement.coordinate,
                });
            }
            let is_route = improvement.layer() == ImprovementLayer::Route;
            if !layers.insert((improvement.coordinate, is_route)) {
                return Err(InvariantViolation::DuplicateImprovement {
                    coordinate: improvement.coordinate,
                    layer: improvement.layer(),
                });
            }
        }

        for city in &self.cities {
            match self.tile(city.coordinate) {
                Some(tile) if tile.has_city => {}
                _ => {
                    return Err(InvariantViolation::CityTileMismatch {
                        city: city.id,
                        coordinate: city.coordinate,
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{UnitKind, UnitOracle, UnitRegistry};
    use crate::state::{
        Faction, GameMap, Improvement, ImprovementKind, Player, PlayerId, Terrain, UnitId,
    };

    fn base() -> GameState {
        let registry = UnitRegistry::standard();
        let worker = registry.lookup(UnitKind::Worker).unwrap();
        let mut state = GameState::new(GameMap::filled(3, 3, Terrain::Plains));
        state
            .add_player(Player::new(PlayerId(1), Faction::Coastal))
            .unwrap();
        state
            .add_unit(worker.spawn("worker", PlayerId(1), Coordinate::ORIGIN))
            .unwrap();
        state
    }

    #[test]
    fn well_formed_state_passes() {
        assert_eq!(base().check_invariants(), Ok(()));
    }

    #[test]
    fn detects_stacked_units() {
        let mut state = base();
        let mut clone = state.unit(&UnitId::from("worker")).unwrap().clone();
        clone.id = UnitId::from("twin");
        state.units.insert(clone.id.clone(), clone);

        assert!(matches!(
            state.check_invariants(),
            Err(InvariantViolation::StackedUnits { .. })
        ));
    }

    #[test]
    fn detects_dead_units_left_on_board() {
        let mut state = base();
        state.units.get_mut(&UnitId::from("worker")).unwrap().hp = 0;

        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::DeadUnitPresent {
                unit: UnitId::from("worker")
            })
        );
    }

    #[test]
    fn detects_two_structures_on_one_tile() {
        let mut state = base();
        let at = Coordinate::new(1, 0, -1);
        state
            .improvements
            .push_back(Improvement::new(ImprovementKind::Farm, at, PlayerId(1)));
        state
            .improvements
            .push_back(Improvement::new(ImprovementKind::Mine, at, PlayerId(1)));
        state
            .improvements
            .push_back(Improvement::new(ImprovementKind::Road, Coordinate::ORIGIN, PlayerId(1)));

        assert_eq!(
            state.check_invariants(),
            Err(InvariantViolation::DuplicateImprovement {
                coordinate: at,
                layer: ImprovementLayer::Structure,
            })
        );
    }

    #[test]
    fn detects_movement_above_budget() {
        let mut state = base();
        state
            .units
            .get_mut(&UnitId::from("worker"))
            .unwrap()
            .remaining_movement = 9;

        assert!(matches!(
            state.check_invariants(),
            Err(InvariantViolation::MovementAboveBudget { remaining: 9, .. })
        ));
    }
}
