//! Authoritative game state representation.
//!
//! [`GameState`] is a persistent value: every collection is an `im` structure,
//! so `clone()` is cheap and updating one record copies only the path to it.
//! The engine never mutates a caller's snapshot; it clones, applies, and hands
//! the successor back.
#[cfg(feature = "serde")]
mod digest;
mod error;
mod invariants;
pub mod types;

use im::{OrdMap, Vector};

#[cfg(feature = "serde")]
pub use digest::StateDigest;
pub use error::{InvariantViolation, StateError};
pub use types::{
    City, CityId, Faction, GameMap, Improvement, ImprovementKind, ImprovementLayer, Player,
    PlayerId, PlayerResources, Resource, ResourceSet, Terrain, Tile, Unit, UnitId, UnitStatus,
};

use crate::config::GameConfig;
use crate::hex::Coordinate;

/// Coarse lifecycle of a match. Owned by turn orchestration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Setup,
    InProgress,
    Finished,
}

/// Canonical snapshot of a match.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Index into `players` of the seat whose turn it is.
    pub current_player_index: usize,
    pub players: Vector<Player>,
    pub units: OrdMap<UnitId, Unit>,
    pub cities: Vector<City>,
    pub improvements: Vector<Improvement>,
    pub map: GameMap,
    pub turn: u32,
    pub game_phase: GamePhase,
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Creates an in-progress state on the given map with no players or units.
    pub fn new(map: GameMap) -> Self {
        Self {
            current_player_index: 0,
            players: Vector::new(),
            units: OrdMap::new(),
            cities: Vector::new(),
            improvements: Vector::new(),
            map,
            turn: 1,
            game_phase: GamePhase::InProgress,
            winner: None,
        }
    }

    // ===== queries =====

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|player| player.id == id)
    }

    pub fn unit(&self, id: &UnitId) -> Option<&Unit> {
        self.units.get(id)
    }

    pub fn unit_at(&self, coordinate: Coordinate) -> Option<&Unit> {
        self.units
            .values()
            .find(|unit| unit.coordinate == coordinate)
    }

    pub fn tile(&self, coordinate: Coordinate) -> Option<&Tile> {
        self.map.tile(coordinate)
    }

    pub fn improvements_at(&self, coordinate: Coordinate) -> impl Iterator<Item = &Improvement> {
        self.improvements
            .iter()
            .filter(move |improvement| improvement.coordinate == coordinate)
    }

    pub fn improvement_at(
        &self,
        coordinate: Coordinate,
        layer: ImprovementLayer,
    ) -> Option<&Improvement> {
        self.improvements_at(coordinate)
            .find(|improvement| improvement.layer() == layer)
    }

    pub fn has_road(&self, coordinate: Coordinate) -> bool {
        self.improvement_at(coordinate, ImprovementLayer::Route)
            .is_some()
    }

    // ===== setup =====

    /// Appends a player seat and returns its index.
    pub fn add_player(&mut self, player: Player) -> Result<usize, StateError> {
        if self.players.len() >= GameConfig::MAX_PLAYERS {
            return Err(StateError::PlayerListFull {
                max: GameConfig::MAX_PLAYERS,
            });
        }
        if self.player(player.id).is_some() {
            return Err(StateError::DuplicatePlayer(player.id));
        }
        self.players.push_back(player);
        Ok(self.players.len() - 1)
    }

    /// Places a unit during setup.
    pub fn add_unit(&mut self, unit: Unit) -> Result<(), StateError> {
        let len = unit.id.as_str().len();
        if len == 0 || len > GameConfig::MAX_UNIT_ID_LEN {
            return Err(StateError::InvalidUnitId {
                len,
                max: GameConfig::MAX_UNIT_ID_LEN,
            });
        }
        if self.units.contains_key(&unit.id) {
            return Err(StateError::DuplicateUnit(unit.id));
        }
        if self.player(unit.player).is_none() {
            return Err(StateError::UnknownPlayer(unit.player));
        }
        if self.tile(unit.coordinate).is_none() {
            return Err(StateError::OffMap {
                coordinate: unit.coordinate,
            });
        }
        if let Some(occupant) = self.unit_at(unit.coordinate) {
            return Err(StateError::Occupied {
                coordinate: unit.coordinate,
                occupant: occupant.id.clone(),
            });
        }
        if !unit.is_alive() {
            return Err(InvariantViolation::DeadUnitPresent { unit: unit.id }.into());
        }

        self.units.insert(unit.id.clone(), unit);
        Ok(())
    }

    /// Founds a city and marks its tile.
    pub fn add_city(&mut self, city: City) -> Result<(), StateError> {
        if self.cities.iter().any(|existing| existing.id == city.id) {
            return Err(StateError::DuplicateCity(city.id));
        }
        if self.player(city.player).is_none() {
            return Err(StateError::UnknownPlayer(city.player));
        }
        let tile = self
            .map
            .tiles
            .get_mut(&city.coordinate)
            .ok_or(StateError::OffMap {
                coordinate: city.coordinate,
            })?;
        tile.has_city = true;
        self.cities.push_back(city);
        Ok(())
    }

    /// Records a pre-existing improvement during setup.
    pub fn add_improvement(&mut self, improvement: Improvement) -> Result<(), StateError> {
        if self.tile(improvement.coordinate).is_none() {
            return Err(StateError::OffMap {
                coordinate: improvement.coordinate,
            });
        }
        if self
            .improvement_at(improvement.coordinate, improvement.layer())
            .is_some()
        {
            return Err(InvariantViolation::DuplicateImprovement {
                coordinate: improvement.coordinate,
                layer: improvement.layer(),
            }
            .into());
        }
        self.improvements.push_back(improvement);
        Ok(())
    }

    /// Checks a freshly assembled state before handing it to the engine.
    pub fn validate_setup(&self) -> Result<(), StateError> {
        self.check_invariants()?;
        Ok(())
    }

    /// Restores movement and attack for every unit of `player`.
    ///
    /// Turn orchestration calls this at the start of a seat's turn; the
    /// action engine never does.
    pub fn refresh_units_for(&mut self, player: PlayerId) {
        let owned: Vec<UnitId> = self
            .units
            .values()
            .filter(|unit| unit.player == player)
            .map(|unit| unit.id.clone())
            .collect();
        for id in owned {
            if let Some(unit) = self.units.get_mut(&id) {
                unit.refresh();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{UnitKind, UnitOracle, UnitRegistry};

    fn state_with_player() -> GameState {
        let mut state = GameState::new(GameMap::filled(4, 4, Terrain::Plains));
        state
            .add_player(Player::new(PlayerId(1), Faction::Highland))
            .unwrap();
        state
    }

    #[test]
    fn add_unit_rejects_duplicates_and_stacking() {
        let registry = UnitRegistry::standard();
        let warrior = registry.lookup(UnitKind::Warrior).unwrap();
        let mut state = state_with_player();

        state
            .add_unit(warrior.spawn("w1", PlayerId(1), Coordinate::ORIGIN))
            .unwrap();

        assert_eq!(
            state.add_unit(warrior.spawn("w1", PlayerId(1), Coordinate::new(1, 0, -1))),
            Err(StateError::DuplicateUnit(UnitId::from("w1")))
        );
        assert_eq!(
            state.add_unit(warrior.spawn("w2", PlayerId(1), Coordinate::ORIGIN)),
            Err(StateError::Occupied {
                coordinate: Coordinate::ORIGIN,
                occupant: UnitId::from("w1"),
            })
        );
        assert_eq!(
            state.add_unit(warrior.spawn("w3", PlayerId(9), Coordinate::new(1, 0, -1))),
            Err(StateError::UnknownPlayer(PlayerId(9)))
        );
        assert_eq!(
            state.add_unit(warrior.spawn("", PlayerId(1), Coordinate::new(1, 0, -1))),
            Err(StateError::InvalidUnitId {
                len: 0,
                max: GameConfig::MAX_UNIT_ID_LEN
            })
        );
    }

    #[test]
    fn add_city_marks_tile() {
        let mut state = state_with_player();
        let at = Coordinate::new(1, 1, -2);
        state
            .add_city(City::new(CityId(1), PlayerId(1), "Harbor", at))
            .unwrap();

        assert!(state.tile(at).unwrap().has_city);
        assert!(state.validate_setup().is_ok());
    }

    #[test]
    fn refresh_only_touches_the_given_player() {
        let registry = UnitRegistry::standard();
        let rider = registry.lookup(UnitKind::Rider).unwrap();
        let mut state = state_with_player();
        state
            .add_player(Player::new(PlayerId(2), Faction::Steppe))
            .unwrap();
        state
            .add_unit(
                rider
                    .spawn("mine", PlayerId(1), Coordinate::ORIGIN)
                    .with_remaining_movement(0)
                    .with_has_attacked(true),
            )
            .unwrap();
        state
            .add_unit(
                rider
                    .spawn("theirs", PlayerId(2), Coordinate::new(2, 0, -2))
                    .with_remaining_movement(0),
            )
            .unwrap();

        state.refresh_units_for(PlayerId(1));

        let mine = state.unit(&UnitId::from("mine")).unwrap();
        assert_eq!(mine.remaining_movement, mine.movement);
        assert!(!mine.has_attacked);
        assert_eq!(
            state.unit(&UnitId::from("theirs")).unwrap().remaining_movement,
            0
        );
    }

    #[test]
    fn clone_shares_untouched_records() {
        let mut state = state_with_player();
        let before = state.clone();

        state.map.tiles.get_mut(&Coordinate::ORIGIN).unwrap().terrain = Terrain::Forest;

        assert_eq!(before.tile(Coordinate::ORIGIN).unwrap().terrain, Terrain::Plains);
        assert_eq!(state.tile(Coordinate::ORIGIN).unwrap().terrain, Terrain::Forest);
        assert_eq!(before.players, state.players);
    }
}
