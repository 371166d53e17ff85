//! Scenario loader.
//!
//! A scenario is the starting position of a match: the map, the player seats
//! and everything already on the board. Positions are odd-r offset
//! `(column, row)` pairs; the loader converts them to cube coordinates.

use std::path::Path;

use game_core::{
    City, CityId, Faction, GameMap, GameState, Improvement, ImprovementKind, Player, PlayerId,
    Resource, Terrain, Tile, UnitKind, UnitOracle,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, from_ron, offset, read_file};

/// Scenario structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRon {
    pub name: String,
    pub map: MapRon,
    pub players: Vec<PlayerRon>,
    #[serde(default)]
    pub units: Vec<UnitRon>,
    #[serde(default)]
    pub cities: Vec<CityRon>,
    #[serde(default)]
    pub improvements: Vec<ImprovementRon>,
    /// Index into `players` of the seat to move first.
    #[serde(default)]
    pub current_player: usize,
    #[serde(default = "first_turn")]
    pub turn: u32,
}

fn first_turn() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapRon {
    pub width: u32,
    pub height: u32,
    /// Terrain of every tile not listed in `tiles`.
    #[serde(default)]
    pub terrain: Terrain,
    #[serde(default)]
    pub tiles: Vec<TileRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileRon {
    pub at: (i32, i32),
    pub terrain: Terrain,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRon {
    pub id: u32,
    #[serde(default)]
    pub faction: Faction,
    #[serde(default)]
    pub stars: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitRon {
    pub id: String,
    pub kind: UnitKind,
    pub player: u32,
    pub at: (i32, i32),
    /// Overrides the definition's hit points (wounded units).
    #[serde(default)]
    pub hp: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityRon {
    pub id: u32,
    pub player: u32,
    pub name: String,
    pub at: (i32, i32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementRon {
    pub kind: ImprovementKind,
    pub at: (i32, i32),
    pub built_by: u32,
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario and build its initial state.
    ///
    /// Units are spawned from `units`, so every unit kind the scenario places
    /// must be registered there. The result passes
    /// [`GameState::validate_setup`].
    pub fn load<U>(path: &Path, units: &U) -> LoadResult<GameState>
    where
        U: UnitOracle + ?Sized,
    {
        let content = read_file(path)?;
        Self::parse(&content, units)
    }

    pub fn parse<U>(content: &str, units: &U) -> LoadResult<GameState>
    where
        U: UnitOracle + ?Sized,
    {
        let scenario: ScenarioRon = from_ron(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        Self::build(scenario, units)
    }

    pub fn build<U>(scenario: ScenarioRon, units: &U) -> LoadResult<GameState>
    where
        U: UnitOracle + ?Sized,
    {
        let name = scenario.name;
        let context = |e: game_core::StateError| anyhow::anyhow!("Scenario '{}': {}", name, e);
        let position = |at: (i32, i32)| {
            offset(at).map_err(|e| anyhow::anyhow!("Scenario '{}': {}", name, e))
        };

        let mut map = GameMap::filled(scenario.map.width, scenario.map.height, scenario.map.terrain);
        for tile in scenario.map.tiles {
            let mut record = Tile::new(position(tile.at)?, tile.terrain);
            for resource in tile.resources {
                record = record.with_resource(resource);
            }
            map.insert_tile(record).map_err(context)?;
        }

        let mut state = GameState::new(map);
        state.turn = scenario.turn;

        for player in scenario.players {
            state
                .add_player(Player::new(PlayerId(player.id), player.faction).with_stars(player.stars))
                .map_err(context)?;
        }
        if scenario.current_player >= state.players.len() {
            anyhow::bail!(
                "Scenario '{}': current_player {} is out of range ({} players)",
                name,
                scenario.current_player,
                state.players.len()
            );
        }
        state.current_player_index = scenario.current_player;

        for city in scenario.cities {
            state
                .add_city(City::new(
                    CityId(city.id),
                    PlayerId(city.player),
                    city.name,
                    position(city.at)?,
                ))
                .map_err(context)?;
        }

        for improvement in scenario.improvements {
            state
                .add_improvement(Improvement::new(
                    improvement.kind,
                    position(improvement.at)?,
                    PlayerId(improvement.built_by),
                ))
                .map_err(context)?;
        }

        for unit in scenario.units {
            let definition = units
                .lookup(unit.kind)
                .map_err(|e| anyhow::anyhow!("Scenario '{}': unit '{}': {}", name, unit.id, e))?;
            let mut spawned = definition.spawn(unit.id, PlayerId(unit.player), position(unit.at)?);
            if let Some(hp) = unit.hp {
                spawned = spawned.with_hp(hp);
            }
            state.add_unit(spawned).map_err(context)?;
        }

        state.validate_setup().map_err(context)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Coordinate, UnitId, UnitRegistry};

    const SCENARIO: &str = r#"(
        name: "duel",
        map: (
            width: 3,
            height: 3,
            tiles: [
                (at: (1, 0), terrain: forest, resources: [game]),
            ],
        ),
        players: [
            (id: 1, faction: highland, stars: 4),
            (id: 2, stars: 1),
        ],
        units: [
            (id: "a", kind: worker, player: 1, at: (0, 0)),
            (id: "b", kind: warrior, player: 2, at: (2, 2), hp: 4),
        ],
        cities: [
            (id: 1, player: 1, name: "Home", at: (0, 1)),
        ],
        current_player: 1,
    )"#;

    #[test]
    fn builds_state_from_offsets() {
        let state = ScenarioLoader::parse(SCENARIO, &UnitRegistry::standard()).unwrap();

        assert_eq!(state.players.len(), 2);
        assert_eq!(state.current_player_index, 1);
        assert_eq!(state.turn, 1);
        assert_eq!(
            state.tile(Coordinate::from_offset(1, 0)).unwrap().terrain,
            Terrain::Forest
        );
        assert!(state.tile(Coordinate::from_offset(0, 1)).unwrap().has_city);
        assert_eq!(state.unit(&UnitId::from("b")).unwrap().hp, 4);
        assert_eq!(state.units.len(), 2);
    }

    #[test]
    fn unregistered_kind_is_an_error() {
        let error = ScenarioLoader::parse(SCENARIO, &UnitRegistry::new()).unwrap_err();
        assert!(error.to_string().contains("unit 'a'"), "{error}");
    }

    #[test]
    fn out_of_range_seat_is_an_error() {
        let text = SCENARIO.replace("current_player: 1", "current_player: 2");
        let error = ScenarioLoader::parse(&text, &UnitRegistry::standard()).unwrap_err();
        assert!(error.to_string().contains("current_player 2"), "{error}");
    }

    #[test]
    fn overflowing_offset_is_an_error() {
        let text = SCENARIO.replace("at: (2, 2)", "at: (-2147483647, 5)");
        let error = ScenarioLoader::parse(&text, &UnitRegistry::standard()).unwrap_err();
        assert!(error.to_string().contains("out of range"), "{error}");
    }
}
