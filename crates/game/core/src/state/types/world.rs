use bitflags::bitflags;
use im::{OrdMap, OrdSet};

use super::PlayerId;
use crate::hex::{Coordinate, MapDimensions};
use crate::state::StateError;

/// Base terrain of a tile. Only CLEAR_FOREST ever changes it.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Terrain {
    #[default]
    Plains,
    Grassland,
    Forest,
    Hills,
    Mountain,
    Water,
}

impl Terrain {
    pub const fn is_land(self) -> bool {
        !matches!(self, Terrain::Water)
    }
}

/// A single harvestable or improvable tile resource.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Resource {
    Fruit,
    Game,
    Fish,
    Crop,
    Ore,
}

impl Resource {
    /// Resources HARVEST may take, in the order it takes them.
    pub const HARVEST_ORDER: [Resource; 3] = [Resource::Fruit, Resource::Game, Resource::Fish];

    pub const fn is_harvestable(self) -> bool {
        matches!(self, Resource::Fruit | Resource::Game | Resource::Fish)
    }

    pub const fn flag(self) -> ResourceSet {
        match self {
            Resource::Fruit => ResourceSet::FRUIT,
            Resource::Game => ResourceSet::GAME,
            Resource::Fish => ResourceSet::FISH,
            Resource::Crop => ResourceSet::CROP,
            Resource::Ore => ResourceSet::ORE,
        }
    }
}

bitflags! {
    /// Set of resource tags present on a tile.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct ResourceSet: u8 {
        const FRUIT = 1 << 0;
        const GAME  = 1 << 1;
        const FISH  = 1 << 2;
        const CROP  = 1 << 3;
        const ORE   = 1 << 4;
    }
}

impl From<Resource> for ResourceSet {
    fn from(resource: Resource) -> Self {
        resource.flag()
    }
}

/// One hex of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub coordinate: Coordinate,
    pub terrain: Terrain,
    pub resources: ResourceSet,
    pub has_city: bool,
    pub explored_by: OrdSet<PlayerId>,
}

impl Tile {
    pub fn new(coordinate: Coordinate, terrain: Terrain) -> Self {
        Self {
            coordinate,
            terrain,
            resources: ResourceSet::empty(),
            has_city: false,
            explored_by: OrdSet::new(),
        }
    }

    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resources.insert(resource.flag());
        self
    }

    /// The resource HARVEST would take from this tile, if any.
    pub fn harvestable(&self) -> Option<Resource> {
        Resource::HARVEST_ORDER
            .into_iter()
            .find(|resource| self.resources.contains(resource.flag()))
    }

    pub fn is_explored_by(&self, player: PlayerId) -> bool {
        self.explored_by.contains(&player)
    }
}

/// Board geometry plus every tile record, keyed by coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameMap {
    pub width: u32,
    pub height: u32,
    #[cfg_attr(feature = "serde", serde(with = "tile_seq"))]
    pub tiles: OrdMap<Coordinate, Tile>,
}

/// Tiles are written as a plain sequence; the coordinate key lives in each tile.
#[cfg(feature = "serde")]
mod tile_seq {
    use im::OrdMap;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Tile;
    use crate::hex::Coordinate;

    pub(super) fn serialize<S>(tiles: &OrdMap<Coordinate, Tile>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(tiles.values())
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<OrdMap<Coordinate, Tile>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tiles = Vec::<Tile>::deserialize(deserializer)?;
        Ok(tiles.into_iter().map(|tile| (tile.coordinate, tile)).collect())
    }
}

impl GameMap {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: OrdMap::new(),
        }
    }

    /// Creates a map where every in-bounds tile has the same terrain.
    pub fn filled(width: u32, height: u32, terrain: Terrain) -> Self {
        let dimensions = MapDimensions::new(width, height);
        let tiles = dimensions
            .coordinates()
            .map(|coordinate| (coordinate, Tile::new(coordinate, terrain)))
            .collect();
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.width, self.height)
    }

    pub fn is_within_bounds(&self, coordinate: Coordinate) -> bool {
        self.dimensions().contains(coordinate)
    }

    pub fn tile(&self, coordinate: Coordinate) -> Option<&Tile> {
        self.tiles.get(&coordinate)
    }

    /// Inserts or replaces a tile during setup.
    pub fn insert_tile(&mut self, tile: Tile) -> Result<(), StateError> {
        if !self.is_within_bounds(tile.coordinate) {
            return Err(StateError::OffMap {
                coordinate: tile.coordinate,
            });
        }
        self.tiles.insert(tile.coordinate, tile);
        Ok(())
    }
}

/// Kinds of persistent map features workers create.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ImprovementKind {
    Road,
    Farm,
    Mine,
    LumberHut,
}

/// A coordinate holds at most one improvement per layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ImprovementLayer {
    Route,
    Structure,
}

impl ImprovementKind {
    pub const fn layer(self) -> ImprovementLayer {
        match self {
            ImprovementKind::Road => ImprovementLayer::Route,
            ImprovementKind::Farm | ImprovementKind::Mine | ImprovementKind::LumberHut => {
                ImprovementLayer::Structure
            }
        }
    }

    /// Terrain on which this improvement may be built.
    pub const fn allows(self, terrain: Terrain) -> bool {
        match self {
            ImprovementKind::Road => terrain.is_land() && !matches!(terrain, Terrain::Mountain),
            ImprovementKind::Farm => matches!(terrain, Terrain::Plains | Terrain::Grassland),
            ImprovementKind::Mine => matches!(terrain, Terrain::Hills | Terrain::Mountain),
            ImprovementKind::LumberHut => matches!(terrain, Terrain::Forest),
        }
    }
}

/// Immutable record of a built improvement. Superseding replaces the record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Improvement {
    pub kind: ImprovementKind,
    pub coordinate: Coordinate,
    pub built_by: PlayerId,
}

impl Improvement {
    pub fn new(kind: ImprovementKind, coordinate: Coordinate, built_by: PlayerId) -> Self {
        Self {
            kind,
            coordinate,
            built_by,
        }
    }

    pub fn layer(&self) -> ImprovementLayer {
        self.kind.layer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harvestable_prefers_fruit_then_game_then_fish() {
        let tile = Tile::new(Coordinate::ORIGIN, Terrain::Forest)
            .with_resource(Resource::Fish)
            .with_resource(Resource::Game);
        assert_eq!(tile.harvestable(), Some(Resource::Game));

        let ore_only = Tile::new(Coordinate::ORIGIN, Terrain::Hills).with_resource(Resource::Ore);
        assert_eq!(ore_only.harvestable(), None);
    }

    #[test]
    fn filled_map_has_a_tile_per_offset_cell() {
        let map = GameMap::filled(4, 3, Terrain::Plains);
        assert_eq!(map.tiles.len(), 12);
        assert!(map.tiles.keys().all(|c| map.is_within_bounds(*c)));
    }

    #[test]
    fn insert_tile_rejects_off_map_coordinates() {
        let mut map = GameMap::new(2, 2);
        let outside = Coordinate::new(5, 0, -5);
        assert_eq!(
            map.insert_tile(Tile::new(outside, Terrain::Plains)),
            Err(StateError::OffMap {
                coordinate: outside
            })
        );
    }

    #[test]
    fn improvement_terrain_rules() {
        assert!(ImprovementKind::Road.allows(Terrain::Forest));
        assert!(!ImprovementKind::Road.allows(Terrain::Mountain));
        assert!(!ImprovementKind::Road.allows(Terrain::Water));
        assert!(ImprovementKind::Farm.allows(Terrain::Grassland));
        assert!(!ImprovementKind::Farm.allows(Terrain::Forest));
        assert!(ImprovementKind::Mine.allows(Terrain::Mountain));
        assert!(ImprovementKind::LumberHut.allows(Terrain::Forest));
    }

    #[test]
    fn terrain_parses_from_snake_case() {
        assert_eq!("forest".parse::<Terrain>(), Ok(Terrain::Forest));
        assert_eq!("lumber_hut".parse::<ImprovementKind>(), Ok(ImprovementKind::LumberHut));
        assert_eq!(ImprovementKind::LumberHut.to_string(), "lumber_hut");
    }
}
