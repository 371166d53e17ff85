mod city;
mod common;
mod player;
mod unit;
mod world;

pub use city::City;
pub use common::{CityId, PlayerId, UnitId};
pub use player::{Faction, Player, PlayerResources};
pub use unit::{Unit, UnitStatus};
pub use world::{
    GameMap, Improvement, ImprovementKind, ImprovementLayer, Resource, ResourceSet, Terrain, Tile,
};
