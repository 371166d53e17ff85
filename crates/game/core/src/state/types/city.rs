use super::{CityId, PlayerId};
use crate::hex::Coordinate;

/// A settlement. Its tile carries `has_city = true`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub id: CityId,
    pub player: PlayerId,
    pub name: String,
    pub coordinate: Coordinate,
    pub population: u32,
}

impl City {
    pub fn new(id: CityId, player: PlayerId, name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id,
            player,
            name: name.into(),
            coordinate,
            population: 1,
        }
    }
}
