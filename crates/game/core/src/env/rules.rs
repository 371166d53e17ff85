use crate::config::GameConfig;
use crate::state::{ImprovementKind, Resource, Terrain};

/// Oracle providing movement, cost and yield tables.
///
/// This oracle defines rules that depend on the map: what a step costs,
/// what an improvement costs, what a harvest gives. Unit stats come from
/// [`UnitOracle`](super::UnitOracle).
pub trait RulesOracle: Send + Sync {
    fn config(&self) -> &GameConfig;

    /// Movement spent entering a tile of `terrain`, or `None` if impassable.
    fn movement_cost(&self, terrain: Terrain) -> Option<u32>;

    /// Movement spent stepping between two tiles that both carry a road.
    fn road_movement_cost(&self) -> u32;

    fn improvement_cost(&self, kind: ImprovementKind) -> u32;

    /// Stars credited for harvesting `resource`. Zero for non-harvestable tags.
    fn harvest_yield(&self, resource: Resource) -> u32;

    fn terrain_action_cost(&self) -> u32 {
        self.config().terrain_action_cost
    }

    fn clear_forest_yield(&self) -> u32 {
        self.config().clear_forest_yield
    }
}

/// Cost of entering each passable terrain. Mountain and Water are impassable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MovementCosts {
    pub plains: u32,
    pub grassland: u32,
    pub forest: u32,
    pub hills: u32,
    pub road: u32,
}

impl Default for MovementCosts {
    fn default() -> Self {
        Self {
            plains: 1,
            grassland: 1,
            forest: 2,
            hills: 2,
            road: 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImprovementCosts {
    pub road: u32,
    pub farm: u32,
    pub mine: u32,
    pub lumber_hut: u32,
}

impl Default for ImprovementCosts {
    fn default() -> Self {
        Self {
            road: 2,
            farm: 5,
            mine: 5,
            lumber_hut: 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HarvestYields {
    pub fruit: u32,
    pub game: u32,
    pub fish: u32,
}

impl Default for HarvestYields {
    fn default() -> Self {
        Self {
            fruit: 2,
            game: 2,
            fish: 3,
        }
    }
}

/// Concrete rules tables. Deserializes from `rules.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameRules {
    pub config: GameConfig,
    pub movement: MovementCosts,
    pub improvements: ImprovementCosts,
    pub harvest: HarvestYields,
}

impl GameRules {
    pub fn standard() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }
}

impl RulesOracle for GameRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn movement_cost(&self, terrain: Terrain) -> Option<u32> {
        match terrain {
            Terrain::Plains => Some(self.movement.plains),
            Terrain::Grassland => Some(self.movement.grassland),
            Terrain::Forest => Some(self.movement.forest),
            Terrain::Hills => Some(self.movement.hills),
            Terrain::Mountain | Terrain::Water => None,
        }
    }

    fn road_movement_cost(&self) -> u32 {
        self.movement.road
    }

    fn improvement_cost(&self, kind: ImprovementKind) -> u32 {
        match kind {
            ImprovementKind::Road => self.improvements.road,
            ImprovementKind::Farm => self.improvements.farm,
            ImprovementKind::Mine => self.improvements.mine,
            ImprovementKind::LumberHut => self.improvements.lumber_hut,
        }
    }

    fn harvest_yield(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Fruit => self.harvest.fruit,
            Resource::Game => self.harvest.game,
            Resource::Fish => self.harvest.fish,
            Resource::Crop | Resource::Ore => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mountains_and_water_are_impassable() {
        let rules = GameRules::standard();
        assert_eq!(rules.movement_cost(Terrain::Mountain), None);
        assert_eq!(rules.movement_cost(Terrain::Water), None);
        assert_eq!(rules.movement_cost(Terrain::Forest), Some(2));
    }

    #[test]
    fn config_tunables_flow_through() {
        let rules = GameRules::standard().with_config(GameConfig {
            terrain_action_cost: 2,
            clear_forest_yield: 4,
        });
        assert_eq!(rules.terrain_action_cost(), 2);
        assert_eq!(rules.clear_forest_yield(), 4);
        assert_eq!(rules.improvement_cost(ImprovementKind::Road), 2);
        assert_eq!(rules.harvest_yield(Resource::Ore), 0);
    }
}
