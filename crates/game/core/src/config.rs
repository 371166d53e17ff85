/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Movement spent by BUILD, BUILD_ROAD, HARVEST and CLEAR_FOREST.
    pub terrain_action_cost: u32,
    /// Stars credited when a forest is cleared.
    pub clear_forest_yield: u32,
}

impl GameConfig {
    // ===== compile-time limits =====
    pub const MAX_PLAYERS: usize = 16;
    pub const MAX_UNIT_ID_LEN: usize = 64;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TERRAIN_ACTION_COST: u32 = 1;
    pub const DEFAULT_CLEAR_FOREST_YIELD: u32 = 1;

    pub fn new() -> Self {
        Self {
            terrain_action_cost: Self::DEFAULT_TERRAIN_ACTION_COST,
            clear_forest_yield: Self::DEFAULT_CLEAR_FOREST_YIELD,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
