use im::{OrdSet, Vector};

use super::PlayerId;

/// Tribe a player seat is playing.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    #[default]
    Neutral,
    Highland,
    Riverfolk,
    Steppe,
    Coastal,
    Forestkin,
}

/// Numeric counters owned by a player. Unsigned, so never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerResources {
    pub stars: u32,
    pub faith: u32,
    pub pride: u32,
    pub internal_dissent: u32,
}

impl PlayerResources {
    pub const fn with_stars(stars: u32) -> Self {
        Self {
            stars,
            faith: 0,
            pride: 0,
            internal_dissent: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub faction: Faction,
    pub resources: PlayerResources,
    pub researched_techs: OrdSet<String>,
    pub current_research: Option<String>,
    pub research_progress: u32,
    pub construction_queue: Vector<String>,
}

impl Player {
    pub fn new(id: PlayerId, faction: Faction) -> Self {
        Self {
            id,
            faction,
            resources: PlayerResources::default(),
            researched_techs: OrdSet::new(),
            current_research: None,
            research_progress: 0,
            construction_queue: Vector::new(),
        }
    }

    pub fn with_stars(mut self, stars: u32) -> Self {
        self.resources.stars = stars;
        self
    }
}
