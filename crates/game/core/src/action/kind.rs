//! Action kind enumeration - all possible unit actions.
use std::fmt;

use crate::env::Abilities;
use crate::state::ImprovementKind;

/// Types of actions a unit can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    /// Construct an improvement. `Build(Road)` behaves exactly like [`BuildRoad`](Self::BuildRoad).
    Build(ImprovementKind),
    /// Take a harvestable resource from a tile.
    Harvest,
    /// Turn a forest into plains.
    ClearForest,
    BuildRoad,
    Move,
    Attack,
}

impl ActionKind {
    /// Every argument-free kind plus each structure build.
    pub const ALL: [ActionKind; 8] = [
        ActionKind::Move,
        ActionKind::Attack,
        ActionKind::BuildRoad,
        ActionKind::Build(ImprovementKind::Farm),
        ActionKind::Build(ImprovementKind::Mine),
        ActionKind::Build(ImprovementKind::LumberHut),
        ActionKind::Harvest,
        ActionKind::ClearForest,
    ];

    /// Ability the actor's definition must carry.
    pub const fn required_ability(self) -> Abilities {
        match self {
            ActionKind::Build(ImprovementKind::Road) | ActionKind::BuildRoad => {
                Abilities::BUILD_ROAD
            }
            ActionKind::Build(_) => Abilities::BUILD,
            ActionKind::Harvest => Abilities::HARVEST,
            ActionKind::ClearForest => Abilities::CLEAR_FOREST,
            ActionKind::Move => Abilities::MOVE,
            ActionKind::Attack => Abilities::ATTACK,
        }
    }

    /// Actions that work the actor's own or an adjacent tile.
    pub const fn is_terrain_action(self) -> bool {
        matches!(
            self,
            ActionKind::Build(_)
                | ActionKind::BuildRoad
                | ActionKind::Harvest
                | ActionKind::ClearForest
        )
    }

    /// Improvement this action creates, if any.
    pub const fn improvement(self) -> Option<ImprovementKind> {
        match self {
            ActionKind::Build(kind) => Some(kind),
            ActionKind::BuildRoad => Some(ImprovementKind::Road),
            _ => None,
        }
    }

    /// Returns the snake_case name of the variant, without its argument.
    ///
    /// Used for logging and serialization keys.
    pub fn as_snake_case(self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Build(kind) => write!(f, "build({kind})"),
            other => f.write_str(other.as_snake_case()),
        }
    }
}
