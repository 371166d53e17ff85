use super::{PlayerId, UnitId};
use crate::env::UnitKind;
use crate::hex::Coordinate;

/// Lifecycle status of a unit on the board.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnitStatus {
    #[default]
    Active,
    Fortified,
    Dead,
}

/// Runtime record of a unit.
///
/// Stats are copied from the [`UnitDefinition`](crate::env::UnitDefinition)
/// at spawn time; the definition itself stays in the registry.
///
/// # Invariants
///
/// - `hp <= max_hp`
/// - `remaining_movement <= movement`
/// - a unit with `hp == 0` or status `Dead` is not stored in `GameState::units`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id: UnitId,
    pub kind: UnitKind,
    pub player: PlayerId,
    pub coordinate: Coordinate,
    pub status: UnitStatus,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub movement: u32,
    pub vision_radius: u32,
    pub attack_range: u32,
    pub remaining_movement: u32,
    pub has_attacked: bool,
}

impl Unit {
    pub fn is_alive(&self) -> bool {
        self.hp > 0 && self.status != UnitStatus::Dead
    }

    pub fn is_enemy_of(&self, player: PlayerId) -> bool {
        self.player != player
    }

    pub fn with_remaining_movement(mut self, remaining: u32) -> Self {
        self.remaining_movement = remaining.min(self.movement);
        self
    }

    pub fn with_status(mut self, status: UnitStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_has_attacked(mut self, has_attacked: bool) -> Self {
        self.has_attacked = has_attacked;
        self
    }

    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    /// Restores the per-turn budget. Called by turn orchestration, never by the engine.
    pub fn refresh(&mut self) {
        self.remaining_movement = self.movement;
        self.has_attacked = false;
    }
}
