//! Unit definitions and the registry oracle.
//!
//! A [`UnitDefinition`] is the static capability profile of a unit type. The
//! registry is populated once (from [`UnitRegistry::standard`] or a content
//! file) and only read afterwards; units on the board copy their stats at
//! spawn time and refer back to the definition by [`UnitKind`].
use std::collections::BTreeMap;

use bitflags::bitflags;

use super::OracleError;
use crate::hex::Coordinate;
use crate::state::{PlayerId, Unit, UnitId, UnitStatus};

/// Unit type key into the registry.
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
pub enum UnitKind {
    Worker,
    Warrior,
    Archer,
    Rider,
    Defender,
    Swordsman,
    Catapult,
}

bitflags! {
    /// Capabilities a unit type has.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Abilities: u8 {
        const BUILD        = 1 << 0;
        const HARVEST      = 1 << 1;
        const CLEAR_FOREST = 1 << 2;
        const BUILD_ROAD   = 1 << 3;
        const MOVE         = 1 << 4;
        const ATTACK       = 1 << 5;

        const WORKER  = Self::MOVE.bits()
            | Self::BUILD.bits()
            | Self::BUILD_ROAD.bits()
            | Self::HARVEST.bits()
            | Self::CLEAR_FOREST.bits();
        const MILITARY = Self::MOVE.bits() | Self::ATTACK.bits();
    }
}

/// Static capability profile of a unit type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitDefinition {
    pub kind: UnitKind,
    pub name: String,
    /// Stars needed to train the unit.
    pub cost: u32,
    pub abilities: Abilities,
    pub base_hp: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    pub base_movement: u32,
    pub vision_radius: u32,
    pub attack_range: u32,
}

impl UnitDefinition {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kind: UnitKind,
        cost: u32,
        abilities: Abilities,
        base_hp: u32,
        base_attack: u32,
        base_defense: u32,
        base_movement: u32,
        attack_range: u32,
    ) -> Self {
        Self {
            kind,
            name: kind.to_string(),
            cost,
            abilities,
            base_hp,
            base_attack,
            base_defense,
            base_movement,
            vision_radius: 1,
            attack_range,
        }
    }

    pub fn can(&self, abilities: Abilities) -> bool {
        self.abilities.contains(abilities)
    }

    /// Creates a fresh, fully rested unit of this type.
    pub fn spawn(&self, id: impl Into<UnitId>, player: PlayerId, coordinate: Coordinate) -> Unit {
        Unit {
            id: id.into(),
            kind: self.kind,
            player,
            coordinate,
            status: UnitStatus::Active,
            hp: self.base_hp,
            max_hp: self.base_hp,
            attack: self.base_attack,
            defense: self.base_defense,
            movement: self.base_movement,
            vision_radius: self.vision_radius,
            attack_range: self.attack_range,
            remaining_movement: self.base_movement,
            has_attacked: false,
        }
    }
}

/// Read-only access to unit definitions.
pub trait UnitOracle: Send + Sync {
    fn definition(&self, kind: UnitKind) -> Option<&UnitDefinition>;

    /// Returns the definition for `kind`.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::UnknownUnitType` if `kind` is not registered.
    fn lookup(&self, kind: UnitKind) -> Result<&UnitDefinition, OracleError> {
        self.definition(kind)
            .ok_or(OracleError::UnknownUnitType(kind))
    }
}

/// Free-function form of [`UnitOracle::lookup`].
pub fn get_unit_definition<O>(registry: &O, kind: UnitKind) -> Result<&UnitDefinition, OracleError>
where
    O: UnitOracle + ?Sized,
{
    registry.lookup(kind)
}

/// In-memory unit catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitRegistry {
    definitions: BTreeMap<UnitKind, UnitDefinition>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in catalog used when no content file is supplied.
    pub fn standard() -> Self {
        use UnitKind::*;

        let worker = UnitDefinition {
            vision_radius: 1,
            ..UnitDefinition::new(Worker, 2, Abilities::WORKER, 5, 0, 1, 2, 0)
        };
        let rider = UnitDefinition {
            vision_radius: 2,
            ..UnitDefinition::new(Rider, 3, Abilities::MILITARY, 10, 2, 1, 2, 1)
        };

        [
            worker,
            UnitDefinition::new(Warrior, 2, Abilities::MILITARY, 10, 2, 2, 1, 1),
            UnitDefinition::new(Archer, 3, Abilities::MILITARY, 10, 2, 1, 1, 2),
            rider,
            UnitDefinition::new(Defender, 3, Abilities::MILITARY, 15, 1, 3, 1, 1),
            UnitDefinition::new(Swordsman, 5, Abilities::MILITARY, 15, 3, 3, 1, 1),
            UnitDefinition::new(Catapult, 8, Abilities::MILITARY, 10, 4, 0, 1, 3),
        ]
        .into_iter()
        .collect()
    }

    /// Registers a definition, returning the one it replaced.
    pub fn insert(&mut self, definition: UnitDefinition) -> Option<UnitDefinition> {
        self.definitions.insert(definition.kind, definition)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &UnitDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl FromIterator<UnitDefinition> for UnitRegistry {
    fn from_iter<T: IntoIterator<Item = UnitDefinition>>(iter: T) -> Self {
        let mut registry = Self::new();
        for definition in iter {
            registry.insert(definition);
        }
        registry
    }
}

impl UnitOracle for UnitRegistry {
    fn definition(&self, kind: UnitKind) -> Option<&UnitDefinition> {
        self.definitions.get(&kind)
    }
}
