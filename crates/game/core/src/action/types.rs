//! Core action types and structures.
//!
//! - `UnitAction`: a request, as submitted by a caller
//! - `ValidatedAction`: a request the validator accepted, with everything resolved
//! - `ActionOutcome`: what the executor did

use crate::action::ActionKind;
use crate::hex::Coordinate;
use crate::state::{ImprovementKind, Resource, Unit, UnitId};

// ============================================================================
// Unit Action
// ============================================================================

/// A request for one unit to perform one action.
///
/// Ids and coordinates are untrusted; the validator checks every reference.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitAction {
    pub actor: UnitId,
    pub kind: ActionKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target_unit: Option<UnitId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: Option<Coordinate>,
}

impl UnitAction {
    pub fn new(actor: impl Into<UnitId>, kind: ActionKind) -> Self {
        Self {
            actor: actor.into(),
            kind,
            target_unit: None,
            target: None,
        }
    }

    /// Sets the target coordinate.
    pub fn at(mut self, target: Coordinate) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the target unit (ATTACK).
    pub fn against(mut self, unit: impl Into<UnitId>) -> Self {
        self.target_unit = Some(unit.into());
        self
    }
}

// ============================================================================
// Validated Action
// ============================================================================

/// Resolved effect of an accepted action. Built only by the validator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionPlan {
    /// BUILD or BUILD_ROAD. `supersedes` is the structure being replaced.
    Build {
        kind: ImprovementKind,
        at: Coordinate,
        stars: u32,
        supersedes: Option<ImprovementKind>,
    },
    Harvest {
        at: Coordinate,
        resource: Resource,
        stars: u32,
    },
    ClearForest {
        at: Coordinate,
        stars: u32,
    },
    Move {
        to: Coordinate,
    },
    Attack {
        defender: UnitId,
        at: Coordinate,
        damage: u32,
    },
}

/// An action that passed every validator check against one specific state.
///
/// Applying it to any other state is a logic error; the executor re-checks
/// arithmetic and reports an invariant violation rather than going negative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedAction {
    pub kind: ActionKind,
    /// Actor snapshot taken during validation.
    pub actor: Unit,
    pub plan: ActionPlan,
    /// Movement the action spends.
    pub movement_cost: u32,
}

impl ValidatedAction {
    pub fn actor_id(&self) -> &UnitId {
        &self.actor.id
    }

    /// Coordinate the action targets.
    pub fn target(&self) -> Coordinate {
        match &self.plan {
            ActionPlan::Build { at, .. }
            | ActionPlan::Harvest { at, .. }
            | ActionPlan::ClearForest { at, .. }
            | ActionPlan::Attack { at, .. } => *at,
            ActionPlan::Move { to } => *to,
        }
    }
}

// ============================================================================
// Action Outcome
// ============================================================================

/// What an executed action changed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionOutcome {
    Built {
        kind: ImprovementKind,
        at: Coordinate,
        stars_spent: u32,
        superseded: Option<ImprovementKind>,
    },
    Harvested {
        resource: Resource,
        at: Coordinate,
        stars_gained: u32,
    },
    ForestCleared {
        at: Coordinate,
        stars_gained: u32,
    },
    Moved {
        from: Coordinate,
        to: Coordinate,
        movement_spent: u32,
        /// Tiles newly explored by the moving player.
        revealed: usize,
    },
    Attacked {
        defender: UnitId,
        damage: u32,
        remaining_hp: u32,
        defeated: bool,
    },
}

impl ActionOutcome {
    /// One-line description for reports and logs.
    pub fn summary(&self) -> String {
        match self {
            ActionOutcome::Built {
                kind,
                at,
                stars_spent,
                superseded: Some(old),
            } => format!("built {kind} at {at} replacing {old} for {stars_spent} stars"),
            ActionOutcome::Built {
                kind,
                at,
                stars_spent,
                superseded: None,
            } => format!("built {kind} at {at} for {stars_spent} stars"),
            ActionOutcome::Harvested {
                resource,
                at,
                stars_gained,
            } => format!("harvested {resource} at {at} (+{stars_gained} stars)"),
            ActionOutcome::ForestCleared { at, stars_gained } => {
                format!("cleared forest at {at} (+{stars_gained} stars)")
            }
            ActionOutcome::Moved {
                from,
                to,
                movement_spent,
                ..
            } => format!("moved {from} -> {to} ({movement_spent} movement)"),
            ActionOutcome::Attacked {
                defender,
                damage,
                defeated: true,
                ..
            } => format!("dealt {damage} damage, {defender} destroyed"),
            ActionOutcome::Attacked {
                defender,
                damage,
                remaining_hp,
                ..
            } => format!("dealt {damage} damage, {defender} has {remaining_hp} hp left"),
        }
    }
}
