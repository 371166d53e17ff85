//! Action domain - unit actions, their validation and their effects.
//!
//! # Module Structure
//!
//! - `kind`: the closed [`ActionKind`] enumeration
//! - `types`: requests ([`UnitAction`]), resolved plans and outcomes
//! - `error`: [`Rejection`] reasons
//! - `execute`: the three-phase pipeline (`pre_validate`, `apply`, `post_validate`)
//! - `movement`: movement cost search used by MOVE
//! - `available`: enumerate actions a unit can take right now

mod available;
pub mod error;
pub mod execute;
mod kind;
pub mod movement;
pub mod types;

pub use available::available_actions;
pub use error::{ActorFault, Rejection, TargetFault};
pub use execute::{apply, post_validate, pre_validate};
pub use kind::ActionKind;
pub use types::{ActionOutcome, ActionPlan, UnitAction, ValidatedAction};

#[cfg(feature = "serde")]
mod root;
#[cfg(feature = "serde")]
pub use root::compute_script_root;
