//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod actions;
mod replay;
mod units;

pub use actions::Actions;
pub use replay::Replay;
pub use units::Units;
