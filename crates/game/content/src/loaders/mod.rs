//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into oracle
//! implementations and initial game states.

pub mod factory;
pub mod rules;
pub mod scenario;
pub mod script;
pub mod units;

pub use factory::ContentFactory;
pub use rules::RulesLoader;
pub use scenario::ScenarioLoader;
pub use script::ActionScriptLoader;
pub use units::UnitLoader;

use std::path::Path;

use game_core::Coordinate;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// RON with `implicit_some`, so optional fields may be written bare.
pub(crate) fn from_ron<T>(content: &str) -> ron::error::SpannedResult<T>
where
    T: serde::de::DeserializeOwned,
{
    ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(content)
}

/// Content files address tiles by odd-r offset `(column, row)`.
pub(crate) fn offset((column, row): (i32, i32)) -> LoadResult<Coordinate> {
    Coordinate::try_from_offset(column, row)
        .ok_or_else(|| anyhow::anyhow!("offset ({}, {}) is out of range", column, row))
}
