//! Game rules loader.

use std::path::Path;

use game_core::GameRules;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules tables from TOML files.
///
/// Every table and every key is optional; missing entries keep the standard
/// values.
pub struct RulesLoader;

impl RulesLoader {
    /// Load rules from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameRules> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameRules> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))
    }
}
