//! Unit catalog loader.

use std::collections::BTreeSet;
use std::path::Path;

use game_core::{UnitDefinition, UnitRegistry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, from_ron, read_file};

/// Unit catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitCatalog {
    pub units: Vec<UnitDefinition>,
}

/// Loader for the unit catalog from RON files.
pub struct UnitLoader;

impl UnitLoader {
    /// Load a unit catalog from a RON file.
    ///
    /// Fails if two entries share a unit kind.
    pub fn load(path: &Path) -> LoadResult<UnitRegistry> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a unit catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<UnitRegistry> {
        let catalog: UnitCatalog = from_ron(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unit catalog RON: {}", e))?;

        let mut seen = BTreeSet::new();
        for definition in &catalog.units {
            if !seen.insert(definition.kind) {
                anyhow::bail!("Unit kind '{}' is defined more than once", definition.kind);
            }
            if definition.base_hp == 0 {
                anyhow::bail!("Unit kind '{}' has zero base_hp", definition.kind);
            }
        }

        Ok(catalog.units.into_iter().collect())
    }
}
