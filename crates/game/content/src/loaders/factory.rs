//! Content factory for building oracles and scenarios from data files.

use std::path::{Path, PathBuf};

use game_core::{GameRules, GameState, UnitAction, UnitOracle, UnitRegistry};

use crate::loaders::{ActionScriptLoader, LoadResult, RulesLoader, ScenarioLoader, UnitLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── units.ron
/// ├── rules.toml
/// ├── scenarios/
/// │   └── skirmish.ron
/// └── scripts/
///     └── opening.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load the unit catalog from `units.ron`.
    pub fn load_units(&self) -> LoadResult<UnitRegistry> {
        UnitLoader::load(&self.data_dir.join("units.ron"))
    }

    /// Load rules tables from `rules.toml`.
    pub fn load_rules(&self) -> LoadResult<GameRules> {
        RulesLoader::load(&self.data_dir.join("rules.toml"))
    }

    /// Load `scenarios/{name}.ron` and spawn its units from `units`.
    pub fn load_scenario<U>(&self, name: &str, units: &U) -> LoadResult<GameState>
    where
        U: UnitOracle + ?Sized,
    {
        let path = self.data_dir.join("scenarios").join(format!("{}.ron", name));
        ScenarioLoader::load(&path, units)
    }

    /// Load `scripts/{name}.ron`.
    pub fn load_script(&self, name: &str) -> LoadResult<Vec<UnitAction>> {
        let path = self.data_dir.join("scripts").join(format!("{}.ron", name));
        ActionScriptLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());

        let error = factory.load_rules().unwrap_err();
        assert!(error.to_string().contains("rules.toml"));
    }

    #[test]
    fn reads_files_from_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rules.toml"), "[harvest]\nfish = 4\n").unwrap();
        let factory = ContentFactory::new(dir.path());

        assert_eq!(factory.load_rules().unwrap().harvest.fish, 4);
    }
}
