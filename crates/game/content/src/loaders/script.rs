//! Action script loader.
//!
//! A script is an ordered list of requests replayed against a scenario.

use std::path::Path;

use game_core::{ActionKind, UnitAction, UnitId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, from_ron, offset, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionScript {
    pub actions: Vec<StepRon>,
}

/// One scripted request. `at` is an odd-r offset `(column, row)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRon {
    pub unit: String,
    pub action: ActionKind,
    #[serde(default)]
    pub target_unit: Option<String>,
    #[serde(default)]
    pub at: Option<(i32, i32)>,
}

impl TryFrom<StepRon> for UnitAction {
    type Error = anyhow::Error;

    fn try_from(step: StepRon) -> LoadResult<Self> {
        Ok(UnitAction {
            target: step.at.map(offset).transpose()?,
            actor: UnitId::from(step.unit),
            kind: step.action,
            target_unit: step.target_unit.map(UnitId::from),
        })
    }
}

/// Loader for action scripts from RON files.
pub struct ActionScriptLoader;

impl ActionScriptLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<UnitAction>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<UnitAction>> {
        let script: ActionScript = from_ron(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse action script RON: {}", e))?;
        script
            .actions
            .into_iter()
            .enumerate()
            .map(|(index, step)| {
                UnitAction::try_from(step).map_err(|e| anyhow::anyhow!("Step {}: {}", index, e))
            })
            .collect()
    }
}
