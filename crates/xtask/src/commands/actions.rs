//! List the actions a unit can take in a scenario.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use game_content::ScenarioLoader;
use game_core::{Env, GameEngine, UnitId};

use crate::utils;

/// List the actions a unit can take in a scenario
#[derive(Parser)]
pub struct Actions {
    /// Unit id
    #[arg(short, long, value_name = "ID")]
    unit: String,

    /// Scenario file (defaults to scenarios/skirmish.ron in the content directory)
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Content directory (defaults to $CONTENT_DIR, then the bundled data)
    #[arg(short, long, value_name = "DIR")]
    content: Option<PathBuf>,
}

impl Actions {
    pub fn execute(self) -> Result<()> {
        let factory = utils::content_factory(self.content);
        let units = factory.load_units().context("Failed to load units")?;
        let rules = factory.load_rules().context("Failed to load rules")?;
        let scenario_path = utils::content_path(&factory, self.scenario, "scenarios/skirmish.ron");
        let state = ScenarioLoader::load(&scenario_path, &units)
            .with_context(|| format!("Failed to load scenario {}", scenario_path.display()))?;

        let unit_id = UnitId::from(self.unit);
        let Some(unit) = state.unit(&unit_id) else {
            anyhow::bail!("Unit {} is not in scenario {}", unit_id, scenario_path.display());
        };

        let engine = GameEngine::new(Env::new(&units, &rules).into_game_env());
        let actions = engine.available_actions(&state, &unit_id);

        println!(
            "{} {} ({}, player {}) at {}",
            style("Unit:").bold().cyan(),
            unit_id,
            unit.kind,
            unit.player,
            unit.coordinate
        );
        println!(
            "{} {}/{}",
            style("Movement:").bold().cyan(),
            unit.remaining_movement,
            unit.movement
        );
        println!();

        if actions.is_empty() {
            println!("{}", style("No legal actions").yellow());
            return Ok(());
        }

        for action in &actions {
            match (&action.target_unit, action.target) {
                (Some(target), _) => println!("  {} {}", action.kind, target),
                (None, Some(at)) => println!("  {} {}", action.kind, at),
                (None, None) => println!("  {}", action.kind),
            }
        }
        println!();
        println!("{} {}", style("Total:").bold().cyan(), actions.len());

        Ok(())
    }
}
