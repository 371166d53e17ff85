//! List the unit catalog.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use crate::utils;

/// List the unit catalog
#[derive(Parser)]
pub struct Units {
    /// Content directory (defaults to $CONTENT_DIR, then the bundled data)
    #[arg(short, long, value_name = "DIR")]
    content: Option<PathBuf>,
}

impl Units {
    pub fn execute(self) -> Result<()> {
        let factory = utils::content_factory(self.content);
        let units = factory
            .load_units()
            .with_context(|| format!("Failed to load units from {}", factory.data_dir().display()))?;

        println!("{}", style("=== Unit Catalog ===").bold().green());
        println!();
        println!(
            "{:<10} {:<12} {:>4} {:>3} {:>3} {:>3} {:>3} {:>5} {:>6}  {}",
            style("kind").bold(),
            style("name").bold(),
            style("cost").bold(),
            style("hp").bold(),
            style("atk").bold(),
            style("def").bold(),
            style("mv").bold(),
            style("range").bold(),
            style("vision").bold(),
            style("abilities").bold(),
        );
        for definition in units.definitions() {
            println!(
                "{:<10} {:<12} {:>4} {:>3} {:>3} {:>3} {:>3} {:>5} {:>6}  {:?}",
                definition.kind.as_ref(),
                definition.name,
                definition.cost,
                definition.base_hp,
                definition.base_attack,
                definition.base_defense,
                definition.base_movement,
                definition.attack_range,
                definition.vision_radius,
                definition.abilities,
            );
        }
        println!();
        println!("{} {}", style("Total:").bold().cyan(), units.len());

        Ok(())
    }
}
