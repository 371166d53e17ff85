//! Replay an action script against a scenario.
//!
//! Every step is dispatched in order; accepted steps advance the state,
//! rejected steps leave it as it was.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;

use game_content::{ActionScriptLoader, ScenarioLoader};
use game_core::{ActionOutcome, Env, GameEngine, UnitAction, compute_script_root};

use crate::utils;

/// Replay an action script against a scenario
#[derive(Parser)]
pub struct Replay {
    /// Scenario file (defaults to scenarios/skirmish.ron in the content directory)
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Action script file (defaults to scripts/opening.ron in the content directory)
    #[arg(short, long, value_name = "FILE")]
    actions: Option<PathBuf>,

    /// Content directory (defaults to $CONTENT_DIR, then the bundled data)
    #[arg(short, long, value_name = "DIR")]
    content: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// One line per step
    Summary,
    /// Full JSON output
    Json,
}

#[derive(Serialize)]
struct StepRecord {
    step: usize,
    action: UnitAction,
    success: bool,
    message: String,
    error_code: Option<&'static str>,
    outcome: Option<ActionOutcome>,
}

#[derive(Serialize)]
struct ReplayRecord {
    scenario: String,
    script_root: String,
    steps: Vec<StepRecord>,
    accepted: usize,
    final_digest: String,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let factory = utils::content_factory(self.content);
        let units = factory.load_units().context("Failed to load units")?;
        let rules = factory.load_rules().context("Failed to load rules")?;
        let scenario_path = utils::content_path(&factory, self.scenario, "scenarios/skirmish.ron");
        let script_path = utils::content_path(&factory, self.actions, "scripts/opening.ron");
        let mut state = ScenarioLoader::load(&scenario_path, &units)
            .with_context(|| format!("Failed to load scenario {}", scenario_path.display()))?;
        let script = ActionScriptLoader::load(&script_path)
            .with_context(|| format!("Failed to load action script {}", script_path.display()))?;

        let engine = GameEngine::new(Env::new(&units, &rules).into_game_env());
        let script_root = hex::encode(compute_script_root(&script));

        let mut steps = Vec::with_capacity(script.len());
        for (step, action) in script.into_iter().enumerate() {
            let report = engine.execute_unit_action(
                &state,
                action.actor.clone(),
                action.kind,
                action.target_unit.clone(),
                action.target,
            );
            tracing::debug!("step {}: {}", step, report.message);
            if let Some(next) = report.new_state {
                state = next;
            }
            steps.push(StepRecord {
                step,
                action,
                success: report.success,
                message: report.message,
                error_code: report.error_code,
                outcome: report.outcome,
            });
        }

        let record = ReplayRecord {
            scenario: scenario_path.display().to_string(),
            script_root,
            accepted: steps.iter().filter(|step| step.success).count(),
            steps,
            final_digest: state.digest().to_string(),
        };

        match self.format {
            OutputFormat::Summary => print_summary(&record),
            OutputFormat::Json => print_json(&record)?,
        }

        Ok(())
    }
}

fn print_summary(record: &ReplayRecord) {
    println!("{} {}", style("Scenario:").bold().cyan(), record.scenario);
    println!("{} {}", style("Script Root:").bold().cyan(), record.script_root);
    println!();

    for step in &record.steps {
        let mark = if step.success {
            style("ok").green()
        } else {
            style("rejected").red()
        };
        let target = match (&step.action.target_unit, step.action.target) {
            (Some(unit), _) => format!(" -> {}", unit),
            (None, Some(at)) => format!(" @ {}", at),
            (None, None) => String::new(),
        };
        println!(
            "{:>3} {} {}{} [{}] {}",
            step.step,
            step.action.actor,
            step.action.kind,
            target,
            mark,
            step.message
        );
    }

    println!();
    println!(
        "{} {}/{}",
        style("Accepted:").bold().cyan(),
        record.accepted,
        record.steps.len()
    );
    println!("{} {}", style("Final Digest:").bold().cyan(), record.final_digest);
}

fn print_json(record: &ReplayRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record).context("Failed to serialize replay to JSON")?;
    println!("{}", json);
    Ok(())
}
