//! Run the projection for every slider combination
//!
//! Outputs one CSV row per combination with its month-12 figures

use agency_roi::report::format_currency;
use agency_roi::sweep::{best_by_roi, export_sweep_csv, run_sweep, SweepGrid};
use agency_roi::{CostModel, ProjectionEngine};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_sweep", about = "Sensitivity sweep over all calculator inputs")]
struct Args {
    /// Hold tuition fixed instead of sweeping the tuition slider
    #[arg(long)]
    tuition: Option<f64>,

    /// JSON file overriding the default fee and salary assumptions
    #[arg(long)]
    cost_model: Option<PathBuf>,

    #[arg(long, default_value = "sweep_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cost_model = match &args.cost_model {
        Some(path) => CostModel::from_json_file(path)
            .with_context(|| format!("failed to load cost model from {}", path.display()))?,
        None => CostModel::default(),
    };
    let engine = ProjectionEngine::new(cost_model).context("invalid cost model")?;

    let grid = match args.tuition {
        Some(tuition) => SweepGrid::at_tuition(tuition).context("invalid --tuition")?,
        None => SweepGrid::full(),
    };

    let start = Instant::now();
    println!("Running {} projections...", grid.len());
    let rows = run_sweep(&engine, &grid);
    println!("Projections complete in {:?}", start.elapsed());

    export_sweep_csv(&rows, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    println!("Output written to {}", args.output.display());

    if let Some(best) = best_by_roi(&rows) {
        println!("\nBest ROI:");
        println!("  Trials={}, Rate={}%, Tuition={}",
                 best.monthly_trials, best.conversion_rate, format_currency(best.tuition));
        println!("  Students/month={}, Month 12 revenue={}, ROI={:.0}%",
                 best.new_students_per_month,
                 format_currency(best.cumulative_revenue),
                 best.roi.round());
    }

    Ok(())
}
