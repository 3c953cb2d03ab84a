//! Project 12 months for one set of calculator inputs
//!
//! Slider flags are snapped to their ranges as the page controls would;
//! `--raw` skips snapping and validates strictly instead.

use agency_roi::report::{write_json, write_monthly_csv, write_summary};
use agency_roi::{CalculationInputs, CalculatorSession, ProjectionEngine};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "roi_calc", about = "Agency vs. in-house 12-month ROI projection", version)]
struct Args {
    /// Load inputs from a JSON file; flags given alongside override its fields
    #[arg(long)]
    inputs: Option<PathBuf>,

    /// Monthly trial leads
    #[arg(long)]
    trials: Option<u32>,

    /// Conversion rate in percent
    #[arg(long)]
    rate: Option<u32>,

    /// Monthly tuition per customer
    #[arg(long, allow_negative_numbers = true)]
    tuition: Option<f64>,

    /// Expected customer lifetime (stored, not used by the projection)
    #[arg(long)]
    retention: Option<u32>,

    /// Skip slider snapping and validate the inputs strictly
    #[arg(long)]
    raw: bool,

    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base = match &args.inputs {
        Some(path) => CalculationInputs::from_json_file(path)
            .with_context(|| format!("failed to load inputs from {}", path.display()))?,
        None => CalculationInputs::default(),
    };

    let mut session = CalculatorSession::with_inputs(ProjectionEngine::default(), base);
    if args.raw {
        let inputs = CalculationInputs {
            monthly_trials: args.trials.unwrap_or(base.monthly_trials),
            conversion_rate: args.rate.unwrap_or(base.conversion_rate),
            tuition: args.tuition.unwrap_or(base.tuition),
            retention_months: args.retention.unwrap_or(base.retention_months),
        };
        inputs.validate().context("invalid raw inputs")?;
        session = CalculatorSession::with_inputs(ProjectionEngine::default(), inputs);
    } else {
        if let Some(v) = args.trials {
            session.set_monthly_trials(v);
        }
        if let Some(v) = args.rate {
            session.set_conversion_rate(v);
        }
        if let Some(v) = args.tuition {
            session.enter_tuition(v);
        }
        if let Some(v) = args.retention {
            session.set_retention_months(v);
        }
    }

    let projection = session.projection();

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Table => write_summary(projection, &mut out)?,
        OutputFormat::Csv => write_monthly_csv(projection, &mut out)?,
        OutputFormat::Json => {
            write_json(projection, &mut out)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    if let Some(path) = &args.output {
        eprintln!("Output written to {}", path.display());
    }
    Ok(())
}
