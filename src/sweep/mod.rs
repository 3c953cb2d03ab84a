//! Sensitivity sweep across every slider combination
//!
//! Each combination is an independent projection, so the grid is fanned out
//! with rayon and collected back in grid order.

use crate::error::Result;
use crate::inputs::{
    CalculationInputs, InputDomain, CONVERSION_RATE_DOMAIN, MONTHLY_TRIALS_DOMAIN,
    TUITION_SLIDER_DOMAIN,
};
use crate::projection::ProjectionEngine;
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Input combinations to project
#[derive(Debug, Clone)]
pub struct SweepGrid {
    pub monthly_trials: Vec<u32>,
    pub conversion_rates: Vec<u32>,
    pub tuitions: Vec<f64>,
}

impl SweepGrid {
    /// Every slider position of all three controls
    pub fn full() -> Self {
        Self {
            monthly_trials: counts(&MONTHLY_TRIALS_DOMAIN),
            conversion_rates: counts(&CONVERSION_RATE_DOMAIN),
            tuitions: TUITION_SLIDER_DOMAIN.values(),
        }
    }

    /// Trials and conversion slider positions at a single tuition.
    /// Rejects tuition that is negative or not finite.
    pub fn at_tuition(tuition: f64) -> Result<Self> {
        CalculationInputs { tuition, ..Default::default() }.validate()?;
        Ok(Self {
            tuitions: vec![tuition],
            ..Self::full()
        })
    }

    pub fn len(&self) -> usize {
        self.monthly_trials.len() * self.conversion_rates.len() * self.tuitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Combinations ordered by trials, then rate, then tuition
    fn combinations(&self) -> Vec<CalculationInputs> {
        let mut out = Vec::with_capacity(self.len());
        for &monthly_trials in &self.monthly_trials {
            for &conversion_rate in &self.conversion_rates {
                for &tuition in &self.tuitions {
                    out.push(CalculationInputs {
                        monthly_trials,
                        conversion_rate,
                        tuition,
                        ..Default::default()
                    });
                }
            }
        }
        out
    }
}

fn counts(domain: &InputDomain) -> Vec<u32> {
    domain.values().into_iter().map(|v| v as u32).collect()
}

/// Month-12 outcome for one combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub monthly_trials: u32,
    pub conversion_rate: u32,
    pub tuition: f64,
    pub new_students_per_month: u64,
    pub cumulative_revenue: f64,
    pub net_profit: f64,
    pub roi: f64,
}

/// Project every combination of the grid in parallel
pub fn run_sweep(engine: &ProjectionEngine, grid: &SweepGrid) -> Vec<SweepRow> {
    info!("sweeping {} input combinations", grid.len());

    grid.combinations()
        .par_iter()
        .map(|inputs| {
            let projection = engine.project(inputs);
            let (cumulative_revenue, net_profit) = projection
                .final_month()
                .map(|m| (m.cumulative_revenue, m.net_profit))
                .unwrap_or((0.0, 0.0));
            SweepRow {
                monthly_trials: inputs.monthly_trials,
                conversion_rate: inputs.conversion_rate,
                tuition: inputs.tuition,
                new_students_per_month: projection.summary.new_students_per_month,
                cumulative_revenue,
                net_profit,
                roi: projection.summary.roi,
            }
        })
        .collect()
}

/// Highest-ROI row; the earliest in grid order wins ties
pub fn best_by_roi(rows: &[SweepRow]) -> Option<&SweepRow> {
    rows.iter().fold(None, |best: Option<&SweepRow>, row| match best {
        Some(b) if b.roi >= row.roi => Some(b),
        _ => Some(row),
    })
}

pub fn write_sweep_csv<W: Write>(rows: &[SweepRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_sweep_csv<P: AsRef<Path>>(rows: &[SweepRow], path: P) -> Result<()> {
    let file = File::create(path)?;
    write_sweep_csv(rows, BufWriter::new(file))
}
