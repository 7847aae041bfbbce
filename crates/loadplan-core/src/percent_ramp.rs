//! Percent-ramp planner: a fixed five-row percentage-of-max table with
//! open-ended rep minimums (`"1+"` through `"5+"`), descending from 90%
//! to 70% of the daily max.

use tracing::debug;

use crate::rounding::{DEFAULT_PLATE_STEP, round_money, round_to_step};
use crate::types::{Reps, SetRow};

/// Percentage of max and minimum reps for each row, top set first.
const RAMP_TABLE: [(u32, u32); 5] = [(90, 1), (85, 2), (80, 3), (75, 4), (70, 5)];

/// Rows at or above this fraction of the max count toward `heavy_reps`.
const HEAVY_FRACTION: f64 = 0.8;

/// Parameters for [`plan_percent_ramp`].
#[derive(Debug, Clone, PartialEq)]
pub struct RampRequest {
    pub daily_max: f64,
    /// Plate-loading granularity for displayed weights.
    pub plate_step: f64,
}

impl RampRequest {
    pub fn new(daily_max: f64) -> Self {
        RampRequest {
            daily_max,
            plate_step: DEFAULT_PLATE_STEP,
        }
    }
}

/// A percent-ramp prescription.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RampPlan {
    /// Five rows, heaviest first, each noted with its percentage.
    pub sets: Vec<SetRow>,
    /// Sum of `weight x minimum reps` over rows, 2-decimal rounded.
    pub tonnage: f64,
    /// Minimum reps accumulated at or above 80% of the max. Computed from
    /// the row weights, not row positions, so it survives retuning of the
    /// percentage table.
    pub heavy_reps: u32,
}

/// Build the fixed percentage table for the given request.
///
/// Zero or non-finite `daily_max` yields the empty plan.
pub fn plan_percent_ramp(req: &RampRequest) -> RampPlan {
    if !req.daily_max.is_finite() || req.daily_max == 0.0 {
        debug!(
            daily_max = req.daily_max,
            "percent ramp: degenerate input, returning empty plan"
        );
        return RampPlan {
            sets: Vec::new(),
            tonnage: 0.0,
            heavy_reps: 0,
        };
    }

    let sets: Vec<SetRow> = RAMP_TABLE
        .iter()
        .map(|&(pct, min_reps)| {
            let weight = round_to_step(f64::from(pct) / 100.0 * req.daily_max, req.plate_step);
            SetRow {
                weight,
                reps: Reps::AtLeast(min_reps),
                note: Some(format!("{pct}%")),
                external: None,
            }
        })
        .collect();

    let tonnage = round_money(
        sets.iter()
            .map(|row| row.weight * f64::from(row.reps.count()))
            .sum(),
    );
    let heavy_threshold = HEAVY_FRACTION * req.daily_max;
    let heavy_reps = sets
        .iter()
        .filter(|row| row.weight >= heavy_threshold)
        .map(|row| row.reps.count())
        .sum();

    RampPlan {
        sets,
        tonnage,
        heavy_reps,
    }
}
