//! Ladder planner: an ascending rep/weight ladder from a warm-up start
//! point to a single rep at the daily max.
//!
//! Each rung adds one [`LadderRequest::increment`] of weight and removes
//! one rep. The start point is chosen so that the ladder lands on the
//! daily max in whole increments, subject to a floor: barbell lifts never
//! start below the empty bar, bodyweight-relative lifts never below zero
//! total load (a near-zero rung means full external assistance).

use tracing::debug;

use crate::rounding::{DEFAULT_PLATE_STEP, round_money, round_to_step};
use crate::types::{Reps, SetRow, StartPoint};

/// Start reps allowed on the lightest rung unless the request overrides it.
pub const DEFAULT_START_REP_CAP: u32 = 12;
/// Bodyweight assumed when the caller does not supply one.
pub const DEFAULT_BODYWEIGHT: f64 = 80.0;
/// Weight of the empty bar, the floor for barbell ladders.
pub const DEFAULT_BAR_WEIGHT: f64 = 20.0;

/// Hard bound on emitted rungs. Never reached for finite `daily_max` and
/// non-zero `increment`; guards against a misconfigured caller looping
/// forever if validation is ever bypassed.
const MAX_RUNGS: usize = 400;

/// Absolute slack when comparing a rung weight against `daily_max`,
/// absorbing floating-point drift from repeated increment addition.
const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Parameters for [`plan_ladder`].
#[derive(Debug, Clone, PartialEq)]
pub struct LadderRequest {
    /// Target top weight. For bodyweight-relative exercises this is the
    /// TOTAL system weight (bodyweight plus or minus external load).
    pub daily_max: f64,
    /// Weight added per rung going up.
    pub increment: f64,
    /// Maximum reps on the lightest rung.
    pub start_rep_cap: u32,
    /// Bodyweight-relative exercise (pull-up, dip): no bar floor, rungs
    /// are annotated with external load.
    pub bodyweight_relative: bool,
    /// Lifter bodyweight, used only for the external-load annotation.
    pub bodyweight: f64,
    /// Empty-bar weight, the minimum start for barbell ladders.
    pub bar_weight: f64,
    /// Plate-loading granularity for displayed weights.
    pub plate_step: f64,
}

impl LadderRequest {
    /// A barbell request with default tuning.
    pub fn new(daily_max: f64, increment: f64) -> Self {
        LadderRequest {
            daily_max,
            increment,
            start_rep_cap: DEFAULT_START_REP_CAP,
            bodyweight_relative: false,
            bodyweight: DEFAULT_BODYWEIGHT,
            bar_weight: DEFAULT_BAR_WEIGHT,
            plate_step: DEFAULT_PLATE_STEP,
        }
    }

    /// A bodyweight-relative request with default tuning.
    pub fn bodyweight_relative(daily_max: f64, increment: f64, bodyweight: f64) -> Self {
        LadderRequest {
            bodyweight_relative: true,
            bodyweight,
            ..LadderRequest::new(daily_max, increment)
        }
    }
}

/// A ladder prescription.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LadderPlan {
    /// Rungs in ascending weight order, ending in a single at the max.
    pub sets: Vec<SetRow>,
    /// Total volume: sum of `weight x reps` over rungs, 2-decimal rounded.
    pub tonnage: f64,
    /// The first rung, or `None` for the empty plan.
    pub start: Option<StartPoint>,
}

impl LadderPlan {
    fn empty() -> Self {
        LadderPlan {
            sets: Vec::new(),
            tonnage: 0.0,
            start: None,
        }
    }
}

/// Build an ascending ladder for the given request.
///
/// Zero or non-finite `daily_max`/`increment` yields the empty plan
/// (`sets: [], tonnage: 0, start: None`) rather than an error, so the
/// result is always renderable.
pub fn plan_ladder(req: &LadderRequest) -> LadderPlan {
    if !is_usable(req.daily_max) || !is_usable(req.increment) {
        debug!(
            daily_max = req.daily_max,
            increment = req.increment,
            "ladder: degenerate input, returning empty plan"
        );
        return LadderPlan::empty();
    }

    let (start_weight, start_reps) = if req.bodyweight_relative {
        bodyweight_start(req)
    } else {
        barbell_start(req)
    };
    debug!(
        start_weight,
        start_reps,
        bodyweight_relative = req.bodyweight_relative,
        "ladder: start point selected"
    );

    let mut sets: Vec<SetRow> = Vec::new();
    let mut weight = start_weight;
    let mut reps = start_reps;
    for _ in 0..MAX_RUNGS {
        if reps < 1 || weight > req.daily_max + WEIGHT_TOLERANCE {
            break;
        }
        sets.push(rung(req, round_to_step(weight, req.plate_step), reps));
        reps -= 1;
        weight += req.increment;
    }

    // The loop can land short of the max (rounding, rep cap). Close the
    // ladder with a synthetic single unless the last rung already is one
    // within a plate step of the max, and never emit a regressive rung.
    if let Some(last) = sets.last() {
        let closes = last.reps == Reps::Exact(1)
            && (last.weight - req.daily_max).abs() <= req.plate_step;
        if !closes && req.daily_max > last.weight {
            sets.push(rung(req, round_to_step(req.daily_max, req.plate_step), 1));
        }
    } else {
        // Barbell max at or below the empty bar: nothing plannable.
        debug!(daily_max = req.daily_max, "ladder: no feasible rungs");
        return LadderPlan::empty();
    }

    let tonnage = round_money(
        sets.iter()
            .map(|row| row.weight * f64::from(row.reps.count()))
            .sum(),
    );
    let start = sets.first().map(|row| StartPoint {
        weight: row.weight,
        reps: row.reps.count(),
    });

    LadderPlan {
        sets,
        tonnage,
        start,
    }
}

fn rung(req: &LadderRequest, weight: f64, reps: u32) -> SetRow {
    let mut row = SetRow::new(weight, Reps::Exact(reps));
    if req.bodyweight_relative {
        row.external = Some(round_money(weight - req.bodyweight));
    }
    row
}

fn is_usable(x: f64) -> bool {
    x.is_finite() && x != 0.0
}

/// Barbell start point: never below the empty bar.
///
/// Prefer starting exactly at the bar when the rep count that reaches
/// `daily_max` in whole increments fits under the cap. Otherwise cap the
/// reps and work the start weight backward from the max, clamping to the
/// bar (with a recomputed, possibly shorter rep count) if it would dip
/// below.
fn barbell_start(req: &LadderRequest) -> (f64, u32) {
    let cap = req.start_rep_cap.max(1);
    let from_bar = (1.0 + (req.daily_max - req.bar_weight) / req.increment).round() as i64;

    if from_bar >= 1 && from_bar <= i64::from(cap) {
        return (req.bar_weight, from_bar as u32);
    }

    let mut reps = cap;
    let mut weight = req.daily_max - req.increment * f64::from(cap - 1);
    if weight < req.bar_weight {
        weight = req.bar_weight;
        reps = from_bar.clamp(1, i64::from(cap)) as u32;
    }
    (weight, reps)
}

/// Bodyweight-relative start point: never below zero total load.
fn bodyweight_start(req: &LadderRequest) -> (f64, u32) {
    let cap = req.start_rep_cap.max(1);
    let max_rungs = (1.0 + req.daily_max / req.increment).floor() as i64;
    let reps = max_rungs.clamp(1, i64::from(cap)) as u32;
    let weight = (req.daily_max - req.increment * f64::from(reps - 1)).max(0.0);
    (weight, reps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barbell_ladder_ends_in_single_at_max() {
        let plan = plan_ladder(&LadderRequest::new(160.0, 10.0));

        let last = plan.sets.last().expect("ladder should have rungs");
        assert_eq!(last.reps, Reps::Exact(1));
        assert!((last.weight - 160.0).abs() <= 2.5);

        // Cap path: 12 rungs from 50 kg up to 160 kg.
        assert_eq!(plan.sets.len(), 12);
        assert_eq!(plan.start, Some(StartPoint { weight: 50.0, reps: 12 }));
    }

    #[test]
    fn barbell_ladder_starts_at_bar_when_feasible() {
        // round(1 + (40 - 20) / 2.5) = 9 reps, within the default cap.
        let plan = plan_ladder(&LadderRequest::new(40.0, 2.5));

        assert_eq!(plan.start, Some(StartPoint { weight: 20.0, reps: 9 }));
        assert_eq!(plan.sets.len(), 9);
        let last = plan.sets.last().unwrap();
        assert_eq!((last.weight, last.reps), (40.0, Reps::Exact(1)));
    }

    #[test]
    fn barbell_rungs_respect_bar_floor() {
        for max in [30.0, 60.0, 100.0, 170.0] {
            let plan = plan_ladder(&LadderRequest::new(max, 5.0));
            for row in &plan.sets {
                assert!(row.weight >= 20.0, "rung below bar at max {max}: {row:?}");
            }
        }
    }

    #[test]
    fn max_at_or_below_bar_is_unplannable() {
        let plan = plan_ladder(&LadderRequest::new(10.0, 10.0));
        assert!(plan.sets.is_empty());
        assert_eq!(plan.tonnage, 0.0);
        assert_eq!(plan.start, None);
    }

    #[test]
    fn bodyweight_ladder_shows_assistance() {
        let mut req = LadderRequest::bodyweight_relative(60.0, 2.5, 80.0);
        req.start_rep_cap = 8;
        let plan = plan_ladder(&req);

        assert!(plan.sets.len() >= 3);
        let last = plan.sets.last().unwrap();
        assert_eq!(last.reps, Reps::Exact(1));
        assert!((last.weight - 60.0).abs() <= 2.5);

        // Every rung is below bodyweight here, so every external load is
        // negative (assistance), and no rung dips below zero total load.
        for row in &plan.sets {
            assert!(row.weight >= 0.0);
            let external = row.external.expect("bodyweight rung has external load");
            assert!(external < 0.0, "expected assistance, got {external}");
            assert_eq!(external, round_money(row.weight - 80.0));
        }
        assert_eq!(plan.start, Some(StartPoint { weight: 42.5, reps: 8 }));
    }

    #[test]
    fn bodyweight_ladder_floors_at_zero_load() {
        // Increment bigger than the max: only one feasible rung from zero.
        let plan = plan_ladder(&LadderRequest::bodyweight_relative(5.0, 10.0, 80.0));
        for row in &plan.sets {
            assert!(row.weight >= 0.0, "negative total load: {row:?}");
        }
        assert!(!plan.sets.is_empty());
    }

    #[test]
    fn barbell_rungs_have_no_external_annotation() {
        let plan = plan_ladder(&LadderRequest::new(100.0, 10.0));
        assert!(plan.sets.iter().all(|row| row.external.is_none()));
    }

    #[test]
    fn tonnage_sums_rounded_rungs() {
        let plan = plan_ladder(&LadderRequest::new(40.0, 10.0));
        // Rungs: 20x3, 30x2, 40x1 -> 60 + 60 + 40 = 160.
        assert_eq!(plan.sets.len(), 3);
        assert_eq!(plan.tonnage, 160.0);
    }

    #[test]
    fn synthetic_single_closes_a_short_ladder() {
        // Start at the bar with 1 rep, 4 kg short of the max: the loop
        // emits 20x1 only, then a synthetic single lands at the max.
        let plan = plan_ladder(&LadderRequest::new(24.0, 10.0));
        assert_eq!(plan.sets.len(), 2);
        let last = plan.sets.last().unwrap();
        assert_eq!(last.reps, Reps::Exact(1));
        assert_eq!(last.weight, 25.0); // 24 rounded to plate step
    }

    #[test]
    fn degenerate_input_yields_empty_plan() {
        for (max, inc) in [
            (0.0, 10.0),
            (160.0, 0.0),
            (f64::NAN, 10.0),
            (160.0, f64::INFINITY),
        ] {
            let plan = plan_ladder(&LadderRequest::new(max, inc));
            assert!(plan.sets.is_empty(), "max={max} inc={inc}");
            assert_eq!(plan.tonnage, 0.0);
            assert_eq!(plan.start, None);
        }
    }

    #[test]
    fn rep_cap_zero_is_treated_as_one() {
        let mut req = LadderRequest::new(100.0, 10.0);
        req.start_rep_cap = 0;
        let plan = plan_ladder(&req);
        assert!(!plan.sets.is_empty());
        assert!(plan.sets.iter().all(|row| row.reps.count() >= 1));
    }
}
