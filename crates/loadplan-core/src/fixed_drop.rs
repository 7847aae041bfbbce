//! Fixed-drop planner: a submaximal top single followed by a configurable
//! number of back-off sets, each a fixed weight drop below the previous.

use tracing::debug;

use crate::rounding::{DEFAULT_PLATE_STEP, round_money, round_to_step};
use crate::types::{Reps, SetRow};

/// Weight removed per back-off set unless the request overrides it.
pub const DEFAULT_DROP: f64 = 10.0;
/// Back-off set count unless the request overrides it.
pub const DEFAULT_BACKOFF_SETS: usize = 4;
/// The top single sits at this fraction of the true max (roughly RPE 8-9).
const TOP_SINGLE_FRACTION: f64 = 0.95;

/// Rep targets per back-off set unless the request overrides them.
pub fn default_rep_scheme() -> Vec<Reps> {
    vec![Reps::Exact(3), Reps::Exact(5), Reps::Exact(7), Reps::Exact(9)]
}

/// Parameters for [`plan_fixed_drop`].
#[derive(Debug, Clone, PartialEq)]
pub struct DropRequest {
    pub daily_max: f64,
    /// Weight subtracted per back-off set.
    pub drop: f64,
    /// Number of back-off sets requested.
    pub sets: usize,
    /// Rep targets per back-off set. Schemes shorter than `sets` repeat
    /// their final entry; an empty scheme falls back to the default.
    pub rep_scheme: Vec<Reps>,
    /// Plate-loading granularity for displayed weights.
    pub plate_step: f64,
}

impl DropRequest {
    pub fn new(daily_max: f64) -> Self {
        DropRequest {
            daily_max,
            drop: DEFAULT_DROP,
            sets: DEFAULT_BACKOFF_SETS,
            rep_scheme: default_rep_scheme(),
            plate_step: DEFAULT_PLATE_STEP,
        }
    }
}

/// A fixed-drop prescription.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct DropPlan {
    /// The day's opening single, or `None` for the empty plan.
    pub top_single: Option<f64>,
    /// Back-off rows, heaviest first. May be shorter than requested if
    /// the weight would drop to zero or below.
    pub sets: Vec<SetRow>,
    /// Top single plus back-off volume, 2-decimal rounded.
    pub tonnage: f64,
}

impl DropPlan {
    fn empty() -> Self {
        DropPlan {
            top_single: None,
            sets: Vec::new(),
            tonnage: 0.0,
        }
    }
}

/// Build a top single plus back-off sets for the given request.
///
/// Zero or non-finite `daily_max`/`drop` yields the empty plan
/// (`top_single: None, sets: [], tonnage: 0`).
pub fn plan_fixed_drop(req: &DropRequest) -> DropPlan {
    if !is_usable(req.daily_max) || !is_usable(req.drop) {
        debug!(
            daily_max = req.daily_max,
            drop = req.drop,
            "fixed drop: degenerate input, returning empty plan"
        );
        return DropPlan::empty();
    }

    let top_single = round_to_step(TOP_SINGLE_FRACTION * req.daily_max, req.plate_step);

    let scheme = if req.rep_scheme.is_empty() {
        default_rep_scheme()
    } else {
        req.rep_scheme.clone()
    };
    let last_reps = *scheme.last().expect("scheme is non-empty");

    let mut sets: Vec<SetRow> = Vec::new();
    let mut weight = top_single;
    for i in 0..req.sets {
        weight -= req.drop;
        if weight <= 0.0 {
            debug!(set = i, "fixed drop: weight exhausted, stopping early");
            break;
        }
        let reps = scheme.get(i).copied().unwrap_or(last_reps);
        let mut row = SetRow::new(round_to_step(weight, req.plate_step), reps);
        row.note = Some(format!("-{} kg", req.drop));
        sets.push(row);
    }

    let backoff_volume: f64 = sets
        .iter()
        .map(|row| row.weight * f64::from(row.reps.count()))
        .sum();
    let tonnage = round_money(top_single + backoff_volume);

    DropPlan {
        top_single: Some(top_single),
        sets,
        tonnage,
    }
}

fn is_usable(x: f64) -> bool {
    x.is_finite() && x != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_session_for_100kg_max() {
        let plan = plan_fixed_drop(&DropRequest::new(100.0));

        assert_eq!(plan.top_single, Some(95.0));
        let rows: Vec<(f64, Reps)> = plan.sets.iter().map(|r| (r.weight, r.reps)).collect();
        assert_eq!(
            rows,
            vec![
                (85.0, Reps::Exact(3)),
                (75.0, Reps::Exact(5)),
                (65.0, Reps::Exact(7)),
                (55.0, Reps::Exact(9)),
            ]
        );
        // 95 + 255 + 375 + 455 + 495
        assert_eq!(plan.tonnage, 1675.0);
    }

    #[test]
    fn notes_carry_the_drop() {
        let plan = plan_fixed_drop(&DropRequest::new(100.0));
        for row in &plan.sets {
            assert_eq!(row.note.as_deref(), Some("-10 kg"));
        }
    }

    #[test]
    fn stops_before_weight_reaches_zero() {
        let mut req = DropRequest::new(40.0);
        req.drop = 15.0;
        req.sets = 6;
        let plan = plan_fixed_drop(&req);

        // Top single 37.5, then 22.5, 7.5; the next drop would go negative.
        assert_eq!(plan.top_single, Some(37.5));
        assert_eq!(plan.sets.len(), 2);
        assert!(plan.sets.iter().all(|row| row.weight > 0.0));
    }

    #[test]
    fn short_scheme_repeats_its_final_entry() {
        let mut req = DropRequest::new(200.0);
        req.rep_scheme = vec![Reps::Exact(3), Reps::Exact(5)];
        req.sets = 4;
        let plan = plan_fixed_drop(&req);

        let reps: Vec<Reps> = plan.sets.iter().map(|r| r.reps).collect();
        assert_eq!(
            reps,
            vec![
                Reps::Exact(3),
                Reps::Exact(5),
                Reps::Exact(5),
                Reps::Exact(5),
            ]
        );
    }

    #[test]
    fn empty_scheme_falls_back_to_default() {
        let mut req = DropRequest::new(200.0);
        req.rep_scheme = Vec::new();
        let plan = plan_fixed_drop(&req);

        let reps: Vec<u32> = plan.sets.iter().map(|r| r.reps.count()).collect();
        assert_eq!(reps, vec![3, 5, 7, 9]);
    }

    #[test]
    fn open_ended_scheme_targets_are_allowed() {
        let mut req = DropRequest::new(100.0);
        req.rep_scheme = vec![Reps::Exact(3), Reps::AtLeast(5)];
        req.sets = 2;
        let plan = plan_fixed_drop(&req);

        assert_eq!(plan.sets[1].reps, Reps::AtLeast(5));
        // Open-ended targets still count their minimum toward tonnage.
        assert_eq!(plan.tonnage, round_money(95.0 + 85.0 * 3.0 + 75.0 * 5.0));
    }

    #[test]
    fn degenerate_input_yields_empty_plan() {
        for (max, drop) in [(0.0, 10.0), (100.0, 0.0), (f64::NAN, 10.0)] {
            let plan = plan_fixed_drop(&DropRequest {
                daily_max: max,
                drop,
                ..DropRequest::new(1.0)
            });
            assert_eq!(plan.top_single, None, "max={max} drop={drop}");
            assert!(plan.sets.is_empty());
            assert_eq!(plan.tonnage, 0.0);
        }
    }
}
