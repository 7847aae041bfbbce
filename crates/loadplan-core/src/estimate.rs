//! Daily-max estimation from a rep test.
//!
//! When a lifter only has "I lifted W for R reps", the planners still need
//! a daily max to anchor on. The estimate averages the Epley, Brzycki and
//! Lander formulas, which agree closely in the 2-10 rep range.

/// Rep counts beyond this make the formulas unreliable; higher inputs are
/// capped here rather than extrapolated.
const MAX_RELIABLE_REPS: u32 = 15;

/// Estimate a one-rep daily max from `weight` lifted for `reps`.
///
/// A single rep is returned as-is (it IS the max). Non-positive weight or
/// zero reps return 0.
pub fn estimate_daily_max(weight: f64, reps: u32) -> f64 {
    if weight <= 0.0 || !weight.is_finite() || reps == 0 {
        return 0.0;
    }
    if reps == 1 {
        return weight;
    }

    let r = f64::from(reps.min(MAX_RELIABLE_REPS));

    // Epley: w * (1 + r/30)
    let epley = weight * (1.0 + r / 30.0);
    // Brzycki: w * 36 / (37 - r); divisor stays positive with r capped at 15
    let brzycki = weight * 36.0 / (37.0 - r);
    // Lander: w * 100 / (101.3 - 2.67r); same cap keeps the divisor positive
    let lander = weight * 100.0 / (101.3 - 2.67 * r);

    (epley + brzycki + lander) / 3.0
}
