//! Shared numeric normalization helpers.
//!
//! Every displayed weight goes through [`round_to_step`] (plate-loading
//! granularity) and every tonnage total through [`round_money`]. Both are
//! free functions with no state so any planner can call them.

/// Plate-loading granularity used when a request does not override it.
pub const DEFAULT_PLATE_STEP: f64 = 2.5;

/// Round to 2 decimal places, half-up.
///
/// A tiny epsilon is added before rounding at 100x scale so values like
/// `2.675` (stored as `2.67499...`) still round up.
pub fn round_money(x: f64) -> f64 {
    (x * 100.0 + 1e-9).round() / 100.0
}

/// Round `x` to the nearest multiple of `step`.
///
/// A non-finite or non-positive `step` returns `x` unchanged rather than
/// producing NaN.
pub fn round_to_step(x: f64, step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return x;
    }
    (x / step).round() * step
}
