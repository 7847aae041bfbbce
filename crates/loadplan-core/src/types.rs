//! Shared plan building blocks: rep notation and set rows.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Rep notation
// ---------------------------------------------------------------------------

/// A per-set rep target.
///
/// Ladder and drop plans prescribe exact counts; percent-ramp plans use
/// open-ended minimums written `"3+"` (at least three, autoregulated by
/// feel). Tonnage math uses [`Reps::count`], the leading integer of either
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reps {
    /// Perform exactly this many reps.
    Exact(u32),
    /// Perform at least this many reps.
    AtLeast(u32),
}

impl Reps {
    /// The leading integer of the target, used for tonnage.
    pub fn count(&self) -> u32 {
        match self {
            Reps::Exact(n) | Reps::AtLeast(n) => *n,
        }
    }

    /// Whether this is an open-ended (`"N+"`) target.
    pub fn is_open_ended(&self) -> bool {
        matches!(self, Reps::AtLeast(_))
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Exact(n) => write!(f, "{n}"),
            Reps::AtLeast(n) => write!(f, "{n}+"),
        }
    }
}

// Exact counts serialize as numbers, open-ended targets as strings, so a
// ladder row reads `"reps": 5` and a ramp row reads `"reps": "3+"`.
impl Serialize for Reps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Reps::Exact(n) => serializer.serialize_u32(*n),
            Reps::AtLeast(_) => serializer.serialize_str(&self.to_string()),
        }
    }
}

/// Errors from parsing a rep target written as `"5"` or `"3+"`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseRepsError {
    #[error("empty rep target")]
    Empty,

    #[error("invalid rep target {0:?} (expected a count like \"5\" or \"3+\")")]
    InvalidCount(String),

    #[error("rep target must be at least 1, got {0:?}")]
    Zero(String),
}

impl FromStr for Reps {
    type Err = ParseRepsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseRepsError::Empty);
        }
        let (digits, open_ended) = match s.strip_suffix('+') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let n: u32 = digits
            .parse()
            .map_err(|_| ParseRepsError::InvalidCount(s.to_string()))?;
        if n == 0 {
            return Err(ParseRepsError::Zero(s.to_string()));
        }
        Ok(if open_ended {
            Reps::AtLeast(n)
        } else {
            Reps::Exact(n)
        })
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

/// One prescribed set: a weight, a rep target, and optional annotations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetRow {
    /// Weight on the bar (or total system weight for bodyweight-relative
    /// exercises), already rounded to plate granularity.
    pub weight: f64,
    pub reps: Reps,
    /// Display note, e.g. `"90%"` or `"-10 kg"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// External load relative to bodyweight; present only for
    /// bodyweight-relative rungs. Negative means assistance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<f64>,
}

impl SetRow {
    pub fn new(weight: f64, reps: Reps) -> Self {
        SetRow {
            weight,
            reps,
            note: None,
            external: None,
        }
    }
}

/// The first rung of a ladder, echoed back so callers can show where the
/// warm-up begins without digging into the row list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StartPoint {
    pub weight: f64,
    pub reps: u32,
}
