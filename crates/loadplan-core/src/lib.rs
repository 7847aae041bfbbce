//! Pure planning functions for set-by-set workout prescriptions.
//!
//! Given a lifter's daily maximum for a barbell or bodyweight-relative
//! exercise, each planner returns a structured plan (weight and reps per
//! set, plus aggregate tonnage) under one of three training schemes:
//!
//! - [`ladder::plan_ladder`]: an ascending rep/weight ladder ending in a
//!   single at the daily max.
//! - [`percent_ramp::plan_percent_ramp`]: a fixed five-row
//!   percentage-of-max table with open-ended rep minimums.
//! - [`fixed_drop::plan_fixed_drop`]: a top single plus descending
//!   back-off sets.
//!
//! All planners are stateless and synchronous. Invalid numeric input
//! (zero or non-finite anchors) yields an empty plan value, never an
//! error: callers always receive a renderable structure and distinguish
//! "no plan" by an empty set list.

pub mod estimate;
pub mod fixed_drop;
pub mod ladder;
pub mod percent_ramp;
pub mod rounding;
pub mod types;

pub use estimate::estimate_daily_max;
pub use fixed_drop::{DropPlan, DropRequest, plan_fixed_drop};
pub use ladder::{LadderPlan, LadderRequest, plan_ladder};
pub use percent_ramp::{RampPlan, RampRequest, plan_percent_ramp};
pub use rounding::{round_money, round_to_step};
pub use types::{ParseRepsError, Reps, SetRow, StartPoint};
