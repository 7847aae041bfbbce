//! `loadplan e1rm` command: estimate a daily max from a rep test.

use anyhow::{Result, bail};
use clap::Args;

use loadplan_core::estimate_daily_max;
use loadplan_core::rounding::round_money;

use crate::render::fmt_kg;

#[derive(Debug, Args)]
pub struct E1rmArgs {
    /// Weight lifted in kg
    #[arg(long)]
    pub weight: f64,
    /// Reps performed at that weight
    #[arg(long)]
    pub reps: u32,
}

pub fn run_e1rm(args: &E1rmArgs) -> Result<()> {
    let estimate = estimate_daily_max(args.weight, args.reps);
    if estimate <= 0.0 {
        bail!("weight must be positive and reps at least 1");
    }

    println!("Estimated daily max: {} kg", fmt_kg(round_money(estimate)));
    println!("Plan a session with e.g. `loadplan ramp --max {}`", fmt_kg(round_money(estimate)));
    Ok(())
}
