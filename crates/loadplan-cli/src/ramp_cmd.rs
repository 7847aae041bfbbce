//! `loadplan ramp` command: fixed five-row percentage-of-max table.

use anyhow::Result;
use clap::Args;

use loadplan_core::{RampRequest, plan_percent_ramp};

use crate::config::ConfigFile;
use crate::render;

#[derive(Debug, Args)]
pub struct RampArgs {
    /// Daily max in kg
    #[arg(long)]
    pub max: f64,
    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_ramp(args: &RampArgs, config: &ConfigFile) -> Result<()> {
    let req = RampRequest {
        daily_max: args.max,
        plate_step: config.loading.plate_step,
    };
    let plan = plan_percent_ramp(&req);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render::render_ramp(&plan));
    }
    Ok(())
}
