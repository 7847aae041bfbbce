//! `loadplan ladder` command: ascending rep/weight ladder up to the
//! daily max.

use anyhow::Result;
use clap::Args;

use loadplan_core::ladder::DEFAULT_START_REP_CAP;
use loadplan_core::{LadderRequest, plan_ladder};

use crate::config::ConfigFile;
use crate::render;

#[derive(Debug, Args)]
pub struct LadderArgs {
    /// Daily max in kg (total system weight for bodyweight-relative lifts)
    #[arg(long)]
    pub max: f64,
    /// Weight added per rung in kg
    #[arg(long)]
    pub increment: f64,
    /// Maximum reps on the lightest rung
    #[arg(long, default_value_t = DEFAULT_START_REP_CAP)]
    pub cap: u32,
    /// Bodyweight-relative exercise (pull-up, dip): no bar floor, shows
    /// an external-load column
    #[arg(long)]
    pub bodyweight_relative: bool,
    /// Bodyweight in kg (overrides the config file)
    #[arg(long)]
    pub bodyweight: Option<f64>,
    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_ladder(args: &LadderArgs, config: &ConfigFile) -> Result<()> {
    let req = LadderRequest {
        daily_max: args.max,
        increment: args.increment,
        start_rep_cap: args.cap,
        bodyweight_relative: args.bodyweight_relative,
        bodyweight: args.bodyweight.unwrap_or(config.athlete.bodyweight),
        bar_weight: config.loading.bar_weight,
        plate_step: config.loading.plate_step,
    };
    let plan = plan_ladder(&req);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render::render_ladder(&plan, args.bodyweight_relative));
    }
    Ok(())
}
