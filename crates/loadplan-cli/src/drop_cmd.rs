//! `loadplan drop` command: top single plus descending back-off sets.

use anyhow::{Context, Result};
use clap::Args;

use loadplan_core::fixed_drop::{DEFAULT_BACKOFF_SETS, DEFAULT_DROP, default_rep_scheme};
use loadplan_core::{DropRequest, Reps, plan_fixed_drop};

use crate::config::ConfigFile;
use crate::render;

#[derive(Debug, Args)]
pub struct DropArgs {
    /// Daily max in kg
    #[arg(long)]
    pub max: f64,
    /// Weight subtracted per back-off set in kg
    #[arg(long, default_value_t = DEFAULT_DROP)]
    pub drop: f64,
    /// Number of back-off sets
    #[arg(long, default_value_t = DEFAULT_BACKOFF_SETS)]
    pub sets: usize,
    /// Comma-separated rep targets per back-off set, e.g. "3,5,7,9" or
    /// "3,5,8+" (defaults to 3,5,7,9; shorter schemes repeat the last)
    #[arg(long)]
    pub scheme: Option<String>,
    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run_drop(args: &DropArgs, config: &ConfigFile) -> Result<()> {
    let rep_scheme = match args.scheme.as_deref() {
        Some(raw) => parse_scheme(raw)?,
        None => default_rep_scheme(),
    };

    let req = DropRequest {
        daily_max: args.max,
        drop: args.drop,
        sets: args.sets,
        rep_scheme,
        plate_step: config.loading.plate_step,
    };
    let plan = plan_fixed_drop(&req);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print!("{}", render::render_drop(&plan));
    }
    Ok(())
}

/// Parse a comma-separated rep scheme like `3,5,7,9` or `3,5,8+`.
///
/// An all-whitespace scheme parses to the empty list, which the planner
/// replaces with the default scheme.
fn parse_scheme(raw: &str) -> Result<Vec<Reps>> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Reps>()
                .with_context(|| format!("invalid rep scheme entry {token:?}"))
        })
        .collect()
}
