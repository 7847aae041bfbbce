mod config;
mod drop_cmd;
mod e1rm_cmd;
mod ladder_cmd;
mod ramp_cmd;
mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "loadplan", about = "Set-by-set workout load planner")]
struct Cli {
    /// Config file path (overrides ~/.config/loadplan/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ascending rep/weight ladder ending in a single at the daily max
    Ladder(ladder_cmd::LadderArgs),
    /// Five-row percentage-of-max table with open-ended rep minimums
    Ramp(ramp_cmd::RampArgs),
    /// Top single plus descending back-off sets
    Drop(drop_cmd::DropArgs),
    /// Estimate a daily max from a rep test
    E1rm(e1rm_cmd::E1rmArgs),
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the `loadplan init` command: write the default config file.
fn cmd_init(path_override: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let path = path_override.unwrap_or_else(config::config_path);

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile::default();
    config::save_to(&path, &cfg)?;

    println!("Config written to {}", path.display());
    println!("  loading.bar_weight = {}", cfg.loading.bar_weight);
    println!("  loading.plate_step = {}", cfg.loading.plate_step);
    println!("  athlete.bodyweight = {}", cfg.athlete.bodyweight);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => cmd_init(cli.config, force),
        Commands::Ladder(args) => {
            let cfg = config::load(cli.config.as_deref())?;
            ladder_cmd::run_ladder(&args, &cfg)
        }
        Commands::Ramp(args) => {
            let cfg = config::load(cli.config.as_deref())?;
            ramp_cmd::run_ramp(&args, &cfg)
        }
        Commands::Drop(args) => {
            let cfg = config::load(cli.config.as_deref())?;
            drop_cmd::run_drop(&args, &cfg)
        }
        Commands::E1rm(args) => e1rm_cmd::run_e1rm(&args),
    }
}
