//! Stratplan CLI - Command line interface for strategic plan conversion
//!
//! Converts a strategic plan PDF into JSON and binary plan records.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stratplan_core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ConvertArgs, InspectArgs};

/// Stratplan: convert strategic plan PDFs into structured records
#[derive(Parser, Debug)]
#[command(name = "stratplan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of ~/.config/stratplan/config.toml
    #[arg(long, global = true, env = "STRATPLAN_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Convert a PDF into JSON and binary plan records
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Show a saved plan record
    Inspect(InspectArgs),

    /// Show current configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise show pipeline progress
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Some(Commands::Version) => {
            println!("stratplan {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Convert(args)) => {
            args.execute(cli.config.as_deref())?;
        }
        Some(Commands::Inspect(args)) => {
            args.execute(cli.verbose)?;
        }
        Some(Commands::Config) => {
            let config = Config::load_with_overrides(cli.config.as_deref(), None, None)?;

            println!("Stratplan Configuration");
            println!("=======================");
            println!();
            println!("Paths:");
            println!(
                "  source_path: {}",
                config
                    .paths
                    .source_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(not set)".to_string())
            );
            println!("  output_dir: {}", config.paths.output_dir.display());
            println!();
            println!("Plan:");
            println!("  title: {}", config.plan.title);
            println!("  fallback_projects:");
            for name in &config.plan.fallback_projects {
                println!("    - {}", name);
            }
            println!("  fallback_timeline: {}", config.plan.fallback_timeline);
            println!("  fallback_responsible: {}", config.plan.fallback_responsible);
            println!("  fallback_status: {}", config.plan.fallback_status);
            println!();

            let path = cli.config.clone().or_else(Config::default_config_path);
            if let Some(path) = path {
                println!("Config file: {}", path.display());
                if path.exists() {
                    println!("  (exists)");
                } else {
                    println!("  (not found - using defaults)");
                }
            }
        }
        None => {
            println!("Stratplan - Strategic plan PDF converter");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
