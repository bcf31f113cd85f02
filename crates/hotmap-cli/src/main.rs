mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hotmap", about = "Inspect hotspot map data")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a hotspot data file or URL and list its hotspots
    Info(commands::info::InfoArgs),
    /// Compute marker pixel positions for a rendered image size
    Layout(commands::layout::LayoutArgs),
    /// Report the coordinates and hotspot under a pixel position
    Probe(commands::probe::ProbeArgs),
    /// Print or save the default map config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Layout(args) => commands::layout::run(args),
        Commands::Probe(args) => commands::probe::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
