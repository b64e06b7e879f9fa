mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "trichrome", about = "Prokudin-Gorsky color plate alignment tool")]
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
    /// Align the three exposures of a plate into one color image
    Align(commands::align::AlignArgs),
    /// Apply one registered filter to an image
    Filter(commands::filter::FilterArgs),
    /// Run Canny edge detection on an image
    Canny(commands::canny::CannyArgs),
    /// Rescale an image
    Resize(commands::resize::ResizeArgs),
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
        Commands::Align(args) => commands::align::run(args),
        Commands::Filter(args) => commands::filter::run(args),
        Commands::Canny(args) => commands::canny::run(args),
        Commands::Resize(args) => commands::resize::run(args),
    }
}
