use anyhow::Result;
use clap::Parser;
use tracing::info;

use aiq_core::Assessment;
use aiq_tui::{App, install_panic_hook};

#[derive(Parser)]
#[command(name = "aiq", about = "Candidate AIQ assessment scorecard")]
#[command(version)]
struct Cli {
    /// Seed for the chart variance, for reproducible displays
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    install_panic_hook();

    let assessment = match cli.seed {
        Some(seed) => Assessment::with_seed(seed),
        None => Assessment::new(),
    };

    info!("starting scorecard");
    let mut app = App::with_assessment(assessment);
    app.run()?;

    Ok(())
}
