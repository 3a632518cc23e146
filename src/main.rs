mod cli;
mod cli_help;
mod config;
mod curve;
mod error;
mod predict;
mod report_helpers;
mod sittings;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;
use predict::Predictor;

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warnings).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    let predictor = Predictor::from(config);

    let result = match cli.command {
        Commands::Predict { shift, marks, json } => predict::run(&predictor, &shift, &marks, json),
        Commands::Curve { shift, m99, json } => {
            curve::run(predictor.sittings(), shift.as_deref(), m99, json)
        }
        Commands::Sittings { json } => sittings::run(predictor.sittings(), json),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
