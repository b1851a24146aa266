//! TrainPlan - Exercise Program Planner
//!
//! Command-line entry point: takes a natural-language fitness request and
//! prints the generated program as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use trainplan::catalogue::{self, ExerciseCatalogue};
use trainplan::storage::load_config;
use trainplan::{ProgramGenerator, RequestInterpreter};

#[derive(Debug, Parser)]
#[command(name = "trainplan", version)]
struct Cli {
    /// Fitness request in natural language, e.g. "Je veux perdre du poids en 3 mois"
    request: String,

    /// Fixed RNG seed for reproducible output (overrides the configured seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Exercise catalogue JSON file (overrides the configured path)
    #[arg(long)]
    catalogue: Option<PathBuf>,

    /// Pretty-print the program JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting TrainPlan v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = load_config().context("Failed to load configuration")?;

    let catalogue = match cli.catalogue.or(config.planner.catalogue_path) {
        Some(path) => ExerciseCatalogue::load_from_file(&path)
            .with_context(|| format!("Failed to load catalogue from {}", path.display()))?,
        None => catalogue::built_in(),
    };

    let spec = RequestInterpreter::new().interpret(&cli.request);

    let mut generator = match cli.seed.or(config.planner.seed) {
        Some(seed) => ProgramGenerator::with_seed(catalogue, seed),
        None => ProgramGenerator::new(catalogue),
    };

    let program = generator.generate_from_today(&spec)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&program)?
    } else {
        serde_json::to_string(&program)?
    };
    println!("{json}");

    Ok(())
}
