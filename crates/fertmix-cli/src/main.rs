mod commands;
mod output;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "fertmix",
    version,
    about = "Fertilizer combination solver for crop NPK requirements"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find fertilizer combinations covering a crop's nutrient deficit
    Solve {
        /// Crop name as listed in the catalog (case-sensitive)
        #[arg(short, long)]
        crop: String,

        /// Farm area in hectares
        #[arg(short, long)]
        area: Decimal,

        /// Soil nitrogen in kg/ha
        #[arg(long, default_value = "0")]
        soil_n: Decimal,

        /// Soil phosphorus in kg/ha
        #[arg(long, default_value = "0")]
        soil_p: Decimal,

        /// Soil potassium in kg/ha
        #[arg(long, default_value = "0")]
        soil_k: Decimal,

        /// Predefined catalog: default, extended (default: default)
        #[arg(short, long, value_name = "NAME", conflicts_with = "catalog")]
        preset: Option<String>,

        /// Custom JSON catalog file
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Show how every subset of nutrient groups was evaluated
        #[arg(long)]
        verbose: bool,
    },
    /// Manage and inspect catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List predefined catalogs
    List,
    /// Show the fertilizers and crops of a predefined catalog
    Explain {
        /// Preset name (e.g., "default")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,
    },
}

fn main() {
    // Logs go to stderr so JSON on stdout stays parseable.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve {
            crop,
            area,
            soil_n,
            soil_p,
            soil_k,
            preset,
            catalog,
            output,
            verbose,
        } => commands::solve::run(
            commands::solve::SolveArgs {
                crop,
                area,
                soil: (soil_n, soil_p, soil_k),
                preset,
                catalog,
            },
            &output,
            verbose,
        ),
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Explain { preset } => commands::catalog::explain(&preset),
            CatalogAction::Schema => commands::catalog::schema(),
            CatalogAction::Validate { file } => commands::catalog::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
