use std::{error::Error, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use pota_tools::{entities::load_entities, features::write_feature_collection};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Convert every POTA entity to a GeoJSON Feature
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the input us-pota.json file (array of entities)
    #[arg(value_name = "INPUT_JSON")]
    input: PathBuf,

    /// Path to write the resulting GeoJSON file
    #[arg(value_name = "OUTPUT_GEOJSON")]
    output: PathBuf,

    /// JSON indentation for output
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let entities = load_entities(&cli.input)?;
    let summary = write_feature_collection(&entities, None, &cli.output, cli.indent)?;
    println!("{summary}");
    Ok(())
}

fn main() -> ExitCode {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
