use std::{error::Error, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use pota_tools::{entities::load_entities, zero::ZeroActivationReport};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Find POTA entities with zero activations
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the us-pota.json file
    #[arg(value_name = "JSON_PATH")]
    json_path: PathBuf,

    /// Optional path to write matching entities as JSON
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let entities = load_entities(&cli.json_path)?;
    let report = ZeroActivationReport::from_entities(&entities);
    print!("{report}");

    if let Some(output) = &cli.output {
        report.write(output, 2)?;
        println!(
            "\nWrote {} entities to {}",
            report.zero.len(),
            output.display()
        );
    }

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
