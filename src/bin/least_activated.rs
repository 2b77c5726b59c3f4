use std::{error::Error, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use pota_tools::{
    entities::load_entities,
    ranking::{least_activated, DEFAULT_LIMIT},
    state::StateFilter,
};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

const STATE: &str = "US-CA";

/// Find the least activated POTA parks in California
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the us-pota.json file
    #[arg(value_name = "JSON_PATH")]
    json_path: PathBuf,

    /// How many parks to show
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let entities = load_entities(&cli.json_path)?;
    let ranking = least_activated(&entities, &StateFilter::exact(STATE), cli.limit);
    print!("{ranking}");
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

#[cfg(test)]
mod test {
    use std::io::Write as _;

    use clap::Parser as _;

    use super::{run, Cli, DEFAULT_LIMIT};

    #[test]
    fn test_limit() {
        let cli = Cli::try_parse_from(["least_activated", "us-pota.json"]);
        assert_eq!(cli.unwrap().limit, DEFAULT_LIMIT);

        let cli = Cli::try_parse_from(["least_activated", "us-pota.json", "--limit", "5"]);
        assert_eq!(cli.unwrap().limit, 5);
    }

    #[test]
    fn test_negative_limit_rejected() {
        let separate = Cli::try_parse_from(["least_activated", "us-pota.json", "--limit", "-1"]);
        let inline = Cli::try_parse_from(["least_activated", "us-pota.json", "--limit=-1"]);

        assert!(separate.is_err());
        assert!(inline.is_err());
    }

    #[test]
    fn test_top_level_object_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"reference": "K-0001"}"#).unwrap();
        let cli = Cli {
            json_path: file.path().to_path_buf(),
            limit: DEFAULT_LIMIT,
        };

        let err = run(&cli).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected top-level JSON array of entities, found an object"
        );
    }
}
