//! Flightboard - Entry Point

use clap::Parser;
use flightboard::config::CliOverrides;
use flightboard::model::AppError;
use flightboard::source::{ApiSettings, FlightSource};
use flightboard::view::CliArgs;
use std::path::PathBuf;
use tracing::info;

/// Flightboard - browse and filter flights in the terminal
#[derive(Parser, Debug)]
#[command(name = "flightboard")]
#[command(version)]
#[command(about = "Terminal flight board: search flights by route and page through results")]
pub struct Args {
    /// Read flights from a saved JSON response instead of the API
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Pre-fill the departure airport code (IATA, e.g. TLV)
    #[arg(long)]
    pub from: Option<String>,

    /// Pre-fill the arrival airport code (IATA, e.g. JFK)
    #[arg(long)]
    pub to: Option<String>,

    /// aviationstack access key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Flights endpoint URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Flights revealed per "load more" (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub batch_size: Option<u32>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let (source, cli_args) = prepare(args)?;
    flightboard::view::run_with_source(source, cli_args)?;
    Ok(())
}

/// Resolve configuration, start logging and pick the flight source.
fn prepare(args: Args) -> Result<(FlightSource, CliArgs), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = flightboard::config::load_config_with_precedence(args.config.clone())?;
        let merged = flightboard::config::merge_config(config_file)?;
        let with_env = flightboard::config::apply_env_overrides(merged);

        let overrides = CliOverrides {
            api_key: args.api_key.clone(),
            api_url: args.api_url.clone(),
            batch_size: args.batch_size.map(|n| n as usize),
        };
        flightboard::config::apply_cli_overrides(with_env, overrides)?
    };

    flightboard::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = flightboard::source::detect_flight_source(
        args.file.clone(),
        ApiSettings {
            url: config.api_url.clone(),
            access_key: config.api_key.clone(),
            timeout: config.request_timeout,
        },
    )?;

    let cli_args = CliArgs {
        batch_size: config.batch_size,
        origin: args.from,
        destination: args.to,
        no_color: args.no_color,
    };

    Ok((source, cli_args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["flightboard", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["flightboard", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["flightboard"]);
        assert_eq!(args.file, None);
        assert_eq!(args.from, None);
        assert_eq!(args.to, None);
        assert_eq!(args.api_key, None);
        assert_eq!(args.api_url, None);
        assert_eq!(args.batch_size, None);
        assert_eq!(args.config, None);
        assert!(!args.no_color);
    }

    #[test]
    fn test_file_flag() {
        let args = Args::parse_from(["flightboard", "--file", "flights.json"]);
        assert_eq!(args.file, Some(PathBuf::from("flights.json")));
    }

    #[test]
    fn test_route_flags() {
        let args = Args::parse_from(["flightboard", "--from", "TLV", "--to", "JFK"]);
        assert_eq!(args.from.as_deref(), Some("TLV"));
        assert_eq!(args.to.as_deref(), Some("JFK"));
    }

    #[test]
    fn test_batch_size_accepts_positive() {
        let args = Args::parse_from(["flightboard", "--batch-size", "5"]);
        assert_eq!(args.batch_size, Some(5));
    }

    #[test]
    fn test_batch_size_rejects_zero() {
        let result = Args::try_parse_from(["flightboard", "--batch-size", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_batch_size_rejects_negative() {
        let result = Args::try_parse_from(["flightboard", "--batch-size", "-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_flags() {
        let args = Args::parse_from([
            "flightboard",
            "--api-key",
            "k",
            "--api-url",
            "http://localhost/v1/flights",
        ]);
        assert_eq!(args.api_key.as_deref(), Some("k"));
        assert_eq!(args.api_url.as_deref(), Some("http://localhost/v1/flights"));
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["flightboard", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["flightboard", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = Args::try_parse_from(["flightboard", "--follow"]);
        assert!(result.is_err());
    }
}
