//! Instrument table CLI - prints an instrument list as an aligned text table

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(dead_code)]
#![deny(unused)]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use instruments::{InstrumentTable, SAMPLE_INSTRUMENTS_JSON};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "instrument-table")]
#[command(about = "Print a JSON instrument list as an aligned text table")]
#[command(version)]
struct Cli {
    /// JSON file to read, or `-` for stdin (default: stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Render the built-in NIFTY option sample instead of reading input
    #[arg(long, conflicts_with = "input")]
    sample: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// Where the instrument JSON comes from
#[derive(Debug, Clone, PartialEq, Eq)]
enum InputSource {
    Sample,
    Stdin,
    File(PathBuf),
}

impl InputSource {
    fn from_cli(cli: &Cli) -> Self {
        if cli.sample {
            return Self::Sample;
        }
        match &cli.input {
            Some(path) if path.as_os_str() != "-" => Self::File(path.clone()),
            _ => Self::Stdin,
        }
    }

    fn read(&self) -> Result<String> {
        match self {
            Self::Sample => Ok(SAMPLE_INSTRUMENTS_JSON.to_string()),
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read instrument JSON from stdin")?;
                Ok(buf)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read instrument file {}", path.display())),
        }
    }
}

fn init_logging(debug: bool) -> Result<()> {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("instrument_table={level}").parse()?)
        .add_directive(format!("instruments={level}").parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug)?;

    let source = InputSource::from_cli(&cli);
    debug!("Reading instruments from {:?}", source);
    let input = source.read()?;

    let summary = match InstrumentTable::default().run(&input, &mut io::stdout().lock()) {
        Ok(summary) => summary,
        // Diagnostic line is already on stdout
        Err(_) => std::process::exit(1),
    };
    if summary.absent_fields > 0 {
        info!(
            "Printed {} instruments ({} fields missing)",
            summary.rows, summary.absent_fields
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_input_source_selection() {
        let cli = Cli::try_parse_from(["instrument-table"]).unwrap();
        assert_eq!(InputSource::from_cli(&cli), InputSource::Stdin);

        let cli = Cli::try_parse_from(["instrument-table", "-"]).unwrap();
        assert_eq!(InputSource::from_cli(&cli), InputSource::Stdin);

        let cli = Cli::try_parse_from(["instrument-table", "nfo.json"]).unwrap();
        assert_eq!(
            InputSource::from_cli(&cli),
            InputSource::File(PathBuf::from("nfo.json"))
        );

        let cli = Cli::try_parse_from(["instrument-table", "--sample"]).unwrap();
        assert_eq!(InputSource::from_cli(&cli), InputSource::Sample);
    }

    #[test]
    fn test_sample_conflicts_with_input() {
        let result = Cli::try_parse_from(["instrument-table", "--sample", "nfo.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"symbol": "NIFTY2610625300CE"}}]"#).unwrap();

        let source = InputSource::File(file.path().to_path_buf());
        assert_eq!(source.read().unwrap(), r#"[{"symbol": "NIFTY2610625300CE"}]"#);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = InputSource::File(path).read().unwrap_err();
        assert!(err.to_string().starts_with("Failed to read instrument file"));
    }

    #[test]
    fn test_read_sample() {
        let input = InputSource::Sample.read().unwrap();

        let summary = InstrumentTable::default().run(&input, &mut io::sink()).unwrap();
        assert_eq!(summary.rows, 4);
    }
}
