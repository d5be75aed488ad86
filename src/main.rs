//! Command line interface for the pigeonhole CNF generator

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use log::{debug, error, info};
use pigeonhole::{
    config::{CliOverrides, Settings},
    parse_holes,
    utils::HeaderFormatter,
    PigeonholeEncoder,
};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "pigeonhole")]
#[command(about = "Generate DIMACS CNF instances of the pigeonhole principle")]
#[command(version)]
struct Cli {
    /// Number of holes (the number of pigeons is n+1)
    #[arg(value_name = "n", value_parser = parse_holes, allow_negative_numbers = true)]
    holes: u64,

    /// Write the instance to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Omit the comment lines in front of the problem line
    #[arg(long)]
    no_comments: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => usage(),
        },
    };

    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Settings::default(),
    };

    let cli_overrides = CliOverrides {
        output: cli.output.clone(),
        no_comments: cli.no_comments,
        verbosity: cli.verbose,
    };
    settings.merge_with_cli(&cli_overrides);

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.logging.level.as_filter_str()),
    )
    .init();
    debug!("settings = {:?}", settings);

    // An unusable hole count takes the usage path regardless of the other
    // options, and before any output file is created.
    let encoder = match PigeonholeEncoder::new(cli.holes) {
        Ok(encoder) => encoder.with_comments(settings.output.comments),
        Err(err) if err.is_invalid_argument() => {
            error!("{}", err);
            usage()
        }
        Err(err) => return Err(err.into()),
    };

    settings
        .validate()
        .context("Configuration validation failed")?;

    let statistics = match &settings.output.path {
        Some(path) => {
            info!("Writing to: {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            encoder.encode(file)
        }
        None => encoder.encode(io::stdout().lock()),
    }
    .context("Failed to write pigeonhole instance")?;

    debug!("{}", statistics);

    Ok(())
}

/// Print usage guidance to standard output and exit with status 1
fn usage() -> ! {
    print!("{}", HeaderFormatter::usage(env!("CARGO_PKG_NAME")));
    let _ = io::stdout().flush();
    process::exit(1);
}
