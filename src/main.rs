mod config;
mod core;
mod domain;
mod infrastructure;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "abibin",
    version,
    about = "Split contract build artifacts into ityfuzz .abi/.bin files"
)]
struct Args {
    /// Build output directory with one subdirectory per source file (default: ./out)
    #[arg(long, short = 's')]
    source: Option<PathBuf>,

    /// Directory receiving <Contract>.abi and <Contract>.bin (default: ./ityfuzz_build)
    #[arg(long, short = 't')]
    target: Option<PathBuf>,

    /// TOML config file with `source_root` / `target_dir` keys
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = config::load(args.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(args.source, args.target);
    tracing::debug!(?config, "resolved configuration");

    core::run(&config).with_context(|| {
        format!(
            "failed to extract artifacts from {} into {}",
            config.source_root.display(),
            config.target_dir.display()
        )
    })
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
