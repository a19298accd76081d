//! Command-line driver for the generator.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fastcbor_gen::{generate, Options};

/// Generate fastcbor encode/decode routines for marked record types.
#[derive(Parser, Debug)]
#[command(name = "fastcbor-gen", version, about)]
struct Cli {
    /// Input file or directory. Defaults to $FASTCBOR_INPUT when a build
    /// tool provides it.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output file. Only valid when the input is a single file.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Fail on field shapes outside the specialized set.
    #[arg(long)]
    strict: bool,

    /// Enable diagnostic output.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();

    let input = cli
        .input
        .or_else(|| std::env::var_os("FASTCBOR_INPUT").map(PathBuf::from))
        .context("no input: pass --input or set FASTCBOR_INPUT")?;

    let opts = Options { strict: cli.strict };

    let written = generate(&input, cli.output.as_deref(), &opts)?;
    if written.is_empty() {
        log::warn!("{}: no record types found", input.display());
    }

    Ok(())
}
