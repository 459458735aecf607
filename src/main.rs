//! Soarer's Converter config disassembler
//!
//! Renders a compiled binary config back into its text form.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use scdis::{DecodeReport, Disassembler, SoarerSymbols};

mod cli;
use cli::Cli;

fn init_logging(verbose: bool) {
    let default = if verbose {
        "scdis=debug,soarer_config=debug"
    } else {
        "scdis=warn,soarer_config=warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Path, max_size: u64) -> Result<Vec<u8>> {
    let file = File::open(path)
        .with_context(|| format!("could not open input file {}", path.display()))?;
    let mut buf = Vec::new();
    file.take(max_size)
        .read_to_end(&mut buf)
        .with_context(|| format!("could not read input file {}", path.display()))?;
    debug!(len = buf.len(), "read input");
    Ok(buf)
}

fn run(cli: &Cli) -> Result<DecodeReport> {
    let buf = read_input(&cli.input, cli.max_size)?;
    let symbols = SoarerSymbols;
    let mut text = String::new();
    let report = Disassembler::new(&symbols)
        .with_hex_dump(cli.hex_dump_enabled())
        .decode_file(&buf, &mut text);

    match &cli.output {
        Some(path) => std::fs::write(path, &text)
            .with_context(|| format!("could not write output file {}", path.display()))?,
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .context("could not write to stdout")?,
    }
    Ok(report)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // stdout carries the script when no output file is given
    if cli.output.is_some() {
        println!("scdis v{}", env!("CARGO_PKG_VERSION"));
    }

    match run(&cli) {
        Ok(report) if report.had_error => {
            eprintln!("errors encountered, see output file");
            ExitCode::FAILURE
        }
        Ok(_) => {
            if let Some(path) = &cli.output {
                eprintln!("No errors. Wrote: {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
