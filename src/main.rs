//! log_stats: print the number of log records, the longest transaction and the operation with the most errors
//! of a json file with an array of log records.
//!
//! Set `RUST_LOG=info` (or `debug` for the per transaction and per operation details) to see the logging.
use std::{path::PathBuf, process};
use clap::Parser;
use colored::*;
use anyhow::Result;
use log::*;
use log_stats::logrecords::AllLogRecords;

/// Summarize a json array of log records.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Opts {
    /// json file containing an array of log records
    file: PathBuf,
}

fn main() {
    env_logger::init();
    let options = Opts::parse();

    if let Err(error) = run(&options) {
        eprintln!("{} {:#}", "Fatal:".red(), error);
        process::exit(1);
    }
}

fn run(options: &Opts) -> Result<()> {
    info!("using file: {}", options.file.display());

    let alllogrecords = AllLogRecords::read_logrecords(&options.file)?;
    alllogrecords.print()?;

    Ok(())
}
