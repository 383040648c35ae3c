mod cli;
mod config;
mod error;
mod logging;
mod menu;

use crate::cli::Cli;
use crate::config::{AppConfig, InputSource};
use crate::error::Result;
use clap::Parser;
use dnarna_rust::engines::core::parallel;
use dnarna_rust::{read_fasta_sequence, AnalysisReport};
use std::io::{self, Write};
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("dnarna v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = AppConfig::build(&cli)?;
    let threads = parallel::initialize_thread_pool(config.threads)?;
    debug!("Scanning strands with {} worker thread(s)", threads);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let input = match config.input {
        Some(InputSource::Direct(sequence)) => sequence.into_bytes(),
        Some(InputSource::Fasta(path)) => {
            info!("Reading FASTA input from {}", path.display());
            read_fasta_sequence(&path)?
        }
        None => {
            let stdin = io::stdin();
            return menu::run(stdin.lock(), &mut out, config.output.as_deref());
        }
    };

    let report = AnalysisReport::from_bytes(&input).render();

    match config.output.as_deref() {
        Some(path) => menu::save_to(&mut out, &report, path)?,
        None => {
            out.write_all(report.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(())
}
