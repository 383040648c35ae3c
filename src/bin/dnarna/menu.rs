//! Interactive input/output menu
//!
//! Reads whitespace-separated answers from any `BufRead`, so a sequence or a
//! file name never contains spaces here.

use crate::error::{CliError, Result};
use dnarna_rust::{read_fasta_sequence, save_report, AnalysisReport};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{error, info};

const INPUT_MENU: &str = "Input Options:\n1. Direct input\n2. FASTA file input\nChoose (1/2): ";
const OUTPUT_MENU: &str = "\nOutput Options:\n1. Show in console\n2. Save to .txt file\nChoose (1/2): ";

/// Pulls whitespace-separated tokens from a reader, line by line
struct Tokens<R> {
    reader: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: Vec::new(),
        }
    }

    fn next(&mut self, what: &'static str) -> Result<String> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(CliError::EndOfInput(what));
            }
            self.pending = line.split_whitespace().rev().map(str::to_string).collect();
        }
        self.pending.pop().ok_or(CliError::EndOfInput(what))
    }

    fn choice(&mut self) -> Result<Option<u32>> {
        Ok(self.next("a menu choice")?.parse().ok())
    }
}

/// Run the full interactive session
///
/// `output` short-circuits the output menu when a destination was already
/// configured.
pub fn run<R: BufRead, W: Write>(reader: R, out: &mut W, output: Option<&Path>) -> Result<()> {
    let mut tokens = Tokens::new(reader);

    write!(out, "{}", INPUT_MENU)?;
    out.flush()?;

    let input = match tokens.choice()? {
        Some(1) => {
            write!(out, "Enter DNA/RNA sequence: ")?;
            out.flush()?;
            tokens.next("a sequence")?.into_bytes()
        }
        Some(2) => {
            write!(out, "Enter FASTA filename: ")?;
            out.flush()?;
            let filename = tokens.next("a file name")?;
            match read_fasta_sequence(&filename) {
                Ok(sequence) => sequence,
                Err(e) => {
                    error!("Cannot read {}: {}", filename, e);
                    writeln!(out, "Error: Cannot open file!")?;
                    return Ok(());
                }
            }
        }
        _ => {
            writeln!(out, "Invalid option!")?;
            return Ok(());
        }
    };

    let report = AnalysisReport::from_bytes(&input).render();

    if let Some(path) = output {
        return save_to(out, &report, path);
    }

    write!(out, "{}", OUTPUT_MENU)?;
    out.flush()?;

    match tokens.choice()? {
        Some(1) => write!(out, "{}", report)?,
        Some(2) => {
            write!(out, "Enter output filename: ")?;
            out.flush()?;
            let filename = tokens.next("a file name")?;
            save_to(out, &report, Path::new(&filename))?;
        }
        _ => writeln!(out, "Invalid option!")?,
    }

    Ok(())
}

/// Persist the report, telling the user how it went either way
pub fn save_to<W: Write>(out: &mut W, report: &str, path: &Path) -> Result<()> {
    match save_report(report, path) {
        Ok(()) => {
            info!("Report written to {}", path.display());
            writeln!(out, "\nOutput saved to file: {}", path.display())?;
        }
        Err(e) => {
            error!("Failed to save report: {}", e);
            writeln!(out, "\nError: Cannot save output to {}: {}", path.display(), e)?;
        }
    }
    Ok(())
}
