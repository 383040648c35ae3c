use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

/// Composition statistics and six-frame ORF scan for a DNA or RNA sequence.
///
/// Without --sequence or --fasta (and no input in the config file) an
/// interactive menu asks for the input and where to send the report.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, help_template = HELP_TEMPLATE)]
pub struct Cli {
    /// Sequence to analyze, given directly
    #[arg(short, long, value_name = "SEQ", conflicts_with = "fasta")]
    pub sequence: Option<String>,

    /// FASTA file to read the sequence from (all records are concatenated)
    #[arg(short, long, value_name = "PATH")]
    pub fasta: Option<PathBuf>,

    /// Write the report to this file instead of the console
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Configuration file in TOML format
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of worker threads for the strand scans.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a file in addition to stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
