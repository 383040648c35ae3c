//! I/O module
//!
//! Reading input sequences from FASTA files and writing finished reports.

pub mod fasta;
pub mod output;

/// Convenience re-exports
pub use fasta::{parse_fasta_sequence, read_fasta_sequence};
pub use output::save_report;
