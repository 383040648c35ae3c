//! Compute primitives for nucleotide sequences
//!
//! Base-level string operations, codon classification and the
//! frame-aware ORF scan.

pub mod string_ops;
pub mod codon;
pub mod orf_scan;

pub use codon::{is_start_codon, is_stop_codon, CODON_LEN, START_CODON, STOP_CODONS};
pub use orf_scan::{scan_frame, scan_all_frames, OrfSpan};
