//! DNA/RNA sequence analysis
//!
//! Normalizes a nucleotide sequence, reports its base composition and finds
//! open reading frames on both strands in all three reading frames.
//!
//! ```
//! use dnarna_rust::{Sequence, Strand};
//!
//! let seq = Sequence::new("ATGAAATAG");
//! let orfs = seq.find_orfs(Strand::Forward);
//! assert_eq!((orfs[0].start, orfs[0].end), (1, 9));
//! ```

pub mod engines;
pub mod modules;

pub use modules::io::{parse_fasta_sequence, read_fasta_sequence, save_report};
pub use modules::report::AnalysisReport;
pub use modules::seq::{
    Composition, Orf, OrfLocation, Sequence, SequenceError, SequenceResult, SequenceType, Strand,
};
