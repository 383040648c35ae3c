//! Core sequence type
//!
//! A [`Sequence`] is normalized once at construction and never mutated
//! afterwards. Every query on it is a pure function of the stored bases.

use std::fmt;

use thiserror::Error;

use crate::engines::compute::{orf_scan, string_ops};
use crate::engines::core::parallel;
use super::alphabet::SequenceType;
use super::composition::Composition;
use super::orf::{Orf, Strand};

/// Error type for sequence operations
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),

    #[error("Engine error: {0}")]
    Engine(#[from] crate::engines::EngineError),
}

/// Result type for sequence operations
pub type SequenceResult<T> = Result<T, SequenceError>;

/// A normalized nucleotide sequence
///
/// Bases are uppercase and always in the DNA alphabet; an RNA input has its
/// `U`s stored as `T` and is remembered only through [`Sequence::sequence_type`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    bases: Vec<u8>,
    sequence_type: SequenceType,
}

impl Sequence {
    /// Normalize raw input text
    pub fn new(raw: &str) -> Self {
        Self::from_bytes(raw.as_bytes())
    }

    /// Normalize raw input bytes
    ///
    /// Never fails: unrecognized bytes, including non-ASCII ones, are kept as
    /// they are and treated as "other" by every later operation.
    pub fn from_bytes(raw: &[u8]) -> Self {
        let mut bases = raw.to_vec();
        string_ops::to_uppercase_in_place(&mut bases);

        let sequence_type = SequenceType::detect(&bases);
        if sequence_type.is_rna() {
            string_ops::reverse_transcribe_in_place(&mut bases);
        }

        log::debug!(
            "Normalized {} input of {} bases",
            sequence_type,
            bases.len()
        );

        Self {
            bases,
            sequence_type,
        }
    }

    /// Get the sequence length
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Check if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Get the stored bases (DNA alphabet)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    /// Get the stored bases as a string
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.bases).into_owned()
    }

    /// Nucleic acid type of the original input
    pub fn sequence_type(&self) -> SequenceType {
        self.sequence_type
    }

    /// Whether the original input contained `U`
    pub fn is_rna(&self) -> bool {
        self.sequence_type.is_rna()
    }

    /// Count A, T, G and C and derive GC content
    pub fn composition(&self) -> SequenceResult<Composition> {
        Composition::from_bases(&self.bases)
    }

    /// Reverse complement of the stored bases; unrecognized symbols become `N`
    pub fn reverse_complement(&self) -> Vec<u8> {
        string_ops::reverse_complement_dna(&self.bases)
    }

    /// Find all ORFs on one strand, in all three frames
    ///
    /// Coordinates are relative to the scanned strand. Use
    /// [`Orf::locate`] to map reverse-strand ORFs onto the forward sequence.
    pub fn find_orfs(&self, strand: Strand) -> Vec<Orf> {
        let orfs = match strand {
            Strand::Forward => scan_strand(&self.bases),
            Strand::Reverse => scan_strand(&self.reverse_complement()),
        };

        log::debug!("Found {} ORF(s) on the {} strand", orfs.len(), strand);
        orfs
    }

    /// Scan both strands, returning `(forward, reverse)`
    pub fn scan_both_strands(&self) -> (Vec<Orf>, Vec<Orf>) {
        parallel::join(
            || self.find_orfs(Strand::Forward),
            || self.find_orfs(Strand::Reverse),
        )
    }

    /// Render DNA-alphabet bases in the alphabet of the original input
    pub fn render(&self, bases: &[u8]) -> String {
        self.sequence_type.render(bases)
    }
}

fn scan_strand(strand_bases: &[u8]) -> Vec<Orf> {
    orf_scan::scan_all_frames(strand_bases)
        .into_iter()
        .map(|span| Orf::from_span(span, strand_bases))
        .collect()
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render(&self.bases))
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_dna_normalization_is_identity() {
        let seq = Sequence::new("ATGCATGC");
        assert_eq!(seq.as_bytes(), b"ATGCATGC");
        assert!(!seq.is_rna());
        assert_eq!(seq.sequence_type(), SequenceType::Dna);
    }

    #[test]
    fn test_lowercase_rna_input() {
        let seq = Sequence::new("augaaauag");
        assert_eq!(seq.as_string(), "ATGAAATAG");
        assert!(seq.is_rna());
        assert_eq!(seq.to_string(), "AUGAAAUAG");
        assert_eq!(seq.render(b"TTT"), "UUU");
    }

    #[test]
    fn test_unrecognized_characters_pass_through() {
        let seq = Sequence::new("at-gx");
        assert_eq!(seq.as_bytes(), b"AT-GX");
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.reverse_complement(), b"NCNAT");
    }

    #[test]
    fn test_from_bytes_keeps_non_ascii() {
        let seq = Sequence::from_bytes(b"atg\xE9taa");
        assert_eq!(seq.as_bytes(), b"ATG\xE9TAA");
        assert_eq!(seq.reverse_complement(), b"TTANCAT");
        assert_eq!(Sequence::from_bytes(b"ACGU"), Sequence::new("acgu"));
    }

    #[test]
    fn test_reverse_complement() {
        let seq = Sequence::new("AATTGGCC");
        assert_eq!(seq.reverse_complement(), b"GGCCAATT");
        // Pure: repeated calls agree and the sequence is unchanged
        assert_eq!(seq.reverse_complement(), seq.reverse_complement());
        assert_eq!(seq.as_bytes(), b"AATTGGCC");
    }

    #[test]
    fn test_composition() {
        let comp = Sequence::new("ATGC").composition().unwrap();
        assert_eq!((comp.a, comp.t, comp.g, comp.c), (1, 1, 1, 1));
        assert_eq!(comp.gc_percent(), 50.0);

        assert!(matches!(
            Sequence::new("XXXX").composition(),
            Err(SequenceError::InvalidSequence(_))
        ));
        let empty = Sequence::new("");
        assert!(empty.is_empty());
        assert!(empty.composition().is_err());
    }

    #[test]
    fn test_forward_orf_basic() {
        let seq = Sequence::new("ATGAAATAG");
        let orfs = seq.find_orfs(Strand::Forward);
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].start, 1);
        assert_eq!(orfs[0].end, 9);
        assert_eq!(orfs[0].sequence, b"ATGAAATAG");
        assert_eq!(orfs[0].frame(), 0);
    }

    #[test]
    fn test_no_stop() {
        let seq = Sequence::new("ATGAAAAAA");
        assert!(seq.find_orfs(Strand::Forward).is_empty());
    }

    #[test]
    fn test_rna_scans_in_dna_alphabet() {
        let seq = Sequence::new("AUGAAAUAG");
        let orfs = seq.find_orfs(Strand::Forward);
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].sequence, b"ATGAAATAG");
        assert_eq!(seq.render(&orfs[0].sequence), "AUGAAAUAG");
    }

    #[test]
    fn test_reverse_strand_mapping() {
        // Reverse complement of CTATTTCAT is ATGAAATAG
        let seq = Sequence::new("CTATTTCAT");
        let orfs = seq.find_orfs(Strand::Reverse);
        assert_eq!(orfs.len(), 1);
        assert_eq!(orfs[0].start, 1);
        assert_eq!(orfs[0].sequence, b"ATGAAATAG");

        let loc = orfs[0].locate(Strand::Reverse, seq.len());
        assert_eq!((loc.start, loc.end), (1, 9));
    }

    #[test]
    fn test_reverse_strand_mapping_with_flanks() {
        // Forward: GG + CTA TTT CAT + C, reverse complement: G ATG AAA TAG CC
        let seq = Sequence::new("GGCTATTTCATC");
        let orfs = seq.find_orfs(Strand::Reverse);
        assert_eq!(orfs.len(), 1);
        assert_eq!((orfs[0].start, orfs[0].end), (2, 10));

        let loc = orfs[0].locate(Strand::Reverse, seq.len());
        assert_eq!((loc.start, loc.end), (3, 11));
        assert_eq!(&seq.as_bytes()[loc.start - 1..loc.end], b"CTATTTCAT");
        assert_eq!(loc.frame_label(), "-3");
    }

    #[test]
    fn test_scan_both_strands() {
        let seq = Sequence::new("ATGAAATAGCTATTTCAT");
        let (forward, reverse) = seq.scan_both_strands();
        assert_eq!(forward, seq.find_orfs(Strand::Forward));
        assert_eq!(reverse, seq.find_orfs(Strand::Reverse));
        assert!(!forward.is_empty());
        assert!(!reverse.is_empty());
    }

    proptest! {
        #[test]
        fn rna_input_never_stores_uracil(s in "[ACGUacgu]{1,120}") {
            let seq = Sequence::new(&s);
            prop_assert!(!seq.as_bytes().contains(&b'U'));
            prop_assert_eq!(seq.is_rna(), s.to_ascii_uppercase().contains('U'));
        }

        #[test]
        fn reverse_complement_twice_is_identity(s in "[ACGT]{0,150}") {
            let seq = Sequence::new(&s);
            let back = Sequence::from_bytes(&seq.reverse_complement());
            prop_assert_eq!(back.reverse_complement(), seq.as_bytes().to_vec());
        }

        #[test]
        fn forward_orfs_are_well_formed(s in "[ACGT]{0,150}") {
            let seq = Sequence::new(&s);
            let mut last_frame = 0;
            for orf in seq.find_orfs(Strand::Forward) {
                prop_assert!(orf.frame() >= last_frame);
                last_frame = orf.frame();
                prop_assert_eq!(orf.end - orf.start + 1, orf.len());
                prop_assert_eq!(orf.len() % 3, 0);
                prop_assert_eq!(&orf.sequence[..3], b"ATG");
                prop_assert_eq!(&seq.as_bytes()[orf.start - 1..orf.end], &orf.sequence[..]);
            }
        }

        #[test]
        fn reverse_orfs_map_inside_the_sequence(s in "[ACGT]{0,150}") {
            let seq = Sequence::new(&s);
            let rc = seq.reverse_complement();
            for orf in seq.find_orfs(Strand::Reverse) {
                let loc = orf.locate(Strand::Reverse, seq.len());
                prop_assert!(loc.start >= 1 && loc.end <= seq.len());
                prop_assert_eq!(loc.end - loc.start + 1, orf.len());
                prop_assert_eq!(loc.frame(), (loc.start - 1) % 3);
                // The forward slice is the reverse complement of the ORF
                let forward = &seq.as_bytes()[loc.start - 1..loc.end];
                prop_assert_eq!(
                    crate::engines::compute::string_ops::reverse_complement_dna(forward),
                    orf.sequence.clone()
                );
                prop_assert_eq!(&rc[orf.start - 1..orf.end], &orf.sequence[..]);
            }
        }
    }
}
