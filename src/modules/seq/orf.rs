//! Open reading frame records
//!
//! An [`Orf`] carries coordinates on the strand it was scanned from. Reports
//! want forward-strand coordinates, which [`Orf::locate`] provides.

use std::fmt;

use crate::engines::compute::orf_scan::{OrfSpan, NUM_FRAMES};

/// Strand orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Sign used in frame labels (`+1`, `-2`, ...)
    pub fn symbol(&self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strand::Forward => f.write_str("forward"),
            Strand::Reverse => f.write_str("reverse"),
        }
    }
}

/// An ORF on the scanned strand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orf {
    /// 1-based position of the first base of the start codon
    pub start: usize,
    /// 1-based position of the last base of the stop codon
    pub end: usize,
    /// Bases from start codon through stop codon, DNA alphabet
    pub sequence: Vec<u8>,
}

impl Orf {
    /// Build an ORF from a scan span over `strand_bases`
    pub fn from_span(span: OrfSpan, strand_bases: &[u8]) -> Self {
        Self {
            start: span.start + 1,
            end: span.end,
            sequence: strand_bases[span.start..span.end].to_vec(),
        }
    }

    /// Length in bases, stop codon included
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Reading frame on the scanned strand
    pub fn frame(&self) -> usize {
        (self.start - 1) % NUM_FRAMES
    }

    /// Coordinates on the forward strand of a sequence of length `seq_len`
    ///
    /// Forward ORFs are returned as-is. For reverse ORFs the last base of the
    /// ORF in forward orientation is `seq_len - (start - 1)` and the first is
    /// that minus the ORF length plus one.
    pub fn locate(&self, strand: Strand, seq_len: usize) -> OrfLocation {
        let (start, end) = match strand {
            Strand::Forward => (self.start, self.end),
            Strand::Reverse => {
                let end = seq_len - (self.start - 1);
                (end + 1 - self.len(), end)
            }
        };

        OrfLocation {
            strand,
            start,
            end,
            length: self.len(),
        }
    }

    /// Bases as text
    pub fn as_string(&self) -> String {
        String::from_utf8_lossy(&self.sequence).into_owned()
    }
}

/// Position of an ORF in forward-strand coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrfLocation {
    pub strand: Strand,
    /// 1-based, inclusive
    pub start: usize,
    /// 1-based, inclusive
    pub end: usize,
    pub length: usize,
}

impl OrfLocation {
    /// Frame used for display grouping, from the forward-strand start
    pub fn frame(&self) -> usize {
        (self.start - 1) % NUM_FRAMES
    }

    /// Frame label such as `+1` or `-3`
    pub fn frame_label(&self) -> String {
        format!("{}{}", self.strand.symbol(), self.frame() + 1)
    }
}
