//! Frame-aware open reading frame scan
//!
//! For each reading frame the scan walks codon by codon. Every `ATG` opens an
//! inner walk that stops at the first in-frame stop codon and emits one span.
//! The outer walk then carries on from the next codon after the start, not
//! from the end of the emitted span, so a second `ATG` inside an ORF yields a
//! second, nested ORF that shares the same stop codon. A start with no
//! in-frame stop before the end of the strand emits nothing.

use super::codon::{is_start_codon, is_stop_codon, CODON_LEN};

/// Number of reading frames on one strand
pub const NUM_FRAMES: usize = 3;

/// Location of an ORF on the scanned strand (0-based, half-open)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrfSpan {
    /// Offset of the first base of the start codon
    pub start: usize,
    /// Offset one past the last base of the stop codon
    pub end: usize,
}

impl OrfSpan {
    /// Number of bases covered, stop codon included
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Spans always cover at least a start and a stop codon
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Find the first in-frame stop codon at or after `from`
fn next_stop(sequence: &[u8], from: usize) -> Option<usize> {
    let n = sequence.len();
    let mut j = from;

    while j + CODON_LEN <= n {
        if is_stop_codon(&sequence[j..j + CODON_LEN]) {
            return Some(j);
        }
        j += CODON_LEN;
    }

    None
}

/// Scan a single reading frame, returning spans in ascending start order
pub fn scan_frame(sequence: &[u8], frame: usize) -> Vec<OrfSpan> {
    let n = sequence.len();
    let mut spans = Vec::new();
    let mut i = frame;

    while i + CODON_LEN <= n {
        if is_start_codon(&sequence[i..i + CODON_LEN]) {
            if let Some(stop) = next_stop(sequence, i + CODON_LEN) {
                spans.push(OrfSpan {
                    start: i,
                    end: stop + CODON_LEN,
                });
            }
        }
        i += CODON_LEN;
    }

    spans
}

/// Scan frames 0, 1 and 2 in order; results are frame-major, position-minor
pub fn scan_all_frames(sequence: &[u8]) -> Vec<OrfSpan> {
    (0..NUM_FRAMES)
        .flat_map(|frame| scan_frame(sequence, frame))
        .collect()
}
