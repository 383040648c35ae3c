//! Plain-text analysis report
//!
//! Sections come in a fixed order: the input as supplied, the detected type,
//! the composition block, then forward and reverse ORFs grouped by frame.
//! Reverse-strand ORFs are listed in forward-strand coordinates and grouped
//! by the frame of their mapped start.

use std::fmt::{self, Write as _};

use crate::engines::compute::orf_scan::NUM_FRAMES;
use crate::modules::seq::{Composition, Orf, Sequence, SequenceResult, Strand};

/// Notice printed in place of the composition block
pub const INVALID_SEQUENCE_NOTICE: &str = "Error: Invalid sequence!\n";

/// Marker for a frame without ORFs
pub const NO_ORF_MARKER: &str = "  No ORF found\n";

/// Everything computed for one input, ready to render
#[derive(Debug)]
pub struct AnalysisReport {
    input: String,
    sequence: Sequence,
    composition: SequenceResult<Composition>,
    forward: Vec<Orf>,
    reverse: Vec<Orf>,
}

impl AnalysisReport {
    /// Normalize `input` and run the full analysis
    pub fn new(input: &str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    /// Same as [`AnalysisReport::new`] for raw bytes, such as FASTA content
    ///
    /// Bytes that are not valid UTF-8 are echoed as U+FFFD.
    pub fn from_bytes(input: &[u8]) -> Self {
        let sequence = Sequence::from_bytes(input);
        let composition = sequence.composition();
        if let Err(e) = &composition {
            log::warn!("{}", e);
        }

        let (forward, reverse) = sequence.scan_both_strands();
        log::info!(
            "Analyzed {} bases: {} forward ORF(s), {} reverse ORF(s)",
            sequence.len(),
            forward.len(),
            reverse.len()
        );

        Self {
            input: String::from_utf8_lossy(input).into_owned(),
            sequence,
            composition,
            forward,
            reverse,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn composition(&self) -> Option<&Composition> {
        self.composition.as_ref().ok()
    }

    /// ORFs found on `strand`, in scanned-strand coordinates
    pub fn orfs(&self, strand: Strand) -> &[Orf] {
        match strand {
            Strand::Forward => &self.forward,
            Strand::Reverse => &self.reverse,
        }
    }

    /// Render the full report text
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_strand(&self, out: &mut String, strand: Strand) -> fmt::Result {
        let seq_len = self.sequence.len();
        let located: Vec<_> = self
            .orfs(strand)
            .iter()
            .map(|orf| (orf.locate(strand, seq_len), orf))
            .collect();

        for frame in 0..NUM_FRAMES {
            writeln!(out, "Frame {}{}:", strand.symbol(), frame + 1)?;

            let mut found = false;
            for (loc, orf) in located.iter().filter(|(loc, _)| loc.frame() == frame) {
                writeln!(
                    out,
                    "  Start: {}, End: {}, Length: {} nt",
                    loc.start, loc.end, loc.length
                )?;
                writeln!(out, "  Sequence: {}", self.sequence.render(&orf.sequence))?;
                found = true;
            }

            if !found {
                out.push_str(NO_ORF_MARKER);
            }
        }

        Ok(())
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut out = String::new();

        out.push_str("\n== PROCESSED SEQUENCE ==\n");
        writeln!(out, "{}", self.input)?;

        writeln!(out, "\nSequence Type Detected: {}", self.sequence.sequence_type())?;

        match &self.composition {
            Ok(composition) => write!(out, "{}", composition)?,
            Err(_) => out.push_str(INVALID_SEQUENCE_NOTICE),
        }

        out.push_str("\nFORWARD STRAND ORFs\n");
        self.write_strand(&mut out, Strand::Forward)?;

        out.push_str("\n=REVERSE STRAND ORFs=\n");
        self.write_strand(&mut out, Strand::Reverse)?;

        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_report_layout() {
        let report = AnalysisReport::new("ATGAAATAG");
        let expected = "\n== PROCESSED SEQUENCE ==\n\
ATGAAATAG\n\
\n\
Sequence Type Detected: DNA\n\
\n\
===== GC CONTENT RESULT =====\n\
A: 5, T: 2, G: 2, C: 0\n\
GC% = 22.22%\n\
\n\
FORWARD STRAND ORFs\n\
Frame +1:\n\
\x20 Start: 1, End: 9, Length: 9 nt\n\
\x20 Sequence: ATGAAATAG\n\
Frame +2:\n\
\x20 No ORF found\n\
Frame +3:\n\
\x20 No ORF found\n\
\n\
=REVERSE STRAND ORFs=\n\
Frame -1:\n\
\x20 No ORF found\n\
Frame -2:\n\
\x20 No ORF found\n\
Frame -3:\n\
\x20 No ORF found\n";
        assert_eq!(report.render(), expected);
    }

    #[test]
    fn test_rna_report() {
        let report = AnalysisReport::new("auGAAAUAG");
        let text = report.render();

        // Input is echoed as supplied, ORFs are shown in the RNA alphabet
        assert!(text.contains("\n== PROCESSED SEQUENCE ==\nauGAAAUAG\n"));
        assert!(text.contains("Sequence Type Detected: RNA\n"));
        assert!(text.contains("  Sequence: AUGAAAUAG\n"));
        assert!(!text.contains("ATGAAATAG"));
    }

    #[test]
    fn test_invalid_composition_notice() {
        let report = AnalysisReport::new("XXXX");
        let text = report.render();
        assert!(report.composition().is_none());
        assert!(text.contains("Sequence Type Detected: DNA\nError: Invalid sequence!\n"));
        assert!(!text.contains("GC%"));
        assert_eq!(text.matches(NO_ORF_MARKER).count(), 6);
    }

    #[test]
    fn test_reverse_section_uses_forward_coordinates() {
        // Reverse complement: G ATG AAA TAG CC
        let report = AnalysisReport::new("GGCTATTTCATC");
        let text = report.render();

        assert_eq!(report.orfs(Strand::Reverse)[0].start, 2);
        let reverse = text.split("=REVERSE STRAND ORFs=").nth(1).unwrap();
        assert!(reverse.contains(
            "Frame -3:\n  Start: 3, End: 11, Length: 9 nt\n  Sequence: ATGAAATAG\n"
        ));
        assert!(reverse.contains("Frame -1:\n  No ORF found\nFrame -2:\n  No ORF found\n"));
    }

    #[test]
    fn test_frames_list_orfs_in_discovery_order() {
        // Frame 0: ATG ATG AAA TAA yields two ORFs sharing a stop
        let report = AnalysisReport::new("ATGATGAAATAA");
        let text = report.render();
        let forward = text.split("=REVERSE STRAND ORFs=").next().unwrap();

        let first = forward.find("Start: 1, End: 12").unwrap();
        let second = forward.find("Start: 4, End: 12").unwrap();
        assert!(first < second);
        // Start 4 belongs to frame +1 as well: (4 - 1) % 3 == 0
        let frame2 = forward.find("Frame +2:").unwrap();
        assert!(second < frame2);
    }

    #[test]
    fn test_non_utf8_input_is_analyzed() {
        let report = AnalysisReport::from_bytes(b"CC\xE9ATGAAATAG");
        let text = report.render();

        assert!(text.contains("\n== PROCESSED SEQUENCE ==\nCC\u{FFFD}ATGAAATAG\n"));
        assert!(text.contains("A: 5, T: 2, G: 2, C: 2\n"));
        assert!(text.contains("Frame +1:\n  Start: 4, End: 12, Length: 9 nt\n"));
        assert_eq!(report.sequence().len(), 12);
    }

    #[test]
    fn test_empty_input() {
        let report = AnalysisReport::new("");
        let text = report.render();
        assert!(text.starts_with("\n== PROCESSED SEQUENCE ==\n\n"));
        assert!(text.contains(INVALID_SEQUENCE_NOTICE));
        assert!(report.orfs(Strand::Forward).is_empty());
        assert!(report.orfs(Strand::Reverse).is_empty());
    }
}
