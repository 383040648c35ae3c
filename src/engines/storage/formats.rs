//! FASTA parsing
//!
//! Reads one nucleotide sequence out of FASTA-formatted text. Header lines
//! (starting with `>`) are skipped and every other line is appended verbatim,
//! so a multi-record file yields the concatenation of all its records. Lines
//! are handled as bytes; the input does not have to be valid UTF-8.

use std::io::BufRead;
use std::path::Path;

use crate::engines::core::io::{FastReader, Lines};
use crate::engines::EngineResult;

/// Sequence text collected from a FASTA source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSequence {
    /// Concatenated non-header lines
    pub sequence: Vec<u8>,
    /// Number of header lines skipped
    pub headers: usize,
    /// Number of sequence lines appended
    pub lines: usize,
}

/// FASTA format parser
#[derive(Debug, Clone)]
pub struct FastaParser {
    /// Buffer size for reading
    buffer_size: usize,
}

impl FastaParser {
    /// Create a new FASTA parser
    pub fn new() -> Self {
        Self {
            buffer_size: 64 * 1024,
        }
    }

    /// Parse a FASTA file
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> EngineResult<ParsedSequence> {
        let mut reader = FastReader::new(path.as_ref(), Some(self.buffer_size))?;
        let parsed = collect_sequence(reader.read_lines())?;

        log::debug!(
            "Parsed {}: {} header line(s), {} sequence line(s), {} bytes",
            reader.path(),
            parsed.headers,
            parsed.lines,
            parsed.sequence.len()
        );

        Ok(parsed)
    }

    /// Parse FASTA text held in memory
    pub fn parse_string(&self, content: &str) -> EngineResult<ParsedSequence> {
        self.parse_bytes(content.as_bytes())
    }

    /// Parse FASTA content held in memory as raw bytes
    pub fn parse_bytes(&self, content: &[u8]) -> EngineResult<ParsedSequence> {
        let mut cursor = std::io::Cursor::new(content);
        collect_sequence(Lines::new(&mut cursor))
    }
}

impl Default for FastaParser {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_sequence<R: BufRead>(lines: Lines<'_, R>) -> EngineResult<ParsedSequence> {
    let mut parsed = ParsedSequence::default();

    for line in lines {
        let line = line?;

        if line.starts_with(b">") {
            parsed.headers += 1;
            continue;
        }

        parsed.sequence.extend_from_slice(&line);
        parsed.lines += 1;
    }

    Ok(parsed)
}
