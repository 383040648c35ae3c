//! FASTA input

use std::path::Path;

use crate::engines::storage::formats::FastaParser;
use crate::modules::seq::SequenceResult;

/// Read the sequence text of a FASTA file
///
/// Header lines are skipped and all other lines are concatenated verbatim.
/// An unreadable file is an error; the bytes are not normalized or decoded
/// here, so non-UTF-8 content reaches [`Sequence::from_bytes`] unchanged.
///
/// [`Sequence::from_bytes`]: crate::modules::seq::Sequence::from_bytes
pub fn read_fasta_sequence<P: AsRef<Path>>(path: P) -> SequenceResult<Vec<u8>> {
    let parsed = FastaParser::new().parse_file(path.as_ref())?;

    if parsed.sequence.is_empty() {
        log::warn!("{} contains no sequence lines", path.as_ref().display());
    }

    Ok(parsed.sequence)
}

/// Same as [`read_fasta_sequence`] for FASTA text already in memory
pub fn parse_fasta_sequence(content: &str) -> SequenceResult<Vec<u8>> {
    Ok(FastaParser::new().parse_string(content)?.sequence)
}
