//! Parsing of on-disk sequence formats

pub mod formats;

pub use formats::{FastaParser, ParsedSequence};
