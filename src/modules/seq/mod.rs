//! Sequence module
//!
//! The normalized [`Sequence`] value and everything derived from it:
//! composition, reverse complement and ORFs.

pub mod alphabet;
pub mod composition;
pub mod orf;
pub mod sequence;

/// Convenience re-exports
pub use alphabet::SequenceType;
pub use composition::Composition;
pub use orf::{Orf, OrfLocation, Strand};
pub use sequence::{Sequence, SequenceError, SequenceResult};
