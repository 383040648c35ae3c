//! Base composition and GC content

use std::fmt;

use itertools::Itertools;

use crate::engines::compute::string_ops;
use super::sequence::{SequenceError, SequenceResult};

/// Counts of the four recognized bases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    pub a: usize,
    pub t: usize,
    pub g: usize,
    pub c: usize,
}

impl Composition {
    /// Count bases in a DNA-alphabet sequence
    ///
    /// Fails with `InvalidSequence` when no base is an `A`, `T`, `G` or `C`.
    pub fn from_bases(bases: &[u8]) -> SequenceResult<Self> {
        let [a, t, g, c] = string_ops::count_bases(bases);
        let composition = Self { a, t, g, c };

        if composition.total() == 0 {
            return Err(SequenceError::InvalidSequence(
                "no A, T, G or C bases to count".to_string(),
            ));
        }

        Ok(composition)
    }

    /// Number of countable bases
    pub fn total(&self) -> usize {
        self.a + self.t + self.g + self.c
    }

    /// GC percentage over countable bases
    pub fn gc_percent(&self) -> f64 {
        (self.g + self.c) as f64 * 100.0 / self.total() as f64
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let counts = [('A', self.a), ('T', self.t), ('G', self.g), ('C', self.c)]
            .iter()
            .map(|(base, n)| format!("{}: {}", base, n))
            .join(", ");

        writeln!(f)?;
        writeln!(f, "===== GC CONTENT RESULT =====")?;
        writeln!(f, "{}", counts)?;
        writeln!(f, "GC% = {:.2}%", self.gc_percent())
    }
}
