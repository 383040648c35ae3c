use std::fmt;

use crate::engines::compute::string_ops;

/// Nucleic acid type detected on input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceType {
    Dna,
    Rna,
}

impl SequenceType {
    /// Classify uppercased input: any `U` makes it RNA
    pub fn detect(sequence: &[u8]) -> Self {
        if string_ops::contains_uracil(sequence) {
            SequenceType::Rna
        } else {
            SequenceType::Dna
        }
    }

    /// Label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            SequenceType::Dna => "DNA",
            SequenceType::Rna => "RNA",
        }
    }

    pub fn is_rna(&self) -> bool {
        matches!(self, SequenceType::Rna)
    }

    /// Render DNA-alphabet bases for display in this alphabet
    pub fn render(&self, dna: &[u8]) -> String {
        let bases = match self {
            SequenceType::Dna => dna.to_vec(),
            SequenceType::Rna => string_ops::transcribe(dna),
        };
        String::from_utf8_lossy(&bases).into_owned()
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
