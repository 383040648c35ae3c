//! Codon classification

/// Number of bases in a codon
pub const CODON_LEN: usize = 3;

/// The canonical start codon
pub const START_CODON: &[u8; 3] = b"ATG";

/// Standard stop codons
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Check whether a window is exactly the start codon
#[inline]
pub fn is_start_codon(codon: &[u8]) -> bool {
    codon == START_CODON
}

/// Check whether a window is exactly one of the stop codons
#[inline]
pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon == *stop)
}
