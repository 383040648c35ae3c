//! Base-level string operations for nucleotide data
//!
//! All functions assume the input has already been uppercased. Anything
//! outside `A`, `C`, `G`, `T` is an unrecognized symbol: it is never counted
//! and complements to `N`.

/// Symbol substituted for unrecognized bases under complementation
pub const UNKNOWN_BASE: u8 = b'N';

/// Uppercase a sequence in-place (ASCII only)
pub fn to_uppercase_in_place(sequence: &mut [u8]) {
    sequence.make_ascii_uppercase();
}

/// Complement a single DNA base
#[inline]
pub fn complement_base(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        _ => UNKNOWN_BASE,
    }
}

/// Reverse-complement a DNA sequence, returning a new vector
pub fn reverse_complement_dna(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().rev().map(|&b| complement_base(b)).collect()
}

/// Count `A`, `T`, `G` and `C` in that order
pub fn count_bases(sequence: &[u8]) -> [usize; 4] {
    let mut counts = [0usize; 4];

    for &base in sequence {
        match base {
            b'A' => counts[0] += 1,
            b'T' => counts[1] += 1,
            b'G' => counts[2] += 1,
            b'C' => counts[3] += 1,
            _ => {}
        }
    }

    counts
}

/// Check whether a sequence contains any `U`
pub fn contains_uracil(sequence: &[u8]) -> bool {
    sequence.contains(&b'U')
}

/// Transcribe DNA to RNA (T -> U)
pub fn transcribe(dna: &[u8]) -> Vec<u8> {
    dna.iter()
        .map(|&base| if base == b'T' { b'U' } else { base })
        .collect()
}

/// Reverse-transcribe RNA to DNA in-place (U -> T)
pub fn reverse_transcribe_in_place(rna: &mut [u8]) {
    for base in rna.iter_mut() {
        if *base == b'U' {
            *base = b'T';
        }
    }
}
