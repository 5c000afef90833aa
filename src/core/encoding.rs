//! Symbol ranks for structural (hash-independent) substring labels.
//!
//! The rotational restricted-set test compares sums of symbol ranks rather
//! than raw byte codes. The rank table is a value owned by each scheme
//! instance; [`SymbolRemap::dna`] gives the nucleotide ranking.

use crate::constants::DEFAULT_ALPHABET_SIZE;

/// Lookup table for nucleotide → rank conversion.
/// - A → 0, C → 1, T → 2, G → 3 (uppercase only, like every other symbol
///   comparison in the crate, which works on raw bytes)
/// - Other bytes → 0 (no alphabet validation happens here)
pub(crate) const DNA_RANK_LUT: [u8; 256] = {
    let mut lut = [0u8; 256];
    lut[b'A' as usize] = 0;
    lut[b'C' as usize] = 1;
    lut[b'T' as usize] = 2;
    lut[b'G' as usize] = 3;
    lut
};

/// Byte → rank table with the alphabet size it was built for.
#[derive(Debug, Clone)]
pub struct SymbolRemap {
    ranks: [u8; 256],
    alphabet_size: u64,
}

impl SymbolRemap {
    /// Nucleotide ranks over the 4-letter alphabet.
    pub fn dna() -> Self {
        Self {
            ranks: DNA_RANK_LUT,
            alphabet_size: DEFAULT_ALPHABET_SIZE,
        }
    }

    /// Ranks symbols by their position in `alphabet`; other bytes rank 0.
    pub fn from_alphabet(alphabet: &[u8]) -> Self {
        let mut ranks = [0u8; 256];
        for (rank, &symbol) in alphabet.iter().enumerate() {
            ranks[symbol as usize] = rank as u8;
        }
        Self {
            ranks,
            alphabet_size: alphabet.len() as u64,
        }
    }

    #[inline(always)]
    pub fn rank(&self, byte: u8) -> u64 {
        self.ranks[byte as usize] as u64
    }

    #[inline]
    pub fn alphabet_size(&self) -> u64 {
        self.alphabet_size
    }

    /// Largest difference between two ranks, `alphabet_size - 1`.
    #[inline]
    pub fn max_rank_gap(&self) -> u64 {
        self.alphabet_size.saturating_sub(1)
    }
}

impl Default for SymbolRemap {
    fn default() -> Self {
        Self::dna()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dna_ranks() {
        let remap = SymbolRemap::dna();
        assert_eq!(remap.rank(b'A'), 0);
        assert_eq!(remap.rank(b'C'), 1);
        assert_eq!(remap.rank(b'T'), 2);
        assert_eq!(remap.rank(b'G'), 3);
        assert_eq!(remap.rank(b'N'), 0);
        assert_eq!(remap.alphabet_size(), 4);
    }

    #[test]
    fn test_from_alphabet() {
        let remap = SymbolRemap::from_alphabet(b"01");
        assert_eq!(remap.rank(b'0'), 0);
        assert_eq!(remap.rank(b'1'), 1);
        assert_eq!(remap.alphabet_size(), 2);
        assert_eq!(remap.max_rank_gap(), 1);
    }

    #[test]
    fn test_dna_ranks_are_case_sensitive() {
        let remap = SymbolRemap::dna();
        assert_eq!(remap.rank(b'g'), 0);
        assert_eq!(remap.rank(b't'), 0);
        assert_eq!(remap.max_rank_gap(), 3);
    }
}
