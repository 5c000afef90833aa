//! Order keys for substrings.
//!
//! Every selection scheme ranks substrings by a key produced by a
//! [`KmerHasher`]. Hashers are stateless: the key depends only on the
//! substring bytes, the window size and the seed, so any two instances of a
//! scheme built with the same parameters agree on every window.

use std::fmt;
use std::hash::Hasher as _;
use std::str::FromStr;

use rustc_hash::FxHasher;

use crate::error::MinimizerError;

/// Maps a substring to a totally ordered key.
///
/// The substring's length is the slice length. `w` is passed through for
/// hashers that want to vary with the window size; the built-in ones ignore it.
pub trait KmerHasher {
    type Key: Ord + Copy + fmt::Debug;

    fn hash(kmer: &[u8], w: usize, seed: u64) -> Self::Key;
}

const MURMUR_M: u64 = 0xc6a4_a793_5bd1_e995;
const MURMUR_R: u32 = 47;

/// MurmurHash2, 64-bit variant A.
#[inline]
pub fn murmurhash2_64(bytes: &[u8], seed: u64) -> u64 {
    let mut h = seed ^ (bytes.len() as u64).wrapping_mul(MURMUR_M);

    let mut chunks = bytes.chunks_exact(8);
    for chunk in &mut chunks {
        let mut k = u64::from_le_bytes([
            chunk[0], chunk[1], chunk[2], chunk[3], chunk[4], chunk[5], chunk[6], chunk[7],
        ]);
        k = k.wrapping_mul(MURMUR_M);
        k ^= k >> MURMUR_R;
        k = k.wrapping_mul(MURMUR_M);

        h ^= k;
        h = h.wrapping_mul(MURMUR_M);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        for (i, &b) in tail.iter().enumerate() {
            h ^= (b as u64) << (8 * i);
        }
        h = h.wrapping_mul(MURMUR_M);
    }

    h ^= h >> MURMUR_R;
    h = h.wrapping_mul(MURMUR_M);
    h ^= h >> MURMUR_R;
    h
}

/// 64-bit MurmurHash2 keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct Murmur64;

impl KmerHasher for Murmur64 {
    type Key = u64;

    #[inline]
    fn hash(kmer: &[u8], _w: usize, seed: u64) -> u64 {
        murmurhash2_64(kmer, seed)
    }
}

/// 128-bit keys from two independently seeded MurmurHash2 passes.
///
/// Collisions between distinct substrings are negligible, which matters for
/// large `k` where 64-bit ties start to bias the leftmost tie-break.
#[derive(Debug, Clone, Copy, Default)]
pub struct Murmur128;

impl KmerHasher for Murmur128 {
    type Key = u128;

    #[inline]
    fn hash(kmer: &[u8], _w: usize, seed: u64) -> u128 {
        let hi = murmurhash2_64(kmer, seed) as u128;
        let lo = murmurhash2_64(kmer, !seed) as u128;
        (hi << 64) | lo
    }
}

/// FxHash keys, seeded by hashing the seed before the substring.
#[derive(Debug, Clone, Copy, Default)]
pub struct FxKeyHasher;

impl KmerHasher for FxKeyHasher {
    type Key = u64;

    #[inline]
    fn hash(kmer: &[u8], _w: usize, seed: u64) -> u64 {
        let mut hasher = FxHasher::default();
        hasher.write_u64(seed);
        hasher.write(kmer);
        hasher.finish()
    }
}

/// Run-time choice of hasher, used by the scheme factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HasherKind {
    #[default]
    Murmur64,
    Murmur128,
    Fx,
}

impl HasherKind {
    pub const ALL: [HasherKind; 3] = [HasherKind::Murmur64, HasherKind::Murmur128, HasherKind::Fx];

    pub fn name(self) -> &'static str {
        match self {
            HasherKind::Murmur64 => "murmur64",
            HasherKind::Murmur128 => "murmur128",
            HasherKind::Fx => "fx",
        }
    }
}

impl fmt::Display for HasherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HasherKind {
    type Err = MinimizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HasherKind::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| {
                MinimizerError::config(format!(
                    "unknown hasher '{}' (expected murmur64, murmur128 or fx)",
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_murmur_is_deterministic() {
        let a = Murmur64::hash(b"ACGTACGT", 4, 42);
        let b = Murmur64::hash(b"ACGTACGT", 4, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_murmur_depends_on_seed_and_bytes() {
        let base = Murmur64::hash(b"ACGTACGTA", 4, 0);
        assert_ne!(base, Murmur64::hash(b"ACGTACGTA", 4, 1));
        assert_ne!(base, Murmur64::hash(b"ACGTACGTC", 4, 0));
        // Tail bytes past the last full word must contribute.
        assert_ne!(Murmur64::hash(b"ACG", 4, 0), Murmur64::hash(b"ACT", 4, 0));
    }

    #[test]
    fn test_murmur_ignores_window_size() {
        assert_eq!(Murmur64::hash(b"ACGT", 2, 7), Murmur64::hash(b"ACGT", 9, 7));
    }

    #[test]
    fn test_murmur128_high_half_matches_murmur64() {
        let key = Murmur128::hash(b"GATTACA", 3, 11);
        assert_eq!((key >> 64) as u64, Murmur64::hash(b"GATTACA", 3, 11));
    }

    #[test]
    fn test_fx_is_deterministic_and_seeded() {
        let a = FxKeyHasher::hash(b"ACGT", 4, 1);
        assert_eq!(a, FxKeyHasher::hash(b"ACGT", 4, 1));
        assert_ne!(a, FxKeyHasher::hash(b"ACGT", 4, 2));
    }

    #[test]
    fn test_hasher_kind_round_trip_names() {
        for kind in HasherKind::ALL {
            assert_eq!(kind.name().parse::<HasherKind>().unwrap(), kind);
        }
        assert!("sha256".parse::<HasherKind>().is_err());
    }
}
