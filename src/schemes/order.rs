//! Leftmost minimum of the `w` k-mers of a window under a k-mer order.
//!
//! The rotational and decycling schemes differ only in how they rank a single
//! k-mer; selection over the window is shared here, as a direct scan for
//! batch evaluation and one [`Enumerator`] of span `w` for streaming.

use std::marker::PhantomData;

use super::{leftmost_min, SchemeParams};
use crate::core::enumerator::Enumerator;
use crate::core::hasher::KmerHasher;
use crate::error::{MinimizerError, Result};

/// Ranks a single k-mer.
pub(crate) trait KmerOrder {
    type Key: Ord + Copy;

    fn key(&self, kmer: &[u8]) -> Self::Key;
}

/// Composite key: a structural label first, the hash as tie-break.
pub(crate) type LabeledKey<H> = (u8, <H as KmerHasher>::Key);

pub(crate) struct KmerMinimum<O: KmerOrder> {
    pub(crate) params: SchemeParams,
    pub(crate) order: O,
    kmers: Enumerator<O::Key>,
}

impl<O: KmerOrder> KmerMinimum<O> {
    pub(crate) fn new(params: SchemeParams, order: O) -> Self {
        let kmers = Enumerator::new(params.w);
        Self {
            params,
            order,
            kmers,
        }
    }

    #[inline]
    fn kmer<'a>(&self, window: &'a [u8], i: usize) -> &'a [u8] {
        &window[i..i + self.params.k]
    }

    /// Offset and key of the leftmost minimal k-mer of `window`.
    pub(crate) fn sample(&self, window: &[u8]) -> Result<(usize, O::Key)> {
        self.params.check_window(window)?;
        let keys = (0..self.params.w).map(|i| self.order.key(self.kmer(window, i)));
        // w >= 2, so the window always has a minimum.
        leftmost_min(keys)
            .ok_or_else(|| MinimizerError::out_of_range("k-mers per window", self.params.w, 0))
    }

    /// Same as [`sample`](Self::sample), advancing the enumerator by one k-mer.
    pub(crate) fn sample_stream(&mut self, window: &[u8], reset: bool) -> Result<(usize, O::Key)> {
        self.params.check_window(window)?;
        let w = self.params.w;
        let first = if reset { 0 } else { w - 1 };
        for i in first..w {
            let key = self.order.key(self.kmer(window, i));
            self.kmers.feed(key, reset && i == 0);
        }
        self.kmers
            .query_min()
            .ok_or_else(|| MinimizerError::out_of_range("live k-mers in enumerator", w, 0))
    }
}

/// Plain hash order, used by tests of the shared selection logic.
#[cfg(test)]
pub(crate) struct HashOrder<H> {
    w: usize,
    seed: u64,
    _hasher: PhantomData<H>,
}

#[cfg(test)]
impl<H: KmerHasher> KmerOrder for HashOrder<H> {
    type Key = H::Key;

    fn key(&self, kmer: &[u8]) -> H::Key {
        H::hash(kmer, self.w, self.seed)
    }
}

/// Marker keeping the hasher type on orders that only call it statically.
pub(crate) type HasherMarker<H> = PhantomData<fn() -> H>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hasher::Murmur64;

    fn order(w: usize) -> HashOrder<Murmur64> {
        HashOrder {
            w,
            seed: 0,
            _hasher: PhantomData,
        }
    }

    #[test]
    fn test_stream_matches_batch() {
        let params = SchemeParams::new(5, 4, 4, 0);
        let seq = b"ACGTTGCAAGGCTTACGATCGATCGGATCCATGCA";
        let l = params.window_len();
        let mut streaming = KmerMinimum::new(params.clone(), order(5));
        let batch = KmerMinimum::new(params, order(5));
        for i in 0..=seq.len() - l {
            let window = &seq[i..i + l];
            assert_eq!(
                streaming.sample_stream(window, i == 0).unwrap(),
                batch.sample(window).unwrap()
            );
        }
    }

    #[test]
    fn test_short_window_is_rejected() {
        let batch = KmerMinimum::new(SchemeParams::new(5, 4, 4, 0), order(5));
        assert!(batch.sample(b"ACGT").is_err());
    }
}
