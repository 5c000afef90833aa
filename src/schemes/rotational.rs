//! Rotational minimizers.
//!
//! Both variants rank a `k`-mer first by a structural property of the symbols
//! at positions `0 mod w`, and only then by hash.
//!
//! - `rotational_alt`: the k-mer with the largest sum of symbol codes at
//!   positions `0, w, 2w, ...` wins.
//! - `rotational_orig`: the restricted set of Marçais et al. A k-mer belongs to
//!   it when no residue class mod `w` has a rank sum exceeding that of residue
//!   0 by more than a tolerance. Members always rank before non-members, and
//!   every window must contain a member.

use std::marker::PhantomData;

use super::order::{HasherMarker, KmerMinimum, KmerOrder, LabeledKey};
use super::{Scheme, SchemeParams};
use crate::core::encoding::SymbolRemap;
use crate::core::hasher::KmerHasher;
use crate::error::{MinimizerError, Result};

pub const ALT_NAME: &str = "rotational_alt";
pub const ORIG_NAME: &str = "rotational_orig";

// ============================================================================
// rotational_alt
// ============================================================================

pub(crate) struct AltOrder<H> {
    w: usize,
    seed: u64,
    _hasher: HasherMarker<H>,
}

impl<H: KmerHasher> KmerOrder for AltOrder<H> {
    /// Negated sum, so the largest sum compares smallest.
    type Key = (i64, H::Key);

    #[inline]
    fn key(&self, kmer: &[u8]) -> Self::Key {
        let sum: i64 = kmer.iter().step_by(self.w).map(|&c| c as i64).sum();
        (-sum, H::hash(kmer, self.w, self.seed))
    }
}

/// Leftmost k-mer with the largest symbol sum over positions `0 mod w`.
pub struct RotationalAlt<H: KmerHasher> {
    inner: KmerMinimum<AltOrder<H>>,
}

impl<H: KmerHasher> RotationalAlt<H> {
    pub fn new(params: SchemeParams) -> Result<Self> {
        params.validate()?;
        let order = AltOrder {
            w: params.w,
            seed: params.seed,
            _hasher: PhantomData,
        };
        Ok(Self {
            inner: KmerMinimum::new(params, order),
        })
    }
}

impl<H: KmerHasher> Scheme for RotationalAlt<H> {
    fn name(&self) -> &'static str {
        ALT_NAME
    }

    fn params(&self) -> &SchemeParams {
        &self.inner.params
    }

    fn sample(&self, window: &[u8]) -> Result<usize> {
        self.inner.sample(window).map(|(p, _)| p)
    }

    fn sample_stream(&mut self, window: &[u8], reset: bool) -> Result<usize> {
        self.inner.sample_stream(window, reset).map(|(p, _)| p)
    }
}

// ============================================================================
// rotational_orig
// ============================================================================

pub(crate) struct OrigOrder<H> {
    w: usize,
    seed: u64,
    tolerance: u64,
    remap: SymbolRemap,
    _hasher: HasherMarker<H>,
}

impl<H> OrigOrder<H> {
    /// Whether `kmer` belongs to the restricted set.
    fn in_restricted_set(&self, kmer: &[u8]) -> bool {
        let residue_sum = |j: usize| -> u64 {
            kmer[j..]
                .iter()
                .step_by(self.w)
                .map(|&c| self.remap.rank(c))
                .sum()
        };
        let sum0 = residue_sum(0);
        (1..self.w).all(|j| residue_sum(j) <= sum0 + self.tolerance)
    }
}

impl<H: KmerHasher> KmerOrder for OrigOrder<H> {
    type Key = LabeledKey<H>;

    #[inline]
    fn key(&self, kmer: &[u8]) -> Self::Key {
        let label = if self.in_restricted_set(kmer) { 0 } else { 1 };
        (label, H::hash(kmer, self.w, self.seed))
    }
}

/// Rotational minimizer as originally described: restricted-set members
/// first, hash order within each class.
pub struct RotationalOrig<H: KmerHasher> {
    inner: KmerMinimum<OrigOrder<H>>,
}

impl<H: KmerHasher> RotationalOrig<H> {
    /// Build with the DNA rank table (`A < C < T < G`).
    pub fn new(params: SchemeParams) -> Result<Self> {
        Self::with_remap(params, SymbolRemap::dna())
    }

    /// Build with a custom symbol rank table. Without an explicit tolerance
    /// the test allows `alphabet_size - 1` of `remap`.
    pub fn with_remap(params: SchemeParams, remap: SymbolRemap) -> Result<Self> {
        params.validate()?;
        if params.k % params.w != 0 {
            return Err(MinimizerError::config(format!(
                "{} requires k divisible by w (k={}, w={})",
                ORIG_NAME, params.k, params.w
            )));
        }
        let tolerance = params
            .rotational_tolerance
            .unwrap_or_else(|| remap.max_rank_gap());
        let order = OrigOrder {
            w: params.w,
            seed: params.seed,
            tolerance,
            remap,
            _hasher: PhantomData,
        };
        Ok(Self {
            inner: KmerMinimum::new(params, order),
        })
    }

    /// Slack in effect for the restricted-set test.
    pub fn tolerance(&self) -> u64 {
        self.inner.order.tolerance
    }

    /// Whether `kmer` belongs to the restricted set of this instance.
    pub fn in_restricted_set(&self, kmer: &[u8]) -> bool {
        self.inner.order.in_restricted_set(kmer)
    }

    fn check_member(&self, (p, (label, _)): (usize, LabeledKey<H>)) -> Result<usize> {
        if label != 0 {
            return Err(MinimizerError::invariant(
                ORIG_NAME,
                format!(
                    "no k-mer of the window is in the restricted set (w={}, k={}, tolerance={})",
                    self.inner.params.w,
                    self.inner.params.k,
                    self.tolerance()
                ),
            ));
        }
        Ok(p)
    }
}

impl<H: KmerHasher> Scheme for RotationalOrig<H> {
    fn name(&self) -> &'static str {
        ORIG_NAME
    }

    fn params(&self) -> &SchemeParams {
        &self.inner.params
    }

    fn sample(&self, window: &[u8]) -> Result<usize> {
        let min = self.inner.sample(window)?;
        self.check_member(min)
    }

    fn sample_stream(&mut self, window: &[u8], reset: bool) -> Result<usize> {
        let min = self.inner.sample_stream(window, reset)?;
        self.check_member(min)
    }
}
