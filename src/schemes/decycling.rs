//! Decycling-set minimizers.
//!
//! A k-mer `x` is embedded in the complex plane as `Σ x_i · e^{2πi·i/k}`.
//! Rotating the k-mer by one symbol rotates the embedding by `2π/k`, so every
//! non-degenerate rotation cycle has exactly one member whose argument falls
//! in an arc of width `2π/k`. Taking those members as a decycling set and
//! ranking them first gives a scheme that hits every cycle.
//!
//! `double_decycling` also ranks the members of the mirrored arc around 0
//! ahead of everything else.
//!
//! Three membership tests are available; they agree up to floating point
//! rounding on the boundary and differ slightly in achieved density, which is
//! why all of them are kept.

use std::f64::consts::PI;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use super::order::{HasherMarker, KmerMinimum, KmerOrder, LabeledKey};
use super::{Scheme, SchemeParams};
use crate::core::hasher::KmerHasher;
use crate::error::{MinimizerError, Result};

pub const NAME: &str = "decycling";
pub const DOUBLE_NAME: &str = "double_decycling";

/// Membership test of the decycling set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecyclingTest {
    /// Mykkeltveit's formulation: `Im(x) > 0` and `Im(rot(x)) <= 0`.
    Original,
    /// `arg(x) ∈ (π - 2π/k, π]`.
    #[default]
    ArgPositive,
    /// `arg(x) ∈ (-2π/k, 0]`.
    ArgNegative,
}

impl DecyclingTest {
    pub const ALL: [DecyclingTest; 3] = [
        DecyclingTest::Original,
        DecyclingTest::ArgPositive,
        DecyclingTest::ArgNegative,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DecyclingTest::Original => "original",
            DecyclingTest::ArgPositive => "arg_pos",
            DecyclingTest::ArgNegative => "arg_neg",
        }
    }
}

impl fmt::Display for DecyclingTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DecyclingTest {
    type Err = MinimizerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        DecyclingTest::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| {
                MinimizerError::config(format!(
                    "unknown decycling test '{}' (expected original, arg_pos or arg_neg)",
                    s
                ))
            })
    }
}

/// Per-`k` roots of unity and sines.
#[derive(Debug, Clone)]
pub struct PhaseTable {
    k: usize,
    /// `(cos, sin)` of `2π·i/k` for `i ∈ [0, k)`.
    roots: Vec<(f64, f64)>,
    /// `sin(2π·i/k)` for `i ∈ [0, k]`; the extra entry serves the rotated sum.
    sines: Vec<f64>,
}

impl PhaseTable {
    pub fn new(k: usize) -> Self {
        let phase = |i: usize| 2.0 * PI * i as f64 / k as f64;
        let roots = (0..k).map(|i| (phase(i).cos(), phase(i).sin())).collect();
        let sines = (0..=k).map(|i| phase(i).sin()).collect();
        Self { k, roots, sines }
    }

    /// Argument of the embedding of `kmer`, in `(-π, π]`.
    fn arg(&self, kmer: &[u8]) -> f64 {
        let (mut re, mut im) = (0.0f64, 0.0f64);
        for (&(c, s), &x) in self.roots.iter().zip(kmer) {
            re += c * x as f64;
            im += s * x as f64;
        }
        im.atan2(re)
    }

    fn is_decycling_original(&self, kmer: &[u8]) -> bool {
        let mut im = 0.0f64;
        let mut im_rot = 0.0f64;
        for (i, &x) in kmer.iter().take(self.k).enumerate() {
            im += self.sines[i] * x as f64;
            im_rot += self.sines[i + 1] * x as f64;
        }
        im > 0.0 && im_rot <= 0.0
    }

    /// Width of the membership arc, `2π/k`.
    #[inline]
    fn arc(&self) -> f64 {
        2.0 * PI / (self.k as f64)
    }

    fn is_decycling_arg_pos(&self, kmer: &[u8]) -> bool {
        PI - self.arc() < self.arg(kmer)
    }

    fn is_decycling_arg_neg(&self, kmer: &[u8]) -> bool {
        let a = self.arg(kmer);
        -self.arc() < a && a <= 0.0
    }

    /// Whether `kmer` passes `test`.
    pub fn in_set(&self, test: DecyclingTest, kmer: &[u8]) -> bool {
        debug_assert_eq!(kmer.len(), self.k);
        match test {
            DecyclingTest::Original => self.is_decycling_original(kmer),
            DecyclingTest::ArgPositive => self.is_decycling_arg_pos(kmer),
            DecyclingTest::ArgNegative => self.is_decycling_arg_neg(kmer),
        }
    }
}

// ============================================================================
// decycling
// ============================================================================

pub(crate) struct DecyclingOrder<H> {
    w: usize,
    seed: u64,
    test: DecyclingTest,
    phases: PhaseTable,
    _hasher: HasherMarker<H>,
}

impl<H: KmerHasher> KmerOrder for DecyclingOrder<H> {
    type Key = LabeledKey<H>;

    #[inline]
    fn key(&self, kmer: &[u8]) -> Self::Key {
        let label = if self.phases.in_set(self.test, kmer) { 0 } else { 1 };
        (label, H::hash(kmer, self.w, self.seed))
    }
}

/// Decycling-set members first, hash order within each class.
pub struct Decycling<H: KmerHasher> {
    inner: KmerMinimum<DecyclingOrder<H>>,
}

impl<H: KmerHasher> Decycling<H> {
    pub fn new(params: SchemeParams) -> Result<Self> {
        params.validate()?;
        let order = DecyclingOrder {
            w: params.w,
            seed: params.seed,
            test: params.decycling_test,
            phases: PhaseTable::new(params.k),
            _hasher: PhantomData,
        };
        Ok(Self {
            inner: KmerMinimum::new(params, order),
        })
    }

    /// Whether `kmer` is in the decycling set of this instance.
    pub fn in_set(&self, kmer: &[u8]) -> bool {
        let order = &self.inner.order;
        order.phases.in_set(order.test, kmer)
    }
}

impl<H: KmerHasher> Scheme for Decycling<H> {
    fn name(&self) -> &'static str {
        NAME
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
// double_decycling
// ============================================================================

pub(crate) struct DoubleDecyclingOrder<H> {
    w: usize,
    seed: u64,
    positive: DecyclingTest,
    phases: PhaseTable,
    _hasher: HasherMarker<H>,
}

impl<H> DoubleDecyclingOrder<H> {
    /// 0 for the positive set, 1 for the mirrored set, 2 otherwise.
    fn label(&self, kmer: &[u8]) -> u8 {
        if self.phases.in_set(self.positive, kmer) {
            0
        } else if self.phases.in_set(DecyclingTest::ArgNegative, kmer) {
            1
        } else {
            2
        }
    }
}

impl<H: KmerHasher> KmerOrder for DoubleDecyclingOrder<H> {
    type Key = LabeledKey<H>;

    #[inline]
    fn key(&self, kmer: &[u8]) -> Self::Key {
        (self.label(kmer), H::hash(kmer, self.w, self.seed))
    }
}

/// Positive decycling set first, then its mirror image, then everything else.
pub struct DoubleDecycling<H: KmerHasher> {
    inner: KmerMinimum<DoubleDecyclingOrder<H>>,
}

impl<H: KmerHasher> DoubleDecycling<H> {
    /// The configured decycling test picks the positive set; the mirrored set
    /// always uses the negative-argument test.
    pub fn new(params: SchemeParams) -> Result<Self> {
        params.validate()?;
        if params.decycling_test == DecyclingTest::ArgNegative {
            return Err(MinimizerError::config(format!(
                "{} needs a positive-side decycling test (original or arg_pos)",
                DOUBLE_NAME
            )));
        }
        let order = DoubleDecyclingOrder {
            w: params.w,
            seed: params.seed,
            positive: params.decycling_test,
            phases: PhaseTable::new(params.k),
            _hasher: PhantomData,
        };
        Ok(Self {
            inner: KmerMinimum::new(params, order),
        })
    }

    /// Label of `kmer`: 0 positive set, 1 mirrored set, 2 neither.
    pub fn label(&self, kmer: &[u8]) -> u8 {
        self.inner.order.label(kmer)
    }
}

impl<H: KmerHasher> Scheme for DoubleDecycling<H> {
    fn name(&self) -> &'static str {
        DOUBLE_NAME
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hasher::Murmur64;

    fn rotations(kmer: &[u8]) -> Vec<Vec<u8>> {
        (0..kmer.len())
            .map(|r| {
                let mut v = kmer.to_vec();
                v.rotate_left(r);
                v
            })
            .collect()
    }

    #[test]
    fn test_phase_table_sizes() {
        let table = PhaseTable::new(5);
        assert_eq!(table.k, 5);
        assert_eq!(table.roots.len(), 5);
        assert_eq!(table.sines.len(), 6);
        assert!((table.roots[0].0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_each_test_hits_cycle_once() {
        // "ACG" embeds to -4 - 3.46i; its rotations sit 2π/3 apart.
        let table = PhaseTable::new(3);
        for test in DecyclingTest::ALL {
            let members = rotations(b"ACG")
                .iter()
                .filter(|r| table.in_set(test, r))
                .count();
            assert_eq!(members, 1, "test {} should hit the cycle once", test);
        }
    }

    #[test]
    fn test_arg_tests_use_arc_of_two_pi_over_k() {
        for k in [3usize, 5, 8] {
            let table = PhaseTable::new(k);
            assert!((table.arc() - 2.0 * PI / k as f64).abs() < 1e-12);
        }
        let table = PhaseTable::new(3);
        // "GAC" ≈ -0.33 lies in (-2π/3, 0]; "ACG" ≈ -2.43 lies below it.
        assert!(table.in_set(DecyclingTest::ArgNegative, b"GAC"));
        assert!(!table.in_set(DecyclingTest::ArgNegative, b"ACG"));
        assert!(!table.in_set(DecyclingTest::ArgNegative, b"CGA"));
        // "CGA" ≈ 1.76 lies in (π - 2π/3, π].
        assert!(table.in_set(DecyclingTest::ArgPositive, b"CGA"));
        assert!(!table.in_set(DecyclingTest::ArgPositive, b"GAC"));
    }

    #[test]
    fn test_original_and_arg_pos_agree_off_boundary() {
        let table = PhaseTable::new(3);
        assert!(table.in_set(DecyclingTest::Original, b"CGA"));
        assert!(table.in_set(DecyclingTest::ArgPositive, b"CGA"));
        assert!(!table.in_set(DecyclingTest::ArgPositive, b"ACG"));
    }

    #[test]
    fn test_decycling_prefers_members() {
        // w=3, k=3: the window "ACGAC" holds "ACG", "CGA", "GAC"; only "CGA"
        // is in the set, whatever the hashes say.
        let scheme = Decycling::<Murmur64>::new(SchemeParams::new(3, 3, 3, 0)).unwrap();
        assert!(scheme.in_set(b"CGA"));
        assert_eq!(scheme.sample(b"ACGAC").unwrap(), 1);
    }

    #[test]
    fn test_double_decycling_labels() {
        let scheme = DoubleDecycling::<Murmur64>::new(SchemeParams::new(3, 3, 3, 0)).unwrap();
        // Arguments: "ACG" ≈ -2.43, "CGA" ≈ 1.76, "GAC" ≈ -0.33.
        assert_eq!(scheme.label(b"CGA"), 0);
        assert_eq!(scheme.label(b"GAC"), 1);
        assert_eq!(scheme.label(b"ACG"), 2);
        assert_eq!(scheme.sample(b"ACGAC").unwrap(), 1);
        // Without "CGA", the mirrored member "GAC" wins.
        assert_eq!(scheme.sample(b"GACGT").unwrap(), 0);
    }

    #[test]
    fn test_double_decycling_rejects_negative_test() {
        let params =
            SchemeParams::new(3, 3, 3, 0).with_decycling_test(DecyclingTest::ArgNegative);
        assert!(DoubleDecycling::<Murmur64>::new(params).is_err());
    }

    #[test]
    fn test_decycling_test_names() {
        for test in DecyclingTest::ALL {
            assert_eq!(test.name().parse::<DecyclingTest>().unwrap(), test);
        }
        assert!("sine".parse::<DecyclingTest>().is_err());
    }
}
