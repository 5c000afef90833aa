//! Window fingerprint selection schemes.
//!
//! Each scheme picks one offset `p ∈ [0, w)` per window of `w + k - 1`
//! symbols, naming the `k`-mer chosen as the window's fingerprint. On ties the
//! leftmost `k`-mer wins. Every scheme can be evaluated two ways:
//!
//! - [`Scheme::sample`] looks at one window from scratch.
//! - [`Scheme::sample_stream`] advances internal enumerators by one position
//!   per call, reusing work from the previous window.
//!
//! Both must return the same offset for the same window; the integration tests
//! check this for every scheme.
//!
//! Schemes are generic over a [`KmerHasher`]; [`build_scheme`] picks the hasher
//! and scheme at run time and returns a boxed trait object.

pub mod decycling;
pub mod miniception;
pub mod mod_sampling;
pub(crate) mod order;
pub mod rotational;

use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_SEED;
use crate::core::hasher::{FxKeyHasher, HasherKind, KmerHasher, Murmur128, Murmur64};
use crate::error::{MinimizerError, Result};

pub use decycling::{Decycling, DecyclingTest, DoubleDecycling, PhaseTable};
pub use miniception::Miniception;
pub use mod_sampling::ModSampling;
pub use rotational::{RotationalAlt, RotationalOrig};

/// A window fingerprint selection scheme.
pub trait Scheme {
    /// Stable name used to select and label results.
    fn name(&self) -> &'static str;

    fn params(&self) -> &SchemeParams;

    /// Select the fingerprint of a single window.
    ///
    /// `window` must hold at least `w + k - 1` symbols; extra trailing symbols
    /// are ignored.
    fn sample(&self, window: &[u8]) -> Result<usize>;

    /// Select the fingerprint of the next window of a scan.
    ///
    /// `window` is the full current window. When `reset` is set this is the
    /// first window of a new scan and all state is rebuilt from it; otherwise
    /// only its newest trailing item is consumed.
    fn sample_stream(&mut self, window: &[u8], reset: bool) -> Result<usize>;
}

/// Parameters shared by every scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeParams {
    /// Number of `k`-mers per window.
    pub w: usize,
    /// Length of the selected substring.
    pub k: usize,
    /// Anchor length for mod-sampling and miniception.
    pub t: usize,
    pub seed: u64,
    /// Slack allowed by the rotational restricted-set test. `None` means
    /// `alphabet_size - 1` of the symbol ranking in use.
    pub rotational_tolerance: Option<u64>,
    /// Membership test of the decycling set.
    pub decycling_test: DecyclingTest,
}

impl SchemeParams {
    pub fn new(w: usize, k: usize, t: usize, seed: u64) -> Self {
        Self {
            w,
            k,
            t,
            seed,
            rotational_tolerance: None,
            decycling_test: DecyclingTest::default(),
        }
    }

    pub fn with_tolerance(mut self, tolerance: u64) -> Self {
        self.rotational_tolerance = Some(tolerance);
        self
    }

    pub fn with_decycling_test(mut self, test: DecyclingTest) -> Self {
        self.decycling_test = test;
        self
    }

    /// Symbols per window: `w + k - 1`.
    #[inline]
    pub fn window_len(&self) -> usize {
        self.w + self.k - 1
    }

    /// Check the constraints every scheme relies on.
    pub fn validate(&self) -> Result<()> {
        if self.w < 2 {
            return Err(MinimizerError::config(format!(
                "w must be at least 2 (got {})",
                self.w
            )));
        }
        if self.k == 0 {
            return Err(MinimizerError::config("k must be positive"));
        }
        if self.t == 0 || self.t > self.k {
            return Err(MinimizerError::config(format!(
                "t must be in [1, k={}] (got {})",
                self.k, self.t
            )));
        }
        if self.window_len() >= u32::MAX as usize {
            return Err(MinimizerError::config(format!(
                "window length w + k - 1 = {} does not fit in 32 bits",
                self.window_len()
            )));
        }
        Ok(())
    }

    /// Check that `window` holds a full window of symbols.
    pub(crate) fn check_window(&self, window: &[u8]) -> Result<()> {
        let needed = self.window_len();
        if window.len() < needed {
            return Err(MinimizerError::out_of_range(
                "window length",
                needed,
                window.len(),
            ));
        }
        Ok(())
    }
}

impl Default for SchemeParams {
    fn default() -> Self {
        Self::new(10, 21, 21, DEFAULT_SEED)
    }
}

/// Leftmost minimum of a sequence of keys.
#[inline]
pub(crate) fn leftmost_min<K: Ord>(keys: impl IntoIterator<Item = K>) -> Option<(usize, K)> {
    let mut best: Option<(usize, K)> = None;
    for (i, key) in keys.into_iter().enumerate() {
        match &best {
            Some((_, b)) if key >= *b => {}
            _ => best = Some((i, key)),
        }
    }
    best
}

/// The available schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    ModSampling,
    Miniception,
    RotationalAlt,
    RotationalOrig,
    Decycling,
    DoubleDecycling,
}

impl SchemeKind {
    pub const ALL: [SchemeKind; 6] = [
        SchemeKind::ModSampling,
        SchemeKind::Miniception,
        SchemeKind::RotationalAlt,
        SchemeKind::RotationalOrig,
        SchemeKind::Decycling,
        SchemeKind::DoubleDecycling,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SchemeKind::ModSampling => mod_sampling::NAME,
            SchemeKind::Miniception => miniception::NAME,
            SchemeKind::RotationalAlt => rotational::ALT_NAME,
            SchemeKind::RotationalOrig => rotational::ORIG_NAME,
            SchemeKind::Decycling => decycling::NAME,
            SchemeKind::DoubleDecycling => decycling::DOUBLE_NAME,
        }
    }

    /// Whether the scheme reads the anchor length `t`.
    pub fn uses_t(self) -> bool {
        matches!(self, SchemeKind::ModSampling | SchemeKind::Miniception)
    }

    /// Build this scheme over hasher `H`.
    pub fn build<H>(self, params: SchemeParams) -> Result<Box<dyn Scheme>>
    where
        H: KmerHasher + 'static,
    {
        let scheme: Box<dyn Scheme> = match self {
            SchemeKind::ModSampling => Box::new(ModSampling::<H>::new(params)?),
            SchemeKind::Miniception => Box::new(Miniception::<H>::new(params)?),
            SchemeKind::RotationalAlt => Box::new(RotationalAlt::<H>::new(params)?),
            SchemeKind::RotationalOrig => Box::new(RotationalOrig::<H>::new(params)?),
            SchemeKind::Decycling => Box::new(Decycling::<H>::new(params)?),
            SchemeKind::DoubleDecycling => Box::new(DoubleDecycling::<H>::new(params)?),
        };
        log::debug!(
            "Built {} (w={}, k={}, t={}, seed={})",
            scheme.name(),
            scheme.params().w,
            scheme.params().k,
            scheme.params().t,
            scheme.params().seed
        );
        Ok(scheme)
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeKind {
    type Err = MinimizerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SchemeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| MinimizerError::config(format!("unknown scheme name '{}'", s)))
    }
}

/// Build a scheme, choosing both the scheme and its hasher at run time.
pub fn build_scheme(
    kind: SchemeKind,
    hasher: HasherKind,
    params: SchemeParams,
) -> Result<Box<dyn Scheme>> {
    match hasher {
        HasherKind::Murmur64 => kind.build::<Murmur64>(params),
        HasherKind::Murmur128 => kind.build::<Murmur128>(params),
        HasherKind::Fx => kind.build::<FxKeyHasher>(params),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_names_round_trip() {
        for kind in SchemeKind::ALL {
            assert_eq!(kind.name().parse::<SchemeKind>().unwrap(), kind);
        }
        let err = "lexicographic".parse::<SchemeKind>().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_stable_names() {
        let names: Vec<&str> = SchemeKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            [
                "mod_sampling",
                "miniception",
                "rotational_alt",
                "rotational_orig",
                "decycling",
                "double_decycling"
            ]
        );
    }

    #[test]
    fn test_validate_rejects_small_w() {
        assert!(SchemeParams::new(1, 5, 2, 0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_t_above_k() {
        assert!(SchemeParams::new(4, 5, 6, 0).validate().is_err());
        assert!(SchemeParams::new(4, 5, 0, 0).validate().is_err());
        assert!(SchemeParams::new(4, 5, 5, 0).validate().is_ok());
    }

    #[test]
    fn test_check_window_length() {
        let params = SchemeParams::new(4, 5, 2, 0);
        assert_eq!(params.window_len(), 8);
        assert!(params.check_window(b"AACGTACG").is_ok());
        match params.check_window(b"AACG") {
            Err(MinimizerError::OutOfRange { limit, actual, .. }) => {
                assert_eq!(limit, 8);
                assert_eq!(actual, 4);
            }
            other => panic!("expected OutOfRange, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_leftmost_min() {
        assert_eq!(leftmost_min([3, 1, 2, 1]), Some((1, 1)));
        assert_eq!(leftmost_min(Vec::<u8>::new()), None);
    }

    #[test]
    fn test_build_every_scheme_with_every_hasher() {
        let params = SchemeParams::new(4, 8, 3, 0);
        for kind in SchemeKind::ALL {
            for hasher in HasherKind::ALL {
                let scheme = build_scheme(kind, hasher, params.clone()).unwrap();
                assert_eq!(scheme.name(), kind.name());
                assert_eq!(scheme.params().w, 4);
            }
        }
    }
}
