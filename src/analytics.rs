//! Density analytics for selection schemes.
//!
//! Density is the fraction of k-mer positions of a sequence that are selected
//! by at least one window. Any forward scheme has density at least `1/w`.

use rustc_hash::FxHashSet;

use crate::error::{MinimizerError, Result};
use crate::schemes::{miniception, mod_sampling, Scheme};

/// Excess density over `lower_bound`, in percent.
#[inline]
pub fn redundancy_in_density_in_perc(density: f64, lower_bound: f64) -> f64 {
    (density / lower_bound - 1.0) * 100.0
}

/// Density as a multiple of `lower_bound`.
#[inline]
pub fn redundancy_in_density_as_factor(density: f64, lower_bound: f64) -> f64 {
    density / lower_bound
}

/// Whether mod-sampling with these parameters can select backwards.
///
/// Requires `w >= 2` and `t <= k`.
#[inline]
pub fn is_not_forward(k: usize, w: usize, t: usize) -> bool {
    debug_assert!(w >= 2 && t <= k);
    (w + k - t - 1) % w < w - 2
}

/// Expected density of `scheme` from its closed form.
///
/// Only `miniception` and `mod_sampling` have one.
pub fn closed_form_density(scheme: &str, k: usize, w: usize, t: usize) -> Result<f64> {
    if w < 2 || t == 0 || t > k {
        return Err(MinimizerError::config(format!(
            "closed form needs w >= 2 and 1 <= t <= k (w={}, k={}, t={})",
            w, k, t
        )));
    }
    if scheme == miniception::NAME {
        return Ok(1.67 / w as f64);
    }
    if scheme == mod_sampling::NAME {
        let (k, w, t) = (k as f64, w as f64, t as f64);
        // May be negative when t = k, hence floating point throughout.
        let steps = (1.0 + (k - t - 1.0) / w).floor();
        let anchored = (w + k - 1.0 - t) % w == w - 1.0;
        let correction = if anchored { 0.0 } else { steps / (w + k - t) };
        return Ok((steps + 2.0 - correction) / (w + k - t + 1.0));
    }
    Err(MinimizerError::config(format!(
        "no closed-form density for scheme '{}'",
        scheme
    )))
}

/// Outcome of scanning a sequence with one scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityReport {
    pub scheme: &'static str,
    pub num_windows: usize,
    /// Distinct absolute k-mer positions selected.
    pub num_sampled: usize,
    pub density: f64,
    /// `1 / w`.
    pub lower_bound: f64,
    /// No window selected a position left of the previous selection.
    pub is_forward: bool,
}

impl DensityReport {
    pub fn redundancy_factor(&self) -> f64 {
        redundancy_in_density_as_factor(self.density, self.lower_bound)
    }

    pub fn redundancy_perc(&self) -> f64 {
        redundancy_in_density_in_perc(self.density, self.lower_bound)
    }
}

/// Stream every window of `sequence` through `scheme` and measure density.
///
/// With `check`, every streaming result is compared against
/// [`Scheme::sample`] on the same window.
pub fn measure_density(
    scheme: &mut dyn Scheme,
    sequence: &[u8],
    check: bool,
) -> Result<DensityReport> {
    let params = scheme.params().clone();
    let l = params.window_len();
    if sequence.len() < l {
        return Err(MinimizerError::out_of_range(
            "sequence length",
            l,
            sequence.len(),
        ));
    }

    let (w, k, t) = (params.w, params.k, params.t);
    if scheme.name() == mod_sampling::NAME && is_not_forward(k, w, t) {
        log::warn!(
            "{} with w={}, k={}, t={} is not forward; density may exceed the closed form",
            scheme.name(),
            w,
            k,
            t
        );
    }

    let num_windows = sequence.len() - l + 1;
    let num_kmers = sequence.len() - k + 1;
    let mut sampled: FxHashSet<usize> = FxHashSet::default();
    let mut last: Option<usize> = None;
    let mut is_forward = true;

    for i in 0..num_windows {
        let window = &sequence[i..i + l];
        let p = scheme.sample_stream(window, i == 0)?;
        if check {
            let expected = scheme.sample(window)?;
            if p != expected {
                return Err(MinimizerError::invariant(
                    scheme.name(),
                    format!(
                        "streaming selected {} but batch selected {} at window {}",
                        p, expected, i
                    ),
                ));
            }
        }
        debug_assert!(p < w);
        let pos = i + p;
        if last.is_some_and(|prev| pos < prev) {
            is_forward = false;
        }
        last = Some(pos);
        sampled.insert(pos);
    }

    let num_sampled = sampled.len();
    let density = num_sampled as f64 / num_kmers as f64;
    log::info!(
        "{}: {} windows, {} sampled, density {:.5}",
        scheme.name(),
        num_windows,
        num_sampled,
        density
    );

    Ok(DensityReport {
        scheme: scheme.name(),
        num_windows,
        num_sampled,
        density,
        lower_bound: 1.0 / w as f64,
        is_forward,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hasher::HasherKind;
    use crate::schemes::{build_scheme, SchemeKind, SchemeParams};

    #[test]
    fn test_redundancy() {
        assert!((redundancy_in_density_in_perc(0.15, 0.1) - 50.0).abs() < 1e-9);
        assert!((redundancy_in_density_as_factor(0.15, 0.1) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_is_not_forward() {
        // (w + k - t - 1) % w: (10 + 21 - 11 - 1) % 10 = 9, not < 8.
        assert!(!is_not_forward(21, 10, 11));
        // (10 + 21 - 16 - 1) % 10 = 4 < 8.
        assert!(is_not_forward(21, 10, 16));
        // w = 2 is always forward.
        assert!(!is_not_forward(5, 2, 3));
    }

    #[test]
    fn test_closed_form_miniception() {
        let d = closed_form_density("miniception", 21, 10, 11).unwrap();
        assert!((d - 0.167).abs() < 1e-12);
    }

    #[test]
    fn test_closed_form_mod_sampling() {
        // k=21, w=10, t=11: (10+21-1-11) % 10 = 9 = w-1, no correction.
        // floor(1 + 9/10) = 1, so (1 + 2) / (10 + 21 - 11 + 1) = 3/21.
        let d = closed_form_density("mod_sampling", 21, 10, 11).unwrap();
        assert!((d - 3.0 / 21.0).abs() < 1e-12);

        // k=21, w=10, t=5: (10+21-1-5) % 10 = 5, corrected.
        // correction = floor(1 + 15/10) / 26 = 2/26; floor(1 + 15/10) = 2.
        let d = closed_form_density("mod_sampling", 21, 10, 5).unwrap();
        let expected = (2.0 + 2.0 - 2.0 / 26.0) / 27.0;
        assert!((d - expected).abs() < 1e-12);
    }

    #[test]
    fn test_closed_form_unknown_scheme() {
        let err = closed_form_density("decycling", 21, 10, 21).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_measure_density_bounds() {
        let seq: Vec<u8> = b"ACGTTGCAAGGCTTACGATCGATCGGATCCATGCA".repeat(8);
        let params = SchemeParams::new(5, 7, 4, 0);
        let mut scheme =
            build_scheme(SchemeKind::ModSampling, HasherKind::Murmur64, params).unwrap();
        let report = measure_density(scheme.as_mut(), &seq, true).unwrap();
        assert_eq!(report.num_windows, seq.len() - 11 + 1);
        assert!(report.num_sampled >= 1);
        assert!(report.density >= 1.0 / (seq.len() - 7 + 1) as f64);
        assert!(report.density <= 1.0);
        assert!((report.lower_bound - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_measure_density_short_sequence() {
        let mut scheme = build_scheme(
            SchemeKind::Decycling,
            HasherKind::Murmur64,
            SchemeParams::new(5, 7, 7, 0),
        )
        .unwrap();
        assert!(matches!(
            measure_density(scheme.as_mut(), b"ACGT", false),
            Err(MinimizerError::OutOfRange { .. })
        ));
    }
}
