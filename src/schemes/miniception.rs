//! Miniception.
//!
//! A `k`-mer is *charged* when the smallest of its `w0 + 1 = k - t + 1`
//! inner `t`-mers is its first or its last one. The selected `k`-mer is the
//! leftmost smallest among the charged `k`-mers of the window. Uncharged
//! `k`-mers still occupy a position in the outer enumerator, they are just
//! never candidates.

use std::marker::PhantomData;

use super::{Scheme, SchemeParams};
use crate::core::enumerator::Enumerator;
use crate::core::hasher::KmerHasher;
use crate::error::{MinimizerError, Result};

pub const NAME: &str = "miniception";

pub struct Miniception<H: KmerHasher> {
    params: SchemeParams,
    /// Inner window: `k - t`.
    w0: usize,
    tmers: Enumerator<H::Key>,
    kmers: Enumerator<H::Key>,
    _hasher: PhantomData<fn() -> H>,
}

impl<H: KmerHasher> Miniception<H> {
    pub fn new(params: SchemeParams) -> Result<Self> {
        params.validate()?;
        let w0 = params.k - params.t;
        Ok(Self {
            w0,
            tmers: Enumerator::new(w0 + 1),
            kmers: Enumerator::new(params.w),
            params,
            _hasher: PhantomData,
        })
    }

    #[inline]
    fn hash(&self, bytes: &[u8]) -> H::Key {
        H::hash(bytes, self.params.w, self.params.seed)
    }

    /// Feed the t-mers of the k-mer at `i` that `tmers` has not seen yet, and
    /// report whether that k-mer is charged.
    ///
    /// With `clear`, all `w0 + 1` t-mers are fed into a fresh enumerator;
    /// otherwise only the last one, which assumes the k-mer at `i - 1` was
    /// processed just before.
    fn is_charged(
        params: &SchemeParams,
        w0: usize,
        tmers: &mut Enumerator<H::Key>,
        window: &[u8],
        i: usize,
        clear: bool,
    ) -> Result<bool> {
        let t = params.t;
        let first = if clear { 0 } else { w0 };
        for j in first..=w0 {
            let key = H::hash(&window[i + j..i + j + t], params.w, params.seed);
            tmers.feed(key, clear && j == 0);
        }
        let p = tmers
            .query()
            .ok_or_else(|| MinimizerError::out_of_range("live t-mers in enumerator", w0 + 1, 0))?;
        debug_assert!(p <= w0);
        Ok(p == 0 || p == w0)
    }

    fn no_charged_kmer(&self) -> MinimizerError {
        MinimizerError::invariant(
            NAME,
            format!(
                "no charged k-mer in window (w={}, k={}, t={})",
                self.params.w, self.params.k, self.params.t
            ),
        )
    }
}

impl<H: KmerHasher> Scheme for Miniception<H> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn params(&self) -> &SchemeParams {
        &self.params
    }

    fn sample(&self, window: &[u8]) -> Result<usize> {
        self.params.check_window(window)?;
        let k = self.params.k;
        let mut tmers = Enumerator::new(self.w0 + 1);
        let mut best: Option<(H::Key, usize)> = None;
        for i in 0..self.params.w {
            if !Self::is_charged(&self.params, self.w0, &mut tmers, window, i, i == 0)? {
                continue;
            }
            let key = self.hash(&window[i..i + k]);
            if best.map_or(true, |(b, _)| key < b) {
                best = Some((key, i));
            }
        }
        best.map(|(_, p)| p).ok_or_else(|| self.no_charged_kmer())
    }

    fn sample_stream(&mut self, window: &[u8], reset: bool) -> Result<usize> {
        self.params.check_window(window)?;
        let w = self.params.w;
        let k = self.params.k;
        if reset {
            self.kmers.clear();
        }
        let first = if reset { 0 } else { w - 1 };
        for i in first..w {
            let clear = reset && i == 0;
            if Self::is_charged(&self.params, self.w0, &mut self.tmers, window, i, clear)? {
                let key = self.hash(&window[i..i + k]);
                self.kmers.feed(key, false);
            } else {
                self.kmers.skip();
            }
        }
        self.kmers.query().ok_or_else(|| self.no_charged_kmer())
    }
}
