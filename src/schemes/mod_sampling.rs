//! Mod-sampling.
//!
//! Find the leftmost smallest `t`-mer of the window, at position `p` among the
//! `w + k - t` candidates, and select the `k`-mer at `p mod w`. With `t < k`
//! the anchor can sit anywhere inside the selected `k`-mer, which lowers
//! density below that of a plain random minimizer.

use std::marker::PhantomData;

use super::{leftmost_min, Scheme, SchemeParams};
use crate::core::enumerator::Enumerator;
use crate::core::fastmod::FastMod;
use crate::core::hasher::KmerHasher;
use crate::error::{MinimizerError, Result};

pub const NAME: &str = "mod_sampling";

pub struct ModSampling<H: KmerHasher> {
    params: SchemeParams,
    num_tmers: usize,
    mod_w: FastMod,
    tmers: Enumerator<H::Key>,
    _hasher: PhantomData<fn() -> H>,
}

impl<H: KmerHasher> ModSampling<H> {
    pub fn new(params: SchemeParams) -> Result<Self> {
        params.validate()?;
        let num_tmers = params.w + params.k - params.t;
        Ok(Self {
            mod_w: FastMod::new(params.w as u32),
            tmers: Enumerator::new(num_tmers),
            num_tmers,
            params,
            _hasher: PhantomData,
        })
    }

    #[inline]
    fn tmer_key(&self, window: &[u8], i: usize) -> H::Key {
        H::hash(&window[i..i + self.params.t], self.params.w, self.params.seed)
    }

    #[inline]
    fn fold(&self, p: usize) -> usize {
        self.mod_w.reduce(p as u32) as usize
    }
}

impl<H: KmerHasher> Scheme for ModSampling<H> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn params(&self) -> &SchemeParams {
        &self.params
    }

    fn sample(&self, window: &[u8]) -> Result<usize> {
        self.params.check_window(window)?;
        let keys = (0..self.num_tmers).map(|i| self.tmer_key(window, i));
        let (p, _) = leftmost_min(keys).ok_or_else(|| {
            MinimizerError::out_of_range("t-mers per window", self.num_tmers, 0)
        })?;
        Ok(self.fold(p))
    }

    fn sample_stream(&mut self, window: &[u8], reset: bool) -> Result<usize> {
        self.params.check_window(window)?;
        let first = if reset { 0 } else { self.num_tmers - 1 };
        for i in first..self.num_tmers {
            let key = self.tmer_key(window, i);
            self.tmers.feed(key, reset && i == 0);
        }
        let p = self.tmers.query().ok_or_else(|| {
            MinimizerError::out_of_range("live t-mers in enumerator", self.num_tmers, 0)
        })?;
        Ok(self.fold(p))
    }
}
