//! Division-free modulo by a fixed 32-bit divisor.
//!
//! Purpose: reduce selected anchor positions modulo the window size on every
//! streamed window without a hardware division.
//!
//! Algorithm (Lemire, Kaser, Kurz):
//! - Precompute `M = floor((2^64 - 1) / d) + 1` once per divisor.
//! - `a mod d = ((M * a) mod 2^64) * d >> 64` for any 32-bit `a`.
//!
//! References:
//! - https://github.com/lemire/fastmod
//! - https://arxiv.org/abs/1902.01961

/// Precomputed reciprocal for a fixed divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FastMod {
    divisor: u32,
    m: u64,
}

impl FastMod {
    /// Precompute the reciprocal of `divisor`.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub fn new(divisor: u32) -> Self {
        assert!(divisor > 0, "FastMod divisor must be positive");
        Self {
            divisor,
            m: (u64::MAX / divisor as u64).wrapping_add(1),
        }
    }

    /// Returns `a % divisor`.
    #[inline]
    pub fn reduce(&self, a: u32) -> u32 {
        let lowbits = self.m.wrapping_mul(a as u64);
        ((lowbits as u128 * self.divisor as u128) >> 64) as u32
    }
}
