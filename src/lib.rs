//! Window fingerprint selection schemes for sequence sketching.
//!
//! A selection scheme looks at a window of `w + k - 1` symbols and picks one
//! of its `w` overlapping `k`-mers as the window's fingerprint. Six schemes are
//! provided: mod-sampling, miniception, two rotational variants and two
//! decycling-set variants. Each can evaluate a single window from scratch or
//! follow a scan one window at a time, reusing work through a sliding-window
//! minimum [`Enumerator`].
//!
//! # Example
//!
//! ```
//! use minimizers::{build_scheme, HasherKind, Scheme, SchemeKind, SchemeParams};
//!
//! let params = SchemeParams::new(4, 5, 2, 0);
//! let mut scheme = build_scheme(SchemeKind::ModSampling, HasherKind::Murmur64, params)?;
//! let seq = b"AACGTACGTTGCA";
//! for i in 0..=seq.len() - 8 {
//!     let window = &seq[i..i + 8];
//!     let p = scheme.sample_stream(window, i == 0)?;
//!     assert_eq!(p, scheme.sample(window)?);
//!     assert!(p < 4);
//! }
//! # Ok::<(), minimizers::MinimizerError>(())
//! ```

pub mod analytics;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod input;
pub mod logging;
pub mod schemes;

pub use crate::analytics::{
    closed_form_density, is_not_forward, measure_density, redundancy_in_density_as_factor,
    redundancy_in_density_in_perc, DensityReport,
};
pub use crate::core::{Enumerator, HasherKind, KmerHasher};
pub use crate::error::{MinimizerError, Result};
pub use crate::input::{random_sequence, read_sequence};
pub use crate::schemes::{
    build_scheme, Decycling, DecyclingTest, DoubleDecycling, Miniception, ModSampling,
    RotationalAlt, RotationalOrig, Scheme, SchemeKind, SchemeParams,
};
