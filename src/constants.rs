//! Constants used throughout the minimizers library for scheme defaults,
//! alphabet handling, and sequence generation.
//!
//! Centralizing these constants ensures consistency across the codebase and makes
//! it easy to adjust values when needed.

// ============================================================================
// Alphabet
// ============================================================================

/// Nucleotide alphabet used for random sequence generation.
pub const DNA_ALPHABET: &[u8; 4] = b"ACGT";

/// Size of the nucleotide alphabet ranked by the rotational restricted-set
/// test. Unless set explicitly, the test's tolerance is this size minus one.
pub const DEFAULT_ALPHABET_SIZE: u64 = 4;

// ============================================================================
// Hashing
// ============================================================================

/// Default seed for substring hashing.
pub const DEFAULT_SEED: u64 = 0;

// ============================================================================
// Sequence Generation
// ============================================================================

/// Default length of random sequences used for density measurement.
pub const DEFAULT_RANDOM_LENGTH: usize = 1_000_000;

/// Default RNG seed for random sequence generation.
pub const DEFAULT_RNG_SEED: u64 = 0x5555_5555_5555_5555;

// ============================================================================
// Enumerator
// ============================================================================

/// Smallest ring buffer backing an enumerator queue.
pub(crate) const MIN_QUEUE_CAPACITY: usize = 4;

// ============================================================================
// Tests
// ============================================================================
