//! Building blocks shared by the selection schemes:
//! - Array-backed ring buffer for the monotonic deque
//! - Sliding-window minimum enumerator
//! - k-mer hashers
//! - Fast modular reduction
//! - Symbol rank tables

pub mod encoding;
pub mod enumerator;
pub mod fastmod;
pub mod hasher;
pub mod ring_buffer;

pub use encoding::SymbolRemap;
pub use enumerator::Enumerator;
pub use fastmod::FastMod;
pub use hasher::{murmurhash2_64, FxKeyHasher, HasherKind, KmerHasher, Murmur128, Murmur64};
pub use ring_buffer::RingBuffer;
