//! Content hashing using FxHash.
//!
//! Used to detect whether a config file changed between reloads.

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Compute one hash over several byte chunks. Chunk boundaries are significant.
pub fn compute_all<T: AsRef<[u8]>>(parts: &[T]) -> u64 {
    let mut hasher = FxHasher::default();
    for part in parts {
        let bytes = part.as_ref();
        hasher.write_usize(bytes.len());
        hasher.write(bytes);
    }
    hasher.finish()
}
