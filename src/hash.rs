//! Fast 64-bit keyed hash of byte strings (`spec.md` §4.1).
//!
//! Backed by `xxhash-rust`'s XXH3-64 with the canonical default secret,
//! same algorithm the C reference (`original_source/include/xxh3.h`) vendors
//! by hand. Deterministic, endian-independent, sub-100ns for short keys.
//!
//! A zero hash for a non-empty input is a theoretical risk (probability
//! ~2^-64 per word) that the exact-match table's empty-slot sentinel relies
//! on not happening; see `spec.md` §9 and `exact_table.rs`.

/// Hashes `bytes` with XXH3-64.
#[inline]
pub(crate) fn hash_bytes(bytes: &[u8]) -> u64 {
    xxhash_rust::xxh3::xxh3_64(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_across_calls() {
        assert_eq!(hash_bytes(b"hello"), hash_bytes(b"hello"));
    }

    #[test]
    fn distinguishes_different_inputs() {
        assert_ne!(hash_bytes(b"hello"), hash_bytes(b"hella"));
    }

    #[test]
    fn empty_input_is_stable() {
        assert_eq!(hash_bytes(b""), hash_bytes(b""));
    }
}
