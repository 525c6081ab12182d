//! Generic open-addressed string set (`spec.md` §2's "generic open-addressed
//! string map" component), used as the delete-variant generator's reusable
//! dedup scratch.
//!
//! Grounded on `original_source/include/hash.h`'s `ht_create`/`ht_search`:
//! fixed-capacity buckets, linear probing, hash-then-equality comparison.
//! Unlike the reference, this table has a fixed capacity chosen to comfortably
//! exceed [`DELETE_QUEUE_CAPACITY`] instead of resizing; if its probe
//! sequence ever wraps without finding a slot, the insert is reported as
//! "already seen" rather than growing, since the generator's own bounded
//! queue is the one place this kind of overflow is meant to be surfaced.

use crate::hash::hash_bytes;
use crate::limits::DEDUP_SET_SIZE;

enum Slot {
    Empty,
    Occupied(u64, String),
}

pub(crate) struct StringSet {
    slots: Vec<Slot>,
    size: usize,
}

impl StringSet {
    pub(crate) fn new() -> Self {
        let size = DEDUP_SET_SIZE;
        let mut slots = Vec::with_capacity(size);
        slots.resize_with(size, || Slot::Empty);
        Self { slots, size }
    }

    /// Resets membership without shrinking the backing allocation, so the
    /// lookup hot path can reuse one `StringSet` across calls.
    pub(crate) fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
    }

    /// Inserts `value`, returning `true` if it was not already a member.
    pub(crate) fn insert(&mut self, value: String) -> bool {
        let hash = hash_bytes(value.as_bytes());
        let start = (hash % self.size as u64) as usize;

        for probe in 0..self.size {
            let pos = (start + probe) % self.size;
            match &self.slots[pos] {
                Slot::Empty => {
                    self.slots[pos] = Slot::Occupied(hash, value);
                    return true;
                }
                Slot::Occupied(h, s) if *h == hash && *s == value => return false,
                Slot::Occupied(_, _) => continue,
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_is_novel() {
        let mut s = StringSet::new();
        assert!(s.insert("abc".to_string()));
    }

    #[test]
    fn duplicate_insert_is_not_novel() {
        let mut s = StringSet::new();
        assert!(s.insert("abc".to_string()));
        assert!(!s.insert("abc".to_string()));
    }

    #[test]
    fn distinct_values_are_independent() {
        let mut s = StringSet::new();
        assert!(s.insert("abc".to_string()));
        assert!(s.insert("abd".to_string()));
    }

    #[test]
    fn clear_resets_membership() {
        let mut s = StringSet::new();
        s.insert("abc".to_string());
        s.clear();
        assert!(s.insert("abc".to_string()));
    }

    #[test]
    fn empty_string_is_a_valid_member() {
        let mut s = StringSet::new();
        assert!(s.insert(String::new()));
        assert!(!s.insert(String::new()));
    }
}
