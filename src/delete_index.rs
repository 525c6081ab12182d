//! Delete index (`spec.md` §4.3): open-addressed table mapping a
//! delete-variant string to a [`DeleteBucket`] of `(word, freq)` pairs.
//!
//! Unlike the exact-match table, slots here are compared by *byte* equality
//! on the variant, not hash alone — delete-variants are short and
//! adversarial-looking enough that hash collisions would pollute candidate
//! sets (`spec.md` §4.3, §9).

use crate::arena::{ArenaStr, StringArena};
use crate::error::SymSpellError;
use crate::hash::hash_bytes;
use crate::limits::INITIAL_ENTRY_CAPACITY;

/// One slot's payload: a delete-variant plus every source word that
/// produced it. Logically immutable once the dictionary finishes loading.
pub(crate) struct DeleteBucket {
    variant: ArenaStr,
    words: Vec<(ArenaStr, u64)>,
}

impl DeleteBucket {
    pub(crate) fn words<'a>(&'a self, arena: &'a StringArena) -> impl Iterator<Item = (&'a str, u64)> + 'a {
        self.words.iter().map(move |(view, freq)| (arena.resolve(*view), *freq))
    }
}

enum Slot {
    Empty,
    Occupied(u32), // index into `buckets`
}

pub(crate) struct DeleteIndex {
    slots: Vec<Slot>,
    buckets: Vec<DeleteBucket>,
    size: usize,
}

impl DeleteIndex {
    pub(crate) fn new(size: usize) -> Self {
        let mut slots = Vec::with_capacity(size);
        slots.resize_with(size, || Slot::Empty);
        Self {
            slots,
            buckets: Vec::new(),
            size,
        }
    }

    /// Adds `(word, freq)` under `variant`, creating a new bucket on first
    /// sight or merging into the existing one (raising the word's stored
    /// frequency to the max seen).
    pub(crate) fn add(
        &mut self,
        arena: &mut StringArena,
        variant: &str,
        word: &str,
        freq: u64,
    ) -> Result<(), SymSpellError> {
        let hash = hash_bytes(variant.as_bytes());
        let start = (hash % self.size as u64) as usize;

        for probe in 0..self.size {
            let pos = (start + probe) % self.size;
            match self.slots[pos] {
                Slot::Empty => {
                    let variant_view = arena.alloc(variant)?;
                    let word_view = arena.alloc(word)?;
                    let bucket_idx = self.buckets.len() as u32;
                    self.buckets.push(DeleteBucket {
                        variant: variant_view,
                        words: {
                            let mut words = Vec::with_capacity(INITIAL_ENTRY_CAPACITY);
                            words.push((word_view, freq));
                            words
                        },
                    });
                    self.slots[pos] = Slot::Occupied(bucket_idx);
                    return Ok(());
                }
                Slot::Occupied(idx) => {
                    let bucket = &self.buckets[idx as usize];
                    if arena.resolve(bucket.variant) == variant {
                        return Self::merge_word(arena, &mut self.buckets[idx as usize], word, freq);
                    }
                }
            }
        }
        Err(SymSpellError::TableSaturated { size: self.size })
    }

    fn merge_word(
        arena: &mut StringArena,
        bucket: &mut DeleteBucket,
        word: &str,
        freq: u64,
    ) -> Result<(), SymSpellError> {
        for (view, existing_freq) in bucket.words.iter_mut() {
            if arena.resolve(*view) == word {
                if freq > *existing_freq {
                    *existing_freq = freq;
                }
                return Ok(());
            }
        }
        let word_view = arena.alloc(word)?;
        bucket.words.push((word_view, freq));
        Ok(())
    }

    /// Probes for `variant`, returning its bucket on a byte-equal match.
    pub(crate) fn lookup<'a>(&'a self, arena: &StringArena, variant: &str) -> Option<&'a DeleteBucket> {
        let hash = hash_bytes(variant.as_bytes());
        let start = (hash % self.size as u64) as usize;

        for probe in 0..self.size {
            let pos = (start + probe) % self.size;
            match self.slots[pos] {
                Slot::Empty => return None,
                Slot::Occupied(idx) => {
                    let bucket = &self.buckets[idx as usize];
                    if arena.resolve(bucket.variant) == variant {
                        return Some(bucket);
                    }
                }
            }
        }
        None
    }

    pub(crate) fn occupied(&self) -> usize {
        self.buckets.len()
    }

    pub(crate) fn load_factor(&self) -> f64 {
        self.buckets.len() as f64 / self.size as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_lookup_round_trips() {
        let mut arena = StringArena::with_capacity(1024);
        let mut index = DeleteIndex::new(257);
        index.add(&mut arena, "helo", "hello", 100).unwrap();
        let bucket = index.lookup(&arena, "helo").unwrap();
        let words: Vec<_> = bucket.words(&arena).collect();
        assert_eq!(words, vec![("hello", 100)]);
    }

    #[test]
    fn merges_same_word_keeping_max_frequency() {
        let mut arena = StringArena::with_capacity(1024);
        let mut index = DeleteIndex::new(257);
        index.add(&mut arena, "helo", "hello", 100).unwrap();
        index.add(&mut arena, "helo", "hello", 500).unwrap();
        let bucket = index.lookup(&arena, "helo").unwrap();
        let words: Vec<_> = bucket.words(&arena).collect();
        assert_eq!(words, vec![("hello", 500)]);
    }

    #[test]
    fn distinct_words_share_a_bucket() {
        let mut arena = StringArena::with_capacity(1024);
        let mut index = DeleteIndex::new(257);
        index.add(&mut arena, "helo", "hello", 100).unwrap();
        index.add(&mut arena, "helo", "help", 50).unwrap();
        let bucket = index.lookup(&arena, "helo").unwrap();
        let words: Vec<_> = bucket.words(&arena).collect();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn miss_returns_none() {
        let arena = StringArena::with_capacity(64);
        let index = DeleteIndex::new(257);
        assert!(index.lookup(&arena, "nope").is_none());
    }
}
