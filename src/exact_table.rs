//! Exact-match table (`spec.md` §4.2): open-addressed, 64-bit-hash-keyed,
//! fixed prime size, linear probing. Hash-only equality — two words that
//! hash identically are treated as the same word (`spec.md` §9 accepts this
//! as a ~2^-64-per-pair risk with XXH3-64 at dictionary scale).

use crate::error::SymSpellError;
use crate::hash::hash_bytes;
use crate::limits::IWF_UNKNOWN_SENTINEL;

/// Sentinel hash marking an empty slot. A real word hashing to exactly zero
/// would alias an empty slot; accepted as negligible-probability risk per
/// `spec.md` §9.
const EMPTY_HASH: u64 = 0;

pub(crate) struct ExactMatchTable {
    hashes: Vec<u64>,
    freqs: Vec<u64>,
    probs: Vec<f32>,
    iwfs: Vec<f32>,
    size: usize,
    occupied: usize,
}

impl ExactMatchTable {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            hashes: vec![EMPTY_HASH; size],
            freqs: vec![0; size],
            probs: vec![0.0; size],
            iwfs: vec![0.0; size],
            size,
            occupied: 0,
        }
    }

    /// Inserts `term` with `freq`, or raises the stored frequency to
    /// `max(existing, freq)` on a hash match. Fails if linear probing wraps
    /// the whole table without finding a slot. Returns `true` if this was a
    /// new slot, `false` if an existing entry was merged.
    pub(crate) fn insert(&mut self, term: &str, freq: u64) -> Result<bool, SymSpellError> {
        let hash = hash_bytes(term.as_bytes());
        let start = (hash % self.size as u64) as usize;

        for probe in 0..self.size {
            let pos = (start + probe) % self.size;
            if self.hashes[pos] == EMPTY_HASH {
                self.hashes[pos] = hash;
                self.freqs[pos] = freq;
                self.occupied += 1;
                return Ok(true);
            }
            if self.hashes[pos] == hash {
                if freq > self.freqs[pos] {
                    self.freqs[pos] = freq;
                }
                return Ok(false);
            }
        }
        Err(SymSpellError::ExactTableSaturated { size: self.size })
    }

    /// Returns `(frequency, probability, iwf)` for a hash, if occupied.
    pub(crate) fn lookup_hash(&self, hash: u64) -> Option<(u64, f32, f32)> {
        let start = (hash % self.size as u64) as usize;
        for probe in 0..self.size {
            let pos = (start + probe) % self.size;
            if self.hashes[pos] == EMPTY_HASH {
                return None;
            }
            if self.hashes[pos] == hash {
                return Some((self.freqs[pos], self.probs[pos], self.iwfs[pos]));
            }
        }
        None
    }

    pub(crate) fn lookup_term(&self, term: &str) -> Option<(u64, f32, f32)> {
        self.lookup_hash(hash_bytes(term.as_bytes()))
    }

    /// Sets `prob := freq / max_freq`, `iwf := |-ln(prob)|` (or the sentinel)
    /// for every occupied slot. Called once after the record stream ends.
    pub(crate) fn finalize(&mut self, max_freq: u64) {
        let max_freq = max_freq.max(1) as f32;
        for i in 0..self.size {
            if self.hashes[i] != EMPTY_HASH {
                let prob = self.freqs[i] as f32 / max_freq;
                self.probs[i] = prob;
                self.iwfs[i] = if prob > 0.0 {
                    (-prob.ln()).abs()
                } else {
                    IWF_UNKNOWN_SENTINEL
                };
            }
        }
    }

    pub(crate) fn occupied(&self) -> usize {
        self.occupied
    }
}
