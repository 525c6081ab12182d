//! The `Dictionary` type: owns both tables and the string arena, and is the
//! crate's single public entry point (`spec.md` §3, §5, §6).
//!
//! Single-writer during [`Dictionary::load`] (enforced by `&mut self` —
//! Rust's borrow checker makes it impossible to call `lookup` concurrently
//! with `load` on the same value), multi-reader after: [`Dictionary::lookup`]
//! takes `&self` and serializes access to its reusable scratch buffers
//! through an internal `Mutex`, exactly matching the concurrency contract in
//! `spec.md` §5.

use std::sync::Mutex;

use crate::arena::StringArena;
use crate::builder::{self, LoadStats, Record};
use crate::delete_index::DeleteIndex;
use crate::deletes::generate_deletes;
use crate::error::SymSpellError;
use crate::exact_table::ExactMatchTable;
use crate::limits::{delete_table_size, EXACT_MATCH_TABLE_SIZE, MAX_EDIT_DISTANCE_CAP};
use crate::lookup::{self, LookupScratch, RankingPolicy, Suggestion};

/// Size budget for the string arena, scaled from the dictionary's configured
/// distance/prefix the same way the C reference's fixed 128MB arenas were
/// sized for its target dictionary (`spec.md` §9) — but computed instead of
/// hardcoded, since this crate targets a range of dictionary sizes (`spec.md`
/// §1, "10^5-10^6 entries") rather than one fixed corpus.
fn string_arena_capacity(max_edit_distance: u8) -> usize {
    match max_edit_distance {
        1 => 64 * 1024 * 1024,
        2 => 256 * 1024 * 1024,
        _ => 512 * 1024 * 1024,
    }
}

/// Reusable scratch for [`Dictionary::insert_record`], allocated once per
/// [`Dictionary::load`] call instead of once per record.
struct BuildScratch {
    deletes: Vec<String>,
    seen: crate::string_set::StringSet,
}

impl BuildScratch {
    fn new() -> Self {
        Self {
            deletes: Vec::new(),
            seen: crate::string_set::StringSet::new(),
        }
    }
}

/// `(word_count, entry_count)` per `spec.md` §6 `get_stats`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictionaryStats {
    pub word_count: usize,
    pub entry_count: usize,
}

/// A loaded (or loading) SymSpell index.
pub struct Dictionary {
    max_edit_distance: u8,
    prefix_length: u8,
    exact_table: ExactMatchTable,
    delete_index: DeleteIndex,
    string_arena: StringArena,
    word_count: usize,
    max_freq: u64,
    scratch: Mutex<LookupScratch>,
}

impl Dictionary {
    /// Creates an empty dictionary. `max_edit_distance` must be in `1..=3`,
    /// `prefix_length` must be greater than 0 (`spec.md` §6).
    pub fn create(max_edit_distance: u8, prefix_length: u8) -> Result<Self, SymSpellError> {
        if max_edit_distance < 1 || max_edit_distance > MAX_EDIT_DISTANCE_CAP {
            return Err(SymSpellError::InvalidMaxEditDistance(max_edit_distance));
        }
        if prefix_length == 0 {
            return Err(SymSpellError::InvalidPrefixLength);
        }

        Ok(Self {
            max_edit_distance,
            prefix_length,
            exact_table: ExactMatchTable::new(EXACT_MATCH_TABLE_SIZE),
            delete_index: DeleteIndex::new(delete_table_size(max_edit_distance)),
            string_arena: StringArena::with_capacity(string_arena_capacity(max_edit_distance)),
            word_count: 0,
            max_freq: 0,
            scratch: Mutex::new(LookupScratch::new()),
        })
    }

    /// Loads records from a stream of raw text lines, per `spec.md` §6:
    /// whitespace-split fields, `term_index`/`count_index` select the
    /// columns, terms are lowercased defensively, `0` frequency becomes `1`.
    ///
    /// Malformed lines are logged and skipped; arena or table exhaustion is
    /// fatal and aborts the build immediately (`spec.md` §7).
    pub fn load<I: IntoIterator<Item = String>>(
        &mut self,
        lines: I,
        term_index: usize,
        count_index: usize,
    ) -> Result<LoadStats, SymSpellError> {
        let mut stats = LoadStats::default();
        let mut scratch = BuildScratch::new();

        for line in lines {
            let Some(record) = builder::parse_record(&line, term_index, count_index) else {
                log::warn!("skipping malformed dictionary line: {line:?}");
                stats.records_skipped += 1;
                continue;
            };

            if let Err(err) = self.insert_record(&record, &mut scratch) {
                builder::log_fatal_build_error(&err);
                return Err(err);
            }

            stats.records_loaded += 1;
            builder::report_load_factor(
                stats.records_loaded,
                self.delete_index.occupied(),
                delete_table_size(self.max_edit_distance),
            );
        }

        self.exact_table.finalize(self.max_freq);
        Ok(stats)
    }

    fn insert_record(&mut self, record: &Record, scratch: &mut BuildScratch) -> Result<(), SymSpellError> {
        let is_new = self.exact_table.insert(&record.term, record.freq)?;
        // Open Question #1 resolution (`spec.md` §9): track the true
        // running maximum rather than seeding from the first record.
        self.max_freq = self.max_freq.max(record.freq);

        generate_deletes(
            &record.term,
            self.max_edit_distance,
            self.prefix_length,
            &mut scratch.deletes,
            &mut scratch.seen,
        );

        for variant in &scratch.deletes {
            self.delete_index.add(&mut self.string_arena, variant, &record.term, record.freq)?;
        }

        // `word_count` is "unique exact entries" (`spec.md` §3); a repeated
        // record merges into the existing slot instead of growing the count
        // (invariant 6, idempotence).
        if is_new {
            self.word_count += 1;
        }
        Ok(())
    }

    /// Looks up `query`, returning up to `k` suggestions ranked per `policy`
    /// (`spec.md` §4.6). `max_edit_distance_lookup` is clamped to this
    /// dictionary's own `max_edit_distance`, and further clamped for short
    /// queries (`spec.md` §9 item 3).
    pub fn lookup(
        &self,
        query: &str,
        max_edit_distance_lookup: u8,
        k: usize,
        policy: RankingPolicy,
    ) -> Vec<Suggestion> {
        if query.is_empty() || query.len() >= crate::limits::MAX_TERM_LENGTH {
            return Vec::new();
        }
        let query = query.to_lowercase();

        let mut scratch = self.scratch.lock().expect("lookup scratch mutex poisoned");
        lookup::lookup(
            &query,
            max_edit_distance_lookup,
            self.max_edit_distance,
            self.prefix_length,
            k,
            policy,
            &self.exact_table,
            &self.delete_index,
            &self.string_arena,
            &mut scratch,
        )
    }

    /// Returns the probability of the word with the given hash, or `0.0` on
    /// a miss (`spec.md` §6 `get_probability`).
    pub fn get_probability(&self, word_hash: u64) -> f32 {
        self.exact_table.lookup_hash(word_hash).map(|(_, prob, _)| prob).unwrap_or(0.0)
    }

    /// Returns the IWF of `word`, or `0.0` on a miss (`spec.md` §6 `get_iwf`).
    pub fn get_iwf(&self, word: &str) -> f32 {
        self.exact_table.lookup_term(&word.to_lowercase()).map(|(_, _, iwf)| iwf).unwrap_or(0.0)
    }

    /// Returns `(word_count, entry_count)` (`spec.md` §6 `get_stats`).
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            word_count: self.word_count,
            entry_count: self.delete_index.occupied(),
        }
    }

    pub fn max_edit_distance(&self) -> u8 {
        self.max_edit_distance
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// Bytes used / reserved in the string arena, exposed for diagnostics
    /// (not part of `spec.md`'s core contract, but useful for callers sizing
    /// their own dictionaries).
    pub fn arena_usage(&self) -> (usize, usize) {
        (self.string_arena.used(), self.string_arena.capacity())
    }
}

// No explicit `destroy()` — `Drop` (the implicit one, since every field owns
// plain Rust collections) is the Rust realization of `spec.md` §6's
// `destroy(dictionary)` scoped release. Dropping the arena's `Vec<u8>` is a
// single deallocation; the delete index's per-bucket `Vec`s free themselves
// individually, trading the reference's literal O(1)-per-bucket-list teardown
// for ordinary, safe `Vec` drop semantics (see `DESIGN.md`).
