//! Named constants for every fixed size and threshold in the engine.
//!
//! Mirrors the constants section at the top of the C reference
//! (`original_source/src/symspell.c`): table sizes are primes chosen to keep
//! load factor under 50% for the dictionary sizes the engine targets, and
//! every other number that shows up more than once gets a name here instead
//! of being typed twice.

/// Maximum supported edit distance.
pub const MAX_EDIT_DISTANCE_CAP: u8 = 3;

/// Longest term the engine will index or look up; longer inputs are treated
/// as non-matchable rather than rejected.
pub const MAX_TERM_LENGTH: usize = 127;

/// Delete-variant hash table size for `max_edit_distance == 1`.
pub const TABLE_SIZE_D1: usize = 524_287;
/// Delete-variant hash table size for `max_edit_distance == 2`.
pub const TABLE_SIZE_D2: usize = 4_194_301;
/// Delete-variant hash table size for `max_edit_distance == 3`.
pub const TABLE_SIZE_D3: usize = 33_554_393;

/// Exact-match table size, sized for up to ~250k words at 50% load.
pub const EXACT_MATCH_TABLE_SIZE: usize = 524_287;

/// Initial word-list capacity for a freshly created delete bucket.
pub const INITIAL_ENTRY_CAPACITY: usize = 4;

/// Bound on the BFS queue used by the delete-variant generator. For the
/// supported parameter range (prefix <= 7, d <= 3) this is never reached;
/// if it is, the generator truncates and logs a warning rather than
/// silently dropping variants.
pub const DELETE_QUEUE_CAPACITY: usize = 10_000;

/// Bound on candidates gathered per lookup before verification/ranking.
pub const MAX_CANDIDATES_PER_LOOKUP: usize = 10_000;

/// Fixed capacity of the delete-variant generator's dedup
/// [`crate::string_set::StringSet`], sized comfortably above
/// [`DELETE_QUEUE_CAPACITY`] so a single word's variants never approach its
/// load factor.
pub const DEDUP_SET_SIZE: usize = 16_411;

/// Delete-index load factor at which a warning is logged during build.
pub const HASH_TABLE_LOAD_WARNING_THRESHOLD: f64 = 0.75;

/// Sentinel IWF value for a word with zero or unknown probability.
pub const IWF_UNKNOWN_SENTINEL: f32 = 99.0;

/// Query length at or below which the short-word heuristic clamps the
/// effective edit distance down to [`SHORT_WORD_MAX_DISTANCE`]. Cheap guard
/// against runaway candidate counts for very short queries; documented here
/// (rather than left as an inline magic number) per the note in `spec.md` §9
/// that this clamp is correctness-affecting and must be visible.
pub const SHORT_WORD_THRESHOLD: usize = 4;

/// Effective edit distance used for queries at or below
/// [`SHORT_WORD_THRESHOLD`].
pub const SHORT_WORD_MAX_DISTANCE: u8 = 1;

/// Returns the delete-index table size for a given `max_edit_distance`.
///
/// Panics if `max_edit_distance` is outside `1..=MAX_EDIT_DISTANCE_CAP`;
/// callers are expected to have already validated the distance via
/// [`crate::error::SymSpellError`] at `Dictionary::create` time.
pub(crate) const fn delete_table_size(max_edit_distance: u8) -> usize {
    match max_edit_distance {
        1 => TABLE_SIZE_D1,
        2 => TABLE_SIZE_D2,
        3 => TABLE_SIZE_D3,
        _ => panic!("max_edit_distance must be validated before this is called"),
    }
}
