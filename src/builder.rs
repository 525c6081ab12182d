//! Dictionary builder (`spec.md` §4.7).
//!
//! Consumes a stream of already-split text lines (the file-reading
//! collaborator lives in [`crate::io`]), extracts the term/frequency columns
//! per `term_index`/`count_index` (`spec.md` §6 — this column semantics is
//! specified at the engine level even though raw file I/O is out of scope),
//! lowercases defensively, and populates the exact-match table and delete
//! index. Malformed lines are logged and skipped; arena/table exhaustion is
//! fatal and aborts the build.

use crate::error::SymSpellError;
use crate::limits::HASH_TABLE_LOAD_WARNING_THRESHOLD;

/// One parsed `(term, frequency)` record.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub term: String,
    pub freq: u64,
}

/// Outcome of a [`crate::Dictionary::load`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub records_loaded: usize,
    pub records_skipped: usize,
}

/// Splits `line` on whitespace and extracts the term/frequency columns.
/// Returns `None` for lines with too few columns or a non-numeric count
/// (malformed-record case, `spec.md` §7 — caller logs and skips).
pub(crate) fn parse_record(line: &str, term_index: usize, count_index: usize) -> Option<Record> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let needed = term_index.max(count_index) + 1;
    if parts.len() < needed {
        return None;
    }
    let term = parts[term_index].to_lowercase();
    if term.is_empty() {
        return None;
    }
    let freq: u64 = parts[count_index].parse().ok()?;
    Some(Record {
        term,
        freq: if freq == 0 { 1 } else { freq },
    })
}

/// Tracks and reports the delete-index load factor every 1000 records
/// loaded, warning once it crosses [`HASH_TABLE_LOAD_WARNING_THRESHOLD`]
/// (`spec.md` §4.7 supplemented from `original_source/src/symspell.c`).
pub(crate) fn report_load_factor(records_loaded: usize, entry_count: usize, table_size: usize) {
    if records_loaded == 0 || records_loaded % 1000 != 0 {
        return;
    }
    let load_factor = entry_count as f64 / table_size as f64;
    log::info!(
        "loaded {records_loaded} records, {entry_count} delete entries ({:.1}% full)",
        load_factor * 100.0
    );
    if load_factor > HASH_TABLE_LOAD_WARNING_THRESHOLD {
        log::warn!("delete index is {:.1}% full", load_factor * 100.0);
    }
}

/// Wraps a build-time fatal condition in a uniform log line before the error
/// propagates, matching the diagnostic style of
/// `original_source/src/symspell.c`'s arena-exhaustion report.
pub(crate) fn log_fatal_build_error(err: &SymSpellError) {
    log::error!("dictionary build aborted: {err}");
}
