//! Minimal file-reading collaborator (`spec.md` §1, §6).
//!
//! Deliberately thin: opening the file and producing a line stream is the
//! "external collaborator" `spec.md` §1 scopes out of the core engine. The
//! column-extraction semantics (`term_index`/`count_index`) live in
//! [`crate::builder`] because `spec.md` §6 says that semantics belongs with
//! the engine, not the file format.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::builder::LoadStats;
use crate::dictionary::Dictionary;
use crate::error::SymSpellError;

/// Opens `path` and loads every line into `dict` via [`Dictionary::load`].
/// I/O failures propagate as [`SymSpellError::Io`] (`spec.md` §7).
pub fn load_dictionary_file<P: AsRef<Path>>(
    dict: &mut Dictionary,
    path: P,
    term_index: usize,
    count_index: usize,
) -> Result<LoadStats, SymSpellError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    dict.load(lines, term_index, count_index)
}
