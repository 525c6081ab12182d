//! A Symmetric Delete (SymSpell) single-word spelling correction engine.
//!
//! Given a lowercase dictionary of `(word, frequency)` pairs and a possibly
//! misspelled query, [`Dictionary::lookup`] returns the most likely intended
//! word (or a ranked list) within a bounded edit distance, targeting
//! sub-millisecond interactive lookups against dictionaries of 10^5-10^6
//! entries.
//!
//! The index is built once via [`Dictionary::create`] and
//! [`Dictionary::load`], then used read-only; concurrent lookups on one
//! `Dictionary` are internally serialized (see the module docs on
//! [`dictionary`]). Out of scope: multi-word segmentation, sentence-level
//! correction, Unicode normalization beyond ASCII lowercasing, and mutating
//! a dictionary after it's loaded.

mod arena;
mod builder;
mod delete_index;
mod deletes;
mod dictionary;
mod distance;
mod error;
mod exact_table;
mod hash;
pub mod io;
mod limits;
mod lookup;
mod string_set;

pub use builder::{LoadStats, Record};
pub use dictionary::{Dictionary, DictionaryStats};
pub use error::SymSpellError;
pub use lookup::{RankingPolicy, Suggestion};
