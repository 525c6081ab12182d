//! Error taxonomy for the engine, matching `spec.md` §7.
//!
//! Configuration errors and resource exhaustion are fatal to the instance
//! being built; I/O errors propagate from the loading collaborator;
//! malformed individual records are never represented here — they are
//! logged and skipped by the builder instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SymSpellError {
    #[error("max_edit_distance must be in 1..={}, got {0}", crate::limits::MAX_EDIT_DISTANCE_CAP)]
    InvalidMaxEditDistance(u8),

    #[error("prefix_length must be greater than 0")]
    InvalidPrefixLength,

    #[error(
        "{arena} arena exhausted: needed {needed} bytes, {used}/{capacity} already used \
         (increase the arena's reserved capacity)"
    )]
    ArenaExhausted {
        arena: &'static str,
        needed: usize,
        used: usize,
        capacity: usize,
    },

    #[error("delete index saturated: all {size} slots occupied")]
    TableSaturated { size: usize },

    #[error("exact-match table saturated: all {size} slots occupied")]
    ExactTableSaturated { size: usize },

    #[error("I/O error loading dictionary: {0}")]
    Io(#[from] std::io::Error),
}
