//! Lookup engine (`spec.md` §4.6): orchestrates the fast exact-match path,
//! delete-set generation, candidate gathering, verification and ranking.

use crate::arena::StringArena;
use crate::delete_index::DeleteIndex;
use crate::deletes::generate_deletes;
use crate::distance::bounded_distance;
use crate::exact_table::ExactMatchTable;
use crate::hash::hash_bytes;
use crate::limits::{MAX_CANDIDATES_PER_LOOKUP, SHORT_WORD_MAX_DISTANCE, SHORT_WORD_THRESHOLD};
use crate::string_set::StringSet;

/// A single spelling suggestion (`spec.md` §3 "Suggestion").
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Suggestion {
    pub term: String,
    pub distance: u32,
    pub frequency: u64,
    pub probability: f32,
    pub iwf: f32,
}

/// Ranking mode for [`crate::Dictionary::lookup`] (`spec.md` §4.6, §9 —
/// exposed as a runtime option rather than a compile-time flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingPolicy {
    /// Single pass, emits the one candidate minimizing `(distance, -frequency)`.
    SingleBest,
    /// Orders by `(distance asc, frequency desc, term asc)`, emits up to `k`.
    SortedTopK,
}

/// Reusable scratch state for the lookup hot path, guarded by the
/// dictionary's mutex (`spec.md` §5). Cleared, not reallocated, between
/// calls.
pub(crate) struct LookupScratch {
    deletes: Vec<String>,
    seen: StringSet,
    candidates: Vec<Candidate>,
}

impl LookupScratch {
    pub(crate) fn new() -> Self {
        Self {
            deletes: Vec::new(),
            seen: StringSet::new(),
            candidates: Vec::new(),
        }
    }
}

struct Candidate {
    term: String,
    distance: u32,
    frequency: u64,
}

/// Effective edit distance for a query: `min(requested, dict max)`, further
/// clamped to [`SHORT_WORD_MAX_DISTANCE`] for queries at or below
/// [`SHORT_WORD_THRESHOLD`] characters (`spec.md` §4.6, §9 item 3).
fn effective_distance(query: &str, requested: u8, dict_max: u8) -> u8 {
    let mut d_eff = requested.min(dict_max);
    if query.chars().count() <= SHORT_WORD_THRESHOLD {
        d_eff = d_eff.min(SHORT_WORD_MAX_DISTANCE);
    }
    d_eff
}

/// Runs a single lookup. `query` is assumed already lowercased by the
/// caller ([`crate::Dictionary::lookup`]).
pub(crate) fn lookup(
    query: &str,
    max_edit_distance_lookup: u8,
    dict_max_edit_distance: u8,
    prefix_length: u8,
    k: usize,
    policy: RankingPolicy,
    exact_table: &ExactMatchTable,
    delete_index: &DeleteIndex,
    arena: &StringArena,
    scratch: &mut LookupScratch,
) -> Vec<Suggestion> {
    if query.is_empty() || k == 0 {
        return Vec::new();
    }

    // Fast path: exact hit.
    let query_hash = hash_bytes(query.as_bytes());
    if let Some((freq, prob, iwf)) = exact_table.lookup_hash(query_hash) {
        return vec![Suggestion {
            term: query.to_string(),
            distance: 0,
            frequency: freq,
            probability: prob,
            iwf,
        }];
    }

    // Slow path: generate deletes, gather candidates, verify, rank.
    let d_eff = effective_distance(query, max_edit_distance_lookup, dict_max_edit_distance);

    generate_deletes(query, d_eff, prefix_length, &mut scratch.deletes, &mut scratch.seen);
    scratch.candidates.clear();

    'variants: for variant in &scratch.deletes {
        if let Some(bucket) = delete_index.lookup(arena, variant) {
            for (word, freq) in bucket.words(arena) {
                if scratch.candidates.len() >= MAX_CANDIDATES_PER_LOOKUP {
                    break 'variants;
                }
                let dist = bounded_distance(query, word, d_eff);
                if dist > d_eff as u32 {
                    continue;
                }
                if scratch.candidates.iter().any(|c| c.term == word) {
                    continue;
                }
                scratch.candidates.push(Candidate {
                    term: word.to_string(),
                    distance: dist,
                    frequency: freq,
                });
            }
        }
    }

    if scratch.candidates.is_empty() {
        return Vec::new();
    }

    match policy {
        RankingPolicy::SingleBest => {
            let mut best_idx = 0;
            for i in 1..scratch.candidates.len() {
                let (best, cur) = (&scratch.candidates[best_idx], &scratch.candidates[i]);
                if cur.distance < best.distance
                    || (cur.distance == best.distance && cur.frequency > best.frequency)
                {
                    best_idx = i;
                }
            }
            let best = &scratch.candidates[best_idx];
            let (_, prob, iwf) = exact_table.lookup_term(&best.term).unwrap_or((0, 0.0, 0.0));
            vec![Suggestion {
                term: best.term.clone(),
                distance: best.distance,
                frequency: best.frequency,
                probability: prob,
                iwf,
            }]
        }
        RankingPolicy::SortedTopK => {
            scratch.candidates.sort_by(|a, b| {
                a.distance
                    .cmp(&b.distance)
                    .then_with(|| b.frequency.cmp(&a.frequency))
                    .then_with(|| a.term.cmp(&b.term))
            });
            scratch
                .candidates
                .iter()
                .take(k)
                .map(|c| {
                    let (_, prob, iwf) = exact_table.lookup_term(&c.term).unwrap_or((0, 0.0, 0.0));
                    Suggestion {
                        term: c.term.clone(),
                        distance: c.distance,
                        frequency: c.frequency,
                        probability: prob,
                        iwf,
                    }
                })
                .collect()
        }
    }
}
