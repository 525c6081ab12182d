//! Delete variant generator (`spec.md` §4.4).
//!
//! Breadth-first enumeration of unique delete-variants of a term's leading
//! `prefix_length` characters, up to `max_edit_distance` deletions. The
//! empty string is included when `prefix_length <= max_edit_distance`
//! (`spec.md` §3 invariant 5's exception, §9 "empty delete inclusion").
//!
//! The BFS queue is bounded ([`DELETE_QUEUE_CAPACITY`]); for the supported
//! parameter range (prefix <= 7, d <= 3) it's never exhausted, but overflow
//! is logged rather than silently truncated, per `spec.md` §9's instruction.

use std::collections::VecDeque;

use crate::limits::DELETE_QUEUE_CAPACITY;
use crate::string_set::StringSet;

struct QueueItem {
    s: String,
    depth: u8,
}

/// Writes the unique delete-variants of `word`'s leading `prefix_length`
/// characters (up to `max_distance` deletions) into `out`, clearing it
/// first. `seen` is a reusable scratch dedup set, cleared first as well —
/// both are caller-owned so the hot lookup path can reuse them across calls
/// without reallocating the slot arrays (`spec.md` §4.4 "reusable buffers";
/// see `DESIGN.md` for the per-element allocation this still incurs).
pub(crate) fn generate_deletes(
    word: &str,
    max_distance: u8,
    prefix_length: u8,
    out: &mut Vec<String>,
    seen: &mut StringSet,
) {
    out.clear();
    seen.clear();

    if word.is_empty() {
        return;
    }

    let prefix_len = (prefix_length as usize).min(word.chars().count());
    let prefix: String = word.chars().take(prefix_len).collect();

    if prefix.chars().count() <= max_distance as usize && seen.insert(String::new()) {
        out.push(String::new());
    }
    if seen.insert(prefix.clone()) {
        out.push(prefix.clone());
    }

    let mut queue: VecDeque<QueueItem> = VecDeque::new();
    queue.push_back(QueueItem { s: prefix, depth: 0 });

    while let Some(current) = queue.pop_front() {
        let chars: Vec<char> = current.s.chars().collect();
        if current.depth >= max_distance || chars.len() <= 1 {
            continue;
        }

        for i in 0..chars.len() {
            let mut variant = String::with_capacity(current.s.len());
            variant.extend(chars[..i].iter());
            variant.extend(chars[i + 1..].iter());

            if seen.insert(variant.clone()) {
                out.push(variant.clone());
            }

            if queue.len() < DELETE_QUEUE_CAPACITY {
                queue.push_back(QueueItem {
                    s: variant,
                    depth: current.depth + 1,
                });
            } else {
                log::warn!(
                    "delete-variant BFS queue hit its {DELETE_QUEUE_CAPACITY}-item capacity for \
                     word {word:?}; remaining variants were truncated"
                );
            }
        }
    }
}
