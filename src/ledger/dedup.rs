//! Duplicate splitting for received sequences

use std::collections::HashSet;

/// Split an ordered sequence of event IDs into first occurrences and
/// repeat occurrences, both preserving original relative order.
///
/// An ID occurring N times contributes one entry to the first list and
/// N-1 entries to the duplicates list. O(N) time and space.
pub fn split_duplicates(ids: &[String]) -> (Vec<String>, Vec<String>) {
    let mut seen: HashSet<&str> = HashSet::with_capacity(ids.len());
    let mut firsts = Vec::with_capacity(ids.len());
    let mut duplicates = Vec::new();

    for id in ids {
        if seen.insert(id.as_str()) {
            firsts.push(id.clone());
        } else {
            duplicates.push(id.clone());
        }
    }

    (firsts, duplicates)
}
