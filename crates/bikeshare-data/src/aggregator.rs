//! Frequency counting over trip columns.

use std::collections::HashMap;
use std::hash::Hash;

/// Stateless helper that groups column values and counts them.
pub struct FrequencyCounter;

impl FrequencyCounter {
    /// Count every distinct value in `values`.
    ///
    /// The result is ordered by count, highest first. Values with equal
    /// counts keep the order in which they were first seen.
    pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
    where
        K: Eq + Hash + Clone,
        I: IntoIterator<Item = K>,
    {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut counts: Vec<(K, usize)> = Vec::new();

        for value in values {
            match index.get(&value) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(value.clone(), counts.len());
                    counts.push((value, 1));
                }
            }
        }

        // Stable sort preserves first-seen order among ties.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// The most frequent value and its count, or `None` for no values.
    pub fn most_common<K, I>(values: I) -> Option<(K, usize)>
    where
        K: Eq + Hash + Clone,
        I: IntoIterator<Item = K>,
    {
        Self::value_counts(values).into_iter().next()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
