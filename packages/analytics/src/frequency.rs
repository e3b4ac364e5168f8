//! Insertion-ordered value counter.
//!
//! Top-N selection sorts stably by descending count, so values with equal
//! counts come out in the order they were first seen. That makes every
//! ranking deterministic for a given row order.

use std::collections::BTreeMap;

use trace_report_analytics_models::CategoryCount;

/// Counts occurrences of string values, remembering first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    positions: BTreeMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `value`.
    pub fn add(&mut self, value: &str) {
        if let Some(&i) = self.positions.get(value) {
            self.entries[i].1 += 1;
        } else {
            self.positions.insert(value.to_string(), self.entries.len());
            self.entries.push((value.to_string(), 1));
        }
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for `value` (zero if never seen).
    #[must_use]
    pub fn count(&self, value: &str) -> u64 {
        self.positions.get(value).map_or(0, |&i| self.entries[i].1)
    }

    /// The `n` most frequent values, most frequent first. Ties keep
    /// first-seen order.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<CategoryCount> {
        let mut ranked: Vec<&(String, u64)> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(label, count)| CategoryCount {
                label: label.clone(),
                count: *count,
            })
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut table = Self::new();
        for value in iter {
            table.add(value);
        }
        table
    }
}
