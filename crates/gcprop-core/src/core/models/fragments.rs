use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Occurrence counts of recognized fragments, keyed by fragment symbol.
///
/// Only positive counts are stored: adding zero is a no-op and zero entries are
/// dropped on deserialization. Keys are kept sorted, which fixes the iteration
/// order and therefore the summation order used by the aggregator.
///
/// Counts saturate at `u32::MAX`; adding past it leaves the count at the maximum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct FragmentCount {
    counts: BTreeMap<String, u32>,
}

impl FragmentCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, symbol: &str, occurrences: u32) {
        if occurrences == 0 {
            return;
        }
        let count = self.counts.entry(symbol.to_string()).or_insert(0);
        *count = count.saturating_add(occurrences);
    }

    /// Returns the count for `symbol`, zero when it was not recognized.
    pub fn get(&self, symbol: &str) -> u32 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of fragment occurrences across all symbols.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(s, &c)| (s.as_str(), c))
    }

    /// Pointwise sum of the two occurrence maps.
    pub fn merge(&mut self, other: &FragmentCount) {
        for (symbol, count) in other.iter() {
            self.add(symbol, count);
        }
    }

    pub fn merged(mut self, other: &FragmentCount) -> Self {
        self.merge(other);
        self
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for FragmentCount {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (symbol, occurrences) in iter {
            counts.add(symbol.as_ref(), occurrences);
        }
        counts
    }
}

impl From<BTreeMap<String, u32>> for FragmentCount {
    fn from(map: BTreeMap<String, u32>) -> Self {
        map.into_iter().collect()
    }
}

impl From<FragmentCount> for BTreeMap<String, u32> {
    fn from(counts: FragmentCount) -> Self {
        counts.counts
    }
}

impl std::fmt::Display for FragmentCount {
    /// Formats as `CH2:1 CH3:1 OH:1`; empty counts format as an empty string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (symbol, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", symbol, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_accumulates_repeated_symbols() {
        let mut counts = FragmentCount::new();
        counts.add("CH2", 1);
        counts.add("CH2", 2);
        assert_eq!(counts.get("CH2"), 3);
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn add_with_zero_occurrences_stores_nothing() {
        let mut counts = FragmentCount::new();
        counts.add("OH", 0);
        assert!(counts.is_empty());
        assert_eq!(counts.get("OH"), 0);
    }

    #[test]
    fn get_returns_zero_for_unknown_symbol() {
        let counts: FragmentCount = [("CH3", 2)].into_iter().collect();
        assert_eq!(counts.get("NH2"), 0);
    }

    #[test]
    fn iter_yields_symbols_in_sorted_order() {
        let counts: FragmentCount = [("OH", 1), ("CH3", 1), ("CH2", 4)].into_iter().collect();
        let symbols: Vec<_> = counts.iter().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!["CH2", "CH3", "OH"]);
    }

    #[test]
    fn merge_sums_overlapping_and_keeps_disjoint_entries() {
        let a: FragmentCount = [("CH3", 1), ("OH", 1)].into_iter().collect();
        let b: FragmentCount = [("CH3", 2), ("NH2", 1)].into_iter().collect();
        let merged = a.merged(&b);
        assert_eq!(merged.get("CH3"), 3);
        assert_eq!(merged.get("OH"), 1);
        assert_eq!(merged.get("NH2"), 1);
        assert_eq!(merged.total(), 5);
    }

    #[test]
    fn merge_saturates_instead_of_overflowing() {
        let large: FragmentCount = serde_json::from_str(r#"{"CH3":4294967295}"#).unwrap();
        let one: FragmentCount = [("CH3", 1), ("OH", 1)].into_iter().collect();
        let merged = large.merged(&one);
        assert_eq!(merged.get("CH3"), u32::MAX);
        assert_eq!(merged.get("OH"), 1);
    }

    #[test]
    fn collect_saturates_repeated_large_pairs() {
        let counts: FragmentCount = [("NH2", u32::MAX), ("NH2", u32::MAX)].into_iter().collect();
        assert_eq!(counts.get("NH2"), u32::MAX);
        assert_eq!(counts.total(), u64::from(u32::MAX));
    }

    #[test]
    fn display_lists_symbol_count_pairs() {
        let counts: FragmentCount = [("OH", 1), ("CH3", 2)].into_iter().collect();
        assert_eq!(counts.to_string(), "CH3:2 OH:1");
        assert_eq!(FragmentCount::new().to_string(), "");
    }

    #[test]
    fn serializes_as_plain_object() {
        let counts: FragmentCount = [("COOH", 1)].into_iter().collect();
        assert_eq!(serde_json::to_string(&counts).unwrap(), r#"{"COOH":1}"#);
    }

    #[test]
    fn deserialization_drops_zero_entries() {
        let counts: FragmentCount = serde_json::from_str(r#"{"CH3":2,"OH":0}"#).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("CH3"), 2);
    }
}
