//! Name tables keyed by descent, then sex
//!
//! A `NameTable` holds one kind of name (first or last). Each (descent, sex)
//! bucket keeps its names in insertion order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::components::{Descent, Sex};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTable {
    entries: BTreeMap<Descent, BTreeMap<Sex, Vec<String>>>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from static `(descent, sex, names)` rows.
    pub fn from_static(rows: &[(Descent, Sex, &[&str])]) -> Self {
        let mut table = Self::new();
        for (descent, sex, names) in rows {
            table.insert(*descent, *sex, names.iter().copied());
        }
        table
    }

    /// Append names to the (descent, sex) bucket, creating it if needed.
    ///
    /// An empty iterator still creates the bucket, which makes the sex
    /// supported for that descent.
    pub fn insert<I, S>(&mut self, descent: Descent, sex: Sex, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(descent)
            .or_default()
            .entry(sex)
            .or_default()
            .extend(names.into_iter().map(Into::into));
    }

    pub fn contains_descent(&self, descent: Descent) -> bool {
        self.entries.contains_key(&descent)
    }

    pub fn descents(&self) -> impl Iterator<Item = Descent> + '_ {
        self.entries.keys().copied()
    }

    /// Sex buckets present for a descent, or `None` if the descent is absent.
    pub fn sexes(&self, descent: Descent) -> Option<impl Iterator<Item = Sex> + '_> {
        self.entries.get(&descent).map(|by_sex| by_sex.keys().copied())
    }

    /// Names in one bucket, in insertion order.
    pub fn names(&self, descent: Descent, sex: Sex) -> Option<&[String]> {
        self.entries
            .get(&descent)
            .and_then(|by_sex| by_sex.get(&sex))
            .map(Vec::as_slice)
    }

    pub(crate) fn by_sex(&self, descent: Descent) -> Option<&BTreeMap<Sex, Vec<String>>> {
        self.entries.get(&descent)
    }

    /// Total number of names across all buckets.
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> TableSummary {
        let descents = self
            .entries
            .iter()
            .map(|(descent, by_sex)| DescentSummary {
                descent: *descent,
                counts: by_sex.iter().map(|(sex, names)| (*sex, names.len())).collect(),
            })
            .collect();

        TableSummary {
            total: self.len(),
            descents,
        }
    }
}

// ============================================================================
// Coverage summary
// ============================================================================

/// Per-descent name counts, serialisable for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    pub total: usize,
    pub descents: Vec<DescentSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescentSummary {
    pub descent: Descent,
    pub counts: BTreeMap<Sex, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NameTable {
        NameTable::from_static(&[
            (Descent::English, Sex::Male, &["John", "Joseph"]),
            (Descent::English, Sex::Unisex, &["Alex"]),
            (Descent::German, Sex::Female, &["Anna"]),
        ])
    }

    #[test]
    fn test_lookup() {
        let table = sample();
        assert!(table.contains_descent(Descent::English));
        assert!(!table.contains_descent(Descent::French));
        assert_eq!(
            table.names(Descent::English, Sex::Male).unwrap(),
            &["John".to_string(), "Joseph".to_string()]
        );
        assert!(table.names(Descent::English, Sex::Female).is_none());
        assert_eq!(table.descents().collect::<Vec<_>>(), vec![Descent::English, Descent::German]);
        assert_eq!(
            table.sexes(Descent::English).unwrap().collect::<Vec<_>>(),
            vec![Sex::Male, Sex::Unisex]
        );
        assert!(table.sexes(Descent::Russian).is_none());
    }

    #[test]
    fn test_insert_appends() {
        let mut table = sample();
        table.insert(Descent::English, Sex::Male, ["Adam"]);
        assert_eq!(
            table.names(Descent::English, Sex::Male).unwrap().last().map(String::as_str),
            Some("Adam")
        );
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_empty_bucket_counts_as_present() {
        let mut table = NameTable::new();
        assert!(table.is_empty());
        table.insert(Descent::French, Sex::Unisex, Vec::<String>::new());
        assert!(table.is_empty());
        assert!(table.contains_descent(Descent::French));
        assert_eq!(table.names(Descent::French, Sex::Unisex), Some(&[][..]));
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.descents.len(), 2);
        assert_eq!(summary.descents[0].descent, Descent::English);
        assert_eq!(summary.descents[0].counts.get(&Sex::Male), Some(&2));
        assert_eq!(summary.descents[1].counts.get(&Sex::Female), Some(&1));
    }
}
