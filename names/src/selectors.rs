//! Name selection
//!
//! Resolves a (descent, sex) query against a name table. The requested sex
//! is expanded into its compatible sexes, the matching buckets are merged,
//! and the result is returned sorted and deduplicated.

use tracing::debug;

use crate::components::{Descent, NameKind, Sex};
use crate::errors::{Result, SelectionError};
use crate::names::{FIRST_NAMES, LAST_NAMES};
use crate::table::NameTable;

/// Sexes whose names satisfy a query for `sex`.
pub fn get_sexes(sex: Sex) -> &'static [Sex] {
    sex.compatible()
}

/// First names from the built-in tables.
pub fn get_first_names(descent: Descent, sex: impl Into<Option<Sex>>) -> Result<Vec<String>> {
    Selector::builtin().first_names(descent, sex)
}

/// Last names from the built-in tables.
pub fn get_last_names(descent: Descent, sex: impl Into<Option<Sex>>) -> Result<Vec<String>> {
    Selector::builtin().last_names(descent, sex)
}

/// Selects names from a pair of first and last name tables
#[derive(Debug, Clone, Copy)]
pub struct Selector<'a> {
    first: &'a NameTable,
    last: &'a NameTable,
}

impl<'a> Selector<'a> {
    pub fn new(first: &'a NameTable, last: &'a NameTable) -> Self {
        Self { first, last }
    }

    pub fn first_names(&self, descent: Descent, sex: impl Into<Option<Sex>>) -> Result<Vec<String>> {
        select(self.first, NameKind::First, descent, sex.into())
    }

    pub fn last_names(&self, descent: Descent, sex: impl Into<Option<Sex>>) -> Result<Vec<String>> {
        select(self.last, NameKind::Last, descent, sex.into())
    }
}

impl Selector<'static> {
    pub fn builtin() -> Self {
        Self::new(&FIRST_NAMES, &LAST_NAMES)
    }
}

impl Default for Selector<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

fn select(table: &NameTable, kind: NameKind, descent: Descent, sex: Option<Sex>) -> Result<Vec<String>> {
    // Descent is checked before sex, so an unknown descent wins over a missing sex
    let by_sex = table
        .by_sex(descent)
        .ok_or(SelectionError::UnsupportedDescent { kind, descent })?;

    let unsupported_sex = SelectionError::UnsupportedSex { kind, descent, sex };
    let sex = sex.ok_or_else(|| unsupported_sex.clone())?;

    let buckets: Vec<&Vec<String>> = get_sexes(sex)
        .iter()
        .filter_map(|s| by_sex.get(s))
        .collect();
    if buckets.is_empty() {
        return Err(unsupported_sex);
    }

    let mut names: Vec<String> = buckets.into_iter().flatten().cloned().collect();
    names.sort_unstable();
    names.dedup();

    debug!(%kind, %descent, %sex, count = names.len(), "selected names");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_first_names() -> NameTable {
        NameTable::from_static(&[
            (Descent::English, Sex::Male, &["John", "Joseph"]),
            (Descent::English, Sex::Female, &["Ashley"]),
            (Descent::English, Sex::Unisex, &["Alex"]),
            (Descent::German, Sex::Female, &["Anna"]),
        ])
    }

    fn mock_last_names() -> NameTable {
        NameTable::from_static(&[
            (Descent::English, Sex::Unisex, &["Johnson", "Abramson"]),
            (Descent::Russian, Sex::Male, &["Petrov", "Ivanov"]),
            (Descent::Russian, Sex::Female, &["Petrova", "Ivanova"]),
        ])
    }

    #[test]
    fn test_get_first_names() {
        let (first, last) = (mock_first_names(), mock_last_names());
        let selector = Selector::new(&first, &last);

        let cases: [(Descent, Sex, &[&str]); 3] = [
            (Descent::English, Sex::Male, &["Alex", "John", "Joseph"]),
            (Descent::English, Sex::Female, &["Alex", "Ashley"]),
            (Descent::English, Sex::Unisex, &["Alex"]),
        ];
        for (descent, sex, expected) in cases {
            assert_eq!(selector.first_names(descent, sex).unwrap(), expected);
        }
    }

    #[test]
    fn test_first_names_errors() {
        let (first, last) = (mock_first_names(), mock_last_names());
        let selector = Selector::new(&first, &last);

        assert!(matches!(
            selector.first_names(Descent::German, Sex::Male),
            Err(SelectionError::UnsupportedSex { kind: NameKind::First, descent: Descent::German, sex: Some(Sex::Male) })
        ));
        assert!(matches!(
            selector.first_names(Descent::French, Sex::Male),
            Err(SelectionError::UnsupportedDescent { kind: NameKind::First, descent: Descent::French })
        ));
    }

    #[test]
    fn test_get_last_names() {
        let (first, last) = (mock_first_names(), mock_last_names());
        let selector = Selector::new(&first, &last);

        let cases: [(Descent, Sex, &[&str]); 3] = [
            (Descent::English, Sex::Unisex, &["Abramson", "Johnson"]),
            (Descent::Russian, Sex::Male, &["Ivanov", "Petrov"]),
            (Descent::Russian, Sex::Female, &["Ivanova", "Petrova"]),
        ];
        for (descent, sex, expected) in cases {
            assert_eq!(selector.last_names(descent, sex).unwrap(), expected);
        }
    }

    #[test]
    fn test_last_names_unsupported_sex() {
        let (first, last) = (mock_first_names(), mock_last_names());
        let selector = Selector::new(&first, &last);

        assert!(matches!(
            selector.last_names(Descent::Russian, None),
            Err(SelectionError::UnsupportedSex { sex: None, .. })
        ));
        assert!(matches!(
            selector.last_names(Descent::Russian, Sex::Unisex),
            Err(SelectionError::UnsupportedSex { sex: Some(Sex::Unisex), .. })
        ));
        assert!(matches!(
            selector.last_names(Descent::French, Sex::Male),
            Err(SelectionError::UnsupportedDescent { kind: NameKind::Last, .. })
        ));
    }

    #[test]
    fn test_unsupported_descent_regardless_of_sex() {
        let (first, last) = (mock_first_names(), mock_last_names());
        let selector = Selector::new(&first, &last);

        let sexes = [None, Some(Sex::Male), Some(Sex::Female), Some(Sex::Unisex)];
        for sex in sexes {
            assert!(matches!(
                selector.first_names(Descent::French, sex),
                Err(SelectionError::UnsupportedDescent { .. })
            ));
            assert!(matches!(
                selector.last_names(Descent::German, sex),
                Err(SelectionError::UnsupportedDescent { .. })
            ));
        }
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut first = NameTable::new();
        first.insert(Descent::French, Sex::Male, ["Claude", "Pierre"]);
        first.insert(Descent::French, Sex::Unisex, ["Claude"]);
        let last = NameTable::new();

        let names = Selector::new(&first, &last)
            .first_names(Descent::French, Sex::Male)
            .unwrap();
        assert_eq!(names, ["Claude", "Pierre"]);
    }

    #[test]
    fn test_get_sexes() {
        use std::collections::HashSet;

        let set = |sexes: &[Sex]| sexes.iter().copied().collect::<HashSet<_>>();
        assert_eq!(set(get_sexes(Sex::Male)), set(&[Sex::Male, Sex::Unisex]));
        assert_eq!(set(get_sexes(Sex::Female)), set(&[Sex::Female, Sex::Unisex]));
        assert_eq!(set(get_sexes(Sex::Unisex)), set(&[Sex::Unisex]));
    }

    #[test]
    fn test_builtin_tables_answer_every_bucket() {
        for descent in FIRST_NAMES.descents() {
            for sex in Sex::ALL {
                let names = get_first_names(descent, sex).unwrap();
                assert!(!names.is_empty());
                assert!(names.windows(2).all(|w| w[0] < w[1]), "{descent}/{sex} not sorted");
            }
        }

        let english = get_last_names(Descent::English, Sex::Female).unwrap();
        assert!(english.contains(&"Smith".to_string()));
        let russian = get_last_names(Descent::Russian, Sex::Female).unwrap();
        assert!(russian.iter().all(|name| name.ends_with('a')));
        assert!(matches!(
            get_last_names(Descent::Russian, Sex::Unisex),
            Err(SelectionError::UnsupportedSex { .. })
        ));
    }
}
