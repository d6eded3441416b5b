//! Multi-criteria gist filtering.
//!
//! Each present dimension (visibility, languages, date range) produces its
//! own id set; the result is the intersection of those sets. Languages match
//! by membership in the supplied list. Absent dimensions contribute no
//! constraint, and the pipeline skips the engine entirely when every
//! dimension is absent.

use std::collections::HashSet;

use crate::dates::DateRange;
use crate::gist::{Gist, Visibility};

/// The per-invocation filter, built once from CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub visibility: Option<Visibility>,
    pub languages: Option<Vec<String>>,
    pub date_range: Option<DateRange>,
}

impl Criteria {
    /// True when no dimension is set, i.e. every gist matches.
    pub fn is_empty(&self) -> bool {
        self.visibility.is_none() && self.languages.is_none() && self.date_range.is_none()
    }
}

/// Ids of the gists satisfying every present dimension of `criteria`.
///
/// With zero present dimensions this degenerates to the full id set; callers
/// short-circuit that case before getting here.
pub fn matching_ids(criteria: &Criteria, gists: &[Gist]) -> HashSet<String> {
    let mut dimensions: Vec<HashSet<&str>> = Vec::new();

    if let Some(visibility) = criteria.visibility {
        dimensions.push(ids_where(gists, |g| g.visibility == visibility));
    }
    if let Some(languages) = &criteria.languages {
        dimensions.push(ids_where(gists, |g| {
            languages.iter().any(|language| *language == g.language)
        }));
    }
    if let Some(range) = criteria.date_range {
        dimensions.push(ids_where(gists, |g| range.contains(g.created)));
    }

    let mut dimensions = dimensions.into_iter();
    let matched = match dimensions.next() {
        Some(first) => dimensions.fold(first, |acc, dim| {
            acc.intersection(&dim).copied().collect()
        }),
        None => gists.iter().map(|g| g.id.as_str()).collect(),
    };

    matched.into_iter().map(str::to_owned).collect()
}

fn ids_where<'a, F>(gists: &'a [Gist], predicate: F) -> HashSet<&'a str>
where
    F: Fn(&Gist) -> bool,
{
    gists
        .iter()
        .filter(|gist| predicate(gist))
        .map(|gist| gist.id.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn gist(id: &str, visibility: Visibility, language: &str, created: NaiveDate) -> Gist {
        Gist {
            id: id.to_string(),
            visibility,
            language: language.to_string(),
            created,
        }
    }

    /// The three-record set from the CLI's documented examples.
    fn sample() -> Vec<Gist> {
        vec![
            gist("a", Visibility::Secret, "Clojure", date(2024, 7, 12)),
            gist("b", Visibility::Public, "Python", date(2024, 7, 10)),
            gist("c", Visibility::Public, "Unknown", date(2024, 7, 10)),
        ]
    }

    fn ids(values: &[&str]) -> HashSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn visibility_dimension_alone() {
        let criteria = Criteria {
            visibility: Some(Visibility::Public),
            ..Default::default()
        };
        assert_eq!(matching_ids(&criteria, &sample()), ids(&["b", "c"]));
    }

    #[test]
    fn languages_dimension_alone() {
        let criteria = Criteria {
            languages: Some(vec!["Python".to_string()]),
            ..Default::default()
        };
        assert_eq!(matching_ids(&criteria, &sample()), ids(&["b"]));
    }

    #[test]
    fn languages_match_any_of_the_list() {
        let criteria = Criteria {
            languages: Some(vec!["Python".to_string(), "Clojure".to_string()]),
            ..Default::default()
        };
        assert_eq!(matching_ids(&criteria, &sample()), ids(&["a", "b"]));

        // Unmatched entries in the list are simply inert.
        let criteria = Criteria {
            languages: Some(vec!["Python".to_string(), "Spam".to_string()]),
            ..Default::default()
        };
        assert_eq!(matching_ids(&criteria, &sample()), ids(&["b"]));
    }

    #[test]
    fn single_date_matches_exact_creation_date() {
        let criteria = Criteria {
            date_range: Some(DateRange::On(date(2024, 7, 10))),
            ..Default::default()
        };
        assert_eq!(matching_ids(&criteria, &sample()), ids(&["b", "c"]));
    }

    #[test]
    fn date_interval_is_inclusive_on_both_boundaries() {
        let criteria = Criteria {
            date_range: Some(DateRange::Between(date(2024, 7, 10), date(2024, 7, 12))),
            ..Default::default()
        };
        assert_eq!(matching_ids(&criteria, &sample()), ids(&["a", "b", "c"]));
    }

    #[test]
    fn dimensions_are_intersected() {
        let criteria = Criteria {
            visibility: Some(Visibility::Public),
            languages: Some(vec!["Python".to_string()]),
            date_range: Some(DateRange::On(date(2024, 7, 10))),
        };
        assert_eq!(matching_ids(&criteria, &sample()), ids(&["b"]));

        let criteria = Criteria {
            visibility: Some(Visibility::Secret),
            languages: Some(vec!["Python".to_string()]),
            date_range: None,
        };
        assert!(matching_ids(&criteria, &sample()).is_empty());
    }

    #[test]
    fn no_dimensions_yields_all_ids() {
        let criteria = Criteria::default();
        assert!(criteria.is_empty());
        assert_eq!(matching_ids(&criteria, &sample()), ids(&["a", "b", "c"]));
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let criteria = Criteria {
            languages: Some(vec!["Fortran".to_string()]),
            ..Default::default()
        };
        assert!(matching_ids(&criteria, &sample()).is_empty());
    }

    #[test]
    fn six_gist_fixture_matches_combined_criteria() {
        let gists = vec![
            gist("clojure-secret", Visibility::Secret, "Clojure", date(2024, 7, 12)),
            gist("sql-secret", Visibility::Secret, "SQL", date(2024, 7, 12)),
            gist("python-public", Visibility::Public, "Python", date(2024, 6, 16)),
            gist("sql-public", Visibility::Public, "SQL", date(2024, 6, 16)),
            gist("ruby-public", Visibility::Public, "Ruby", date(2024, 6, 16)),
            gist("unknown-public", Visibility::Public, "Unknown", date(2024, 7, 10)),
        ];

        let criteria = Criteria {
            visibility: Some(Visibility::Public),
            languages: Some(vec!["Ruby".to_string()]),
            date_range: Some(DateRange::Between(date(2024, 4, 1), date(2024, 6, 28))),
        };
        assert_eq!(matching_ids(&criteria, &gists), ids(&["ruby-public"]));

        let criteria = Criteria {
            visibility: Some(Visibility::Secret),
            date_range: Some(DateRange::On(date(2024, 7, 12))),
            ..Default::default()
        };
        assert_eq!(
            matching_ids(&criteria, &gists),
            ids(&["clojure-secret", "sql-secret"])
        );

        let criteria = Criteria {
            visibility: Some(Visibility::Public),
            languages: Some(vec!["Rust".to_string(), "Clojure".to_string()]),
            date_range: Some(DateRange::On(date(2024, 7, 12))),
        };
        assert!(matching_ids(&criteria, &gists).is_empty());
    }
}
