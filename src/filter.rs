//! Client-side filtering of domain records
//!
//! Two kinds of criteria exist: a free-text search on the record name
//! (case-insensitive substring) and an exact selection on the record's
//! category or type, where the sentinel `"All"` disables the filter.
//! Both preserve the original order.

use serde::{Deserialize, Serialize};

use crate::models::{Attraction, SafetyFacility, TransitPoint};

/// Dropdown value meaning "no filtering on this dimension"
pub const ALL: &str = "All";

/// Records that can be searched by name
pub trait Named {
    fn name(&self) -> &str;
}

/// Records with a category or type the dropdowns select on
pub trait Classified {
    fn class_label(&self) -> &str;
}

impl Named for Attraction {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Classified for Attraction {
    fn class_label(&self) -> &str {
        self.category.label()
    }
}

impl Named for TransitPoint {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Classified for TransitPoint {
    fn class_label(&self) -> &str {
        self.kind.label()
    }
}

impl Named for SafetyFacility {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Classified for SafetyFacility {
    fn class_label(&self) -> &str {
        self.kind.label()
    }
}

/// Dropdown selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Interpret a raw control value; missing, empty and `"All"` all mean no filter
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some(ALL) => Selection::All,
            Some(label) => Selection::Only(label.to_string()),
        }
    }

    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == label,
        }
    }
}

impl From<Option<String>> for Selection {
    fn from(value: Option<String>) -> Self {
        Selection::parse(value.as_deref())
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL.to_string(),
            Selection::Only(label) => label,
        }
    }
}

/// Case-insensitive substring test; an empty query matches everything
#[must_use]
pub fn name_matches(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

pub fn filter_by_text<T: Named>(records: Vec<T>, query: Option<&str>) -> Vec<T> {
    match query {
        Some(query) if !query.is_empty() => records
            .into_iter()
            .filter(|record| name_matches(record.name(), query))
            .collect(),
        _ => records,
    }
}

pub fn filter_by_selection<T: Classified>(records: Vec<T>, selection: &Selection) -> Vec<T> {
    match selection {
        Selection::All => records,
        Selection::Only(_) => records
            .into_iter()
            .filter(|record| selection.matches(record.class_label()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::providers::fallback;
    use rstest::rstest;

    fn names<T: Named>(records: &[T]) -> Vec<&str> {
        records.iter().map(Named::name).collect()
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("All"))]
    fn test_selection_sentinels(#[case] raw: Option<&str>) {
        assert_eq!(Selection::parse(raw), Selection::All);
    }

    #[test]
    fn test_all_is_identity_for_every_domain() {
        let attractions = fallback::attractions();
        assert_eq!(filter_by_selection(attractions.clone(), &Selection::All), attractions);

        let transit = fallback::transit_points();
        assert_eq!(filter_by_selection(transit.clone(), &Selection::All), transit);

        let safety = fallback::safety_facilities();
        assert_eq!(filter_by_selection(safety.clone(), &Selection::All), safety);
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter_by_text(fallback::attractions(), Some("ZZZ_no_match")).is_empty());
        assert!(filter_by_text(fallback::transit_points(), Some("ZZZ_no_match")).is_empty());
        assert!(filter_by_text(fallback::safety_facilities(), Some("ZZZ_no_match")).is_empty());
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let filtered = filter_by_text(fallback::attractions(), Some("tokyo"));
        assert_eq!(names(&filtered), vec!["Tokyo Tower"]);

        let filtered = filter_by_text(fallback::attractions(), Some("SENSO"));
        assert_eq!(names(&filtered), vec!["Senso-ji Temple"]);
    }

    #[test]
    fn test_historical_category() {
        let filtered = filter_by_selection(
            fallback::attractions(),
            &Selection::parse(Some("Historical")),
        );
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Senso-ji Temple");
        assert_eq!(filtered[0].category, Category::Historical);
    }

    #[test]
    fn test_selection_is_exact_match() {
        let filtered = filter_by_selection(
            fallback::safety_facilities(),
            &Selection::parse(Some("Police")),
        );
        assert!(filtered.is_empty());

        let filtered = filter_by_selection(
            fallback::safety_facilities(),
            &Selection::parse(Some("Police Station")),
        );
        assert_eq!(names(&filtered), vec!["Police Station"]);
    }

    #[test]
    fn test_filters_preserve_order() {
        let filtered = filter_by_text(fallback::transit_points(), Some(""));
        assert_eq!(names(&filtered), vec!["Train 1", "Bus 22"]);

        let filtered = filter_by_text(fallback::attractions(), Some("t"));
        assert_eq!(names(&filtered), vec!["Tokyo Tower", "Senso-ji Temple"]);
    }

    #[test]
    fn test_whitespace_is_not_ignored() {
        let selection = Selection::parse(Some(" Bus "));
        assert_eq!(selection, Selection::Only(" Bus ".to_string()));
        assert!(filter_by_selection(fallback::transit_points(), &selection).is_empty());

        assert!(filter_by_text(fallback::attractions(), Some("temple ")).is_empty());
        assert!(filter_by_text(fallback::attractions(), Some("   ")).is_empty());

        let filtered = filter_by_text(fallback::attractions(), Some("senso-ji temple"));
        assert_eq!(names(&filtered), vec!["Senso-ji Temple"]);
    }

    #[test]
    fn test_selection_serde() {
        let selection: Selection = serde_json::from_str("null").unwrap();
        assert_eq!(selection, Selection::All);
        let selection: Selection = serde_json::from_str(r#""Bus""#).unwrap();
        assert_eq!(selection, Selection::Only("Bus".to_string()));
        assert_eq!(serde_json::to_string(&Selection::All).unwrap(), r#""All""#);
    }
}
