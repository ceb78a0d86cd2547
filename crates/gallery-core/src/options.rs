//! Option registry: the selectable values of each facet.

use std::collections::BTreeSet;

use crate::filter::Facet;
use crate::types::Collection;

/// A single selectable filter option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// Text shown to the user
    pub label: String,
    /// Value written into the filter state; empty for the "all" sentinel
    pub value: String,
}

impl FilterOption {
    pub fn all(facet: Facet) -> Self {
        Self {
            label: facet.all_label().to_string(),
            value: String::new(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.value.is_empty()
    }
}

/// Distinct non-empty values of a facet, lexicographically sorted.
pub fn derive_options(collection: &Collection, facet: Facet) -> Vec<String> {
    collection
        .iter()
        .filter_map(|c| facet.value_of(c))
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Options for every facet, each prefixed with its "all" sentinel.
///
/// Computed once after load; the collection never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetOptions {
    pub paths: Vec<FilterOption>,
    pub elements: Vec<FilterOption>,
}

impl FacetOptions {
    pub fn derive(collection: &Collection) -> Self {
        Self {
            paths: with_sentinel(Facet::Path, derive_options(collection, Facet::Path)),
            elements: with_sentinel(Facet::Element, derive_options(collection, Facet::Element)),
        }
    }

    pub fn for_facet(&self, facet: Facet) -> &[FilterOption] {
        match facet {
            Facet::Path => &self.paths,
            Facet::Element => &self.elements,
        }
    }

    /// Label of the currently selected value, or the sentinel label
    pub fn label_for(&self, facet: Facet, value: &str) -> String {
        self.for_facet(facet)
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| facet.all_label().to_string())
    }
}

fn with_sentinel(facet: Facet, values: Vec<String>) -> Vec<FilterOption> {
    std::iter::once(FilterOption::all(facet))
        .chain(values.into_iter().map(|v| FilterOption {
            label: v.clone(),
            value: v,
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Character;

    fn collection() -> Collection {
        let mk = |id: &str, path: Option<&str>, element: Option<&str>| Character {
            id: id.to_string(),
            path: path.map(str::to_string),
            element: element.map(str::to_string),
            ..Default::default()
        };
        Collection::new(vec![
            mk("1", Some("Hunt"), Some("Wind")),
            mk("2", Some("Erudition"), Some("Ice")),
            mk("3", Some("Hunt"), None),
            mk("4", Some(""), Some("Fire")),
        ])
    }

    #[test]
    fn options_are_distinct_sorted_non_empty() {
        assert_eq!(derive_options(&collection(), Facet::Path), vec!["Erudition", "Hunt"]);
        assert_eq!(derive_options(&collection(), Facet::Element), vec!["Fire", "Ice", "Wind"]);
    }

    #[test]
    fn sentinel_comes_first() {
        let options = FacetOptions::derive(&collection());
        assert!(options.paths[0].is_all());
        assert_eq!(options.paths[0].label, "All Paths");
        assert_eq!(options.elements.len(), 4);
    }

    #[test]
    fn label_for_unknown_value_falls_back_to_sentinel() {
        let options = FacetOptions::derive(&collection());
        assert_eq!(options.label_for(Facet::Element, "Ice"), "Ice");
        assert_eq!(options.label_for(Facet::Element, ""), "All Elements");
        assert_eq!(options.label_for(Facet::Element, "Quantum"), "All Elements");
    }
}
