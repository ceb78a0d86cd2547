//! Property-based tests for the filter engine and option registry
//!
//! Uses proptest to verify the ordering and idempotence guarantees.

use proptest::prelude::*;
use gallery_core::filter::{apply, FilterState};
use gallery_core::options::derive_options;
use gallery_core::{Character, Collection, Facet};

// ============================================================================
// Strategy Generators
// ============================================================================

fn optional_word() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        1 => Just(None),
        4 => prop::string::string_regex("[A-Za-z]{1,6}")
            .expect("valid regex")
            .prop_map(Some),
    ]
}

fn facet_value() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Hunt".to_string())),
        Just(Some("Erudition".to_string())),
        Just(Some("Harmony".to_string())),
    ]
}

fn collection_strategy() -> impl Strategy<Value = Collection> {
    prop::collection::vec((optional_word(), facet_value(), facet_value()), 0..30).prop_map(|rows| {
        Collection::new(
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, path, element))| Character {
                    id: i.to_string(),
                    name,
                    path,
                    element,
                    ..Default::default()
                })
                .collect(),
        )
    })
}

fn filter_strategy() -> impl Strategy<Value = FilterState> {
    (
        prop::string::string_regex("[A-Za-z]{0,3}").expect("valid regex"),
        prop_oneof![Just(String::new()), Just("Hunt".to_string()), Just("Erudition".to_string())],
        prop_oneof![Just(String::new()), Just("Harmony".to_string()), Just("Hunt".to_string())],
    )
        .prop_map(|(search, path, element)| FilterState {
            search,
            path,
            element,
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The filtered view is a subsequence of the collection, in order
    #[test]
    fn filtered_is_ordered_subset(collection in collection_strategy(), filter in filter_strategy()) {
        let filtered = apply(&collection, &filter);
        let positions: Vec<usize> = filtered
            .iter()
            .map(|c| collection.iter().position(|o| o.id == c.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    /// Re-running with the same state yields the same list
    #[test]
    fn apply_is_idempotent(collection in collection_strategy(), filter in filter_strategy()) {
        let first: Vec<String> = apply(&collection, &filter).iter().map(|c| c.id.clone()).collect();
        let second: Vec<String> = apply(&collection, &filter).iter().map(|c| c.id.clone()).collect();
        prop_assert_eq!(first, second);
    }

    /// Every survivor satisfies every predicate
    #[test]
    fn survivors_satisfy_predicates(collection in collection_strategy(), filter in filter_strategy()) {
        for c in apply(&collection, &filter) {
            if !filter.search.is_empty() {
                let name = c.name.clone().unwrap_or_default().to_lowercase();
                prop_assert!(name.contains(&filter.search.to_lowercase()));
            }
            if !filter.path.is_empty() {
                prop_assert_eq!(c.path.as_deref(), Some(filter.path.as_str()));
            }
            if !filter.element.is_empty() {
                prop_assert_eq!(c.element.as_deref(), Some(filter.element.as_str()));
            }
        }
    }

    /// Clearing restores the full collection in original order
    #[test]
    fn cleared_filter_is_identity(collection in collection_strategy(), mut filter in filter_strategy()) {
        filter.clear();
        let ids: Vec<String> = apply(&collection, &filter).iter().map(|c| c.id.clone()).collect();
        let all: Vec<String> = collection.iter().map(|c| c.id.clone()).collect();
        prop_assert_eq!(ids, all);
    }

    /// Derived options are strictly increasing (sorted and distinct)
    #[test]
    fn options_sorted_distinct(collection in collection_strategy()) {
        for facet in Facet::ALL {
            let values = derive_options(&collection, facet);
            prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(values.iter().all(|v| !v.is_empty()));
        }
    }
}
