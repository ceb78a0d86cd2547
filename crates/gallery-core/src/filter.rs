//! Filter engine.
//!
//! A stable, side-effect-free predicate scan: the filtered view is always a
//! subsequence of the collection in its original order.

use serde::{Deserialize, Serialize};

use crate::types::{Character, Collection};

/// A categorical filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facet {
    Path,
    Element,
}

impl Facet {
    pub const ALL: [Facet; 2] = [Facet::Path, Facet::Element];

    /// Lower-case name used in labels and element ids
    pub fn key(&self) -> &'static str {
        match self {
            Facet::Path => "path",
            Facet::Element => "element",
        }
    }

    /// Label of the implicit "no constraint" option
    pub fn all_label(&self) -> &'static str {
        match self {
            Facet::Path => "All Paths",
            Facet::Element => "All Elements",
        }
    }

    /// The record's value for this facet
    pub fn value_of<'a>(&self, character: &'a Character) -> Option<&'a str> {
        match self {
            Facet::Path => character.path.as_deref(),
            Facet::Element => character.element.as_deref(),
        }
    }
}

/// Current filter selections. Empty string means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub path: String,
    pub element: String,
}

impl FilterState {
    pub fn facet(&self, facet: Facet) -> &str {
        match facet {
            Facet::Path => &self.path,
            Facet::Element => &self.element,
        }
    }

    /// Replace a facet's selection wholesale
    pub fn select(&mut self, facet: Facet, value: impl Into<String>) {
        let value = value.into();
        match facet {
            Facet::Path => self.path = value,
            Facet::Element => self.element = value,
        }
    }

    pub fn clear(&mut self) {
        *self = FilterState::default();
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.path.is_empty() && self.element.is_empty()
    }

    /// Whether a single record passes all three predicates
    pub fn matches(&self, character: &Character) -> bool {
        self.matches_search(character)
            && self.matches_facet(Facet::Path, character)
            && self.matches_facet(Facet::Element, character)
    }

    fn matches_search(&self, character: &Character) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        character
            .name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&needle))
    }

    fn matches_facet(&self, facet: Facet, character: &Character) -> bool {
        let wanted = self.facet(facet);
        wanted.is_empty() || facet.value_of(character) == Some(wanted)
    }
}

/// Apply the filter, preserving collection order.
pub fn apply<'a>(collection: &'a Collection, filter: &FilterState) -> Vec<&'a Character> {
    let filtered: Vec<&Character> = collection.iter().filter(|c| filter.matches(c)).collect();
    tracing::debug!(
        "Filter {:?} matched {} of {} characters",
        filter,
        filtered.len(),
        collection.len()
    );
    filtered
}
