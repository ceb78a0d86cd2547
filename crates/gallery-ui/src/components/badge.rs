//! Badge Component
//!
//! Small tag for rarity, element and path.

use dioxus::prelude::*;

/// Badge flavours
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BadgeKind {
    Rarity,
    Element,
    Path,
}

impl BadgeKind {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeKind::Rarity => "badge badge--rarity",
            BadgeKind::Element => "badge badge--element",
            BadgeKind::Path => "badge badge--path",
        }
    }

    pub fn aria_label(&self) -> &'static str {
        match self {
            BadgeKind::Rarity => "Rarity",
            BadgeKind::Element => "Element",
            BadgeKind::Path => "Path",
        }
    }
}

/// Optional badges for a character; absent values render nothing.
#[component]
pub fn Badges(rarity: Option<String>, element: Option<String>, path: Option<String>) -> Element {
    rsx! {
        div { class: "badges",
            if let Some(stars) = rarity {
                Badge { kind: BadgeKind::Rarity, text: stars }
            }
            if let Some(element) = element {
                Badge { kind: BadgeKind::Element, text: element }
            }
            if let Some(path) = path {
                Badge { kind: BadgeKind::Path, text: path }
            }
        }
    }
}

#[component]
pub fn Badge(kind: BadgeKind, text: String) -> Element {
    let aria = format!("{}: {}", kind.aria_label(), text);

    rsx! {
        span {
            class: kind.class(),
            title: "{aria}",
            "aria-label": "{aria}",
            "{text}"
        }
    }
}
