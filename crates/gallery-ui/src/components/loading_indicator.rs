//! Loading Indicator Component
//!
//! Spinner with a status label, used for the startup load, the artificial
//! filter delay and the archive panel.

use dioxus::prelude::*;

/// Size of the indicator
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum IndicatorSize {
    Small,
    #[default]
    Large,
}

impl IndicatorSize {
    /// Returns the CSS class for this size
    pub fn class(&self) -> &'static str {
        match self {
            IndicatorSize::Small => "loading-indicator small",
            IndicatorSize::Large => "loading-indicator",
        }
    }
}

/// Properties for the LoadingIndicator component
#[derive(Clone, PartialEq, Props)]
pub struct LoadingIndicatorProps {
    /// Text read out by assistive technology and shown next to the spinner
    pub label: String,
    #[props(default)]
    pub size: IndicatorSize,
}

/// Displays a spinner with a live-region label
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LoadingIndicator { label: "Loading characters...".to_string() }
/// }
/// ```
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        div {
            class: props.size.class(),
            role: "status",
            "aria-live": "polite",
            span { class: "loading-spinner", "aria-hidden": "true" }
            span { class: "loading-label", "{props.label}" }
        }
    }
}
