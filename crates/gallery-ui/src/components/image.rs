//! Image with a fallback source
//!
//! Swaps to `fallback` the first time `src` fails to load. Key the component
//! by record id so the failure flag resets between records.

use dioxus::prelude::*;

#[component]
pub fn FallbackImage(
    /// Primary image address
    src: String,
    /// Address used after the primary fails
    fallback: String,
    /// Alt text for accessibility
    alt: String,
    /// Optional CSS class
    #[props(default)]
    class: Option<String>,
) -> Element {
    let mut failed = use_signal(|| false);
    let shown = if failed() { fallback.clone() } else { src.clone() };
    let css_class = class.unwrap_or_else(|| "fallback-image".to_string());

    rsx! {
        img {
            class: "{css_class}",
            src: "{shown}",
            alt: "{alt}",
            loading: "lazy",
            onerror: move |_| {
                if !failed() {
                    tracing::debug!("Image {} failed; using fallback", src);
                    failed.set(true);
                }
            },
        }
    }
}
