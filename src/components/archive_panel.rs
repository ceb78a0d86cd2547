//! Archive contents listing inside the detail overlay.

use dioxus::prelude::*;
use gallery_core::ArchiveListing;
use gallery_ui::{IndicatorSize, LoadingIndicator};

#[component]
pub fn ArchivePanel(listing: ArchiveListing) -> Element {
    rsx! {
        section { class: "detail-section archive-panel",
            h3 { "Archive contents" }
            match &listing {
                ArchiveListing::Loading => rsx! {
                    LoadingIndicator {
                        label: "Reading archive...".to_string(),
                        size: IndicatorSize::Small,
                    }
                },
                ArchiveListing::Entries(entries) => rsx! {
                    ul { class: "archive-entries",
                        for (i, name) in entries.iter().enumerate() {
                            li { key: "{i}", class: "archive-entry", "{name}" }
                        }
                    }
                },
                ArchiveListing::Empty => rsx! {
                    p { class: "archive-empty", "This archive is empty." }
                },
                ArchiveListing::Failed(message) => rsx! {
                    p { class: "error-text", role: "alert", "⚠ {message}" }
                },
            }
        }
    }
}
