//! Section Header and Meta Items
//!
//! Headings used between detail view sections, and the small
//! icon/label/value blocks in detail headers.

use dioxus::prelude::*;

/// Section title with divider and optional description
#[component]
pub fn SectionHeader(
    title: String,
    #[props(default)] description: Option<String>,
    /// Use the highlighted divider
    #[props(default = false)]
    special: bool,
) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-title", "{title}" }
            div {
                class: if special { "section-divider section-divider-special" } else { "section-divider" },
            }
            if let Some(description) = description {
                p { class: "section-description", "{description}" }
            }
        }
    }
}

/// One meta entry: icon, label and value. Renders nothing without a value.
#[component]
pub fn MetaItem(
    icon: String,
    label: String,
    value: Option<String>,
    #[props(default = "modeling-meta-item".to_string())] class: String,
) -> Element {
    let Some(value) = value else {
        return rsx! {};
    };

    rsx! {
        div { class: "{class}",
            div { class: "meta-row",
                span { class: "meta-icon", "aria-hidden": "true", "{icon}" }
                span { class: "meta-label", "{label}:" }
            }
            span { class: "meta-value", "{value}" }
        }
    }
}
