//! Tag Chips
//!
//! Small rounded labels for project tags and profile skills.

use dioxus::prelude::*;

/// Row of tag chips
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagList {
///         tags: project.tags.clone(),
///         class: "modeling-tags-container".to_string(),
///         tag_class: "modeling-tag".to_string(),
///     }
/// }
/// ```
#[component]
pub fn TagList(
    /// Tag texts in display order
    tags: Vec<String>,
    /// Container class
    #[props(default = "card-footer".to_string())]
    class: String,
    /// Extra class on each chip
    #[props(default)]
    tag_class: Option<String>,
) -> Element {
    if tags.is_empty() {
        return rsx! {};
    }

    let chip_class = super::join_classes("tag", tag_class.as_deref());

    rsx! {
        div { class: "{class}",
            for (i, tag) in tags.iter().enumerate() {
                span { key: "{i}", class: "{chip_class}", "{tag}" }
            }
        }
    }
}
