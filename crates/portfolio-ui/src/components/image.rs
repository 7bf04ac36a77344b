//! Lazy Image with Skeleton
//!
//! Shows a pulsing skeleton until the browser reports the image loaded,
//! then fades the image in. A failed load also clears the skeleton. Key the component by `src` when one slot can
//! show different images, so the loaded flag starts over.

use dioxus::prelude::*;

/// Inline style that hides an image until it has loaded
pub fn fade_style(loaded: bool) -> &'static str {
    if loaded {
        "opacity: 1;"
    } else {
        "opacity: 0;"
    }
}

/// Image with a loading skeleton
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SkeletonImage {
///         src: url.clone(),
///         alt: format!("{} screenshot {}", title, idx + 1),
///         class: "detail-image".to_string(),
///     }
/// }
/// ```
#[component]
pub fn SkeletonImage(
    /// Image URL
    src: String,
    /// Alt text for accessibility
    alt: String,
    /// Optional CSS class on the img element
    #[props(default)]
    class: Option<String>,
) -> Element {
    let mut loaded = use_signal(|| false);
    let css_class = class.unwrap_or_default();
    let src_for_log = src.clone();

    rsx! {
        if !loaded() {
            div { class: "skeleton-loader", "aria-label": "Loading image" }
        }
        img {
            class: "{css_class}",
            src: "{src}",
            alt: "{alt}",
            loading: "lazy",
            style: fade_style(loaded()),
            onload: move |_| loaded.set(true),
            onerror: move |_| {
                tracing::warn!(src = %src_for_log, "Image failed to load");
                // Drop the skeleton; the alt text stands in
                loaded.set(true);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_loaded() {
        assert_eq!(fade_style(false), "opacity: 0;");
        assert_eq!(fade_style(true), "opacity: 1;");
    }
}
