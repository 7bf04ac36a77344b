//! Clickable image grid and video embed shared by the detail views.

use dioxus::prelude::*;
use portfolio_core::ViewAction;
use portfolio_ui::SkeletonImage;

use crate::context::{dispatch, use_nav};

/// Grid of thumbnails opening the lightbox over `gallery`.
///
/// `images` is a slice of `gallery` starting at `offset`; thumbnail `k`
/// opens at `offset + k`.
#[component]
pub fn GalleryGrid(
    images: Vec<String>,
    gallery: Vec<String>,
    #[props(default = 0)] offset: usize,
    /// Used for alt text
    title: String,
    #[props(default = "detail-images".to_string())] class: String,
) -> Element {
    let nav = use_nav();
    let total = gallery.len();

    rsx! {
        div { class: "{class}",
            for (k, src) in images.into_iter().enumerate() {
                {
                    let index = offset + k;
                    let gallery = gallery.clone();
                    rsx! {
                        button {
                            key: "{index}",
                            class: "detail-image-item",
                            r#type: "button",
                            "aria-label": format!("Open image {} of {}", index + 1, total),
                            onclick: move |_| {
                                dispatch(nav, ViewAction::OpenModal {
                                    images: gallery.clone(),
                                    index,
                                });
                            },
                            SkeletonImage {
                                key: "{src}",
                                src: src.clone(),
                                alt: format!("{} image {}", title, index + 1),
                                class: "detail-image".to_string(),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Responsive 16:9 video frame
#[component]
pub fn VideoEmbed(src: String, title: String) -> Element {
    rsx! {
        div { class: "video-frame",
            div { class: "video-wrapper",
                iframe {
                    title: "{title}",
                    src: "{src}",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share",
                    allowfullscreen: true,
                    "loading": "lazy",
                }
            }
        }
    }
}
