//! 3D Modeling Card
//!
//! Render thumbnail, software and time. The expand button previews the
//! whole gallery in the lightbox without leaving the catalog.

use dioxus::prelude::*;
use portfolio_core::{ProjectKind, ProjectRef, ViewAction};
use portfolio_ui::{IconButton, SkeletonImage, TagList};

use super::{activate_on_key, card_label, select};
use crate::context::{dispatch, use_nav};

#[component]
pub fn ModelingCard(project: ProjectRef) -> Element {
    let nav = use_nav();
    let (software, time) = match &project.kind {
        ProjectKind::Modeling(m) => (m.software.clone(), m.time.clone()),
        _ => (None, None),
    };
    let cover = project.cover_image().map(str::to_string);
    let label = card_label(&project);
    let on_key = project.clone();
    let on_click = project.clone();
    let gallery = project.gallery();

    rsx! {
        article {
            class: "card modeling-card",
            role: "button",
            tabindex: "0",
            "aria-label": "{label}",
            onclick: move |_| select(nav, &on_click),
            onkeydown: move |evt| activate_on_key(evt, nav, &on_key),

            div { class: "card-media",
                if let Some(cover) = cover {
                    SkeletonImage {
                        key: "{cover}",
                        src: cover.clone(),
                        alt: format!("{} render", project.title),
                        class: "card-image".to_string(),
                    }
                }
                if !gallery.is_empty() {
                    IconButton {
                        class: "card-preview-btn".to_string(),
                        aria_label: format!("Preview {} gallery", project.title),
                        onclick: move |evt: MouseEvent| {
                            evt.stop_propagation();
                            dispatch(nav, ViewAction::OpenModal {
                                images: gallery.clone(),
                                index: 0,
                            });
                        },
                        "⤢"
                    }
                }
            }
            div { class: "card-body",
                h3 { class: "card-title", "{project.title}" }
                div { class: "modeling-card-meta",
                    if let Some(software) = software {
                        span { class: "meta-chip", "🛠 {software}" }
                    }
                    if let Some(time) = time {
                        span { class: "meta-chip", "⏱ {time}" }
                    }
                }
            }
            TagList {
                tags: project.tags.clone(),
                class: "modeling-tags-container".to_string(),
                tag_class: "modeling-tag".to_string(),
            }
        }
    }
}
