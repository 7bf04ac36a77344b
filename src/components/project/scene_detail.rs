use dioxus::prelude::*;
use portfolio_core::{ProjectKind, ProjectRef, ViewAction};
use portfolio_ui::{MetaItem, SectionHeader, SkeletonImage, TagList};

use super::{GalleryGrid, VideoEmbed};
use crate::context::{dispatch, use_nav};

#[component]
pub fn SceneDetail(project: ProjectRef) -> Element {
    let nav = use_nav();
    let ProjectKind::Scene(scene) = &project.kind else {
        return rsx! {};
    };
    let gallery = project.gallery();
    let video = project.video_embed();

    rsx! {
        h1 { id: "project-title", class: "detail-title", "{project.title}" }
        p { class: "detail-summary", "{project.summary}" }

        div { class: "modeling-meta-info",
            MetaItem { icon: "⏳", label: "Time", value: scene.time.clone() }
            MetaItem { icon: "🛠️", label: "Engine", value: scene.engine.clone() }
        }

        TagList { tags: project.tags.clone(), class: "card-footer detail-tags".to_string() }

        if let Some(details) = &project.details {
            div { class: "detail-body", "{details}" }
        }

        for section in project.gallery_sections() {
            div { key: "{section.title}", class: "scene-section",
                SectionHeader {
                    title: section.title.to_string(),
                    description: section.description.map(str::to_string),
                    special: true,
                }
                GalleryGrid {
                    images: section.images.to_vec(),
                    gallery: gallery.clone(),
                    offset: section.offset,
                    title: project.title.clone(),
                    class: "scene-gallery".to_string(),
                }
            }
        }

        if let Some(src) = video {
            div { class: "video-section",
                SectionHeader { title: "Walkthrough" }
                VideoEmbed { src, title: format!("{} walkthrough", project.title) }
            }
        }

        if !scene.cool_features.is_empty() {
            div { class: "features-section",
                SectionHeader {
                    title: "Cool Features",
                    description: "Techniques and details worth a closer look".to_string(),
                }
                div { class: "features-grid",
                    for (i, feature) in scene.cool_features.iter().enumerate() {
                        div { key: "{i}", class: "feature-item",
                            if let Some(image) = feature.image.clone() {
                                button {
                                    class: "feature-image-btn",
                                    r#type: "button",
                                    "aria-label": format!("Enlarge {}", feature.title),
                                    // A feature image opens on its own
                                    onclick: {
                                        let image = image.clone();
                                        move |_| dispatch(nav, ViewAction::OpenModal {
                                            images: vec![image.clone()],
                                            index: 0,
                                        })
                                    },
                                    SkeletonImage {
                                        key: "{image}",
                                        src: image.clone(),
                                        alt: feature.title.clone(),
                                        class: "feature-image".to_string(),
                                    }
                                }
                            }
                            div { class: "feature-text",
                                h3 { class: "feature-title",
                                    if let Some(icon) = &feature.icon {
                                        span { class: "feature-icon", "aria-hidden": "true", "{icon}" }
                                    }
                                    "{feature.title}"
                                }
                                p { class: "feature-desc", "{feature.description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
