use dioxus::prelude::*;
use portfolio_core::{ProjectKind, ProjectRef};
use portfolio_ui::{MetaItem, SectionHeader, TagList};

use super::{GalleryGrid, VideoEmbed};

/// Placeholder for missing meta values
const UNKNOWN: &str = "—";

#[component]
pub fn GameDetail(project: ProjectRef) -> Element {
    let ProjectKind::Game(game) = &project.kind else {
        return rsx! {};
    };
    let gallery = project.gallery();
    let video = project.video_embed();
    let meta = |value: &Option<String>| Some(value.clone().unwrap_or_else(|| UNKNOWN.to_string()));

    rsx! {
        h1 { id: "project-title", class: "detail-title", "{project.title}" }
        p { class: "detail-summary", "{project.summary}" }

        div { class: "modeling-meta-info",
            MetaItem {
                icon: "👤",
                label: "Role",
                value: Some(game.role.clone().unwrap_or_else(|| "Programmer".to_string())),
            }
            MetaItem { icon: "👥", label: "Team", value: meta(&game.team) }
            MetaItem { icon: "⏳", label: "Time", value: meta(&game.time) }
            MetaItem { icon: "🛠️", label: "Engine", value: meta(&game.engine) }
        }

        if project.is_academic() {
            div { class: "academic-badge",
                span { "aria-hidden": "true", "🎓" }
                "Academic Project"
            }
        }

        TagList { tags: project.tags.clone(), class: "card-footer detail-tags".to_string() }

        GalleryGrid {
            images: gallery.clone(),
            gallery: gallery.clone(),
            title: format!("{} screenshot", project.title),
        }

        if let Some(src) = video {
            div { class: "video-section",
                SectionHeader {
                    title: "Game Preview",
                    description: "Watch the gameplay in action".to_string(),
                }
                VideoEmbed { src, title: format!("{} preview", project.title) }
            }
        }

        if let Some(details) = &project.details {
            div { class: "detail-body", "{details}" }
        }

        if !game.mechanics.is_empty() {
            div { class: "mechanics-section",
                SectionHeader {
                    title: "Game Mechanics",
                    description: "Core gameplay features and systems".to_string(),
                }
                div { class: "mechanics-list-grid",
                    for (i, mechanic) in game.mechanics.iter().enumerate() {
                        div { key: "{i}", class: "mechanic-item",
                            span { class: "mechanic-icon", "aria-hidden": "true", "{mechanic.icon}" }
                            div { class: "mechanic-label-row", strong { "{mechanic.label}" } }
                            p { class: "mechanic-desc", "{mechanic.desc}" }
                        }
                    }
                }
            }
        }

        if project.has_team_credit() {
            div { class: "team-credit",
                h3 { class: "team-credit-title",
                    span { "aria-hidden": "true", "🤝" }
                    "Team Collaboration"
                }
                p { class: "team-credit-text",
                    "Built by a team of two: I handled programming and gameplay systems while my teammate created the art, sound and visual effects."
                }
            }
        }
    }
}
