//! Scene Card

use dioxus::prelude::*;
use portfolio_core::{ProjectKind, ProjectRef};
use portfolio_ui::SkeletonImage;

use super::{activate_on_key, card_label, select};
use crate::context::use_nav;

/// Wide environment card with the engine and feature count
#[component]
pub fn SceneCard(project: ProjectRef) -> Element {
    let nav = use_nav();
    let (engine, features) = match &project.kind {
        ProjectKind::Scene(scene) => (scene.engine.clone(), scene.cool_features.len()),
        _ => (None, 0),
    };
    let cover = project.cover_image().map(str::to_string);
    let label = card_label(&project);
    let on_key = project.clone();
    let on_click = project.clone();

    rsx! {
        article {
            class: "card scene-card",
            role: "button",
            tabindex: "0",
            "aria-label": "{label}",
            onclick: move |_| select(nav, &on_click),
            onkeydown: move |evt| activate_on_key(evt, nav, &on_key),

            div { class: "card-media scene-media",
                if let Some(cover) = cover {
                    SkeletonImage {
                        key: "{cover}",
                        src: cover.clone(),
                        alt: format!("{} environment", project.title),
                        class: "card-image".to_string(),
                    }
                }
                div { class: "scene-overlay",
                    h3 { class: "card-title", "{project.title}" }
                    p { class: "card-summary", "{project.summary}" }
                    div { class: "scene-meta",
                        if let Some(engine) = engine {
                            span { class: "meta-chip", "{engine}" }
                        }
                        if features > 0 {
                            span { class: "meta-chip", "{features} highlighted techniques" }
                        }
                    }
                }
            }
        }
    }
}
