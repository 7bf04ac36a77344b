//! Game Card
//!
//! Cover screenshot with the title and summary on a frosted overlay.

use dioxus::prelude::*;
use portfolio_core::{ProjectKind, ProjectRef};
use portfolio_ui::{SkeletonImage, TagList};

use super::{activate_on_key, card_label, select};
use crate::context::use_nav;

#[component]
pub fn GameCard(project: ProjectRef) -> Element {
    let nav = use_nav();
    let engine = match &project.kind {
        ProjectKind::Game(game) => game.engine.clone(),
        _ => None,
    };
    let cover = project.cover_image().map(str::to_string);
    let label = card_label(&project);
    let on_key = project.clone();
    let on_click = project.clone();

    rsx! {
        article {
            class: "card game-card",
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
                        alt: format!("{} cover", project.title),
                        class: "card-image".to_string(),
                    }
                }
                if let Some(engine) = engine {
                    span { class: "card-badge", "{engine}" }
                }
            }
            div { class: "card-body",
                h3 { class: "card-title", "{project.title}" }
                p { class: "card-summary", "{project.summary}" }
            }
            TagList { tags: project.tags.clone() }
        }
    }
}
