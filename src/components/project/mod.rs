//! Project Detail Views
//!
//! One view per project kind, all under a shared Back button. Every image
//! opens the lightbox over the project's gallery.

mod game_detail;
mod gallery;
mod modeling_detail;
mod scene_detail;

pub use gallery::{GalleryGrid, VideoEmbed};

use dioxus::prelude::*;
use portfolio_core::{ProjectKind, ProjectRef, ViewAction};
use portfolio_ui::{Button, ButtonVariant};

use crate::context::{dispatch, use_nav};
use game_detail::GameDetail;
use modeling_detail::ModelingDetail;
use scene_detail::SceneDetail;

/// Detail view for the selected project
#[component]
pub fn ProjectDetail(project: ProjectRef) -> Element {
    let nav = use_nav();
    let body = match project.kind {
        ProjectKind::Game(_) => rsx! { GameDetail { project: project.clone() } },
        ProjectKind::Modeling(_) => rsx! { ModelingDetail { project: project.clone() } },
        ProjectKind::Scene(_) => rsx! { SceneDetail { project: project.clone() } },
    };

    rsx! {
        section { class: "project-detail", "aria-labelledby": "project-title",
            Button {
                variant: ButtonVariant::Back,
                aria_label: "Go back to projects".to_string(),
                onclick: move |_| dispatch(nav, ViewAction::GoBack),
                "← Back"
            }
            div { class: "detail-card", {body} }
        }
    }
}
