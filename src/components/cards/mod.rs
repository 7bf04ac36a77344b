//! Catalog Cards
//!
//! One card per project in the tabbed grid. Cards are focusable and select
//! their project on click, Enter or Space.

mod game_card;
mod modeling_card;
mod scene_card;

pub use game_card::GameCard;
pub use modeling_card::ModelingCard;
pub use scene_card::SceneCard;

use dioxus::prelude::*;
use portfolio_core::{KeyInput, ProjectKind, ProjectRef, ViewAction};

use crate::context::{dispatch, Nav};

/// Card matching the project's kind
#[component]
pub fn ProjectCard(project: ProjectRef) -> Element {
    match project.kind {
        ProjectKind::Game(_) => rsx! { GameCard { project } },
        ProjectKind::Modeling(_) => rsx! { ModelingCard { project } },
        ProjectKind::Scene(_) => rsx! { SceneCard { project } },
    }
}

/// Select the card's project
pub(crate) fn select(nav: Nav, project: &ProjectRef) {
    dispatch(nav, ViewAction::SelectProject(project.clone()));
}

/// Keyboard activation for a focused card
pub(crate) fn activate_on_key(evt: KeyboardEvent, nav: Nav, project: &ProjectRef) {
    if KeyInput::parse(&evt.key().to_string()).activates() {
        evt.prevent_default();
        select(nav, project);
    }
}

/// Accessible name for a card
pub(crate) fn card_label(project: &ProjectRef) -> String {
    format!("View {} details", project.title)
}
