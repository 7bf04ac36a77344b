//! Showcase Page
//!
//! The whole single-page site: navbar, then either the catalog (about
//! section, tabs and cards) or the selected project's detail view, with the
//! lightbox on top when open.

use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{resolve_fragment, Catalog, CatalogTab, HistoryBridge, ViewAction};
use portfolio_ui::{TabBar, PROJECTS_PANEL_ID};

use crate::components::{
    AboutSection, DotsBackground, ImageModal, Navbar, ProjectCard, ProjectDetail,
};
use crate::context::{dispatch, use_catalog, use_nav, Nav};
use crate::history::{listen_for_pops, DomHistory};

#[component]
pub fn Showcase(catalog: Arc<Catalog>) -> Element {
    let config = use_hook(|| Arc::new(crate::startup().config.clone()));
    let mut nav: Nav = use_signal(|| HistoryBridge::new(DomHistory::new()));

    use_context_provider(|| catalog.clone());
    use_context_provider(|| config.clone());
    use_context_provider(|| nav);

    // Native back/forward
    use_future(move || listen_for_pops(nav));

    // Launch target from the command line
    let launch_catalog = catalog.clone();
    use_effect(move || {
        let Some(id) = crate::startup().open.as_deref() else {
            return;
        };
        let route = resolve_fragment(&launch_catalog, id);
        if let Err(e) = nav.write().open_route(route, &launch_catalog) {
            tracing::warn!(%id, "Could not open launch project: {}", e);
        }
    });

    let state = nav.read().state().clone();

    rsx! {
        DotsBackground {}
        Navbar {}
        main { class: "main-content",
            if let Some(project) = state.selection() {
                ProjectDetail { key: "{project.id}", project: project.clone() }
            } else {
                CatalogView { tab: state.tab() }
            }
        }
        if let Some(lightbox) = state.lightbox() {
            ImageModal { lightbox: lightbox.clone() }
        }
    }
}

/// About section plus the tabbed project grid
#[component]
fn CatalogView(tab: CatalogTab) -> Element {
    let nav = use_nav();
    let catalog = use_catalog();
    let projects = catalog.projects(tab).to_vec();

    rsx! {
        AboutSection {}
        section { id: "projects", class: "projects-section",
            h2 { class: "projects-heading", "Projects" }
            TabBar {
                active: tab,
                on_select: move |tab| dispatch(nav, ViewAction::SelectTab(tab)),
            }
            div {
                id: PROJECTS_PANEL_ID,
                class: tab.grid_class(),
                role: "tabpanel",
                for project in projects {
                    ProjectCard { key: "{project.id}", project: project.clone() }
                }
            }
        }
    }
}
