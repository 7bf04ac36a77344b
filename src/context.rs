//! Navigation context for the showcase.
//!
//! Provides the history bridge, catalog and configuration to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let nav = use_nav();
//! let catalog = use_catalog();
//!
//! dispatch(nav, ViewAction::SelectProject(project));
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{Catalog, HistoryBridge, PortfolioConfig, PortfolioError, ViewAction};

use crate::history::DomHistory;

/// Navigation state shared by every component.
///
/// One bridge per tab; all transitions go through it so history and view
/// never disagree.
pub type Nav = Signal<HistoryBridge<DomHistory>>;

/// Hook to access the navigation bridge from context
pub fn use_nav() -> Nav {
    use_context::<Nav>()
}

/// Hook to access the project catalog
pub fn use_catalog() -> Arc<Catalog> {
    use_context::<Arc<Catalog>>()
}

/// Hook to access the runtime configuration
pub fn use_config() -> Arc<PortfolioConfig> {
    use_context::<Arc<PortfolioConfig>>()
}

/// Apply a view action. Rejected actions are logged and otherwise ignored;
/// the view stays as it was.
pub fn dispatch(mut nav: Nav, action: ViewAction) {
    let label = action.label();
    let result = nav.write().dispatch(action);
    match result {
        Ok(()) => {}
        Err(PortfolioError::EmptyGallery) => {
            tracing::debug!(action = label, "Ignoring lightbox request without images");
        }
        Err(e) => {
            tracing::warn!(action = label, "Ignoring action: {}", e);
        }
    }
}

/// Native back/forward fired
pub fn dispatch_pop(mut nav: Nav) {
    if let Err(e) = nav.write().on_pop() {
        tracing::warn!("History pop failed: {}", e);
    }
}
