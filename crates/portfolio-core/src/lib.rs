//! Portfolio Showcase Core Library
//!
//! View/navigation state machine, history synchronization and lightbox
//! controller for a single-page project showcase.
//!
//! ## Overview
//!
//! The showcase lists projects under three tabs (games, 3D modeling, scenes),
//! opens a detail view per project and browses project images in a
//! lightbox. This crate holds all of that logic free of any UI framework:
//!
//! - [`ViewState`]: explicit `Catalog | Detail | Detail+Modal | Catalog+Modal`
//!   union with total transition functions
//! - [`HistoryBridge`]: pushes history entries for transitions and turns
//!   native back/forward into transitions
//! - [`Lightbox`]: current image, zoom, keyboard and focus rules
//! - [`Catalog`]: the embedded project data set
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_core::{Catalog, HistoryBridge, MemoryHistory, ViewAction, ViewState};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let mut nav = HistoryBridge::new(MemoryHistory::new());
//!
//! let project = catalog.find("slingshot").unwrap().clone();
//! nav.dispatch(ViewAction::SelectProject(project)).unwrap();
//! assert!(matches!(nav.state(), ViewState::Detail { .. }));
//!
//! nav.dispatch(ViewAction::GoBack).unwrap();
//! assert!(matches!(nav.state(), ViewState::Catalog { .. }));
//! ```

pub mod catalog;
pub mod config;
pub mod effects;
pub mod error;
pub mod history;
pub mod input;
pub mod lightbox;
pub mod logging;
pub mod types;
pub mod view;

// Re-exports
pub use catalog::{Catalog, Profile, Project, ProjectKind, ProjectRef};
pub use config::{DotFieldParams, LightboxConfig, PortfolioConfig};
pub use error::{PortfolioError, PortfolioResult};
pub use history::{
    resolve_fragment, HistoryBackend, HistoryBridge, HistoryEntry, MemoryHistory, Route,
};
pub use input::KeyInput;
pub use lightbox::{Lightbox, LightboxAction, LightboxControl, LightboxOutcome, ScrollLock};
pub use types::{CatalogTab, ProjectId};
pub use view::{Transition, ViewAction, ViewState};
