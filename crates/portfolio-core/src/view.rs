//! View state machine.
//!
//! ```text
//!                 select project                  open modal
//!   Catalog(tab) ───────────────► Detail(project) ──────────► Detail+Modal
//!     │  ▲  ▲                        │    ▲                       │
//!     │  │  └──── back / pop ────────┘    └── close / Esc / pop ──┘
//!     │  │
//!     │  └──── close / Esc / pop ──── Catalog+Modal
//!     └─────────────── open modal ──────────▲
//!
//!   go home: any state ──► Catalog(Games)
//! ```
//!
//! The active tab is carried through detail and modal states so leaving
//! the detail view lands on the tab it was opened from.

use crate::catalog::ProjectRef;
use crate::error::{PortfolioError, PortfolioResult};
use crate::history::HistoryEntry;
use crate::lightbox::{Lightbox, LightboxAction, LightboxOutcome};
use crate::types::CatalogTab;

/// Which view is showing
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Catalog {
        tab: CatalogTab,
    },
    Detail {
        tab: CatalogTab,
        project: ProjectRef,
    },
    DetailModal {
        tab: CatalogTab,
        project: ProjectRef,
        lightbox: Lightbox,
    },
    CatalogModal {
        tab: CatalogTab,
        lightbox: Lightbox,
    },
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::Catalog {
            tab: CatalogTab::default(),
        }
    }
}

/// Input to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    SelectTab(CatalogTab),
    SelectProject(ProjectRef),
    OpenModal { images: Vec<String>, index: usize },
    CloseModal,
    /// Explicit Back button
    GoBack,
    /// Logo / home button
    GoHome,
    /// Native back/forward
    Pop,
    Lightbox(LightboxAction),
}

impl ViewAction {
    /// Short description for logs and errors
    pub fn label(&self) -> &'static str {
        match self {
            ViewAction::SelectTab(_) => "select tab",
            ViewAction::SelectProject(_) => "select project",
            ViewAction::OpenModal { .. } => "open modal",
            ViewAction::CloseModal => "close modal",
            ViewAction::GoBack => "go back",
            ViewAction::GoHome => "go home",
            ViewAction::Pop => "handle history pop",
            ViewAction::Lightbox(_) => "drive lightbox",
        }
    }
}

/// Side effects of a successful transition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    /// History entry to push, if the transition is back-navigable
    pub push: Option<HistoryEntry>,
}

impl Transition {
    fn none() -> Self {
        Self::default()
    }

    fn push(entry: HistoryEntry) -> Self {
        Self { push: Some(entry) }
    }
}

impl ViewState {
    /// Short state name for logs and errors
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::Catalog { .. } => "catalog",
            ViewState::Detail { .. } => "detail",
            ViewState::DetailModal { .. } => "detail with modal",
            ViewState::CatalogModal { .. } => "catalog with modal",
        }
    }

    pub fn tab(&self) -> CatalogTab {
        match self {
            ViewState::Catalog { tab }
            | ViewState::Detail { tab, .. }
            | ViewState::DetailModal { tab, .. }
            | ViewState::CatalogModal { tab, .. } => *tab,
        }
    }

    /// Selected project, if a detail view is showing (with or without modal)
    pub fn selection(&self) -> Option<&ProjectRef> {
        match self {
            ViewState::Detail { project, .. } | ViewState::DetailModal { project, .. } => {
                Some(project)
            }
            ViewState::Catalog { .. } | ViewState::CatalogModal { .. } => None,
        }
    }

    pub fn lightbox(&self) -> Option<&Lightbox> {
        match self {
            ViewState::DetailModal { lightbox, .. } | ViewState::CatalogModal { lightbox, .. } => {
                Some(lightbox)
            }
            ViewState::Catalog { .. } | ViewState::Detail { .. } => None,
        }
    }

    fn lightbox_mut(&mut self) -> Option<&mut Lightbox> {
        match self {
            ViewState::DetailModal { lightbox, .. } | ViewState::CatalogModal { lightbox, .. } => {
                Some(lightbox)
            }
            ViewState::Catalog { .. } | ViewState::Detail { .. } => None,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.lightbox().is_some()
    }

    /// Whether the catalog (tabs and cards) is the base view
    pub fn shows_catalog(&self) -> bool {
        matches!(self, ViewState::Catalog { .. } | ViewState::CatalogModal { .. })
    }

    fn invalid(&self, action: &'static str) -> PortfolioError {
        PortfolioError::InvalidTransition {
            action,
            state: self.name(),
        }
    }

    /// Apply `action`. On error the state is left untouched.
    pub fn apply(&mut self, action: ViewAction) -> PortfolioResult<Transition> {
        match action {
            ViewAction::SelectTab(tab) => self.select_tab(tab),
            ViewAction::SelectProject(project) => self.select_project(project),
            ViewAction::OpenModal { images, index } => self.open_modal(images, index),
            ViewAction::CloseModal => Ok(self.close_modal()),
            ViewAction::GoBack | ViewAction::Pop => Ok(self.back()),
            ViewAction::GoHome => Ok(self.go_home()),
            ViewAction::Lightbox(action) => self.drive_lightbox(action),
        }
    }

    fn select_tab(&mut self, tab: CatalogTab) -> PortfolioResult<Transition> {
        match self {
            ViewState::Catalog { tab: current } => {
                *current = tab;
                Ok(Transition::none())
            }
            ViewState::Detail { .. }
            | ViewState::DetailModal { .. }
            | ViewState::CatalogModal { .. } => Err(self.invalid("select tab")),
        }
    }

    fn select_project(&mut self, project: ProjectRef) -> PortfolioResult<Transition> {
        match self {
            ViewState::Catalog { tab } => {
                let entry = HistoryEntry::AtDetail(project.id.clone());
                *self = ViewState::Detail { tab: *tab, project };
                Ok(Transition::push(entry))
            }
            ViewState::Detail { .. }
            | ViewState::DetailModal { .. }
            | ViewState::CatalogModal { .. } => Err(self.invalid("select project")),
        }
    }

    fn open_modal(&mut self, images: Vec<String>, index: usize) -> PortfolioResult<Transition> {
        let next = match self {
            ViewState::Catalog { tab } => ViewState::CatalogModal {
                tab: *tab,
                lightbox: Lightbox::open(images, index)?,
            },
            ViewState::Detail { tab, project } => ViewState::DetailModal {
                tab: *tab,
                project: project.clone(),
                lightbox: Lightbox::open(images, index)?,
            },
            ViewState::DetailModal { .. } | ViewState::CatalogModal { .. } => {
                return Err(self.invalid("open modal"))
            }
        };
        *self = next;
        Ok(Transition::push(HistoryEntry::LightboxOpenMarker))
    }

    /// Modal back to its base view. Never pushes and never touches the
    /// selection; a no-op without a modal.
    fn close_modal(&mut self) -> Transition {
        match self {
            ViewState::DetailModal { tab, project, .. } => {
                *self = ViewState::Detail {
                    tab: *tab,
                    project: project.clone(),
                };
            }
            ViewState::CatalogModal { tab, .. } => {
                *self = ViewState::Catalog { tab: *tab };
            }
            ViewState::Catalog { .. } | ViewState::Detail { .. } => {}
        }
        Transition::none()
    }

    /// Shared by the Back button and native pops: modal first, then selection
    fn back(&mut self) -> Transition {
        match self {
            ViewState::DetailModal { .. } | ViewState::CatalogModal { .. } => self.close_modal(),
            ViewState::Detail { tab, .. } => {
                *self = ViewState::Catalog { tab: *tab };
                Transition::push(HistoryEntry::AtCatalog)
            }
            ViewState::Catalog { .. } => Transition::none(),
        }
    }

    fn go_home(&mut self) -> Transition {
        *self = ViewState::Catalog {
            tab: CatalogTab::Games,
        };
        Transition::push(HistoryEntry::AtCatalog)
    }

    fn drive_lightbox(&mut self, action: LightboxAction) -> PortfolioResult<Transition> {
        let Some(lightbox) = self.lightbox_mut() else {
            return Err(self.invalid("drive lightbox"));
        };
        match lightbox.apply(action) {
            LightboxOutcome::Stay => Ok(Transition::none()),
            LightboxOutcome::Close => Ok(self.close_modal()),
        }
    }
}
