//! Core types for the portfolio showcase

use serde::{Deserialize, Serialize};

/// Stable identifier of a project record.
///
/// Doubles as the URL fragment of the project's detail view (`#<id>`),
/// so it is kept verbatim, case included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Catalog tab determining which project collection is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogTab {
    /// Game projects (card grid)
    #[default]
    Games,
    /// 3D modeling projects
    Modeling,
    /// Scenes and environments
    Scenes,
}

impl CatalogTab {
    pub const ALL: [CatalogTab; 3] = [CatalogTab::Games, CatalogTab::Modeling, CatalogTab::Scenes];

    /// Tab label on wide screens
    pub fn label(&self) -> &'static str {
        match self {
            CatalogTab::Games => "Games",
            CatalogTab::Modeling => "Modeling",
            CatalogTab::Scenes => "Scenes & Environments",
        }
    }

    /// Shorter tab label for narrow screens
    pub fn short_label(&self) -> &'static str {
        match self {
            CatalogTab::Games => "Games",
            CatalogTab::Modeling => "Modeling",
            CatalogTab::Scenes => "Environments",
        }
    }

    /// CSS class of the tab button
    pub fn class(&self) -> &'static str {
        match self {
            CatalogTab::Games => "tab-games",
            CatalogTab::Modeling => "tab-modeling",
            CatalogTab::Scenes => "tab-scenes",
        }
    }

    /// CSS class of the grid that lays out this tab's cards
    pub fn grid_class(&self) -> &'static str {
        match self {
            CatalogTab::Games => "card-grid",
            CatalogTab::Modeling => "modeling-grid",
            CatalogTab::Scenes => "scene-grid",
        }
    }
}

impl std::fmt::Display for CatalogTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
