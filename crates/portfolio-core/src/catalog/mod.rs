//! Project catalog: the static data set behind the showcase.
//!
//! The catalog is an embedded JSON document parsed once at startup. It is
//! read-only; the view state machine holds shared references to its
//! projects and never mutates them.
//!
//! ## Usage
//!
//! ```ignore
//! use portfolio_core::{Catalog, CatalogTab};
//!
//! let catalog = Catalog::builtin()?;
//! for project in catalog.projects(CatalogTab::Games) {
//!     println!("{}: {} images", project.title, project.gallery().len());
//! }
//! ```

mod project;
mod video;

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::{CatalogTab, ProjectId};

pub use project::{
    CoolFeature, GallerySection, GameInfo, Mechanic, ModelingInfo, Project,
    ProjectKind, SceneInfo,
};
pub use video::to_embed_url;

/// Shared, immutable handle to a catalog project
pub type ProjectRef = Arc<Project>;

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

/// Owner of the site: shown in the navbar and about section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub avatar: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    pub resume: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    X,
}

impl SocialKind {
    /// Short link text next to the icon
    pub fn text(&self) -> &'static str {
        match self {
            SocialKind::Github => "GitHub",
            SocialKind::Linkedin => "LinkedIn",
            SocialKind::X => "X",
        }
    }
}

#[derive(Deserialize)]
struct CatalogDocument {
    profile: Profile,
    #[serde(default)]
    games: Vec<Project>,
    #[serde(default)]
    modeling: Vec<Project>,
    #[serde(default)]
    scenes: Vec<Project>,
}

/// All projects, grouped by catalog tab
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub profile: Profile,
    games: Vec<ProjectRef>,
    modeling: Vec<ProjectRef>,
    scenes: Vec<ProjectRef>,
}

impl Catalog {
    /// Parse the catalog compiled into the binary
    pub fn builtin() -> PortfolioResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document.
    ///
    /// Ids must be non-empty and unique across all tabs, since they double
    /// as URL fragments.
    pub fn from_json(json: &str) -> PortfolioResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for project in doc.games.iter().chain(&doc.modeling).chain(&doc.scenes) {
            let id = project.id.as_str();
            if id.is_empty() {
                return Err(PortfolioError::Catalog(format!(
                    "project '{}' has an empty id",
                    project.title
                )));
            }
            if id == crate::history::CATALOG_FRAGMENT {
                return Err(PortfolioError::Catalog(format!(
                    "project id '{id}' collides with the catalog fragment"
                )));
            }
            if !seen.insert(id) {
                return Err(PortfolioError::Catalog(format!("duplicate project id '{id}'")));
            }
        }

        let wrap = |projects: Vec<Project>| projects.into_iter().map(Arc::new).collect();
        let catalog = Self {
            profile: doc.profile,
            games: wrap(doc.games),
            modeling: wrap(doc.modeling),
            scenes: wrap(doc.scenes),
        };
        tracing::debug!(
            games = catalog.games.len(),
            modeling = catalog.modeling.len(),
            scenes = catalog.scenes.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Projects shown under a tab
    pub fn projects(&self, tab: CatalogTab) -> &[ProjectRef] {
        match tab {
            CatalogTab::Games => &self.games,
            CatalogTab::Modeling => &self.modeling,
            CatalogTab::Scenes => &self.scenes,
        }
    }

    /// Look a project up by id across every tab
    pub fn find(&self, id: &str) -> Option<&ProjectRef> {
        self.iter().find(|p| p.id.as_str() == id)
    }

    /// Like `find`, but an unknown id is an error
    pub fn get(&self, id: &ProjectId) -> PortfolioResult<&ProjectRef> {
        self.find(id.as_str())
            .ok_or_else(|| PortfolioError::UnknownProject(id.to_string()))
    }

    /// Tab a project is listed under
    pub fn tab_of(&self, id: &str) -> Option<CatalogTab> {
        CatalogTab::ALL
            .into_iter()
            .find(|tab| self.projects(*tab).iter().any(|p| p.id.as_str() == id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRef> {
        self.games.iter().chain(&self.modeling).chain(&self.scenes)
    }

    pub fn len(&self) -> usize {
        self.games.len() + self.modeling.len() + self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.projects(CatalogTab::Games).len(), 3);
        assert_eq!(catalog.projects(CatalogTab::Modeling).len(), 3);
        assert_eq!(catalog.projects(CatalogTab::Scenes).len(), 1);
        assert_eq!(catalog.profile.name, "Ariel Cohen");
    }

    #[test]
    fn builtin_kinds_match_tabs() {
        let catalog = Catalog::builtin().unwrap();
        for tab in CatalogTab::ALL {
            for project in catalog.projects(tab) {
                let matches = match (&project.kind, tab) {
                    (ProjectKind::Game(_), CatalogTab::Games) => true,
                    (ProjectKind::Modeling(_), CatalogTab::Modeling) => true,
                    (ProjectKind::Scene(_), CatalogTab::Scenes) => true,
                    _ => false,
                };
                assert!(matches, "{} listed under the wrong tab", project.id);
                assert!(!project.gallery().is_empty());
            }
        }
    }

    #[test]
    fn find_and_tab_of() {
        let catalog = Catalog::builtin().unwrap();
        let slingshot = catalog.find("slingshot").unwrap();
        assert_eq!(slingshot.title, "Slingshot");
        assert_eq!(catalog.tab_of("cozmo-robot"), Some(CatalogTab::Modeling));
        assert_eq!(catalog.tab_of("star-wars-scene"), Some(CatalogTab::Scenes));
        assert!(catalog.find("ricochet").is_none(), "ids are case-sensitive");
        assert!(matches!(
            catalog.get(&ProjectId::from("nope")),
            Err(PortfolioError::UnknownProject(_))
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{
            "profile": {"name": "n", "role": "r", "bio": "b", "avatar": "a", "resume": "/r.pdf"},
            "games": [
                {"type": "game", "id": "dup", "title": "One", "summary": ""},
                {"type": "game", "id": "dup", "title": "Two", "summary": ""}
            ]
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(PortfolioError::Catalog(_))
        ));
    }

    #[test]
    fn reserved_fragment_is_rejected() {
        let json = r#"{
            "profile": {"name": "n", "role": "r", "bio": "b", "avatar": "a", "resume": "/r.pdf"},
            "scenes": [{"type": "scene", "id": "projects", "title": "T", "summary": ""}]
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(PortfolioError::Catalog(_))
        ));
    }

    #[test]
    fn malformed_document_is_a_serialization_error() {
        assert!(matches!(
            Catalog::from_json("{ not json"),
            Err(PortfolioError::Serialization(_))
        ));
    }

    #[test]
    fn game_metadata() {
        let catalog = Catalog::builtin().unwrap();
        let ricochet = catalog.find("Ricochet").unwrap();
        assert!(ricochet.is_academic());
        assert!(ricochet.has_team_credit());
        assert_eq!(
            ricochet.video_embed().as_deref(),
            Some("https://www.youtube.com/embed/pj1mnLXYDjI")
        );
        match &ricochet.kind {
            ProjectKind::Game(game) => assert_eq!(game.mechanics.len(), 6),
            other => panic!("expected game, got {other:?}"),
        }
    }
}
