//! Project records and their image collections

use serde::{Deserialize, Serialize};

use crate::types::ProjectId;

use super::video::to_embed_url;

/// Project that never gets the "Academic Project" badge
const NON_ACADEMIC_PROJECT: &str = "star-wars-scene";

/// A single showcased project.
///
/// Owned by the catalog; the view state machine only reads `id` and the
/// image collections that feed the lightbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(flatten)]
    pub kind: ProjectKind,
}

/// Kind-specific data, tagged by `type` in the catalog document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProjectKind {
    Game(GameInfo),
    Modeling(ModelingInfo),
    Scene(SceneInfo),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub mechanics: Vec<Mechanic>,
}

/// Gameplay feature listed on a game's detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mechanic {
    pub icon: String,
    pub label: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelingInfo {
    #[serde(default)]
    pub renders: Vec<String>,
    #[serde(default)]
    pub paintwork: Vec<String>,
    #[serde(default)]
    pub progression: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub software: Option<String>,
    #[serde(default)]
    pub render: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneInfo {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub cool_features: Vec<CoolFeature>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// Highlighted technique on a scene's detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolFeature {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A named slice of a project's concatenated gallery
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySection<'a> {
    pub title: &'static str,
    pub description: Option<&'static str>,
    /// Index of the section's first image within `Project::gallery()`
    pub offset: usize,
    pub images: &'a [String],
}

impl Project {
    /// Ordered lightbox input for the project's gallery sections.
    ///
    /// Scene feature images are not part of it; each opens on its own.
    pub fn gallery(&self) -> Vec<String> {
        match &self.kind {
            ProjectKind::Game(game) => game.images.clone(),
            ProjectKind::Modeling(_) => self
                .gallery_sections()
                .into_iter()
                .flat_map(|section| section.images.iter().cloned())
                .collect(),
            ProjectKind::Scene(scene) => scene.images.clone(),
        }
    }

    /// Non-empty gallery sections in display order.
    ///
    /// Offsets index into `gallery()`, so image `k` of a section opens the
    /// lightbox at `offset + k` over the whole concatenated list.
    pub fn gallery_sections(&self) -> Vec<GallerySection<'_>> {
        let candidates: Vec<(&'static str, Option<&'static str>, &[String])> = match &self.kind {
            ProjectKind::Game(game) => vec![("Screenshots", None, game.images.as_slice())],
            ProjectKind::Modeling(m) => vec![
                ("Final Renders", None, m.renders.as_slice()),
                (
                    "Paint Work in Substance",
                    Some("Texturing and material work created in Substance Painter"),
                    m.paintwork.as_slice(),
                ),
                (
                    "Progression & Topology",
                    Some("Development stages showing the modeling process and topology work"),
                    m.progression.as_slice(),
                ),
                (
                    "Reference Photos",
                    Some("Source images and references used during the modeling process"),
                    m.references.as_slice(),
                ),
            ],
            ProjectKind::Scene(scene) => vec![(
                "Environment Showcase",
                Some("High-resolution screenshots capturing the atmosphere and detail of this environment"),
                scene.images.as_slice(),
            )],
        };

        let mut offset = 0;
        let mut sections = Vec::new();
        for (title, description, images) in candidates {
            if images.is_empty() {
                continue;
            }
            sections.push(GallerySection {
                title,
                description,
                offset,
                images,
            });
            offset += images.len();
        }
        sections
    }

    /// Image shown on the project's catalog card
    pub fn cover_image(&self) -> Option<&str> {
        match &self.kind {
            ProjectKind::Game(game) => game.images.first(),
            ProjectKind::Modeling(m) => m.renders.first().or(m.references.first()),
            ProjectKind::Scene(scene) => scene.images.first(),
        }
        .map(String::as_str)
    }

    /// Embeddable video URL, if the project has one
    pub fn video_embed(&self) -> Option<String> {
        let url = match &self.kind {
            ProjectKind::Game(game) => game.youtube.as_deref(),
            ProjectKind::Scene(scene) => scene.video_url.as_deref(),
            ProjectKind::Modeling(_) => None,
        }?;
        let embed = to_embed_url(url);
        (!embed.is_empty()).then_some(embed)
    }

    /// Whether the detail view shows the "Academic Project" badge
    pub fn is_academic(&self) -> bool {
        matches!(self.kind, ProjectKind::Game(_)) && self.id.as_str() != NON_ACADEMIC_PROJECT
    }

    /// Whether the detail view shows the team collaboration credit
    pub fn has_team_credit(&self) -> bool {
        match &self.kind {
            ProjectKind::Game(game) => game.team.as_deref() == Some("2") && self.is_academic(),
            _ => false,
        }
    }
}
