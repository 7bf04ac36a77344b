use dioxus::prelude::*;
use portfolio_core::{ProjectKind, ProjectRef};
use portfolio_ui::{MetaItem, SectionHeader, TagList};

use super::GalleryGrid;

/// Modeling detail: meta header, then one grid per non-empty gallery
/// section. All sections share one lightbox over the concatenated gallery.
#[component]
pub fn ModelingDetail(project: ProjectRef) -> Element {
    let ProjectKind::Modeling(model) = &project.kind else {
        return rsx! {};
    };
    let gallery = project.gallery();
    let sections = project.gallery_sections();

    rsx! {
        h1 { id: "project-title", class: "detail-title", "{project.title}" }
        p { class: "detail-summary", "{project.summary}" }

        div { class: "modeling-meta-info",
            MetaItem { icon: "⏳", label: "Time", value: model.time.clone() }
            MetaItem { icon: "🛠️", label: "Software", value: model.software.clone() }
            MetaItem { icon: "💡", label: "Render", value: model.render.clone() }
        }

        TagList {
            tags: project.tags.clone(),
            class: "modeling-tags-container".to_string(),
            tag_class: "modeling-tag".to_string(),
        }

        if let Some(details) = &project.details {
            div { class: "detail-body", "{details}" }
        }

        for (i, section) in sections.iter().enumerate() {
            div { key: "{section.title}", class: "modeling-section",
                SectionHeader {
                    title: section.title.to_string(),
                    description: section.description.map(str::to_string),
                    special: i == 0,
                }
                GalleryGrid {
                    images: section.images.to_vec(),
                    gallery: gallery.clone(),
                    offset: section.offset,
                    title: format!("{} {}", project.title, section.title.to_lowercase()),
                    class: "modeling-gallery".to_string(),
                }
            }
        }
    }
}
