//! About Section
//!
//! Avatar, skills and bio, shown above the project tabs on the catalog view.

use dioxus::prelude::*;
use portfolio_ui::TagList;

use crate::context::use_catalog;

#[component]
pub fn AboutSection() -> Element {
    let catalog = use_catalog();
    let profile = &catalog.profile;

    rsx! {
        section { class: "about-section", id: "about",
            div { class: "about-glass about-glass-row",
                div { class: "about-left",
                    div { class: "about-avatar-wrapper",
                        img {
                            class: "about-avatar",
                            src: "{profile.avatar}",
                            alt: "{profile.name}",
                            loading: "eager",
                        }
                    }
                    div { class: "about-spacer", div { class: "about-spacer-line" } }
                    TagList {
                        tags: profile.skills.clone(),
                        class: "about-interests".to_string(),
                        tag_class: "about-tag".to_string(),
                    }
                }
                div { class: "about-content about-content-right",
                    h2 { class: "about-name-glow", "{profile.name}" }
                    p { "{profile.bio}" }
                }
            }
        }
    }
}
