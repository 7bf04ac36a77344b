//! UI Components for the portfolio showcase.
//!
//! Frosted-glass components wired to the navigation context. Presentational
//! building blocks live in the `portfolio-ui` crate.

pub mod cards;
mod about_section;
mod dots_bg;
mod error_fallback;
mod image_modal;
mod navbar;
pub mod project;

pub use about_section::AboutSection;
pub use cards::ProjectCard;
pub use dots_bg::DotsBackground;
pub use error_fallback::ErrorFallback;
pub use image_modal::ImageModal;
pub use navbar::Navbar;
pub use project::ProjectDetail;
