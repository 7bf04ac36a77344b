//! Reusable UI components.
//!
//! All components share the frosted-glass look defined by the app's global
//! stylesheet and only emit class names it knows.

mod button;
mod image;
mod section;
mod tab_bar;
mod tags;

pub use button::*;
pub use image::*;
pub use section::*;
pub use tab_bar::*;
pub use tags::*;
