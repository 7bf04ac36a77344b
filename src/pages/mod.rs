//! Page-level components.

mod showcase;

pub use showcase::Showcase;
