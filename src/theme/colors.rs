//! Palette constants for colors set from Rust rather than the stylesheet.
//!
//! Frosted glass on deep navy; the stylesheet defines the same values as
//! CSS custom properties.

/// Decorative dots and their connecting lines
pub const SKY: &str = "#7ecbff";

/// Base opacity of a dot
pub const DOT_OPACITY: &str = "0.55";
