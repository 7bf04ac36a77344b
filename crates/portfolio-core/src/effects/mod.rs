//! Decorative visual effects. Nothing here feeds back into navigation.

pub mod dots;

pub use dots::{Dot, DotField, Link};
