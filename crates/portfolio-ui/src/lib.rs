//! Portfolio Showcase UI Components
//!
//! Presentational Dioxus components shared by the showcase views. None of
//! them hold navigation state; they render props and report clicks.
//!
//! ## Look
//!
//! Frosted glass on a deep navy background:
//! - **Cyan (#00eaff)**: accents, active tab, links
//! - **Sky (#7ecbff)**: decorative dots and lines
//! - **Frost**: translucent white panels with backdrop blur
//! - **Ink (#b6b6d6)**: secondary text

pub mod components;

pub use components::*;
