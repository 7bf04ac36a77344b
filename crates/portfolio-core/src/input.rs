//! Keyboard input decoding.
//!
//! Key names follow the DOM `KeyboardEvent.key` convention, which is also
//! what Dioxus's `Key` displays as.

/// Keys the showcase reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Tab,
    Other,
}

impl KeyInput {
    pub fn parse(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => KeyInput::Escape,
            "ArrowLeft" | "Left" => KeyInput::ArrowLeft,
            "ArrowRight" | "Right" => KeyInput::ArrowRight,
            "Enter" => KeyInput::Enter,
            " " | "Space" | "Spacebar" => KeyInput::Space,
            "Tab" => KeyInput::Tab,
            _ => KeyInput::Other,
        }
    }

    /// Whether the key activates a focused card or thumbnail, like a click
    pub fn activates(&self) -> bool {
        matches!(self, KeyInput::Enter | KeyInput::Space)
    }

    /// Whether an open lightbox handles the key wherever focus sits
    pub fn drives_lightbox(&self) -> bool {
        matches!(self, KeyInput::Escape | KeyInput::ArrowLeft | KeyInput::ArrowRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dom_key_names() {
        assert_eq!(KeyInput::parse("Escape"), KeyInput::Escape);
        assert_eq!(KeyInput::parse("ArrowLeft"), KeyInput::ArrowLeft);
        assert_eq!(KeyInput::parse("ArrowRight"), KeyInput::ArrowRight);
        assert_eq!(KeyInput::parse(" "), KeyInput::Space);
        assert_eq!(KeyInput::parse("Tab"), KeyInput::Tab);
        assert_eq!(KeyInput::parse("a"), KeyInput::Other);
    }

    #[test]
    fn only_enter_and_space_activate() {
        assert!(KeyInput::Enter.activates());
        assert!(KeyInput::Space.activates());
        assert!(!KeyInput::Escape.activates());
        assert!(!KeyInput::Other.activates());
    }

    #[test]
    fn lightbox_keys() {
        assert!(KeyInput::parse("Escape").drives_lightbox());
        assert!(KeyInput::parse("ArrowLeft").drives_lightbox());
        assert!(KeyInput::parse("Right").drives_lightbox());
        assert!(!KeyInput::Tab.drives_lightbox());
        assert!(!KeyInput::Enter.drives_lightbox());
    }
}
