//! Button Components
//!
//! - `Button`: text buttons styled by [`ButtonVariant`] (back, refresh)
//! - `IconButton`: compact icon-only actions, such as a card's preview

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Detail view back button
    Back,
    /// Error screen refresh button
    Refresh,
    /// Navbar resume link style
    Resume,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Back => "back-btn",
            ButtonVariant::Refresh => "error-refresh-btn",
            ButtonVariant::Resume => "nav-resume-btn",
        }
    }
}

/// Join a base class with optional extra classes
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Accessible label for screen readers
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Back,
///         aria_label: "Go back to projects".to_string(),
///         onclick: move |_| go_back(),
///         "← Back"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": props.aria_label.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<MouseEvent>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |evt| props.onclick.call(evt),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Back.class(), "back-btn");
        assert_eq!(ButtonVariant::Refresh.class(), "error-refresh-btn");
        assert_eq!(ButtonVariant::Resume.class(), "nav-resume-btn");
    }

    #[test]
    fn join_classes_skips_blank_extras() {
        assert_eq!(join_classes("icon-btn", None), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("  ")), "icon-btn");
        assert_eq!(
            join_classes("icon-btn", Some("modal-close-btn")),
            "icon-btn modal-close-btn"
        );
    }
}
