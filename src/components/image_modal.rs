//! Image Modal
//!
//! Full-screen lightbox over the page. While mounted it:
//! - locks page scrolling and restores the exact offset on unmount
//! - resolves viewport-dependent behaviour once (backdrop click on mobile)
//! - keeps keyboard focus on its controls (Tab/Shift+Tab wrap)
//! - listens on the window for Escape and the arrow keys, so they work
//!   wherever focus sits

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{
    KeyInput, Lightbox, LightboxAction, LightboxControl, ScrollLock, ViewAction,
};
use serde::Deserialize;

use crate::context::{dispatch, use_config, use_nav, Nav};

/// Locks the body in place and reports what the modal needs to know
const LOCK_SCRIPT: &str = r#"
    const scrollY = window.scrollY;
    const body = document.body.style;
    body.overflow = 'hidden';
    body.position = 'fixed';
    body.top = `-${scrollY}px`;
    body.width = '100%';
    return { scroll_y: scrollY, viewport_width: window.innerWidth };
"#;

/// Forwards lightbox keys pressed anywhere in the document
const KEY_LISTENER: &str = r#"
    const onKey = (event) => {
        if (['Escape', 'Esc', 'ArrowLeft', 'ArrowRight'].includes(event.key)) {
            event.preventDefault();
            dioxus.send(event.key);
        }
    };
    window.__lightboxKeys = onKey;
    window.addEventListener('keydown', onKey);
"#;

const KEY_LISTENER_REMOVE: &str = r#"
    if (window.__lightboxKeys) {
        window.removeEventListener('keydown', window.__lightboxKeys);
        window.__lightboxKeys = null;
    }
"#;

/// Decode a key forwarded by the window listener
fn forwarded_key(key: &str) -> Option<KeyInput> {
    let key = KeyInput::parse(key);
    key.drives_lightbox().then_some(key)
}

#[derive(Debug, Deserialize)]
struct MountProbe {
    scroll_y: f64,
    viewport_width: f64,
}

type ControlMap = Signal<HashMap<LightboxControl, Rc<MountedData>>>;

/// Undo the body lock; scroll back only when an offset was captured
fn unlock_script(offset: Option<f64>) -> String {
    let mut script = String::from(
        "const body = document.body.style; \
         body.overflow = ''; body.position = ''; body.top = ''; body.width = '';",
    );
    if let Some(y) = offset {
        script.push_str(&format!(" window.scrollTo(0, {y});"));
    }
    script
}

fn image_class(zoomed: bool) -> &'static str {
    if zoomed {
        "modal-image zoomed"
    } else {
        "modal-image"
    }
}

fn image_style(loaded: bool, zoomed: bool) -> String {
    format!(
        "opacity: {}; cursor: {};",
        if loaded { 1 } else { 0 },
        if zoomed { "zoom-out" } else { "zoom-in" }
    )
}

fn focus(controls: ControlMap, target: LightboxControl) {
    let Some(element) = controls.read().get(&target).cloned() else {
        return;
    };
    spawn(async move {
        if let Err(e) = element.set_focus(true).await {
            tracing::debug!(?target, "Could not move focus: {:?}", e);
        }
    });
}

/// A disabled button drops focus to the page; pull it back to Close
fn keep_focus_inside(nav: Nav, controls: ControlMap, focused: Signal<Option<LightboxControl>>) {
    let Some(current) = focused() else {
        return;
    };
    let still_focusable = nav
        .read()
        .state()
        .lightbox()
        .is_some_and(|lightbox| lightbox.focusable_controls().contains(&current));
    if !still_focusable {
        focus(controls, LightboxControl::Close);
    }
}

#[component]
pub fn ImageModal(lightbox: Lightbox) -> Element {
    let nav = use_nav();
    let config = use_config();
    let scroll_lock = use_hook(|| Rc::new(RefCell::new(ScrollLock::new())));
    let controls: ControlMap = use_signal(HashMap::new);
    let mut focused: Signal<Option<LightboxControl>> = use_signal(|| None);

    // Lock scrolling and resolve per-mount behaviour
    let lock = scroll_lock.clone();
    use_hook(move || {
        spawn(async move {
            match document::eval(LOCK_SCRIPT).join::<MountProbe>().await {
                Ok(probe) => {
                    lock.borrow_mut().acquire(probe.scroll_y);
                    let mount = config.lightbox_for_viewport(probe.viewport_width);
                    tracing::debug!(
                        width = probe.viewport_width,
                        close_on_backdrop = mount.close_on_backdrop,
                        "Lightbox mounted"
                    );
                    dispatch(nav, ViewAction::Lightbox(LightboxAction::Mount(mount)));
                }
                Err(e) => tracing::warn!("Could not lock page scroll: {:?}", e),
            }
        });
    });

    let lock = scroll_lock.clone();
    use_drop(move || {
        let offset = lock.borrow_mut().release();
        let _ = document::eval(&unlock_script(offset));
        let _ = document::eval(KEY_LISTENER_REMOVE);
    });

    let act = move |action: LightboxAction| {
        dispatch(nav, ViewAction::Lightbox(action));
        keep_focus_inside(nav, controls, focused);
    };

    // Escape and arrows, for as long as the modal is mounted
    use_future(move || async move {
        let mut keys = document::eval(KEY_LISTENER);
        loop {
            match keys.recv::<String>().await {
                Ok(key) => {
                    if let Some(key) = forwarded_key(&key) {
                        act(LightboxAction::Key(key));
                    }
                }
                Err(e) => {
                    tracing::warn!("Lightbox key listener stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    // Focus trap only; the window listener handles the rest
    let ring = lightbox.clone();
    let onkeydown = move |evt: KeyboardEvent| {
        if KeyInput::parse(&evt.key().to_string()) == KeyInput::Tab {
            evt.prevent_default();
            let backwards = evt.modifiers().contains(Modifiers::SHIFT);
            focus(controls, ring.cycle_focus(focused(), backwards));
        }
    };

    let initial = lightbox.initial_focus();
    let register = move |control: LightboxControl, evt: MountedEvent| {
        let mut controls = controls;
        controls.write().insert(control, evt.data());
        if control == initial && focused.peek().is_none() {
            focus(controls, control);
        }
    };

    let index = lightbox.index();
    let loaded = lightbox.is_loaded();
    let zoomed = lightbox.is_zoomed();
    let current = lightbox.current().to_string();
    let alt = lightbox.alt_text();
    let counter = lightbox.counter();

    rsx! {
        div {
            class: "image-modal",
            role: "dialog",
            tabindex: "-1",
            "aria-modal": "true",
            "aria-label": "Image gallery",
            onkeydown: onkeydown,
            onclick: move |_| act(LightboxAction::BackdropClick),

            button {
                class: "modal-nav-btn modal-prev-btn",
                r#type: "button",
                "aria-label": "Previous image",
                disabled: !lightbox.can_prev(),
                onmounted: move |evt| register(LightboxControl::Prev, evt),
                onfocus: move |_| focused.set(Some(LightboxControl::Prev)),
                onclick: move |evt| {
                    evt.stop_propagation();
                    act(LightboxAction::PrevButton);
                },
                "◀"
            }

            div { class: "modal-image-wrapper",
                button {
                    class: "modal-close-btn",
                    r#type: "button",
                    "aria-label": "Close gallery",
                    onmounted: move |evt| register(LightboxControl::Close, evt),
                    onfocus: move |_| focused.set(Some(LightboxControl::Close)),
                    onclick: move |evt| {
                        evt.stop_propagation();
                        dispatch(nav, ViewAction::CloseModal);
                    },
                    "✕"
                }
                div { class: if zoomed { "modal-image-container zoomed" } else { "modal-image-container" },
                    if !loaded {
                        div { class: "modal-image-loader", "aria-label": "Loading image",
                            div { class: "spinner" }
                        }
                    }
                    img {
                        class: image_class(zoomed),
                        src: "{current}",
                        alt: "{alt}",
                        title: if zoomed { "Click to zoom out" } else { "Click to zoom in" },
                        style: image_style(loaded, zoomed),
                        onload: move |_| act(LightboxAction::ImageLoaded(index)),
                        onclick: move |evt| {
                            evt.stop_propagation();
                            act(LightboxAction::ToggleZoom);
                        },
                    }
                }
            }

            div { class: "modal-indicator", "aria-live": "polite", "{counter}" }

            button {
                class: "modal-nav-btn modal-next-btn",
                r#type: "button",
                "aria-label": "Next image",
                disabled: !lightbox.can_next(),
                onmounted: move |evt| register(LightboxControl::Next, evt),
                onfocus: move |_| focused.set(Some(LightboxControl::Next)),
                onclick: move |evt| {
                    evt.stop_propagation();
                    act(LightboxAction::NextButton);
                },
                "▶"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_scrolls_back_only_with_offset() {
        assert!(unlock_script(Some(420.0)).ends_with("window.scrollTo(0, 420);"));
        assert!(!unlock_script(None).contains("scrollTo"));
    }

    #[test]
    fn window_listener_forwards_only_lightbox_keys() {
        assert_eq!(forwarded_key("Escape"), Some(KeyInput::Escape));
        assert_eq!(forwarded_key("ArrowLeft"), Some(KeyInput::ArrowLeft));
        assert_eq!(forwarded_key("ArrowRight"), Some(KeyInput::ArrowRight));
        assert_eq!(forwarded_key("Tab"), None);
        assert_eq!(forwarded_key("Enter"), None);
    }

    #[test]
    fn key_listener_is_removed_by_name() {
        assert!(KEY_LISTENER.contains("window.__lightboxKeys = onKey"));
        assert!(KEY_LISTENER_REMOVE.contains("removeEventListener('keydown', window.__lightboxKeys)"));
    }

    #[test]
    fn image_hidden_until_loaded() {
        assert_eq!(image_style(false, false), "opacity: 0; cursor: zoom-in;");
        assert_eq!(image_style(true, true), "opacity: 1; cursor: zoom-out;");
        assert_eq!(image_class(true), "modal-image zoomed");
    }
}
