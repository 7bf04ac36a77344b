//! Animated Dots Background
//!
//! Drifting dots joined by faint lines, nudged against the scroll direction.
//! Purely decorative: it reads scroll position and viewport width and never
//! touches navigation state.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::effects::DotField;

use crate::context::use_config;
use crate::theme::colors::{DOT_OPACITY, SKY};

/// Roughly 30 fps
const FRAME: Duration = Duration::from_millis(33);

const VIEWPORT_SCRIPT: &str = "return window.innerWidth;";

/// Reports the scroll delta since the previous report, once per animation frame
const SCROLL_SCRIPT: &str = r#"
    let last = window.scrollY || 0;
    let ticking = false;
    window.addEventListener('scroll', () => {
        if (ticking) return;
        ticking = true;
        window.requestAnimationFrame(() => {
            const now = window.scrollY || 0;
            dioxus.send(now - last);
            last = now;
            ticking = false;
        });
    }, { passive: true });
"#;

#[cfg(feature = "desktop")]
async fn next_frame() {
    tokio::time::sleep(FRAME).await;
}

#[cfg(all(feature = "web", not(feature = "desktop")))]
async fn next_frame() {
    gloo::timers::future::sleep(FRAME).await;
}

#[component]
pub fn DotsBackground() -> Element {
    let config = use_config();
    let mut field: Signal<Option<DotField>> = use_signal(|| None);
    let mut velocity = use_signal(|| 0.0_f64);

    // Scroll deltas
    use_future(move || async move {
        let mut listener = document::eval(SCROLL_SCRIPT);
        while let Ok(delta) = listener.recv::<f64>().await {
            velocity.set(delta);
        }
    });

    // Frame loop; sized for the viewport at mount
    use_future(move || {
        let config = config.clone();
        async move {
            let width = document::eval(VIEWPORT_SCRIPT)
                .join::<f64>()
                .await
                .unwrap_or_else(|e| {
                    tracing::debug!("Viewport width unavailable: {:?}", e);
                    f64::MAX
                });
            let params = config.dots_for_viewport(width);
            tracing::debug!(count = params.count, "Starting dot field");
            field.set(Some(DotField::new(params)));

            loop {
                next_frame().await;
                let scroll = *velocity.peek();
                velocity.set(0.0);
                if let Some(field) = field.write().as_mut() {
                    field.step(scroll);
                }
            }
        }
    });

    let guard = field.read();
    let Some(field) = guard.as_ref() else {
        return rsx! {};
    };
    let view_box = field.view_box();
    let links = field.links();
    let dots = field.dots().to_vec();
    drop(guard);

    rsx! {
        svg {
            class: "dots-bg",
            view_box: "{view_box}",
            preserve_aspect_ratio: "xMidYMid slice",
            "aria-hidden": "true",
            for (i, link) in links.iter().enumerate() {
                line {
                    key: "l{i}",
                    x1: "{link.x1}",
                    y1: "{link.y1}",
                    x2: "{link.x2}",
                    y2: "{link.y2}",
                    stroke: SKY,
                    stroke_opacity: "{link.opacity}",
                    stroke_width: "{link.width}",
                }
            }
            for (i, dot) in dots.iter().enumerate() {
                circle {
                    key: "d{i}",
                    cx: "{dot.x}",
                    cy: "{dot.drawn_y()}",
                    r: "{dot.r}",
                    fill: SKY,
                    fill_opacity: DOT_OPACITY,
                }
            }
        }
    }
}
