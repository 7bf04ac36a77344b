//! Error Fallback
//!
//! Shown in place of the showcase when rendering fails. The refresh button
//! reloads the whole document.

use dioxus::prelude::*;
use portfolio_ui::{Button, ButtonVariant};

const RELOAD_SCRIPT: &str = "window.location.reload();";

#[component]
pub fn ErrorFallback(message: String) -> Element {
    rsx! {
        div { class: "error-fallback", role: "alert",
            div { class: "error-content",
                h1 { "Oops! Something went wrong" }
                p { "We're sorry for the inconvenience. Please try refreshing the page." }
                Button {
                    variant: ButtonVariant::Refresh,
                    onclick: move |_| {
                        tracing::info!("Reloading after error");
                        let _ = document::eval(RELOAD_SCRIPT);
                    },
                    "Refresh Page"
                }
                if cfg!(debug_assertions) {
                    details { class: "error-details",
                        summary { "Error Details" }
                        pre { "{message}" }
                    }
                }
            }
        }
    }
}
