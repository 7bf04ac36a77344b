use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::Catalog;

use crate::components::ErrorFallback;
use crate::pages::Showcase;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, loads the catalog and wraps the showcase in an
/// error boundary with a refresh fallback.
#[component]
pub fn App() -> Element {
    let catalog = use_hook(|| {
        Catalog::builtin()
            .map(Arc::new)
            .map_err(|e| e.to_string())
    });

    let body = match catalog {
        Ok(catalog) => rsx! {
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    let message = errors
                        .errors()
                        .iter()
                        .map(|e| e.to_string())
                        .collect::<Vec<_>>()
                        .join("; ");
                    tracing::error!("Render failed: {}", message);
                    rsx! { ErrorFallback { message } }
                },
                Showcase { catalog }
            }
        },
        Err(message) => {
            tracing::error!("Failed to load catalog: {}", message);
            rsx! { ErrorFallback { message } }
        }
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        {body}
    }
}
