//! History backend for the real document.
//!
//! Pushes go to `window.history.pushState` through script evaluation, which
//! works the same in the desktop webview and in the browser. Native
//! back/forward arrive through [`listen_for_pops`].

use dioxus::prelude::*;
use portfolio_core::{HistoryBackend, HistoryEntry};
use serde_json::Value;

use crate::context::{dispatch_pop, Nav};

/// Installs a `popstate` listener that forwards each event's state object
const POPSTATE_LISTENER: &str = r#"
    window.addEventListener('popstate', (event) => {
        dioxus.send(event.state === undefined ? null : event.state);
    });
"#;

/// `pushState` target for the document
#[derive(Debug, Clone, Default)]
pub struct DomHistory {
    current: Option<HistoryEntry>,
    fragment: String,
}

impl DomHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_script(entry: &HistoryEntry) -> String {
        let state = entry.state_object();
        // A marker keeps whatever hash the page currently shows
        let url = match entry.fragment() {
            Some(fragment) => Value::String(fragment).to_string(),
            None => "window.location.hash || window.location.href".to_string(),
        };
        format!("window.history.pushState({state}, '', {url});")
    }
}

impl HistoryBackend for DomHistory {
    fn push(&mut self, entry: HistoryEntry) {
        let script = Self::push_script(&entry);
        let _ = document::eval(&script);
        if let Some(fragment) = entry.fragment() {
            tracing::info!(%fragment, "Navigated");
            self.fragment = fragment;
        }
        self.current = Some(entry);
    }

    fn current(&self) -> Option<&HistoryEntry> {
        self.current.as_ref()
    }

    fn current_fragment(&self) -> String {
        self.fragment.clone()
    }
}

/// Forward native back/forward gestures into the bridge until the listener
/// channel closes.
pub async fn listen_for_pops(nav: Nav) {
    let mut listener = document::eval(POPSTATE_LISTENER);
    loop {
        match listener.recv::<Value>().await {
            Ok(state) => {
                tracing::debug!(
                    popped = ?HistoryEntry::from_state_object(&state),
                    "popstate"
                );
                dispatch_pop(nav);
            }
            Err(e) => {
                tracing::error!("popstate listener stopped: {:?}", e);
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::ProjectId;

    #[test]
    fn push_script_sets_fragment() {
        let script = DomHistory::push_script(&HistoryEntry::AtDetail(ProjectId::from("foxs-tale")));
        assert_eq!(
            script,
            r##"window.history.pushState({"project":"foxs-tale"}, '', "#foxs-tale");"##
        );
    }

    #[test]
    fn marker_script_keeps_fragment() {
        let script = DomHistory::push_script(&HistoryEntry::LightboxOpenMarker);
        assert!(script.starts_with(r#"window.history.pushState({"modal":true}, '', window.location.hash"#));
    }

    #[test]
    fn fragment_is_escaped() {
        let script = DomHistory::push_script(&HistoryEntry::AtDetail(ProjectId::from("a\"b")));
        assert!(script.contains(r##""#a\"b""##));
    }
}
