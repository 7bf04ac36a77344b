//! History bridge: keeps the browser's back/forward stack in step with the
//! view state machine.
//!
//! Every transition that enters or leaves a detail view pushes an entry
//! whose fragment names the view (`#projects` or `#<project-id>`). Opening
//! a modal pushes a marker entry that keeps whatever fragment is showing.
//!
//! A native back/forward gesture is reduced to a single rule applied to the
//! *current* state: close the modal if one is open, otherwise leave the
//! detail view. The popped entry's content is never consulted, so forward
//! navigation does not replay anything; it is a coarse "undo the most
//! recent of {modal, selection}".
//!
//! History is an input signal only. Nothing is restored from it on load.

use serde_json::{json, Value};

use crate::catalog::{Catalog, ProjectRef};
use crate::error::PortfolioResult;
use crate::types::{CatalogTab, ProjectId};
use crate::view::{ViewAction, ViewState};

/// Fragment identifying the catalog view
pub const CATALOG_FRAGMENT: &str = "projects";

/// One pushed history slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEntry {
    AtCatalog,
    AtDetail(ProjectId),
    /// Modal open; the visible fragment is left as it was
    LightboxOpenMarker,
}

impl HistoryEntry {
    /// Fragment to show in the URL, or `None` to keep the current one
    pub fn fragment(&self) -> Option<String> {
        match self {
            HistoryEntry::AtCatalog => Some(format!("#{CATALOG_FRAGMENT}")),
            HistoryEntry::AtDetail(id) => Some(format!("#{id}")),
            HistoryEntry::LightboxOpenMarker => None,
        }
    }

    /// State object stored alongside the entry (`history.state`)
    pub fn state_object(&self) -> Value {
        match self {
            HistoryEntry::AtCatalog => json!({}),
            HistoryEntry::AtDetail(id) => json!({ "project": id.as_str() }),
            HistoryEntry::LightboxOpenMarker => json!({ "modal": true }),
        }
    }

    /// Decode a state object, for diagnostics. Unrecognized shapes (including
    /// the null state of the initial page entry) yield `None`.
    pub fn from_state_object(state: &Value) -> Option<Self> {
        let object = state.as_object()?;
        if object.get("modal").and_then(Value::as_bool) == Some(true) {
            return Some(HistoryEntry::LightboxOpenMarker);
        }
        if let Some(id) = object.get("project").and_then(Value::as_str) {
            return Some(HistoryEntry::AtDetail(ProjectId::new(id)));
        }
        object.is_empty().then_some(HistoryEntry::AtCatalog)
    }
}

/// Where a fragment points
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Catalog,
    Project(ProjectRef),
}

/// Resolve a URL fragment against the catalog.
///
/// Unknown ids fall back to the catalog view rather than failing.
pub fn resolve_fragment(catalog: &Catalog, fragment: &str) -> Route {
    let target = fragment.strip_prefix('#').unwrap_or(fragment);
    if target.is_empty() || target == CATALOG_FRAGMENT {
        return Route::Catalog;
    }
    match catalog.get(&ProjectId::from(target)) {
        Ok(project) => Route::Project(project.clone()),
        Err(e) => {
            tracing::warn!(fragment = %target, "{}, showing catalog", e);
            Route::Catalog
        }
    }
}

/// Storage for pushed history entries
pub trait HistoryBackend {
    /// Push a new entry on top of the current one, discarding forward entries
    fn push(&mut self, entry: HistoryEntry);

    /// Entry at the current position, `None` for the initial page entry
    fn current(&self) -> Option<&HistoryEntry>;

    /// Fragment currently visible in the URL, including the leading `#`
    /// (empty when there is none)
    fn current_fragment(&self) -> String;
}

/// One slot of [`MemoryHistory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySlot {
    pub entry: Option<HistoryEntry>,
    pub fragment: String,
}

/// In-process history stack with a cursor, emulating a browser tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    slots: Vec<HistorySlot>,
    cursor: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::with_fragment("")
    }

    /// Start on a page loaded with `fragment` in its URL
    pub fn with_fragment(fragment: &str) -> Self {
        Self {
            slots: vec![HistorySlot {
                entry: None,
                fragment: fragment.to_string(),
            }],
            cursor: 0,
        }
    }

    /// Native back gesture. Returns true if a pop event fired.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Native forward gesture. Returns true if a pop event fired.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.slots.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn slots(&self) -> &[HistorySlot] {
        &self.slots
    }
}

impl HistoryBackend for MemoryHistory {
    fn push(&mut self, entry: HistoryEntry) {
        let fragment = entry
            .fragment()
            .unwrap_or_else(|| self.current_fragment());
        self.slots.truncate(self.cursor + 1);
        self.slots.push(HistorySlot {
            entry: Some(entry),
            fragment,
        });
        self.cursor = self.slots.len() - 1;
    }

    fn current(&self) -> Option<&HistoryEntry> {
        self.slots[self.cursor].entry.as_ref()
    }

    fn current_fragment(&self) -> String {
        self.slots[self.cursor].fragment.clone()
    }
}

/// Owns the view state and the history backend, keeping them consistent
#[derive(Debug, Clone)]
pub struct HistoryBridge<B> {
    state: ViewState,
    backend: B,
}

impl<B: HistoryBackend> HistoryBridge<B> {
    /// Start at the initial state, `Catalog(Games)`. Nothing is pushed and
    /// whatever fragment the page loaded with is ignored.
    pub fn new(backend: B) -> Self {
        Self {
            state: ViewState::default(),
            backend,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Apply a user action and push whatever history entry it calls for.
    /// On error the state is unchanged and nothing is pushed.
    pub fn dispatch(&mut self, action: ViewAction) -> PortfolioResult<()> {
        let label = action.label();
        let transition = self.state.apply(action)?;
        tracing::debug!(action = label, state = self.state.name(), "View transition");
        if let Some(entry) = transition.push {
            tracing::debug!(fragment = ?entry.fragment(), "Pushing history entry");
            self.backend.push(entry);
        }
        Ok(())
    }

    /// Native back/forward fired
    pub fn on_pop(&mut self) -> PortfolioResult<()> {
        self.dispatch(ViewAction::Pop)
    }

    /// Navigate to a constructed route, e.g. a project named on the command
    /// line. Only meaningful from a catalog state.
    pub fn open_route(&mut self, route: Route, catalog: &Catalog) -> PortfolioResult<()> {
        match route {
            Route::Catalog => Ok(()),
            Route::Project(project) => {
                let tab = catalog.tab_of(project.id.as_str()).unwrap_or(CatalogTab::Games);
                self.dispatch(ViewAction::SelectTab(tab))?;
                self.dispatch(ViewAction::SelectProject(project))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments() {
        assert_eq!(HistoryEntry::AtCatalog.fragment().as_deref(), Some("#projects"));
        assert_eq!(
            HistoryEntry::AtDetail(ProjectId::from("slingshot")).fragment().as_deref(),
            Some("#slingshot")
        );
        assert_eq!(HistoryEntry::LightboxOpenMarker.fragment(), None);
    }

    #[test]
    fn state_objects_decode() {
        for entry in [
            HistoryEntry::AtCatalog,
            HistoryEntry::AtDetail(ProjectId::from("foxs-tale")),
            HistoryEntry::LightboxOpenMarker,
        ] {
            assert_eq!(HistoryEntry::from_state_object(&entry.state_object()), Some(entry));
        }
        assert_eq!(HistoryEntry::from_state_object(&Value::Null), None);
    }

    #[test]
    fn marker_keeps_visible_fragment() {
        let mut history = MemoryHistory::with_fragment("#about");
        history.push(HistoryEntry::LightboxOpenMarker);
        assert_eq!(history.current_fragment(), "#about");

        history.push(HistoryEntry::AtDetail(ProjectId::from("slingshot")));
        history.push(HistoryEntry::LightboxOpenMarker);
        assert_eq!(history.current_fragment(), "#slingshot");
        assert_eq!(history.current(), Some(&HistoryEntry::LightboxOpenMarker));
    }

    #[test]
    fn push_discards_forward_entries() {
        let mut history = MemoryHistory::new();
        history.push(HistoryEntry::AtCatalog);
        history.push(HistoryEntry::AtDetail(ProjectId::from("a")));
        assert!(history.back());
        history.push(HistoryEntry::AtDetail(ProjectId::from("b")));
        assert_eq!(history.len(), 3);
        assert!(!history.forward());
        assert_eq!(history.current_fragment(), "#b");
    }

    #[test]
    fn back_at_start_does_not_pop() {
        let mut history = MemoryHistory::new();
        assert!(!history.back());
        assert_eq!(history.current(), None);
    }

    #[test]
    fn resolve_known_and_unknown_fragments() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(resolve_fragment(&catalog, ""), Route::Catalog);
        assert_eq!(resolve_fragment(&catalog, "#projects"), Route::Catalog);
        assert_eq!(resolve_fragment(&catalog, "#no-such-project"), Route::Catalog);
        match resolve_fragment(&catalog, "#cozmo-robot") {
            Route::Project(p) => assert_eq!(p.id.as_str(), "cozmo-robot"),
            other => panic!("expected project route, got {other:?}"),
        }
    }
}
