//! # Content Store
//!
//! The mutation surface for everything editable on the public site. Holds
//! the whole [`PortfolioDocument`] in memory, lazily loaded from storage on
//! first use (seeding the sample content when nothing is persisted), and
//! mirrors every mutation back to storage immediately.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MUTATION FLOW                                    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  admin UI ──► store op ──► merge against in-memory document             │
//! │                        ──► replace in-memory document                   │
//! │                        ──► persist whole document under one key         │
//! │                                                                         │
//! │  There is no debouncing: callers commit on explicit "Save", not on     │
//! │  every keystroke. A persistence failure is logged and the in-memory    │
//! │  copy stays authoritative for the rest of the session.                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations live in one file per section: `projects`, `dashboards`,
//! `about`, `contact`, `hero`.

mod about;
mod contact;
mod dashboards;
pub mod defaults;
mod hero;
mod projects;
mod types;

pub use about::SectionPatch;
pub use types::{
    AboutData, AboutPatch, ContactInfo, ContactPatch, CustomSection, Dashboard, DashboardDraft,
    DashboardPatch, HeadshotPosition, HeadshotSettings, HeroData, HeroPatch, PortfolioDocument,
    Project, ProjectDraft, ProjectPatch, SectionKind,
};

use parking_lot::RwLock;

use crate::storage::{keys, KeyValueStore};

/// In-memory slice plus the session-scoped id counters.
///
/// The counters start one past the highest persisted id and only ever grow,
/// so an id handed out in this session is never reassigned after a delete.
struct ContentState {
    doc: PortfolioDocument,
    next_project_id: u32,
    next_dashboard_id: u32,
}

impl ContentState {
    fn from_document(doc: PortfolioDocument) -> Self {
        let next_project_id = doc.projects.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let next_dashboard_id = doc.dashboards.iter().map(|d| d.id).max().unwrap_or(0) + 1;
        Self {
            doc,
            next_project_id,
            next_dashboard_id,
        }
    }
}

/// Application-state container for the portfolio content document.
///
/// Constructed explicitly (no ambient singleton) so tests and multi-tab
/// scenarios can hold isolated instances over the same storage area.
pub struct ContentStore {
    kv: KeyValueStore,
    state: RwLock<Option<ContentState>>,
}

impl ContentStore {
    /// Create a content store over the given storage handle. Nothing is
    /// read until first use.
    pub fn new(kv: KeyValueStore) -> Self {
        Self {
            kv,
            state: RwLock::new(None),
        }
    }

    fn load_state(kv: &KeyValueStore) -> ContentState {
        let doc = kv
            .get::<PortfolioDocument>(keys::PORTFOLIO_DATA)
            .unwrap_or_else(defaults::default_document);
        ContentState::from_document(doc)
    }

    /// Read access to the loaded state.
    fn read<R>(&self, f: impl FnOnce(&ContentState) -> R) -> R {
        let mut guard = self.state.write();
        let state = guard.get_or_insert_with(|| Self::load_state(&self.kv));
        f(state)
    }

    /// Apply a mutation and immediately persist the whole document.
    fn mutate<R>(&self, f: impl FnOnce(&mut ContentState) -> R) -> R {
        let mut guard = self.state.write();
        let state = guard.get_or_insert_with(|| Self::load_state(&self.kv));
        let result = f(state);
        if let Err(e) = self.kv.set(keys::PORTFOLIO_DATA, &state.doc) {
            tracing::warn!(error = %e, "unable to persist portfolio document");
        }
        result
    }

    /// Snapshot of the current document.
    pub fn document(&self) -> PortfolioDocument {
        self.read(|state| state.doc.clone())
    }

    /// Discard the in-memory slice; the next access re-reads storage.
    ///
    /// Used after another tab's write has been observed, so this tab stops
    /// trusting its own copy.
    pub fn reload(&self) {
        *self.state.write() = None;
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageArea;

    fn store() -> ContentStore {
        ContentStore::new(KeyValueStore::attach(&StorageArea::in_memory()))
    }

    #[test]
    fn test_seeds_default_document_when_absent() {
        let store = store();
        let doc = store.document();
        assert_eq!(doc, defaults::default_document());
    }

    #[test]
    fn test_mutations_are_visible_to_a_fresh_store() {
        let area = StorageArea::in_memory();
        let store = ContentStore::new(KeyValueStore::attach(&area));
        store.update_contact_info(ContactPatch {
            email: Some("analyst@example.com".into()),
            ..Default::default()
        });

        // A second store over the same area reads the persisted document
        let other = ContentStore::new(KeyValueStore::attach(&area));
        assert_eq!(other.document().contact_info.email, "analyst@example.com");
    }

    #[test]
    fn test_reload_discards_local_copy() {
        let area = StorageArea::in_memory();
        let ours = ContentStore::new(KeyValueStore::attach(&area));
        let theirs = ContentStore::new(KeyValueStore::attach(&area));

        // Both loaded; the other tab wins after our reload
        assert_eq!(ours.document().contact_info.email, "your.email@example.com");
        theirs.update_contact_info(ContactPatch {
            email: Some("a@x.com".into()),
            ..Default::default()
        });

        ours.reload();
        assert_eq!(ours.document().contact_info.email, "a@x.com");
    }

    #[test]
    fn test_persistence_failure_keeps_memory_authoritative() {
        use crate::error::{Error, Result};
        use crate::storage::StorageBackend;

        // A backend that accepts nothing, like storage in private browsing
        struct RefusingBackend;
        impl StorageBackend for RefusingBackend {
            fn get(&self, _: &str) -> Result<Option<String>> {
                Err(Error::StorageUnavailable("disabled".into()))
            }
            fn set(&self, _: &str, _: &str) -> Result<()> {
                Err(Error::StorageUnavailable("disabled".into()))
            }
            fn remove(&self, _: &str) -> Result<()> {
                Err(Error::StorageUnavailable("disabled".into()))
            }
            fn clear(&self) -> Result<()> {
                Err(Error::StorageUnavailable("disabled".into()))
            }
            fn keys(&self) -> Result<Vec<String>> {
                Err(Error::StorageUnavailable("disabled".into()))
            }
        }

        let area = StorageArea::new(RefusingBackend);
        let store = ContentStore::new(KeyValueStore::attach(&area));

        // Reads degrade to the seeded document, writes stay in memory
        store.update_contact_info(ContactPatch {
            email: Some("memory@only.example".into()),
            ..Default::default()
        });
        assert_eq!(store.document().contact_info.email, "memory@only.example");
    }
}
