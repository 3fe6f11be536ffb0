//! # Key-Value Store
//!
//! Per-tab handle over a shared [`StorageArea`], with JSON encode/decode and
//! error containment.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        STORAGE TOPOLOGY                                 │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │   Tab A                     Tab B                                       │
//! │   ┌──────────────┐          ┌──────────────┐                            │
//! │   │ KeyValueStore│          │ KeyValueStore│   one handle per open tab  │
//! │   │  (tab id a)  │          │  (tab id b)  │                            │
//! │   └──────┬───────┘          └──────┬───────┘                            │
//! │          │        writes + events  │                                    │
//! │          ▼                         ▼                                    │
//! │   ┌─────────────────────────────────────────┐                           │
//! │   │              StorageArea                │  one per browser profile  │
//! │   │  backend (memory / files)  +  change bus│                           │
//! │   └─────────────────────────────────────────┘                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Containment rules, in order of appearance:
//! - a backend read failure is logged and read as "absent";
//! - a stored value that no longer parses is logged, cleared, and read as
//!   "absent" (corrupt entries must never crash rendering);
//! - a write failure is returned to the caller, typed, so quota problems can
//!   be shown to the user.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::error::Result;

use super::backend::{MemoryBackend, StorageBackend};

/// Capacity of the change bus. A slow tab that falls further behind than
/// this observes a lag and reloads every slice instead of replaying.
const CHANGE_BUS_CAPACITY: usize = 64;

/// Identifies one open tab (one core instance) on a storage area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabId(uuid::Uuid);

impl TabId {
    fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

/// What a storage change did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// A key was written
    Set,
    /// A key was removed
    Removed,
    /// The whole area was cleared
    Cleared,
}

/// A change observed on the shared storage area.
///
/// Mirrors the browser's cross-document storage notification: every write
/// from any tab lands here, tagged with the writer so receivers can ignore
/// their own.
#[derive(Debug, Clone)]
pub struct StorageEvent {
    /// The affected key (empty for [`ChangeKind::Cleared`])
    pub key: String,
    /// The tab that performed the write
    pub origin: TabId,
    /// What happened
    pub kind: ChangeKind,
}

/// One browser profile's worth of storage: a backend plus the change bus
/// every tab on this profile publishes to.
pub struct StorageArea {
    backend: Box<dyn StorageBackend>,
    changes: broadcast::Sender<StorageEvent>,
}

impl StorageArea {
    /// Create a storage area over the given backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Arc<Self> {
        let (changes, _) = broadcast::channel(CHANGE_BUS_CAPACITY);
        Arc::new(Self {
            backend: Box::new(backend),
            changes,
        })
    }

    /// Create a storage area over an unbounded in-memory backend.
    pub fn in_memory() -> Arc<Self> {
        Self::new(MemoryBackend::new())
    }
}

/// Typed key-value access for one tab.
///
/// Cheap to clone; clones share the tab identity, so every store inside one
/// core instance writes under the same origin.
#[derive(Clone)]
pub struct KeyValueStore {
    area: Arc<StorageArea>,
    tab: TabId,
}

impl KeyValueStore {
    /// Attach a new tab to a storage area.
    pub fn attach(area: &Arc<StorageArea>) -> Self {
        Self {
            area: Arc::clone(area),
            tab: TabId::new(),
        }
    }

    /// The identity of this tab on the shared area.
    pub fn tab(&self) -> TabId {
        self.tab
    }

    /// Subscribe to changes made on the shared area (own writes included;
    /// receivers filter by origin).
    pub fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.area.changes.subscribe()
    }

    fn emit(&self, key: &str, kind: ChangeKind) {
        // send only fails when no tab is listening, which is fine
        let _ = self.area.changes.send(StorageEvent {
            key: key.to_string(),
            origin: self.tab,
            kind,
        });
    }

    // ========================================================================
    // TYPED (JSON) ACCESS
    // ========================================================================

    /// Read and decode the document under `key`.
    ///
    /// Returns `None` when the key is absent, when the backend is
    /// unavailable, or when the stored text no longer parses; a corrupt
    /// entry is cleared so the next read starts from the seeded default.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = self.get_raw(key)?;
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "corrupt entry, clearing");
                self.remove(key);
                None
            }
        }
    }

    /// Encode and write a document under `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)?;
        self.set_raw(key, &text)
    }

    // ========================================================================
    // RAW (PLAIN STRING) ACCESS
    // ========================================================================

    /// Read the plain string under `key`. Backend failures read as absent.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        match self.area.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed");
                None
            }
        }
    }

    /// Write a plain string under `key`.
    pub fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.area.backend.set(key, value)?;
        tracing::debug!(key, bytes = value.len(), "stored");
        self.emit(key, ChangeKind::Set);
        Ok(())
    }

    /// Remove the entry under `key`. Failures are logged, not propagated.
    pub fn remove(&self, key: &str) {
        match self.area.backend.remove(key) {
            Ok(()) => self.emit(key, ChangeKind::Removed),
            Err(e) => tracing::warn!(key, error = %e, "storage remove failed"),
        }
    }

    /// Remove every entry in the area.
    pub fn clear_all(&self) -> Result<()> {
        self.area.backend.clear()?;
        self.emit("", ChangeKind::Cleared);
        Ok(())
    }

    /// List every stored key. Backend failures read as an empty list.
    pub fn keys(&self) -> Vec<String> {
        match self.area.backend.keys() {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(error = %e, "storage key listing failed");
                Vec::new()
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Doc {
        title: String,
        tags: Vec<String>,
    }

    fn sample() -> Doc {
        Doc {
            title: "Sales Data Analysis".into(),
            tags: vec!["Tableau".into(), "SQL".into()],
        }
    }

    #[test]
    fn test_typed_roundtrip() {
        let kv = KeyValueStore::attach(&StorageArea::in_memory());
        kv.set("doc", &sample()).unwrap();
        assert_eq!(kv.get::<Doc>("doc"), Some(sample()));
    }

    #[test]
    fn test_absent_key_reads_none() {
        let kv = KeyValueStore::attach(&StorageArea::in_memory());
        assert_eq!(kv.get::<Doc>("missing"), None);
        assert_eq!(kv.get_raw("missing"), None);
    }

    #[test]
    fn test_corrupt_entry_is_cleared() {
        let kv = KeyValueStore::attach(&StorageArea::in_memory());
        kv.set_raw("doc", "{not json").unwrap();

        assert_eq!(kv.get::<Doc>("doc"), None);
        // The bad entry is gone, not left to fail every future read
        assert_eq!(kv.get_raw("doc"), None);
    }

    #[test]
    fn test_quota_error_propagates_on_write() {
        let area = StorageArea::new(MemoryBackend::with_quota(8));
        let kv = KeyValueStore::attach(&area);

        let err = kv.set_raw("key", "far too large for the quota").unwrap_err();
        assert!(matches!(err, Error::QuotaExceeded { .. }));
    }

    #[test]
    fn test_events_carry_origin() {
        let area = StorageArea::in_memory();
        let writer = KeyValueStore::attach(&area);
        let reader = KeyValueStore::attach(&area);
        let mut rx = reader.subscribe();

        writer.set_raw("portfolioData", "{}").unwrap();
        writer.remove("portfolioData");

        let ev = rx.try_recv().unwrap();
        assert_eq!(ev.key, "portfolioData");
        assert_eq!(ev.kind, ChangeKind::Set);
        assert_eq!(ev.origin, writer.tab());
        assert_ne!(ev.origin, reader.tab());

        let ev = rx.try_recv().unwrap();
        assert_eq!(ev.kind, ChangeKind::Removed);
    }

    #[test]
    fn test_clones_share_tab_identity() {
        let kv = KeyValueStore::attach(&StorageArea::in_memory());
        assert_eq!(kv.tab(), kv.clone().tab());
    }
}
