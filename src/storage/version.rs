//! # Versioned Storage Gate
//!
//! Guards every boot against stale-shaped data from a previous deployment.
//! The marker under `portfolio_data_version` names the schema the stored
//! documents were written with; when it is absent or differs from the
//! compiled-in version, the whole area is wiped before any store reads its
//! slice.

use crate::storage::{keys, KeyValueStore};

/// Schema version the compiled-in document shapes expect.
///
/// Bump whenever a persisted shape changes incompatibly; existing profiles
/// are then reset to the seeded defaults on next boot.
pub const STORAGE_SCHEMA_VERSION: &str = "1.0.0";

/// One-shot schema gate. Run [`initialize`](VersionGate::initialize) before
/// any store touches its slice.
pub struct VersionGate {
    kv: KeyValueStore,
    expected: &'static str,
}

impl VersionGate {
    /// Gate against the compiled-in [`STORAGE_SCHEMA_VERSION`].
    pub fn new(kv: KeyValueStore) -> Self {
        Self {
            kv,
            expected: STORAGE_SCHEMA_VERSION,
        }
    }

    /// Gate against an explicit version string.
    pub fn with_expected(kv: KeyValueStore, expected: &'static str) -> Self {
        Self { kv, expected }
    }

    /// Compare the stored marker with the expected version; wipe everything
    /// and write the new marker on mismatch.
    ///
    /// Side effect only. Storage failures are logged and swallowed so an
    /// unavailable backend degrades to an in-memory-only session instead of
    /// taking the page down.
    pub fn initialize(&self) {
        let current = self.kv.get_raw(keys::DATA_VERSION);
        if current.as_deref() == Some(self.expected) {
            return;
        }

        tracing::info!(
            stored = current.as_deref().unwrap_or("<none>"),
            expected = self.expected,
            "storage version mismatch, clearing persisted state"
        );
        if let Err(e) = self.kv.clear_all() {
            tracing::warn!(error = %e, "unable to clear storage area");
        }
        if let Err(e) = self.kv.set_raw(keys::DATA_VERSION, self.expected) {
            tracing::warn!(error = %e, "unable to write storage version marker");
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, StorageArea};

    #[test]
    fn test_fresh_area_gets_marker() {
        let kv = KeyValueStore::attach(&StorageArea::in_memory());
        VersionGate::new(kv.clone()).initialize();

        assert_eq!(
            kv.get_raw(keys::DATA_VERSION).as_deref(),
            Some(STORAGE_SCHEMA_VERSION)
        );
    }

    #[test]
    fn test_matching_marker_preserves_data() {
        let kv = KeyValueStore::attach(&StorageArea::in_memory());
        kv.set_raw(keys::DATA_VERSION, "1.0.0").unwrap();
        kv.set_raw(keys::PORTFOLIO_DATA, "{}").unwrap();

        VersionGate::with_expected(kv.clone(), "1.0.0").initialize();

        assert_eq!(kv.get_raw(keys::PORTFOLIO_DATA).as_deref(), Some("{}"));
    }

    #[test]
    fn test_mismatched_marker_wipes_everything() {
        let kv = KeyValueStore::attach(&StorageArea::in_memory());
        kv.set_raw(keys::DATA_VERSION, "0.9.0").unwrap();
        kv.set_raw(keys::PORTFOLIO_DATA, "{}").unwrap();
        kv.set_raw("portfolio-projects-1", "data:image/png;base64,AA==")
            .unwrap();

        VersionGate::with_expected(kv.clone(), "1.0.0").initialize();

        assert_eq!(kv.get_raw(keys::PORTFOLIO_DATA), None);
        assert_eq!(kv.get_raw("portfolio-projects-1"), None);
        assert_eq!(kv.get_raw(keys::DATA_VERSION).as_deref(), Some("1.0.0"));
    }

    #[test]
    fn test_absent_marker_wipes_everything() {
        let kv = KeyValueStore::attach(&StorageArea::in_memory());
        kv.set_raw(keys::PORTFOLIO_DATA, "{}").unwrap();

        VersionGate::new(kv.clone()).initialize();

        assert_eq!(kv.get_raw(keys::PORTFOLIO_DATA), None);
        assert_eq!(
            kv.get_raw(keys::DATA_VERSION).as_deref(),
            Some(STORAGE_SCHEMA_VERSION)
        );
    }
}
