//! # Portfolio Core
//!
//! Client-side content and persistence core for a single-page portfolio
//! site with an embedded admin panel. The rendering shell (webview, WASM
//! frontend, or test harness) draws the sections; this crate owns every
//! document behind them, the key-value persistence underneath, and the
//! notifications that keep multiple open tabs honest.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       PORTFOLIO CORE MODULES                            │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌──────────────┐   │
//! │  │   Content   │  │  Messages   │  │   Skills    │  │    Resume    │   │
//! │  │             │  │             │  │             │  │              │   │
//! │  │ - Hero      │  │ - Contact   │  │ - Levels    │  │ - One file   │   │
//! │  │ - About     │  │   form      │  │ - Icons     │  │ - Replace    │   │
//! │  │ - Projects  │  │ - Read flag │  │ - Reorder   │  │   discards   │   │
//! │  │ - Dashboards│  │ - Delete    │  │ - Categories│  │   previous   │   │
//! │  └──────┬──────┘  └──────┬──────┘  └──────┬──────┘  └──────┬───────┘   │
//! │         │                │                │                │           │
//! │         └────────────────┴───────┬────────┴────────────────┘           │
//! │                                  │                                     │
//! │  ┌─────────────┐  ┌──────────────▼──────────────────────────────────┐  │
//! │  │   Assets    │  │              Storage                            │  │
//! │  │             │  │                                                 │  │
//! │  │ - Data URLs │─►│  version gate ► key-value store ► backend      │  │
//! │  │ - Validation│  │  (wipe on schema change)   (memory / files)    │  │
//! │  └─────────────┘  └──────────────┬──────────────────────────────────┘  │
//! │                                  │ change bus                          │
//! │  ┌─────────────┐  ┌──────────────▼──────────────────────────────────┐  │
//! │  │   Session   │  │              Sync                               │  │
//! │  │  (admin     │  │  foreign-tab writes ► notices ► slice reloads  │  │
//! │  │   login)    │  │  (notification only, last write wins)          │  │
//! │  └─────────────┘  └─────────────────────────────────────────────────┘  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error types for the entire library
//! - [`storage`] - Key-value storage area, backends, schema-version gate
//! - [`content`] - The portfolio content document and its mutation surface
//! - [`assets`] - Uploaded images (validated data URLs)
//! - [`messages`] - Visitor messages from the contact form
//! - [`resume`] - The single downloadable resume file
//! - [`skills`] - The skill list with its icon registry
//! - [`sync`] - Cross-tab change notification
//! - [`session`] - Admin login state
//! - [`theme`] - Dark-mode preference
//!
//! ## Lifecycle
//!
//! One [`PortfolioCore`] is constructed per tab, explicitly, from a shared
//! [`StorageArea`]; there is no global instance, so tests hold as many
//! isolated cores as they like. Construction runs the version gate first;
//! every store then loads its slice lazily on first use and persists on
//! every mutation. The core lives for the tab's lifetime and is never torn
//! down.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod assets;
pub mod content;
pub mod error;
pub mod messages;
pub mod resume;
pub mod session;
pub mod skills;
pub mod storage;
pub mod sync;
pub mod theme;
/// Time utilities for stamping documents.
pub mod time;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use assets::ImageAssetStore;
pub use content::{ContentStore, PortfolioDocument};
pub use error::{Error, Result};
pub use messages::MessageStore;
pub use resume::ResumeStore;
pub use session::AdminSession;
pub use skills::SkillsStore;
pub use storage::{KeyValueStore, StorageArea};
pub use sync::{Slice, SyncNotice};
pub use theme::Theme;

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;

use storage::{FileBackend, VersionGate};
use sync::TabSync;

/// The per-tab application-state container.
///
/// Owns one instance of every store, all sharing this tab's handle on the
/// storage area. Multiple cores opened on the same area model multiple
/// browser tabs: each holds independent in-memory slices, reconciled only
/// through [`poll_sync`](PortfolioCore::poll_sync).
pub struct PortfolioCore {
    kv: KeyValueStore,
    content: ContentStore,
    messages: MessageStore,
    resume: ResumeStore,
    skills: SkillsStore,
    assets: ImageAssetStore,
    session: AdminSession,
    sync: Mutex<TabSync>,
}

impl PortfolioCore {
    /// Open a core (one "tab") on a storage area.
    ///
    /// Runs the schema-version gate before anything reads, so stale-shaped
    /// data from a previous deployment never reaches a store.
    pub fn open(area: &Arc<StorageArea>) -> Self {
        tracing::info!(version = version(), "opening portfolio core");

        let kv = KeyValueStore::attach(area);
        VersionGate::new(kv.clone()).initialize();

        let sync = Mutex::new(TabSync::new(&kv));
        Self {
            content: ContentStore::new(kv.clone()),
            messages: MessageStore::new(kv.clone()),
            resume: ResumeStore::new(kv.clone()),
            skills: SkillsStore::new(kv.clone()),
            assets: ImageAssetStore::new(kv.clone()),
            session: AdminSession::new(kv.clone()),
            sync,
            kv,
        }
    }

    /// Open a core over a fresh in-memory area (tests, previews, and the
    /// degraded no-persistence session).
    pub fn open_in_memory() -> Self {
        Self::open(&StorageArea::in_memory())
    }

    /// Open a core over a file-backed area rooted at `dir`.
    ///
    /// When the directory cannot be used (read-only media, permissions),
    /// this degrades to an in-memory-only session instead of failing: a
    /// visitor must never see a crash because persistence is unavailable.
    /// To share one on-disk area between several cores, build the
    /// [`StorageArea`] once and pass it to [`open`](PortfolioCore::open).
    pub fn open_on_disk(dir: impl AsRef<Path>) -> Self {
        match FileBackend::open(dir.as_ref()) {
            Ok(backend) => Self::open(&StorageArea::new(backend)),
            Err(e) => {
                tracing::warn!(error = %e, "persistent storage unavailable, running in memory");
                Self::open_in_memory()
            }
        }
    }

    // ========================================================================
    // STORE ACCESS
    // ========================================================================

    /// The portfolio content document store.
    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// The visitor message store.
    pub fn messages(&self) -> &MessageStore {
        &self.messages
    }

    /// The resume file store.
    pub fn resume(&self) -> &ResumeStore {
        &self.resume
    }

    /// The skills store.
    pub fn skills(&self) -> &SkillsStore {
        &self.skills
    }

    /// The uploaded image store.
    pub fn assets(&self) -> &ImageAssetStore {
        &self.assets
    }

    /// The admin login session.
    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    /// This tab's raw storage handle.
    pub fn storage(&self) -> &KeyValueStore {
        &self.kv
    }

    // ========================================================================
    // THEME
    // ========================================================================

    /// The stored color-scheme preference.
    pub fn theme(&self) -> Theme {
        theme::load(&self.kv)
    }

    /// Flip the color-scheme preference and return the new value.
    pub fn toggle_theme(&self) -> Theme {
        theme::toggle(&self.kv)
    }

    // ========================================================================
    // CROSS-TAB SYNC
    // ========================================================================

    /// Drain storage changes made by other tabs, reload the affected
    /// slices, and return the notices for the UI to surface.
    ///
    /// Call from the UI loop (or whenever the window regains focus). After
    /// this returns, reads on the named slices observe the other tab's
    /// writes. Last write wins; nothing is merged.
    pub fn poll_sync(&self) -> Vec<SyncNotice> {
        let notices = self.sync.lock().poll();
        for notice in &notices {
            match notice.slice {
                Slice::Content => self.content.reload(),
                Slice::Messages => self.messages.reload(),
                Slice::Resume => self.resume.reload(),
                Slice::Skills => self.skills.reload(),
                // Assets read through storage on every call; nothing cached
                Slice::Images => {}
                Slice::Session => self.session.reload(),
                Slice::Everything => {
                    self.content.reload();
                    self.messages.reload();
                    self.resume.reload();
                    self.skills.reload();
                    self.session.reload();
                }
            }
        }
        notices
    }
}

// ============================================================================
// VERSION INFO
// ============================================================================

/// Returns the version of the portfolio core crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use content::ContactPatch;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_open_seeds_marker_and_content() {
        let core = PortfolioCore::open_in_memory();
        assert_eq!(
            core.storage().get_raw(storage::keys::DATA_VERSION).as_deref(),
            Some(storage::STORAGE_SCHEMA_VERSION)
        );
        assert!(!core.content().document().projects.is_empty());
    }

    #[test]
    fn test_version_gate_wipes_stale_profile() {
        let area = StorageArea::in_memory();
        let kv = KeyValueStore::attach(&area);
        kv.set_raw(storage::keys::DATA_VERSION, "0.9.0").unwrap();
        kv.set_raw(storage::keys::PORTFOLIO_DATA, "{\"stale\":true}")
            .unwrap();

        let core = PortfolioCore::open(&area);

        assert_eq!(
            core.storage().get_raw(storage::keys::DATA_VERSION).as_deref(),
            Some(storage::STORAGE_SCHEMA_VERSION)
        );
        // Stale-shaped data never reaches the store; it reads the default
        assert_eq!(
            core.content().document(),
            content::defaults::default_document()
        );
    }

    #[test]
    fn test_two_tabs_reconcile_through_poll_sync() {
        let area = StorageArea::in_memory();
        let tab_a = PortfolioCore::open(&area);
        let tab_b = PortfolioCore::open(&area);

        // Both tabs load their own copies
        assert_eq!(
            tab_b.content().document().contact_info.email,
            "your.email@example.com"
        );

        tab_a.content().update_contact_info(ContactPatch {
            email: Some("a@x.com".into()),
            ..Default::default()
        });

        // B still holds its stale copy until it polls
        assert_eq!(
            tab_b.content().document().contact_info.email,
            "your.email@example.com"
        );

        let notices = tab_b.poll_sync();
        assert!(notices.iter().any(|n| n.slice == Slice::Content));
        assert_eq!(tab_b.content().document().contact_info.email, "a@x.com");

        // A's own write does not bounce back at it
        assert!(tab_a.poll_sync().is_empty());
    }

    #[test]
    fn test_theme_toggle() {
        let core = PortfolioCore::open_in_memory();
        assert_eq!(core.theme(), Theme::Light);
        assert_eq!(core.toggle_theme(), Theme::Dark);
        assert_eq!(core.theme(), Theme::Dark);
    }

    #[test]
    fn test_on_disk_core_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        {
            let core = PortfolioCore::open_on_disk(dir.path());
            core.content().update_contact_info(ContactPatch {
                email: Some("durable@example.com".into()),
                ..Default::default()
            });
        }
        let core = PortfolioCore::open_on_disk(dir.path());
        assert_eq!(
            core.content().document().contact_info.email,
            "durable@example.com"
        );
    }
}
