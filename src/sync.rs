//! # Cross-Tab Synchronization
//!
//! Every open tab holds an independent in-memory copy of the same persisted
//! documents. This module is the only thing reconciling them: a per-tab
//! receiver on the storage area's change bus that turns foreign writes into
//! "drop your copy and re-read" signals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CROSS-TAB FLOW                                    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  tab A: update_contact_info(...)                                        │
//! │     └─► persist portfolioData ──► StorageEvent{key, origin: A}          │
//! │                                                                         │
//! │  tab B: poll()                                                          │
//! │     ├─ drops events with origin B (its own writes)                      │
//! │     ├─ drops keys outside the portfolio namespace                       │
//! │     └─► SyncNotice{Content} ──► content.reload() ──► UI re-renders      │
//! │                                                                         │
//! │  Notification only, no merge: the receiving tab discards its copy and   │
//! │  re-reads, so the writing tab's last write always wins.                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

use crate::storage::{keys, ChangeKind, KeyValueStore, StorageEvent, TabId};

/// The slice of persisted state a foreign write touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    /// The portfolio content document
    Content,
    /// The visitor message list
    Messages,
    /// The resume file
    Resume,
    /// The skill list
    Skills,
    /// An uploaded image
    Images,
    /// The admin login state
    Session,
    /// Every slice at once (area cleared, or events were missed)
    Everything,
}

impl Slice {
    /// Which slice a storage key belongs to. `None` for keys outside the
    /// portfolio namespace.
    fn for_key(key: &str) -> Option<Slice> {
        if !keys::is_portfolio_key(key) {
            return None;
        }
        match key {
            keys::PORTFOLIO_DATA => Some(Slice::Content),
            keys::MESSAGES => Some(Slice::Messages),
            keys::RESUME => Some(Slice::Resume),
            keys::SKILLS => Some(Slice::Skills),
            keys::ADMIN_USER => Some(Slice::Session),
            keys::DATA_VERSION => Some(Slice::Everything),
            _ if key.starts_with(keys::IMAGE_PREFIX) => Some(Slice::Images),
            _ => None,
        }
    }
}

/// A user-visible record of a foreign tab's write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncNotice {
    /// The affected slice
    pub slice: Slice,
    /// The key the other tab wrote (empty when the whole area changed)
    pub key: String,
}

/// Per-tab watcher over the storage area's change bus.
///
/// Consumes the platform notification primitive; it does not implement it.
/// Drain with [`poll`](TabSync::poll) from the UI loop.
pub struct TabSync {
    rx: broadcast::Receiver<StorageEvent>,
    tab: TabId,
}

impl TabSync {
    /// Subscribe this tab to changes on its storage area.
    pub fn new(kv: &KeyValueStore) -> Self {
        Self {
            rx: kv.subscribe(),
            tab: kv.tab(),
        }
    }

    /// Drain pending storage events into de-duplicated notices.
    ///
    /// Own-tab writes and keys outside the portfolio namespace are dropped.
    /// A cleared area or a lagged receiver (more missed events than the bus
    /// buffers) collapses to a single [`Slice::Everything`] notice.
    pub fn poll(&mut self) -> Vec<SyncNotice> {
        let mut notices: Vec<SyncNotice> = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => {
                    if event.origin == self.tab {
                        continue;
                    }
                    let notice = match event.kind {
                        ChangeKind::Cleared => SyncNotice {
                            slice: Slice::Everything,
                            key: String::new(),
                        },
                        ChangeKind::Set | ChangeKind::Removed => {
                            match Slice::for_key(&event.key) {
                                Some(slice) => SyncNotice {
                                    slice,
                                    key: event.key,
                                },
                                None => continue,
                            }
                        }
                    };
                    if !notices.iter().any(|n| n.slice == notice.slice) {
                        notices.push(notice);
                    }
                }
                Err(TryRecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "change bus lagged, reloading everything");
                    notices.clear();
                    notices.push(SyncNotice {
                        slice: Slice::Everything,
                        key: String::new(),
                    });
                    // Skip the backlog; one full reload covers it
                    self.rx = self.rx.resubscribe();
                    break;
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        notices
    }
}

// ============================================================================
// TESTS
// ============================================================================
