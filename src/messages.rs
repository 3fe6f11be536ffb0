//! # Message Store
//!
//! Visitor messages from the contact form. The whole list is persisted
//! under one key; same lazy-load / mutate / persist pattern as the content
//! store, over a much smaller document.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::{keys, KeyValueStore};

/// One visitor message.
///
/// Wire names are snake_case here; the message list predates the camelCase
/// documents and its persisted layout is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Locally generated identifier
    pub id: String,
    /// Sender's name
    pub name: String,
    /// Sender's reply address
    pub email: String,
    /// Subject line
    pub subject: String,
    /// Body text
    pub message: String,
    /// RFC 3339 creation time
    pub created_at: String,
    /// Whether the admin has opened it
    #[serde(default)]
    pub read: bool,
}

/// What the contact form submits; id, timestamp and read state are assigned
/// by the store.
#[derive(Debug, Clone, Default)]
#[allow(missing_docs)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Store for the visitor message list.
pub struct MessageStore {
    kv: KeyValueStore,
    slice: RwLock<Option<Vec<Message>>>,
}

impl MessageStore {
    /// Create a message store over the given storage handle.
    pub fn new(kv: KeyValueStore) -> Self {
        Self {
            kv,
            slice: RwLock::new(None),
        }
    }

    fn with_slice<R>(&self, f: impl FnOnce(&mut Vec<Message>) -> R) -> R {
        let mut guard = self.slice.write();
        let slice = guard
            .get_or_insert_with(|| self.kv.get(keys::MESSAGES).unwrap_or_default());
        f(slice)
    }

    fn persist(&self, slice: &[Message]) {
        if let Err(e) = self.kv.set(keys::MESSAGES, &slice) {
            tracing::warn!(error = %e, "unable to persist messages");
        }
    }

    /// Every stored message, oldest first.
    pub fn messages(&self) -> Vec<Message> {
        self.with_slice(|slice| slice.clone())
    }

    /// Number of messages the admin has not opened yet.
    pub fn unread_count(&self) -> usize {
        self.with_slice(|slice| slice.iter().filter(|m| !m.read).count())
    }

    /// Record a contact-form submission.
    ///
    /// All four fields are required; the store assigns the id and creation
    /// time and the message starts unread.
    pub fn add(&self, draft: MessageDraft) -> Result<Message> {
        if draft.name.trim().is_empty() {
            return Err(Error::MissingField("name"));
        }
        if draft.email.trim().is_empty() {
            return Err(Error::MissingField("email"));
        }
        if draft.subject.trim().is_empty() {
            return Err(Error::MissingField("subject"));
        }
        if draft.message.trim().is_empty() {
            return Err(Error::MissingField("message"));
        }

        let message = Message {
            id: uuid::Uuid::new_v4().to_string(),
            name: draft.name,
            email: draft.email,
            subject: draft.subject,
            message: draft.message,
            created_at: crate::time::now_rfc3339(),
            read: false,
        };
        self.with_slice(|slice| {
            slice.push(message.clone());
            self.persist(slice);
        });
        Ok(message)
    }

    /// Mark a message read. Idempotent; unknown ids are a no-op.
    pub fn mark_read(&self, id: &str) {
        self.with_slice(|slice| {
            if let Some(message) = slice.iter_mut().find(|m| m.id == id) {
                message.read = true;
            }
            self.persist(slice);
        });
    }

    /// Delete a message. Unknown ids are a no-op.
    pub fn delete(&self, id: &str) {
        self.with_slice(|slice| {
            slice.retain(|m| m.id != id);
            self.persist(slice);
        });
    }

    /// Discard the in-memory slice; the next access re-reads storage.
    pub fn reload(&self) {
        *self.slice.write() = None;
    }
}

// ============================================================================
// TESTS
// ============================================================================
