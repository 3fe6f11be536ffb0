//! # Resume Store
//!
//! The single downloadable resume file. At most one exists at a time;
//! replacing it discards the previous one. Only the file's metadata and a
//! URL (object URL or inline data) are stored here; the resume is not an
//! image asset and does not share the image key namespace.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storage::{keys, KeyValueStore};

/// MIME types accepted for a resume upload.
pub const ACCEPTED_RESUME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Maximum resume file size (10 MB).
pub const MAX_RESUME_SIZE: u64 = 10 * 1024 * 1024;

/// The stored resume file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFile {
    /// Locally generated identifier
    pub id: String,
    /// Original file name, shown on the download button
    pub file_name: String,
    /// MIME type
    pub file_type: String,
    /// Unix millisecond timestamp of the upload
    pub last_modified: i64,
    /// Object or inline URL the renderer serves the file from
    pub url: String,
    /// File size in bytes
    pub size: u64,
}

/// What an upload hands the store; id and timestamp are assigned here.
#[derive(Debug, Clone, Default)]
#[allow(missing_docs)]
pub struct ResumeUpload {
    pub file_name: String,
    pub file_type: String,
    pub url: String,
    pub size: u64,
}

/// Store for the single resume file.
pub struct ResumeStore {
    kv: KeyValueStore,
    slice: RwLock<Option<Option<ResumeFile>>>,
}

impl ResumeStore {
    /// Create a resume store over the given storage handle.
    pub fn new(kv: KeyValueStore) -> Self {
        Self {
            kv,
            slice: RwLock::new(None),
        }
    }

    /// The current resume, if one has been uploaded.
    pub fn current(&self) -> Option<ResumeFile> {
        self.slice
            .write()
            .get_or_insert_with(|| self.kv.get(keys::RESUME))
            .clone()
    }

    /// Validate and store an upload, discarding any previous resume.
    ///
    /// Validation runs before anything is written; a rejected upload leaves
    /// the previous resume in place.
    pub fn replace(&self, upload: ResumeUpload) -> Result<ResumeFile> {
        if upload.file_name.trim().is_empty() {
            return Err(Error::MissingField("fileName"));
        }
        if !ACCEPTED_RESUME_TYPES.contains(&upload.file_type.as_str()) {
            return Err(Error::UnsupportedResumeType(upload.file_type));
        }
        if upload.size > MAX_RESUME_SIZE {
            return Err(Error::ResumeTooLarge {
                size: upload.size,
                max: MAX_RESUME_SIZE,
            });
        }

        let resume = ResumeFile {
            id: uuid::Uuid::new_v4().to_string(),
            file_name: upload.file_name,
            file_type: upload.file_type,
            last_modified: crate::time::now_timestamp_millis(),
            url: upload.url,
            size: upload.size,
        };
        self.kv.set(keys::RESUME, &resume)?;
        *self.slice.write() = Some(Some(resume.clone()));
        Ok(resume)
    }

    /// Remove the stored resume, if any.
    pub fn remove(&self) {
        self.kv.remove(keys::RESUME);
        *self.slice.write() = Some(None);
    }

    /// Discard the in-memory slice; the next access re-reads storage.
    pub fn reload(&self) {
        *self.slice.write() = None;
    }
}

// ============================================================================
// TESTS
// ============================================================================
