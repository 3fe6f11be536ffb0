//! # Error Handling
//!
//! This module provides the error types for the portfolio core.
//!
//! ## Error Hierarchy
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           ERROR HIERARCHY                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Error (top-level)                                                     │
//! │  │                                                                      │
//! │  ├── Storage Errors                                                    │
//! │  │   ├── StorageUnavailable   - Backend refuses all access             │
//! │  │   ├── QuotaExceeded        - Write would exceed the byte quota      │
//! │  │   ├── CorruptEntry         - Stored text fails to parse             │
//! │  │   └── Serialization        - Document could not be encoded          │
//! │  │                                                                      │
//! │  ├── Validation Errors                                                 │
//! │  │   ├── UnsupportedImageType - MIME type outside the allow-list       │
//! │  │   ├── ImageTooLarge        - Decoded image over the size cap        │
//! │  │   ├── InvalidImageData     - Not a parseable data URL               │
//! │  │   ├── UnsupportedResumeType- Resume MIME outside the allow-list     │
//! │  │   ├── ResumeTooLarge       - Resume file over the size cap          │
//! │  │   ├── InvalidSkillLevel    - Skill level outside 0-100              │
//! │  │   └── MissingField         - Required field left empty              │
//! │  │                                                                      │
//! │  └── Session Errors                                                    │
//! │      └── InvalidCredentials   - Username/password mismatch             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Propagation Policy
//!
//! Read-path failures (unavailable backend, corrupt entries) are contained at
//! the store boundary: the store logs, falls back to a safe default, and the
//! caller sees `None` or the seeded document. Write-path failures that the
//! user can act on (quota, validation, credentials) are returned as typed
//! errors so the embedding UI can show an actionable message.

use thiserror::Error;

/// Result type alias for portfolio core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the portfolio core
///
/// Errors are categorized by layer so the embedding boundary can map them to
/// stable numeric codes and decide which ones to surface to the user.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Storage Errors (100-199)
    // ========================================================================

    /// The underlying key-value backend refuses all access
    #[error("storage is unavailable: {0}")]
    StorageUnavailable(String),

    /// A write would exceed the storage byte quota
    #[error("storage quota exceeded: writing {requested} bytes over a {limit} byte budget. Try a smaller file or clear some saved images.")]
    QuotaExceeded {
        /// Bytes the rejected write would have occupied
        requested: usize,
        /// Configured quota for the storage area
        limit: usize,
    },

    /// A stored entry failed to parse as its expected shape
    #[error("corrupt entry under key '{0}'")]
    CorruptEntry(String),

    /// A document could not be encoded to JSON
    #[error("serialization error: {0}")]
    Serialization(String),

    // ========================================================================
    // Validation Errors (200-299)
    // ========================================================================

    /// Uploaded image MIME type is not in the accepted list
    #[error("unsupported image type '{0}'. Upload a JPEG, PNG, GIF, WebP, SVG, BMP or TIFF file.")]
    UnsupportedImageType(String),

    /// Uploaded image exceeds the size cap
    #[error("image too large: {size} bytes (maximum {max} bytes)")]
    ImageTooLarge {
        /// Decoded size of the rejected image
        size: usize,
        /// Configured maximum
        max: usize,
    },

    /// Uploaded image is not a parseable data URL
    #[error("invalid image data: {0}")]
    InvalidImageData(String),

    /// Uploaded resume MIME type is not in the accepted list
    #[error("unsupported resume type '{0}'. Upload a PDF or Word document.")]
    UnsupportedResumeType(String),

    /// Uploaded resume exceeds the size cap
    #[error("resume file too large: {size} bytes (maximum {max} bytes)")]
    ResumeTooLarge {
        /// Size of the rejected file
        size: u64,
        /// Configured maximum
        max: u64,
    },

    /// Skill level outside the 0-100 range
    #[error("invalid skill level {0}: must be between 0 and 100")]
    InvalidSkillLevel(u16),

    /// A required field was left empty
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    // ========================================================================
    // Session Errors (300-399)
    // ========================================================================

    /// Login rejected
    #[error("invalid username or password")]
    InvalidCredentials,
}

impl Error {
    /// Get the stable numeric code for the embedding boundary
    ///
    /// Codes are organized by category:
    /// - 100-199: Storage
    /// - 200-299: Validation
    /// - 300-399: Session
    pub fn code(&self) -> i32 {
        match self {
            // Storage (100-199)
            Error::StorageUnavailable(_) => 100,
            Error::QuotaExceeded { .. } => 101,
            Error::CorruptEntry(_) => 102,
            Error::Serialization(_) => 103,

            // Validation (200-299)
            Error::UnsupportedImageType(_) => 200,
            Error::ImageTooLarge { .. } => 201,
            Error::InvalidImageData(_) => 202,
            Error::UnsupportedResumeType(_) => 203,
            Error::ResumeTooLarge { .. } => 204,
            Error::InvalidSkillLevel(_) => 205,
            Error::MissingField(_) => 206,

            // Session (300-399)
            Error::InvalidCredentials => 300,
        }
    }

    /// Check if this error should be surfaced to the user as-is
    ///
    /// User-actionable errors carry a message the user can act on (pick a
    /// smaller file, fix a form field, retype a password). The rest are
    /// environment failures that the stores already degrade around.
    pub fn is_user_actionable(&self) -> bool {
        !matches!(
            self,
            Error::StorageUnavailable(_) | Error::CorruptEntry(_) | Error::Serialization(_)
        )
    }
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::StorageUnavailable(err.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
