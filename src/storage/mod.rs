//! # Storage Module
//!
//! The persistence layer under every store: a shared key-value storage area,
//! per-tab typed handles, and the schema-version gate that runs before
//! anything else reads.
//!
//! ## Persisted Key Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       KEY-VALUE NAMESPACE                               │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  portfolio_data_version     plain string       version gate             │
//! │  portfolioData              JSON document      content store            │
//! │  portfolioMessages          JSON array         message store            │
//! │  portfolioResume            JSON document      resume store             │
//! │  portfolioSkills            JSON array         skills store             │
//! │  portfolio-{section}-{item} data-URL string    image asset store        │
//! │  portfolioUser              JSON document      admin session            │
//! │  darkMode                   "true"/"false"     theme preference         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each store owns exactly one key or key prefix; overlapping ownership
//! would be a correctness bug, not a sharing mechanism.

mod backend;
mod kv;
mod version;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use kv::{ChangeKind, KeyValueStore, StorageArea, StorageEvent, TabId};
pub use version::{VersionGate, STORAGE_SCHEMA_VERSION};

/// Key names for the shared storage area
pub mod keys {
    /// Schema-version marker (plain string)
    pub const DATA_VERSION: &str = "portfolio_data_version";

    /// The whole portfolio content document
    pub const PORTFOLIO_DATA: &str = "portfolioData";

    /// Visitor messages from the contact form
    pub const MESSAGES: &str = "portfolioMessages";

    /// The single uploaded resume file
    pub const RESUME: &str = "portfolioResume";

    /// The skills list
    pub const SKILLS: &str = "portfolioSkills";

    /// The logged-in admin user
    pub const ADMIN_USER: &str = "portfolioUser";

    /// Dark-mode preference ("true"/"false" plain string)
    pub const DARK_MODE: &str = "darkMode";

    /// Prefix under which uploaded images live
    pub const IMAGE_PREFIX: &str = "portfolio-";

    /// Build the storage key for an uploaded image.
    ///
    /// Keys are namespaced per section and item so entity types cannot
    /// collide: `portfolio-projects-3`, `portfolio-about-headshot`, ...
    pub fn image_key(section: &str, item: &str) -> String {
        format!("{}{}-{}", IMAGE_PREFIX, section, item)
    }

    /// Whether a key belongs to this crate's namespace (and should therefore
    /// trigger cross-tab refresh when another tab writes it).
    pub fn is_portfolio_key(key: &str) -> bool {
        key.starts_with("portfolio")
    }
}
