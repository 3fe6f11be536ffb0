//! # Storage Backends
//!
//! The persistent key-value stores a storage area can sit on. Both
//! implementations speak plain strings; JSON encoding happens one layer up
//! in [`KeyValueStore`](super::KeyValueStore).
//!
//! - [`MemoryBackend`]: plain map behind a lock. Used by tests, and as the
//!   degraded fallback when persistent storage is unavailable (the in-memory
//!   equivalent of a private-browsing session).
//! - [`FileBackend`]: one file per key under a profile directory, so a
//!   desktop shell gets the same durable, string-keyed storage a browser tab
//!   gets from its origin.
//!
//! Both support an optional byte quota mirroring the hard cap browsers place
//! on origin storage; a write that would exceed it fails with
//! [`Error::QuotaExceeded`] before anything is stored.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::{Error, Result};

/// A persistent string-keyed, string-valued store.
///
/// Implementations must be usable behind a shared reference; a storage area
/// hands the same backend to every open tab.
pub trait StorageBackend: Send + Sync {
    /// Read the value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the entry under `key`. Absent keys are not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Remove every entry.
    fn clear(&self) -> Result<()>;

    /// List every stored key, in no particular order.
    fn keys(&self) -> Result<Vec<String>>;
}

// ============================================================================
// MEMORY BACKEND
// ============================================================================

/// In-memory storage backend.
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryBackend {
    /// Create an unbounded in-memory backend.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota: None,
        }
    }

    /// Create an in-memory backend capped at `quota` bytes.
    ///
    /// Usage is counted as the sum of key and value lengths, the same way
    /// browsers account origin storage.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota: Some(quota),
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();
        if let Some(limit) = self.quota {
            let current: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let requested = key.len() + value.len();
            if current + requested > limit {
                return Err(Error::QuotaExceeded { requested, limit });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries.write().clear();
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.read().keys().cloned().collect())
    }
}

// ============================================================================
// FILE BACKEND
// ============================================================================

/// File-per-key storage backend rooted at a profile directory.
pub struct FileBackend {
    dir: PathBuf,
    quota: Option<usize>,
}

impl FileBackend {
    /// Open (creating if necessary) a file backend rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir, quota: None })
    }

    /// Open a file backend capped at `quota` bytes.
    pub fn open_with_quota(dir: impl AsRef<Path>, quota: usize) -> Result<Self> {
        let mut backend = Self::open(dir)?;
        backend.quota = Some(quota);
        Ok(backend)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(encode_key(key))
    }

    fn used_bytes_excluding(&self, key: &str) -> Result<usize> {
        let mut total = 0usize;
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            match decode_key(&name) {
                Some(k) if k != key => {
                    total += k.len() + entry.metadata()?.len() as usize;
                }
                _ => {}
            }
        }
        Ok(total)
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Some(limit) = self.quota {
            let requested = key.len() + value.len();
            if self.used_bytes_excluding(key)? + requested > limit {
                return Err(Error::QuotaExceeded { requested, limit });
            }
        }
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self) -> Result<()> {
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.path().is_file() {
                std::fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if let Some(key) = decode_key(&name) {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

// ============================================================================
// KEY <-> FILENAME ENCODING
// ============================================================================

/// Encode a storage key as a safe filename.
///
/// Alphanumerics, `-`, `_` and `.` pass through; everything else becomes
/// `%XX`. Every key used by this crate passes through unchanged.
fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

/// Reverse of [`encode_key`]. Returns `None` for filenames this backend did
/// not produce.
fn decode_key(name: &str) -> Option<String> {
    let bytes = name.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = name.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let backend = MemoryBackend::new();

        backend.set("portfolioData", "{}").unwrap();
        assert_eq!(backend.get("portfolioData").unwrap().as_deref(), Some("{}"));

        backend.remove("portfolioData").unwrap();
        assert!(backend.get("portfolioData").unwrap().is_none());
    }

    #[test]
    fn test_memory_clear_and_keys() {
        let backend = MemoryBackend::new();
        backend.set("a", "1").unwrap();
        backend.set("b", "2").unwrap();

        let mut keys = backend.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);

        backend.clear().unwrap();
        assert!(backend.keys().unwrap().is_empty());
    }

    #[test]
    fn test_memory_quota() {
        let backend = MemoryBackend::with_quota(16);
        backend.set("k", "0123456789").unwrap();

        let err = backend.set("k2", "0123456789").unwrap_err();
        assert!(matches!(err, Error::QuotaExceeded { .. }));

        // Overwriting the existing key within budget still works
        backend.set("k", "0123").unwrap();
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("0123"));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.set("portfolio-projects-1", "data:image/png;base64,AA==").unwrap();
        assert_eq!(
            backend.get("portfolio-projects-1").unwrap().as_deref(),
            Some("data:image/png;base64,AA==")
        );

        backend.remove("portfolio-projects-1").unwrap();
        assert!(backend.get("portfolio-projects-1").unwrap().is_none());
        // Removing again is not an error
        backend.remove("portfolio-projects-1").unwrap();
    }

    #[test]
    fn test_file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let backend = FileBackend::open(dir.path()).unwrap();
            backend.set("portfolioSkills", "[]").unwrap();
        }
        let backend = FileBackend::open(dir.path()).unwrap();
        assert_eq!(backend.get("portfolioSkills").unwrap().as_deref(), Some("[]"));
        assert_eq!(backend.keys().unwrap(), vec!["portfolioSkills"]);
    }

    #[test]
    fn test_file_quota() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open_with_quota(dir.path(), 20).unwrap();
        backend.set("a", "0123456789").unwrap();

        let err = backend.set("b", "0123456789").unwrap_err();
        assert!(matches!(err, Error::QuotaExceeded { .. }));
    }

    #[test]
    fn test_key_encoding_roundtrip() {
        for key in ["portfolioData", "portfolio-about-7", "odd key/with:chars"] {
            assert_eq!(decode_key(&encode_key(key)).as_deref(), Some(key));
        }
    }
}
