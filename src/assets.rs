//! # Image Asset Store
//!
//! Uploaded images, stored as data-URL strings under per-section, per-item
//! keys (`portfolio-{section}-{item}`). Images live outside the content
//! document because they are large and churn independently of text edits.
//!
//! Validation happens before any write: a rejected upload leaves storage
//! untouched, so a subsequent read returns the caller's fallback URL rather
//! than a partial image.

use std::collections::BTreeMap;

use base64::Engine;

use crate::error::{Error, Result};
use crate::storage::{keys, KeyValueStore};

/// MIME types accepted for an image upload.
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    "image/bmp",
    "image/tiff",
];

/// Maximum decoded image size (10 MB).
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Section name used for standalone gallery uploads that are not attached
/// to any card.
pub const GALLERY_SECTION: &str = "image";

/// Store for uploaded images.
pub struct ImageAssetStore {
    kv: KeyValueStore,
}

impl ImageAssetStore {
    /// Create an image store over the given storage handle.
    pub fn new(kv: KeyValueStore) -> Self {
        Self { kv }
    }

    /// Validate and store an image for one section item.
    ///
    /// `section` groups keys by entity type (`projects`, `dashboards`,
    /// `about`, ...) and `item` identifies the card within it, so entity
    /// types cannot collide.
    pub fn save(&self, section: &str, item: &str, data_url: &str) -> Result<()> {
        let image = InlineImage::parse(data_url)?;
        if !ACCEPTED_IMAGE_TYPES.contains(&image.mime.as_str()) {
            return Err(Error::UnsupportedImageType(image.mime));
        }
        if image.decoded_size > MAX_IMAGE_SIZE {
            return Err(Error::ImageTooLarge {
                size: image.decoded_size,
                max: MAX_IMAGE_SIZE,
            });
        }

        self.kv.set_raw(&keys::image_key(section, item), data_url)
    }

    /// Store a standalone gallery image and return its storage key.
    pub fn save_to_gallery(&self, data_url: &str) -> Result<String> {
        let item = uuid::Uuid::new_v4().to_string();
        self.save(GALLERY_SECTION, &item, data_url)?;
        Ok(keys::image_key(GALLERY_SECTION, &item))
    }

    /// The image URL for a section item: the uploaded data URL if one
    /// exists, otherwise `fallback`.
    pub fn url(&self, section: &str, item: &str, fallback: &str) -> String {
        match self.kv.get_raw(&keys::image_key(section, item)) {
            Some(value) if value.starts_with("data:image/") => value,
            _ => fallback.to_string(),
        }
    }

    /// Remove the uploaded image for a section item, if any.
    pub fn remove(&self, section: &str, item: &str) {
        self.kv.remove(&keys::image_key(section, item));
    }

    /// Every stored image, keyed by storage key. Backs the gallery view.
    pub fn saved_images(&self) -> BTreeMap<String, String> {
        let mut images = BTreeMap::new();
        for key in self.kv.keys() {
            if !key.starts_with(keys::IMAGE_PREFIX) {
                continue;
            }
            if let Some(value) = self.kv.get_raw(&key) {
                if value.starts_with("data:image/") {
                    images.insert(key, value);
                }
            }
        }
        images
    }
}

/// A parsed `data:image/...` URL.
struct InlineImage {
    mime: String,
    decoded_size: usize,
}

impl InlineImage {
    /// Split a data URL into its MIME type and decoded payload size.
    ///
    /// Base64 payloads are decoded to verify integrity; percent-encoded SVG
    /// payloads are measured as-is.
    fn parse(data_url: &str) -> Result<Self> {
        let rest = data_url
            .strip_prefix("data:")
            .ok_or_else(|| Error::InvalidImageData("not a data URL".into()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::InvalidImageData("missing payload".into()))?;

        let (mime, base64) = match header.strip_suffix(";base64") {
            Some(mime) => (mime, true),
            None => (header, false),
        };
        if mime.is_empty() {
            return Err(Error::InvalidImageData("missing MIME type".into()));
        }

        let decoded_size = if base64 {
            base64::engine::general_purpose::STANDARD
                .decode(payload)
                .map_err(|e| Error::InvalidImageData(format!("bad base64 payload: {}", e)))?
                .len()
        } else {
            payload.len()
        };

        Ok(Self {
            mime: mime.to_string(),
            decoded_size,
        })
    }
}

/// Render a byte count the way the admin UI displays file sizes.
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} bytes", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryBackend, StorageArea};

    const PIXEL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

    fn store() -> ImageAssetStore {
        ImageAssetStore::new(KeyValueStore::attach(&StorageArea::in_memory()))
    }

    #[test]
    fn test_save_and_read_back() {
        let store = store();
        store.save("projects", "3", PIXEL).unwrap();
        assert_eq!(store.url("projects", "3", "fallback.png"), PIXEL);
    }

    #[test]
    fn test_fallback_when_absent() {
        assert_eq!(store().url("projects", "3", "fallback.png"), "fallback.png");
    }

    #[test]
    fn test_rejects_unsupported_mime() {
        let err = store()
            .save("projects", "3", "data:text/plain;base64,aGk=")
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedImageType(t) if t == "text/plain"));
    }

    #[test]
    fn test_rejects_oversized_image_before_writing() {
        let store = store();
        // ~12 MB of zero bytes, over the 10 MB cap
        let payload =
            base64::engine::general_purpose::STANDARD.encode(vec![0u8; 12 * 1024 * 1024]);
        let data_url = format!("data:image/png;base64,{}", payload);

        let err = store.save("projects", "3", &data_url).unwrap_err();
        assert!(matches!(err, Error::ImageTooLarge { .. }));
        // Nothing was written; reads return the fallback, not a partial image
        assert_eq!(store.url("projects", "3", "fallback.png"), "fallback.png");
    }

    #[test]
    fn test_rejects_garbage_data_url() {
        let store = store();
        assert!(matches!(
            store.save("projects", "3", "not-a-data-url"),
            Err(Error::InvalidImageData(_))
        ));
        assert!(matches!(
            store.save("projects", "3", "data:image/png;base64,@@@"),
            Err(Error::InvalidImageData(_))
        ));
    }

    #[test]
    fn test_quota_surfaces_as_typed_error() {
        let area = StorageArea::new(MemoryBackend::with_quota(64));
        let store = ImageAssetStore::new(KeyValueStore::attach(&area));

        let err = store.save("projects", "3", PIXEL).unwrap_err();
        assert!(matches!(err, Error::QuotaExceeded { .. }));
    }

    #[test]
    fn test_sections_do_not_collide() {
        let store = store();
        store.save("projects", "1", PIXEL).unwrap();
        assert_eq!(store.url("dashboards", "1", "fallback"), "fallback");
    }

    #[test]
    fn test_gallery_listing() {
        let store = store();
        store.save("projects", "1", PIXEL).unwrap();
        let key = store.save_to_gallery(PIXEL).unwrap();

        let images = store.saved_images();
        assert_eq!(images.len(), 2);
        assert!(images.contains_key("portfolio-projects-1"));
        assert!(images.contains_key(&key));

        store.remove("projects", "1");
        assert_eq!(store.saved_images().len(), 1);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
    }
}
