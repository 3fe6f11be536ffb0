//! Dark-mode preference, persisted as the plain string `"true"`/`"false"`.

use crate::storage::{keys, KeyValueStore};

/// Site color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light color scheme (the default)
    #[default]
    Light,
    /// Dark color scheme
    Dark,
}

/// Read the stored preference; anything but `"true"` is light mode.
pub fn load(kv: &KeyValueStore) -> Theme {
    match kv.get_raw(keys::DARK_MODE).as_deref() {
        Some("true") => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Persist the preference. Failures are logged, not propagated.
pub fn store(kv: &KeyValueStore, theme: Theme) {
    let value = match theme {
        Theme::Dark => "true",
        Theme::Light => "false",
    };
    if let Err(e) = kv.set_raw(keys::DARK_MODE, value) {
        tracing::warn!(error = %e, "unable to persist theme preference");
    }
}

/// Flip and persist the preference, returning the new value.
pub fn toggle(kv: &KeyValueStore) -> Theme {
    let next = match load(kv) {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    };
    store(kv, next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, StorageArea};

    #[test]
    fn test_defaults_to_light() {
        let kv = KeyValueStore::attach(&StorageArea::in_memory());
        assert_eq!(load(&kv), Theme::Light);
    }

    #[test]
    fn test_toggle_roundtrip() {
        let kv = KeyValueStore::attach(&StorageArea::in_memory());
        assert_eq!(toggle(&kv), Theme::Dark);
        assert_eq!(kv.get_raw(keys::DARK_MODE).as_deref(), Some("true"));
        assert_eq!(toggle(&kv), Theme::Light);
        assert_eq!(load(&kv), Theme::Light);
    }
}
