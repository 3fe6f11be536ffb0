//! Hero section operations.

use super::types::HeroPatch;

impl super::ContentStore {
    /// Merge `patch` into the hero section.
    pub fn update_hero(&self, patch: HeroPatch) {
        self.mutate(|state| patch.apply(&mut state.doc.hero));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::storage::{KeyValueStore, StorageArea};

    #[test]
    fn test_update_hero_merges_fields() {
        let store = ContentStore::new(KeyValueStore::attach(&StorageArea::in_memory()));
        let before = store.document().hero;

        store.update_hero(HeroPatch {
            subtitle: Some("ANALYTICS ENGINEER".into()),
            ..Default::default()
        });

        let after = store.document().hero;
        assert_eq!(after.subtitle, "ANALYTICS ENGINEER");
        assert_eq!(after.title, before.title);
        assert_eq!(after.description, before.description);
    }
}
