//! # Dashboard Operations
//!
//! Same lifecycle as projects, plus the featured flag. At most one
//! dashboard is meant to be featured at a time; [`feature_dashboard`]
//! enforces that by unsetting the others first, while a plain patch writes
//! the flag unguarded.
//!
//! [`feature_dashboard`]: super::ContentStore::feature_dashboard

use super::types::{Dashboard, DashboardDraft, DashboardPatch};

impl super::ContentStore {
    /// Add a dashboard and return its assigned id.
    pub fn add_dashboard(&self, draft: DashboardDraft) -> u32 {
        self.mutate(|state| {
            let id = state.next_dashboard_id;
            state.next_dashboard_id += 1;
            state.doc.dashboards.push(Dashboard {
                id,
                title: draft.title,
                description: draft.description,
                tags: draft.tags,
                image: draft.image,
                demo_link: draft.demo_link,
                code_link: draft.code_link,
                tool: draft.tool,
                featured: false,
                is_hidden: false,
            });
            id
        })
    }

    /// Merge `patch` into the dashboard with this id. Unknown ids are a
    /// no-op.
    pub fn update_dashboard(&self, id: u32, patch: DashboardPatch) {
        self.mutate(|state| {
            if let Some(dashboard) = state.doc.dashboards.iter_mut().find(|d| d.id == id) {
                patch.apply(dashboard);
            }
        });
    }

    /// Soft-delete: hide the card without removing it. Idempotent.
    pub fn hide_dashboard(&self, id: u32) {
        self.mutate(|state| {
            if let Some(dashboard) = state.doc.dashboards.iter_mut().find(|d| d.id == id) {
                dashboard.is_hidden = true;
            }
        });
    }

    /// Undo a soft delete. Idempotent.
    pub fn show_dashboard(&self, id: u32) {
        self.mutate(|state| {
            if let Some(dashboard) = state.doc.dashboards.iter_mut().find(|d| d.id == id) {
                dashboard.is_hidden = false;
            }
        });
    }

    /// Hard-delete: remove the card from the document. Unknown ids are a
    /// no-op.
    pub fn delete_dashboard(&self, id: u32) {
        self.mutate(|state| {
            state.doc.dashboards.retain(|d| d.id != id);
        });
    }

    /// Make this dashboard the single featured one, unsetting every other.
    /// Unknown ids leave the document untouched.
    pub fn feature_dashboard(&self, id: u32) {
        self.mutate(|state| {
            if !state.doc.dashboards.iter().any(|d| d.id == id) {
                return;
            }
            for dashboard in &mut state.doc.dashboards {
                dashboard.featured = dashboard.id == id;
            }
        });
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::storage::{KeyValueStore, StorageArea};

    fn store() -> ContentStore {
        ContentStore::new(KeyValueStore::attach(&StorageArea::in_memory()))
    }

    #[test]
    fn test_add_assigns_id_and_defaults() {
        let store = store();
        let id = store.add_dashboard(DashboardDraft {
            title: "Churn Monitor".into(),
            tool: "Grafana".into(),
            ..Default::default()
        });
        assert_eq!(id, 5);

        let doc = store.document();
        let added = doc.dashboards.iter().find(|d| d.id == id).unwrap();
        assert!(!added.featured);
        assert!(!added.is_hidden);
        assert_eq!(added.tool, "Grafana");
    }

    #[test]
    fn test_feature_unsets_all_others() {
        let store = store();
        // Seed data features dashboard 1
        store.feature_dashboard(3);

        let doc = store.document();
        let featured: Vec<u32> = doc
            .dashboards
            .iter()
            .filter(|d| d.featured)
            .map(|d| d.id)
            .collect();
        assert_eq!(featured, vec![3]);
    }

    #[test]
    fn test_feature_unknown_id_changes_nothing() {
        let store = store();
        store.feature_dashboard(999);

        let doc = store.document();
        let featured: Vec<u32> = doc
            .dashboards
            .iter()
            .filter(|d| d.featured)
            .map(|d| d.id)
            .collect();
        assert_eq!(featured, vec![1]);
    }

    #[test]
    fn test_patch_updates_tool_name() {
        let store = store();
        store.update_dashboard(
            2,
            DashboardPatch {
                tool: Some("Looker".into()),
                ..Default::default()
            },
        );
        let doc = store.document();
        let updated = doc.dashboards.iter().find(|d| d.id == 2).unwrap();
        assert_eq!(updated.tool, "Looker");
        assert_eq!(updated.title, "Customer Behavior Analysis");
    }

    #[test]
    fn test_hide_show_delete_lifecycle() {
        let store = store();
        store.hide_dashboard(4);
        assert!(store.document().dashboards.iter().find(|d| d.id == 4).unwrap().is_hidden);

        store.show_dashboard(4);
        assert!(!store.document().dashboards.iter().find(|d| d.id == 4).unwrap().is_hidden);

        store.delete_dashboard(4);
        assert!(store.document().dashboards.iter().all(|d| d.id != 4));
        // Deleting again is a no-op
        store.delete_dashboard(4);
    }
}
