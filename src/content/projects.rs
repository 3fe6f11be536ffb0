//! # Project Operations
//!
//! Project cards support soft delete (hide/show, reversible) and hard
//! delete (removal from the document, irreversible). The two are separate
//! operations so callers choose deliberately.

use super::types::{Project, ProjectDraft, ProjectPatch};

impl super::ContentStore {
    /// Add a project and return its assigned id.
    ///
    /// Ids are strictly increasing within a session and never reused after
    /// a delete; new cards start visible.
    pub fn add_project(&self, draft: ProjectDraft) -> u32 {
        self.mutate(|state| {
            let id = state.next_project_id;
            state.next_project_id += 1;
            state.doc.projects.push(Project {
                id,
                title: draft.title,
                description: draft.description,
                tags: draft.tags,
                image: draft.image,
                demo_link: draft.demo_link,
                code_link: draft.code_link,
                is_hidden: false,
            });
            id
        })
    }

    /// Merge `patch` into the project with this id. Unknown ids are a no-op.
    pub fn update_project(&self, id: u32, patch: ProjectPatch) {
        self.mutate(|state| {
            if let Some(project) = state.doc.projects.iter_mut().find(|p| p.id == id) {
                patch.apply(project);
            }
        });
    }

    /// Soft-delete: hide the card without removing it. Idempotent.
    pub fn hide_project(&self, id: u32) {
        self.mutate(|state| {
            if let Some(project) = state.doc.projects.iter_mut().find(|p| p.id == id) {
                project.is_hidden = true;
            }
        });
    }

    /// Undo a soft delete. Idempotent.
    pub fn show_project(&self, id: u32) {
        self.mutate(|state| {
            if let Some(project) = state.doc.projects.iter_mut().find(|p| p.id == id) {
                project.is_hidden = false;
            }
        });
    }

    /// Hard-delete: remove the card from the document. Unknown ids are a
    /// no-op, not an error.
    pub fn delete_project(&self, id: u32) {
        self.mutate(|state| {
            state.doc.projects.retain(|p| p.id != id);
        });
    }
}

// ============================================================================
// TESTS
// ============================================================================
