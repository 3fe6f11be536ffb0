//! # About Operations
//!
//! The about section carries fixed profile fields, a list of admin-authored
//! custom sections, and optional headshot placement settings. The plain
//! fields merge through [`AboutPatch`]; sections and headshot settings have
//! their own operations so "clear" and "leave untouched" stay distinct.

use super::types::{AboutPatch, CustomSection, HeadshotSettings, SectionKind};

/// Partial update for one custom section.
#[derive(Debug, Clone, Default)]
#[allow(missing_docs)]
pub struct SectionPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub kind: Option<SectionKind>,
}

impl super::ContentStore {
    /// Merge `patch` into the about section's plain fields.
    pub fn update_about(&self, patch: AboutPatch) {
        self.mutate(|state| patch.apply(&mut state.doc.about));
    }

    /// Append a custom section and return its assigned id.
    pub fn add_section(&self, title: &str, content: &str, kind: SectionKind) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.mutate(|state| {
            state.doc.about.sections.push(CustomSection {
                id: id.clone(),
                title: title.to_string(),
                content: content.to_string(),
                kind,
            });
        });
        id
    }

    /// Merge `patch` into the section with this id. Unknown ids are a no-op.
    pub fn update_section(&self, id: &str, patch: SectionPatch) {
        self.mutate(|state| {
            if let Some(section) = state.doc.about.sections.iter_mut().find(|s| s.id == id) {
                if let Some(title) = patch.title {
                    section.title = title;
                }
                if let Some(content) = patch.content {
                    section.content = content;
                }
                if let Some(kind) = patch.kind {
                    section.kind = kind;
                }
            }
        });
    }

    /// Remove the section with this id. Unknown ids are a no-op.
    pub fn remove_section(&self, id: &str) {
        self.mutate(|state| {
            state.doc.about.sections.retain(|s| s.id != id);
        });
    }

    /// Set or clear the headshot placement settings.
    pub fn set_headshot_settings(&self, settings: Option<HeadshotSettings>) {
        self.mutate(|state| {
            state.doc.about.headshot_settings = settings;
        });
    }
}

// ============================================================================
// TESTS
// ============================================================================
