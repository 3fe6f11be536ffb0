//! Contact section operations.

use super::types::ContactPatch;

impl super::ContentStore {
    /// Merge `patch` into the contact details.
    pub fn update_contact_info(&self, patch: ContactPatch) {
        self.mutate(|state| patch.apply(&mut state.doc.contact_info));
    }
}
