//! Problem-list state for the home page.
//!
//! DESIGN
//! ======
//! The list always mirrors the last full fetch of the `problems` table, so
//! mutations refresh the list instead of patching it in place. Selection is
//! tracked by id rather than by index, letting it survive a refetch as long
//! as the selected row still exists.

#[cfg(test)]
#[path = "problems_test.rs"]
mod problems_test;

use records::Problem;
use uuid::Uuid;

/// Shared problem list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct ProblemsState {
    pub items: Vec<Problem>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_id: Option<Uuid>,
}

impl ProblemsState {
    /// Replace the list with a fresh fetch result.
    ///
    /// Clears the loading flag and any stale error. A selection whose row no
    /// longer exists (deleted elsewhere) is dropped.
    pub fn replace(&mut self, items: Vec<Problem>) {
        if let Some(selected_id) = self.selected_id {
            if !items.iter().any(|problem| problem.id == selected_id) {
                self.selected_id = None;
            }
        }
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Select a problem row, or clear the selection if it is already selected.
    pub fn toggle_selected(&mut self, id: Uuid) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
        } else {
            self.selected_id = Some(id);
        }
    }

    /// The currently selected problem, if any.
    pub fn selected(&self) -> Option<&Problem> {
        let selected_id = self.selected_id?;
        self.items.iter().find(|problem| problem.id == selected_id)
    }
}
