//! Factor-list state for the home page.
//!
//! DESIGN
//! ======
//! Factors for every problem are fetched in one call and filtered per problem
//! at render time, matching the flat `factors` table on the server. Rows for
//! deleted problems simply stop being rendered once their problem is gone.

#[cfg(test)]
#[path = "factors_test.rs"]
mod factors_test;

use records::Factor;
use uuid::Uuid;

/// Shared factor list state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct FactorsState {
    pub items: Vec<Factor>,
    pub loading: bool,
    pub error: Option<String>,
}

impl FactorsState {
    /// Replace the list with a fresh fetch result.
    pub fn replace(&mut self, items: Vec<Factor>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// The factors attached to one problem, in stored order.
    pub fn for_problem(&self, problem_id: Uuid) -> Vec<&Factor> {
        self.items.iter().filter(|factor| factor.problem_id == problem_id).collect()
    }
}
