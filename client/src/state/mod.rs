//! Shared reactive state for the problem tracker UI.
//!
//! DESIGN
//! ======
//! The page owns fetching and mutation flows; these modules only hold the
//! fetched rows and the pure list operations over them, which keeps them
//! testable without a browser.

pub mod factors;
pub mod problems;
