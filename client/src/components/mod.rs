//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the entry forms and the problem history. The home page
//! owns the shared state signals and wires them in as props.

pub mod factor_form;
pub mod problem_form;
pub mod problem_list;
