//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own operation semantics and store access so route
//! handlers can stay focused on protocol translation.

pub mod factor;
pub mod problem;
