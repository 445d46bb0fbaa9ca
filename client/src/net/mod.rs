//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the server's `problems` and `factors` endpoints. Record shapes
//! come from the shared `records` crate, so the wire schema lives in one
//! place.

pub mod api;
