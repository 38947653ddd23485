//! Networking modules for the HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls and `types` defines the JSON schema shared with
//! the server's contact endpoint.

pub mod api;
pub mod types;
