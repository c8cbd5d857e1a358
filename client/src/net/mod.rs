//! Networking modules for the backend REST services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` abstracts the transport, `services` resolves where each backend
//! lives, `client` adds typed JSON verbs and envelope handling, `api` maps
//! each backend's endpoints, and `types` defines the wire schema.

pub mod api;
pub mod client;
pub mod envelope;
pub mod error;
pub mod http;
pub mod services;
#[cfg(test)]
pub mod testing;
pub mod types;
