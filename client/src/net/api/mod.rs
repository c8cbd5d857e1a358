//! Per-service REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule maps one backend's resources onto [`ApiClient`] verbs. Paths
//! are relative to the service base resolved by the registry, so the same
//! functions work against the host's `/svc/{slug}` forwarder or a direct URL.
//!
//! [`ApiClient`]: super::client::ApiClient

#![allow(clippy::missing_errors_doc)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

pub mod ai_weekly;
pub mod catalog;
pub mod docs;
pub mod efficiency;
pub mod files;
pub mod finance;
pub mod homework;
pub mod persons;
pub mod skills;
pub mod wake;
pub mod wordbook;
