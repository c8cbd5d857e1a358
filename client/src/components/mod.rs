//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and shared presentation (tables,
//! dialogs, markdown, the dependency graph) while reading/writing shared state
//! from Leptos context providers.

pub mod data_table;
pub mod dependency_graph;
pub mod dialog;
pub mod field;
pub mod file_picker;
pub mod layout;
pub mod markdown_view;
pub mod query_status;
pub mod toast_host;
