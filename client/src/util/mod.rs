//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure data
//! shaping (tables, markdown, graph layout, reply parsing) from page and
//! component logic to improve reuse and testability.

pub mod dark_mode;
pub mod format;
pub mod graph;
pub mod markdown;
pub mod table;
pub mod table_rows;
pub mod time;
pub mod ui_persistence;
pub mod wordbook_parse;
