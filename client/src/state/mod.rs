//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`grading`, `toast`, `ui`, `wordbook`) so
//! individual components can depend on small focused models. Server data
//! lives in the query cache, not here.

pub mod grading;
pub mod toast;
pub mod ui;
pub mod wordbook;
