//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its queries and mutations and delegates rendering details
//! to `components`. Form parsing lives in small pure helpers next to the page
//! so it can be tested without a browser.

pub mod ai_weekly;
pub mod catalog;
pub mod docs;
pub mod efficiency;
pub mod files;
pub mod finance;
pub mod grading;
pub mod homework;
pub mod overview;
pub mod person_detail;
pub mod persons;
pub mod skills;
pub mod wake;
pub mod wordbook;
