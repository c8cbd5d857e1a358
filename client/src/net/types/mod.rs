//! Domain DTOs mirrored from the backend services.
//!
//! DESIGN
//! ======
//! Records are plain serde structs shaped like each service's JSON. Backends
//! disagree on id and number encodings (`7`, `"7"`, `7.0`), so decoding is
//! lenient through the helpers in [`de`]; the dashboard never originates
//! identity itself.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

pub mod ai_weekly;
pub mod catalog;
pub mod de;
pub mod docs;
pub mod efficiency;
pub mod files;
pub mod finance;
pub mod homework;
pub mod persons;
pub mod skills;
pub mod wake;
pub mod wordbook;
