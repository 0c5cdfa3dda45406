//! Roster - Student and Professor Record Stores
//!
//! JSON-file-backed record collections for the campus assistant. Each store
//! owns one file, keeps the full roster in memory, and rewrites the file as
//! a whole on every mutation.

pub mod import;
pub mod record;
pub mod store;

pub use record::{ProfessorRecord, StudentRecord};
pub use store::{data_root, professors_path, students_path, RosterStore, StoreError};
