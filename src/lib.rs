//! ocean-notes - Memory-only terminal notes
//!
//! An interactive note-taking session that keeps every note in memory for
//! the lifetime of the process, with search, tagging, duplication and
//! debounced title/content editing.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NotesError;
