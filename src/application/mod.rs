//! Application layer - Session state and use cases

pub mod debounce;
pub mod editor;
pub mod session;
pub mod store;

pub use debounce::Debouncer;
pub use editor::{DraftField, EditBuffer};
pub use session::{Action, Session};
pub use store::NoteStore;
