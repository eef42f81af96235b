//! Domain layer - Notes, tags, search and time

pub mod clock;
pub mod note;
pub mod search;
pub mod tag_set;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use note::{Note, NoteId, NotePatch, NoteSeed};
pub use search::{filter_notes, SearchQuery};
pub use tag_set::TagSet;
