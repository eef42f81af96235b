//! Note model and partial updates

use crate::domain::TagSet;
use crate::error::NotesError;
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Title shown for notes whose title is blank
pub const UNTITLED: &str = "Untitled";

/// Suffix appended to the title of a duplicated note
pub const COPY_SUFFIX: &str = " (Copy)";

/// Opaque note identifier, unique within a store for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(u64);

impl NoteId {
    pub fn new(value: u64) -> Self {
        NoteId(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('#');
        match trimmed.parse::<u64>() {
            Ok(value) if value > 0 => Ok(NoteId(value)),
            _ => Err(NotesError::InvalidNoteId(s.to_string())),
        }
    }
}

/// A user-authored note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub tags: TagSet,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a fresh note with the default title and no content
    pub fn new(id: NoteId, updated_at: DateTime<Utc>) -> Self {
        Note {
            id,
            title: UNTITLED.to_string(),
            content: String::new(),
            tags: TagSet::new(),
            updated_at,
        }
    }

    /// Title for display; blank titles read as "Untitled"
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// Copy of this note under a new id, marked as a copy in its title
    pub fn duplicate(&self, id: NoteId, updated_at: DateTime<Utc>) -> Self {
        Note {
            id,
            title: format!("{}{}", self.title, COPY_SUFFIX),
            content: self.content.clone(),
            tags: self.tags.clone(),
            updated_at,
        }
    }

    /// Merge the fields present in `patch` and stamp the note.
    ///
    /// Returns true if any field value actually changed.
    pub fn apply(&mut self, patch: NotePatch, updated_at: DateTime<Utc>) -> bool {
        let mut changed = false;

        if let Some(title) = patch.title {
            changed |= self.title != title;
            self.title = title;
        }
        if let Some(content) = patch.content {
            changed |= self.content != content;
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            changed |= self.tags != tags;
            self.tags = tags;
        }

        self.updated_at = updated_at;
        changed
    }
}

/// Note contents with an explicit stamp, inserted as-is into a store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSeed {
    pub title: String,
    pub content: String,
    pub tags: TagSet,
    pub updated_at: DateTime<Utc>,
}

impl NoteSeed {
    pub fn into_note(self, id: NoteId) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            updated_at: self.updated_at,
        }
    }
}

/// Partial update for a note; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<TagSet>,
}

impl NotePatch {
    pub fn title(title: impl Into<String>) -> Self {
        NotePatch {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        NotePatch {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn tags(tags: TagSet) -> Self {
        NotePatch {
            tags: Some(tags),
            ..Default::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_tags(mut self, tags: TagSet) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tags.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_note_id_parse() {
        assert_eq!(NoteId::from_str("3").unwrap(), NoteId::new(3));
        assert_eq!(NoteId::from_str(" #12 ").unwrap(), NoteId::new(12));
    }

    #[test]
    fn test_note_id_parse_invalid() {
        assert!(NoteId::from_str("0").is_err());
        assert!(NoteId::from_str("abc").is_err());
        assert!(NoteId::from_str("-1").is_err());
        match NoteId::from_str("x1").unwrap_err() {
            NotesError::InvalidNoteId(raw) => assert_eq!(raw, "x1"),
            other => panic!("Expected InvalidNoteId, got {:?}", other),
        }
    }

    #[test]
    fn test_new_note_defaults() {
        let note = Note::new(NoteId::new(1), at(5));
        assert_eq!(note.title, "Untitled");
        assert!(note.content.is_empty());
        assert!(note.tags.is_empty());
        assert_eq!(note.updated_at, at(5));
    }

    #[test]
    fn test_display_title_blank() {
        let mut note = Note::new(NoteId::new(1), at(0));
        note.title = "   ".to_string();
        assert_eq!(note.display_title(), "Untitled");

        note.title = "Ideas".to_string();
        assert_eq!(note.display_title(), "Ideas");
    }

    #[test]
    fn test_apply_patch_merges_only_present_fields() {
        let mut note = Note::new(NoteId::new(1), at(0));
        note.content = "body".to_string();

        let changed = note.apply(NotePatch::title("Plans"), at(10));

        assert!(changed);
        assert_eq!(note.title, "Plans");
        assert_eq!(note.content, "body");
        assert_eq!(note.updated_at, at(10));
    }

    #[test]
    fn test_apply_same_values_reports_unchanged() {
        let mut note = Note::new(NoteId::new(1), at(0));
        let changed = note.apply(NotePatch::title("Untitled").with_content(""), at(3));
        assert!(!changed);
        // Accepted mutations still refresh the stamp
        assert_eq!(note.updated_at, at(3));
    }

    #[test]
    fn test_duplicate_copies_fields() {
        let mut note = Note::new(NoteId::new(1), at(0));
        note.title = "Ideas".to_string();
        note.content = "x".to_string();
        note.tags = TagSet::from_iter(["a", "b"]);

        let copy = note.duplicate(NoteId::new(2), at(9));

        assert_eq!(copy.id, NoteId::new(2));
        assert_eq!(copy.title, "Ideas (Copy)");
        assert_eq!(copy.content, "x");
        assert_eq!(copy.tags, note.tags);
        assert_eq!(copy.updated_at, at(9));
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(NotePatch::default().is_empty());
        assert!(!NotePatch::tags(TagSet::new()).is_empty());
    }
}
