//! Draft buffer for the note being edited
//!
//! Title and content edits land in a local draft first and reach the store
//! only through per-field debouncers. Tag edits are discrete actions and go
//! straight to the store.

use crate::application::debounce::Debouncer;
use crate::application::store::NoteStore;
use crate::domain::{Note, NoteId, NotePatch};
use crate::error::{NotesError, Result};
use chrono::{DateTime, Duration, Utc};
use log::{debug, trace};
use std::fmt;

/// Text field of a note that is edited through the draft buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Content,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftField::Title => write!(f, "title"),
            DraftField::Content => write!(f, "content"),
        }
    }
}

/// Uncommitted edit state for the open note
#[derive(Debug, Clone)]
pub struct EditBuffer {
    note_id: Option<NoteId>,
    title: String,
    content: String,
    tag_input: String,
    title_commit: Debouncer<String>,
    content_commit: Debouncer<String>,
}

impl EditBuffer {
    /// Create a closed buffer whose commits wait `window` after the last edit
    pub fn new(window: Duration) -> Self {
        EditBuffer {
            note_id: None,
            title: String::new(),
            content: String::new(),
            tag_input: String::new(),
            title_commit: Debouncer::new(window),
            content_commit: Debouncer::new(window),
        }
    }

    pub fn note_id(&self) -> Option<NoteId> {
        self.note_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    /// Whether `field` has a draft waiting for its quiet window
    pub fn is_pending(&self, field: DraftField) -> bool {
        self.debouncer(field).is_pending()
    }

    /// Bind the buffer to `note`, or close it when `None`.
    ///
    /// Drafts still pending for the previous note are dropped; callers that
    /// want to keep them run [`EditBuffer::flush`] first.
    pub fn open(&mut self, note: Option<&Note>) {
        for field in [DraftField::Title, DraftField::Content] {
            if let Some(dropped) = self.debouncer_mut(field).cancel() {
                debug!(
                    "dropped pending {} draft for note {:?}: {:?}",
                    field,
                    self.note_id.map(|id| id.value()),
                    dropped
                );
            }
        }

        self.note_id = note.map(|n| n.id);
        self.title = note.map(|n| n.title.clone()).unwrap_or_default();
        self.content = note.map(|n| n.content.clone()).unwrap_or_default();
        self.tag_input.clear();
    }

    /// Replace the draft title and restart its commit timer
    pub fn set_title(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> Result<()> {
        self.edit(DraftField::Title, text.into(), now)
    }

    /// Replace the draft content and restart its commit timer
    pub fn set_content(&mut self, text: impl Into<String>, now: DateTime<Utc>) -> Result<()> {
        self.edit(DraftField::Content, text.into(), now)
    }

    /// Commit every draft whose quiet window has elapsed at `now`.
    ///
    /// Returns the fields that actually changed the store.
    pub fn poll(&mut self, now: DateTime<Utc>, store: &mut NoteStore) -> Result<Vec<DraftField>> {
        let mut committed = Vec::new();
        for field in [DraftField::Title, DraftField::Content] {
            if let Some(value) = self.debouncer_mut(field).poll(now) {
                if self.commit(field, value, store)? {
                    committed.push(field);
                }
            }
        }
        Ok(committed)
    }

    /// Commit every pending draft now, ignoring the quiet window
    pub fn flush(&mut self, store: &mut NoteStore) -> Result<Vec<DraftField>> {
        let mut committed = Vec::new();
        for field in [DraftField::Title, DraftField::Content] {
            if let Some(value) = self.debouncer_mut(field).cancel() {
                if self.commit(field, value, store)? {
                    committed.push(field);
                }
            }
        }
        Ok(committed)
    }

    pub fn set_tag_input(&mut self, text: impl Into<String>) {
        self.tag_input = text.into();
    }

    /// Merge the tag input into the open note's tags and commit at once.
    ///
    /// Blank input is ignored. The input is cleared whenever the tag ends up
    /// on the note, including when it was already there. Returns true if the
    /// tag set changed.
    pub fn add_tag(&mut self, store: &mut NoteStore) -> Result<bool> {
        let id = self.note_id.ok_or(NotesError::NoSelection)?;
        let tag = self.tag_input.trim().to_string();
        if tag.is_empty() {
            return Ok(false);
        }

        let mut tags = store
            .get(id)
            .ok_or(NotesError::NoteNotFound(id))?
            .tags
            .clone();
        let added = tags.add(&tag);
        store.update(id, NotePatch::tags(tags))?;
        self.tag_input.clear();

        debug!("tag '{}' on note {} (new: {})", tag, id, added);
        Ok(added)
    }

    /// Remove `tag` from note `id` and commit at once. Returns true if present.
    pub fn remove_tag(&self, id: NoteId, tag: &str, store: &mut NoteStore) -> Result<bool> {
        let mut tags = store
            .get(id)
            .ok_or(NotesError::NoteNotFound(id))?
            .tags
            .clone();
        if !tags.remove(tag) {
            return Ok(false);
        }

        store.update(id, NotePatch::tags(tags))?;
        debug!("removed tag '{}' from note {}", tag, id);
        Ok(true)
    }

    fn edit(&mut self, field: DraftField, text: String, now: DateTime<Utc>) -> Result<()> {
        if self.note_id.is_none() {
            return Err(NotesError::NoSelection);
        }

        match field {
            DraftField::Title => self.title = text.clone(),
            DraftField::Content => self.content = text.clone(),
        }
        if let Some(superseded) = self.debouncer_mut(field).schedule(text, now) {
            trace!("superseded {} draft {:?}", field, superseded);
        }
        Ok(())
    }

    /// Write `value` to the open note when it differs from the committed one
    fn commit(&self, field: DraftField, value: String, store: &mut NoteStore) -> Result<bool> {
        let Some(id) = self.note_id else {
            return Ok(false);
        };
        let Some(note) = store.get(id) else {
            debug!("note {} is gone, {} draft discarded", id, field);
            return Ok(false);
        };

        let patch = match field {
            DraftField::Title if note.title != value => NotePatch::title(value),
            DraftField::Content if note.content != value => NotePatch::content(value),
            _ => return Ok(false),
        };

        store.update(id, patch)?;
        debug!("committed {} draft to note {}", field, id);
        Ok(true)
    }

    fn debouncer(&self, field: DraftField) -> &Debouncer<String> {
        match field {
            DraftField::Title => &self.title_commit,
            DraftField::Content => &self.content_commit,
        }
    }

    fn debouncer_mut(&mut self, field: DraftField) -> &mut Debouncer<String> {
        match field {
            DraftField::Title => &mut self.title_commit,
            DraftField::Content => &mut self.content_commit,
        }
    }
}
