//! Note-taking session
//!
//! Owns the store, the search query and the edit buffer, and applies the
//! user actions of the interface to them one at a time.

use crate::application::editor::{DraftField, EditBuffer};
use crate::application::store::NoteStore;
use crate::domain::{Clock, Note, NoteId, NoteSeed, SearchQuery, SharedClock};
use crate::error::{NotesError, Result};
use chrono::Duration;
use log::{debug, warn};

/// A single user action against the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create a note and open it
    New,
    /// Open a note, or close the editor with `None`
    Select(Option<NoteId>),
    Delete(NoteId),
    Duplicate(NoteId),
    /// Replace the search query
    Search(String),
    /// Keystroke in the title field; carries the whole field value
    EditTitle(String),
    /// Keystroke in the content field; carries the whole field value
    EditContent(String),
    /// Keystroke in the tag input
    TagInput(String),
    /// Add the current tag input to the open note
    AddTag,
    RemoveTag(NoteId, String),
}

/// State of one note-taking session
pub struct Session {
    store: NoteStore,
    editor: EditBuffer,
    query: String,
    clock: SharedClock,
}

impl Session {
    /// Create an empty session with title/content commits debounced by `window`
    pub fn new(clock: SharedClock, window: Duration) -> Self {
        Session {
            store: NoteStore::new(clock.clone()),
            editor: EditBuffer::new(window),
            query: String::new(),
            clock,
        }
    }

    /// Load notes into the store and open the first of them
    pub fn seed(&mut self, seeds: Vec<NoteSeed>) {
        let mut first = None;
        for seed in seeds {
            let id = self.store.insert_seed(seed);
            first.get_or_insert(id);
        }
        if first.is_some() {
            self.store.select(first);
            self.sync_editor();
        }
        debug!("seeded {} notes", self.store.len());
    }

    /// Apply one action.
    ///
    /// Leaving a note for another one commits its pending drafts first.
    /// Failed actions leave the session as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        if self.leaves_open_note(&action) {
            self.editor.flush(&mut self.store)?;
        }

        let now = self.clock.now();
        let result = match action {
            Action::New => {
                self.store.create();
                Ok(())
            }
            Action::Select(id) => {
                self.store.select(id);
                Ok(())
            }
            Action::Delete(id) => self.store.delete(id).map(|_| ()),
            Action::Duplicate(id) => self.store.duplicate(id).map(|_| ()),
            Action::Search(query) => {
                self.query = query;
                Ok(())
            }
            Action::EditTitle(text) => self.editor.set_title(text, now),
            Action::EditContent(text) => self.editor.set_content(text, now),
            Action::TagInput(text) => {
                self.editor.set_tag_input(text);
                Ok(())
            }
            Action::AddTag => self.editor.add_tag(&mut self.store).map(|_| ()),
            Action::RemoveTag(id, tag) => self
                .editor
                .remove_tag(id, &tag, &mut self.store)
                .map(|_| ()),
        };

        if let Err(NotesError::NoteNotFound(id)) = &result {
            warn!("action referenced unknown note {}", id);
        }

        self.sync_editor();
        result
    }

    /// Run the debounced commits that are due now
    pub fn tick(&mut self) -> Result<Vec<DraftField>> {
        self.editor.poll(self.clock.now(), &mut self.store)
    }

    /// Let `duration` pass on the session clock, then run due commits
    pub fn wait(&mut self, duration: Duration) -> Result<Vec<DraftField>> {
        self.clock.wait(duration);
        self.tick()
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn editor(&self) -> &EditBuffer {
        &self.editor
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.store.selected_note()
    }

    /// Notes matching the current query, most recently updated first
    pub fn visible_notes(&self) -> Vec<&Note> {
        self.store.view(&SearchQuery::new(&self.query))
    }

    fn leaves_open_note(&self, action: &Action) -> bool {
        match action {
            Action::New => true,
            Action::Duplicate(id) => self.store.contains(*id),
            Action::Select(id) => *id != self.editor.note_id(),
            _ => false,
        }
    }

    /// Re-open the edit buffer when the selection moved to another note
    fn sync_editor(&mut self) {
        let selected = self.store.selected_note();
        if selected.map(|n| n.id) != self.editor.note_id() {
            self.editor.open(selected);
        }
    }
}
