//! In-memory note store
//!
//! The store is the single owner of every note in a session. It keeps the
//! collection in insertion order (newest insertions first), tracks the
//! selected note, and hands out strictly increasing modification stamps.

use crate::domain::{
    filter_notes, Clock, Note, NoteId, NotePatch, NoteSeed, SearchQuery, SharedClock,
};
use crate::error::{NotesError, Result};
use chrono::{DateTime, Duration, Utc};
use log::debug;

/// Authoritative note collection plus the current selection
pub struct NoteStore {
    notes: Vec<Note>,
    selected: Option<NoteId>,
    next_id: u64,
    last_stamp: Option<DateTime<Utc>>,
    clock: SharedClock,
}

impl NoteStore {
    /// Create an empty store stamping mutations with `clock`
    pub fn new(clock: SharedClock) -> Self {
        NoteStore {
            notes: Vec::new(),
            selected: None,
            next_id: 1,
            last_stamp: None,
            clock,
        }
    }

    /// Create a new empty note, select it, and return its id
    pub fn create(&mut self) -> NoteId {
        let id = self.allocate_id();
        let note = Note::new(id, self.stamp());
        self.notes.insert(0, note);
        self.selected = Some(id);
        debug!("created note {}", id);
        id
    }

    /// Insert a note with its own stamp without touching the selection
    pub fn insert_seed(&mut self, seed: NoteSeed) -> NoteId {
        let id = self.allocate_id();
        let note = seed.into_note(id);
        if self.last_stamp.map_or(true, |last| note.updated_at > last) {
            self.last_stamp = Some(note.updated_at);
        }
        self.notes.push(note);
        id
    }

    /// Merge `patch` into the note `id` and refresh its stamp.
    ///
    /// An unknown id leaves the store untouched.
    pub fn update(&mut self, id: NoteId, patch: NotePatch) -> Result<()> {
        let index = self.index_of(id).ok_or(NotesError::NoteNotFound(id))?;
        let stamp = self.stamp();
        let changed = self.notes[index].apply(patch, stamp);
        debug!("updated note {} (changed: {})", id, changed);
        Ok(())
    }

    /// Remove the note `id` and return it.
    ///
    /// When the removed note was selected, the selection moves to the most
    /// recently updated remaining note, or to none if the store is empty.
    pub fn delete(&mut self, id: NoteId) -> Result<Note> {
        let index = self.index_of(id).ok_or(NotesError::NoteNotFound(id))?;
        let removed = self.notes.remove(index);

        if self.selected == Some(id) {
            self.selected = self.most_recent().map(|n| n.id);
            debug!(
                "deleted selected note {}, selection now {:?}",
                id,
                self.selected.map(|s| s.value())
            );
        } else {
            debug!("deleted note {}", id);
        }

        Ok(removed)
    }

    /// Copy the note `id` into a new note marked as a copy, and select it
    pub fn duplicate(&mut self, id: NoteId) -> Result<NoteId> {
        let index = self.index_of(id).ok_or(NotesError::NoteNotFound(id))?;
        let new_id = self.allocate_id();
        let stamp = self.stamp();
        let copy = self.notes[index].duplicate(new_id, stamp);

        self.notes.insert(0, copy);
        self.selected = Some(new_id);
        debug!("duplicated note {} as {}", id, new_id);
        Ok(new_id)
    }

    /// Point the selection at `id`. Any id is accepted, present or not.
    pub fn select(&mut self, id: Option<NoteId>) {
        self.selected = id;
        debug!("selected {:?}", id.map(|s| s.value()));
    }

    pub fn selected_id(&self) -> Option<NoteId> {
        self.selected
    }

    /// The selected note, if the selection points at an existing note
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NoteId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Notes in collection order
    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// Notes matching `query`, most recently updated first
    pub fn view(&self, query: &SearchQuery) -> Vec<&Note> {
        filter_notes(&self.notes, query)
    }

    /// Most recently updated note; ties go to collection order
    pub fn most_recent(&self) -> Option<&Note> {
        self.view(&SearchQuery::all()).into_iter().next()
    }

    fn index_of(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    fn allocate_id(&mut self) -> NoteId {
        let id = NoteId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Current time, bumped past the previous stamp when the clock has not moved
    fn stamp(&mut self) -> DateTime<Utc> {
        let now = self.clock.now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }
}
