//! Search query matching and the recency-sorted note view

use crate::domain::Note;

/// Normalized search query: trimmed and lowercased
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        SearchQuery {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// The query that matches every note
    pub fn all() -> Self {
        SearchQuery::default()
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Check whether a note matches on title, content, or joined tags
    pub fn matches(&self, note: &Note) -> bool {
        if self.is_empty() {
            return true;
        }

        note.title.to_lowercase().contains(&self.needle)
            || note.content.to_lowercase().contains(&self.needle)
            || note.tags.joined().to_lowercase().contains(&self.needle)
    }
}

/// Project notes through a query, most recently updated first.
///
/// The sort is stable, so notes with equal stamps keep their input order.
pub fn filter_notes<'a, I>(notes: I, query: &SearchQuery) -> Vec<&'a Note>
where
    I: IntoIterator<Item = &'a Note>,
{
    let mut matched: Vec<&Note> = notes.into_iter().filter(|n| query.matches(n)).collect();
    matched.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    matched
}
