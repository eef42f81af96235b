//! Insertion-ordered tag sets

use std::fmt;

/// Ordered set of tag labels with exact-match deduplication
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        TagSet::default()
    }

    /// Add a tag from raw user input.
    ///
    /// The input is trimmed; empty input and tags already present are
    /// ignored. Returns true if the set grew.
    pub fn add(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove the tag matching `tag` exactly. Returns true if it was present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Tags joined by single spaces, the form searched by queries
    pub fn joined(&self) -> String {
        self.tags.join(" ")
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.add(tag.as_ref());
        }
        set
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.tags.iter().map(|t| format!("#{}", t)).collect();
        write!(f, "{}", labels.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_keeps_order() {
        let mut tags = TagSet::new();
        assert!(tags.add("  work "));
        assert!(tags.add("home"));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["work", "home"]);
    }

    #[test]
    fn test_add_ignores_empty() {
        let mut tags = TagSet::new();
        assert!(!tags.add(""));
        assert!(!tags.add("   "));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_add_same_tag_twice() {
        let mut tags = TagSet::new();
        assert!(tags.add("ideas"));
        assert!(!tags.add("ideas"));
        assert!(!tags.add(" ideas"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let tags = TagSet::from_iter(["Work", "work", "Work"]);
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["Work", "work"]);
    }

    #[test]
    fn test_remove_exact_match_only() {
        let mut tags = TagSet::from_iter(["work", "workout"]);
        assert!(!tags.remove("wor"));
        assert!(tags.remove("work"));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["workout"]);
        assert!(!tags.remove("work"));
    }

    #[test]
    fn test_joined_and_display() {
        let tags = TagSet::from_iter(["welcome", "info"]);
        assert_eq!(tags.joined(), "welcome info");
        assert_eq!(tags.to_string(), "#welcome #info");
    }
}
