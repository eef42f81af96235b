//! Welcome notes loaded into new sessions

use crate::domain::{NoteSeed, TagSet};
use chrono::{DateTime, Duration, Utc};

/// The starter notes, stamped relative to `now`
pub fn sample_notes(now: DateTime<Utc>) -> Vec<NoteSeed> {
    vec![
        NoteSeed {
            title: "Welcome to Ocean Notes".to_string(),
            content: "This is a minimalist note-taking app.\n\n\
                - Create, edit, and delete notes\n\
                - Search by title, content, or tag\n\
                - Everything stays in memory for this session\n\n\
                Try creating a new note with 'new'!"
                .to_string(),
            tags: TagSet::from_iter(["welcome", "info"]),
            updated_at: now - Duration::hours(2),
        },
        NoteSeed {
            title: "Daily Tasks".to_string(),
            content: "- Review PRs\n- Standup at 10:00\n- Plan sprint backlog\n\n\
                Tip: Use 'search' to quickly filter notes."
                .to_string(),
            tags: TagSet::from_iter(["tasks"]),
            updated_at: now - Duration::minutes(30),
        },
        NoteSeed {
            title: "Ideas".to_string(),
            content: "• Explore a dark mode toggle\n• Add tag management\n• Persist to disk"
                .to_string(),
            tags: TagSet::from_iter(["ideas"]),
            updated_at: now - Duration::seconds(10),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_samples_are_in_the_past_and_ordered() {
        let now = Utc.timestamp_opt(1_000_000, 0).unwrap();
        let samples = sample_notes(now);

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].title, "Welcome to Ocean Notes");
        assert!(samples.iter().all(|s| s.updated_at < now));
        assert!(samples[0].updated_at < samples[1].updated_at);
        assert!(samples[1].updated_at < samples[2].updated_at);
    }

    #[test]
    fn test_sample_tags() {
        let samples = sample_notes(Utc::now());
        assert_eq!(samples[0].tags.joined(), "welcome info");
        assert!(samples[1].tags.contains("tasks"));
        assert!(samples[2].tags.contains("ideas"));
    }
}
