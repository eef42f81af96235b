//! Output formatting utilities

use crate::application::{DraftField, EditBuffer};
use crate::domain::{Note, NoteId};
use crate::infrastructure::Config;
use chrono::{DateTime, Local, Utc};

pub const HELP: &str = "\
Commands:
  new                  create a note and open it
  select <id|none>     open a note, or close the editor
  delete [<id>]        delete a note (default: the open note)
  dup [<id>]           duplicate a note (default: the open note)
  search [<text>]      filter the list; no text shows every note
  title <text>         set the open note's title
  content <text>       set the open note's content (\\n for new lines)
  append <text>        add a line to the open note's content
  tag <text>           add a tag to the open note
  untag <tag>          remove a tag from the open note
  list                 show the notes list
  show                 show the open note
  wait <ms>            let time pass so pending edits are saved
  help                 show this help
  quit                 end the session
";

/// Format a timestamp in local time
pub fn format_time(ts: DateTime<Utc>, format: &str) -> String {
    ts.with_timezone(&Local).format(format).to_string()
}

/// First `limit` characters of `content` on one line, with "…" when cut
pub fn snippet(content: &str, limit: usize) -> String {
    let mut line: String = content
        .chars()
        .take(limit)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if content.chars().count() > limit {
        line.push('…');
    }
    line
}

/// Format the notes list panel
pub fn format_note_list(notes: &[&Note], selected: Option<NoteId>, config: &Config) -> String {
    let mut output = format!("Notes ({})\n", notes.len());
    if notes.is_empty() {
        output.push_str("No notes found.\n");
        return output;
    }

    for note in notes {
        let marker = if selected == Some(note.id) { '*' } else { ' ' };
        output.push_str(&format!("{} [{}] {}\n", marker, note.id, note.display_title()));

        let preview = snippet(&note.content, config.snippet_length);
        if !preview.trim().is_empty() {
            output.push_str(&format!("      {}\n", preview));
        }

        let tags: Vec<String> = note
            .tags
            .iter()
            .take(config.list_tag_limit)
            .map(|t| format!("#{}", t))
            .collect();
        let time = format_time(note.updated_at, &config.time_format);
        if tags.is_empty() {
            output.push_str(&format!("      {}\n", time));
        } else {
            output.push_str(&format!("      {}  ·  {}\n", tags.join(" "), time));
        }
    }
    output
}

/// Format the editor panel for the open note, drafts included
pub fn format_editor(note: Option<&Note>, editor: &EditBuffer, config: &Config) -> String {
    let Some(note) = note else {
        return "Start your first note\n\
            Use 'new' to create a note and begin writing.\n"
            .to_string();
    };

    let draft_mark = |field| {
        if editor.is_pending(field) {
            "  [draft]"
        } else {
            ""
        }
    };

    let tags = if note.tags.is_empty() {
        "none".to_string()
    } else {
        note.tags.to_string()
    };

    let mut output = format!(
        "Note {}  ·  Last edited: {}\n",
        note.id,
        format_time(note.updated_at, &config.time_format)
    );
    output.push_str(&format!(
        "Title: {}{}\n",
        editor.title(),
        draft_mark(DraftField::Title)
    ));
    output.push_str(&format!("Tags: {}\n", tags));
    output.push_str(&format!("Content:{}\n", draft_mark(DraftField::Content)));
    output.push_str(editor.content());
    if !editor.content().is_empty() && !editor.content().ends_with('\n') {
        output.push('\n');
    }
    output
}
