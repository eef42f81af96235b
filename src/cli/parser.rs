//! Session command parsing
//!
//! One command per line: a command word followed by its argument text.
//! Blank lines and lines starting with `#` are skipped.

use crate::domain::NoteId;
use crate::error::{NotesError, Result};
use std::str::FromStr;

/// A parsed session command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    /// `None` clears the selection
    Select(Option<NoteId>),
    /// `None` targets the selected note
    Delete(Option<NoteId>),
    /// `None` targets the selected note
    Duplicate(Option<NoteId>),
    Search(String),
    Title(String),
    Content(String),
    Append(String),
    Tag(String),
    Untag(String),
    List,
    Show,
    Wait(u64),
    Help,
    Quit,
}

/// Parse one input line. Returns `None` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "new" => Command::New,
        "select" | "open" => match rest {
            "" => {
                return Err(NotesError::MissingArgument {
                    command: "select",
                    argument: "note id or 'none'",
                })
            }
            "none" => Command::Select(None),
            id => Command::Select(Some(NoteId::from_str(id)?)),
        },
        "delete" | "rm" => Command::Delete(optional_id(rest)?),
        "dup" | "duplicate" => Command::Duplicate(optional_id(rest)?),
        "search" | "find" => Command::Search(rest.to_string()),
        "title" => Command::Title(rest.to_string()),
        "content" => Command::Content(unescape(rest)),
        "append" => Command::Append(unescape(rest)),
        "tag" => Command::Tag(rest.to_string()),
        "untag" => Command::Untag(required(rest, "untag", "tag text")?.to_string()),
        "list" | "ls" => Command::List,
        "show" => Command::Show,
        "wait" => {
            let millis = required(rest, "wait", "milliseconds")?;
            let millis = millis
                .parse::<u64>()
                .map_err(|_| NotesError::InvalidArgument {
                    command: "wait",
                    value: millis.to_string(),
                })?;
            Command::Wait(millis)
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return Err(NotesError::UnknownCommand(word.to_string())),
    };

    Ok(Some(command))
}

fn optional_id(rest: &str) -> Result<Option<NoteId>> {
    if rest.is_empty() {
        Ok(None)
    } else {
        NoteId::from_str(rest).map(Some)
    }
}

fn required<'a>(rest: &'a str, command: &'static str, argument: &'static str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(NotesError::MissingArgument { command, argument })
    } else {
        Ok(rest)
    }
}

/// Expand `\n`, `\t` and `\\` escapes in typed text
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
