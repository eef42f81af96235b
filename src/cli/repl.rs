//! Line-driven session runner

use crate::application::{Action, Session};
use crate::cli::output::{format_editor, format_note_list, HELP};
use crate::cli::parser::{parse_line, Command};
use crate::domain::NoteId;
use crate::error::{NotesError, Result};
use crate::infrastructure::Config;
use chrono::Duration;
use log::debug;
use std::io::Write;

/// Whether the session continues after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs session commands and writes their output to `out`
pub struct Repl<W: Write> {
    session: Session,
    config: Config,
    out: W,
}

impl<W: Write> Repl<W> {
    pub fn new(session: Session, config: Config, out: W) -> Self {
        Repl {
            session,
            config,
            out,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run due commits, then execute one input line
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        self.tick()?;
        match parse_line(line)? {
            Some(command) => self.execute(command),
            None => Ok(Flow::Continue),
        }
    }

    /// Run the debounced commits that are due now
    pub fn tick(&mut self) -> Result<()> {
        let committed = self.session.tick()?;
        if !committed.is_empty() {
            debug!("committed drafts: {:?}", committed);
        }
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::New => {
                self.session.dispatch(Action::New)?;
                let id = self.selected_id()?;
                writeln!(self.out, "Created note {}", id)?;
            }
            Command::Select(id) => {
                self.session.dispatch(Action::Select(id))?;
                match id {
                    Some(id) => writeln!(self.out, "Selected note {}", id)?,
                    None => writeln!(self.out, "Selection cleared")?,
                }
            }
            Command::Delete(id) => {
                let id = self.target(id)?;
                let title = self
                    .session
                    .store()
                    .get(id)
                    .map(|n| n.display_title().to_string())
                    .ok_or(NotesError::NoteNotFound(id))?;
                self.session.dispatch(Action::Delete(id))?;
                writeln!(self.out, "Deleted note {}: {}", id, title)?;
            }
            Command::Duplicate(id) => {
                let id = self.target(id)?;
                self.session.dispatch(Action::Duplicate(id))?;
                let copy = self.selected_id()?;
                writeln!(self.out, "Duplicated note {} as {}", id, copy)?;
            }
            Command::Search(query) => {
                self.session.dispatch(Action::Search(query))?;
                self.print_list()?;
            }
            Command::Title(text) => self.session.dispatch(Action::EditTitle(text))?,
            Command::Content(text) => self.session.dispatch(Action::EditContent(text))?,
            Command::Append(text) => {
                let draft = self.session.editor().content();
                let content = if draft.is_empty() {
                    text
                } else {
                    format!("{}\n{}", draft, text)
                };
                self.session.dispatch(Action::EditContent(content))?;
            }
            Command::Tag(text) => {
                self.session.dispatch(Action::TagInput(text))?;
                self.session.dispatch(Action::AddTag)?;
            }
            Command::Untag(tag) => {
                let id = self.selected_id()?;
                self.session.dispatch(Action::RemoveTag(id, tag))?;
            }
            Command::List => self.print_list()?,
            Command::Show => {
                let panel = format_editor(
                    self.session.selected_note(),
                    self.session.editor(),
                    &self.config,
                );
                write!(self.out, "{}", panel)?;
            }
            Command::Wait(millis) => {
                let millis = i64::try_from(millis).unwrap_or(i64::MAX);
                self.session.wait(Duration::milliseconds(millis))?;
            }
            Command::Help => write!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn print_list(&mut self) -> Result<()> {
        let notes = self.session.visible_notes();
        let list = format_note_list(&notes, self.session.store().selected_id(), &self.config);
        write!(self.out, "{}", list)?;
        Ok(())
    }

    /// The explicit id, or the open note when none was given
    fn target(&self, id: Option<NoteId>) -> Result<NoteId> {
        match id {
            Some(id) => Ok(id),
            None => self.selected_id(),
        }
    }

    fn selected_id(&self) -> Result<NoteId> {
        self.session
            .selected_note()
            .map(|n| n.id)
            .ok_or(NotesError::NoSelection)
    }
}
