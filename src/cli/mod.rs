//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod parser;
pub mod repl;

pub use commands::Cli;
pub use output::{format_editor, format_note_list};
pub use parser::{parse_line, Command};
pub use repl::{Flow, Repl};
